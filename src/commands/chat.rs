use anyhow::Result;
use daylee_core::Daylee;
use daylee_core::assistant::Conversation;
use daylee_core::config::DayleeConfig;
use daylee_core::family::PLACEHOLDER_MEMBER;
use dialoguer::Input;
use owo_colors::OwoColorize;

use super::ask::assistant_for;
use crate::render::Render;
use crate::utils::tui::think;

const EXIT_WORDS: [&str; 3] = ["exit", "quit", "bye"];

/// Interactive conversation with the assistant. Each answer only looks at
/// the current question.
pub async fn run(daylee: &Daylee, config: &DayleeConfig, seed: Option<u64>) -> Result<()> {
    let user = daylee
        .session()
        .map(|s| s.current_user.as_str())
        .unwrap_or(PLACEHOLDER_MEMBER);

    let delay = config.thinking_delay()?;
    let mut assistant = assistant_for(seed);
    let mut conversation = Conversation::greeting(user);

    if let Some(hello) = conversation.last() {
        println!("{}", hello.render());
    }
    println!("{}", format!("  (type {} to leave)", EXIT_WORDS.join("/")).dimmed());

    loop {
        println!();
        let input: String = Input::new()
            .with_prompt("  You")
            .allow_empty(true)
            .interact_text()?;

        if EXIT_WORDS.contains(&input.trim().to_lowercase().as_str()) {
            break;
        }
        if conversation.push_user(&input).is_none() {
            continue;
        }

        think(delay).await;

        if let Some(reply) = conversation.push_reply(daylee.ask(&mut assistant, &input)) {
            println!("{}", reply.render());
        }
    }

    tracing::debug!(messages = conversation.messages().len(), "chat ended");
    Ok(())
}
