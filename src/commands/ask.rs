use anyhow::Result;
use daylee_core::Daylee;
use daylee_core::assistant::{Assistant, Conversation};
use daylee_core::config::DayleeConfig;

use crate::render::Render;
use crate::utils::tui::think;

pub fn assistant_for(seed: Option<u64>) -> Assistant {
    match seed {
        Some(seed) => Assistant::seeded(seed),
        None => Assistant::default(),
    }
}

/// Ask one question and print the answer.
pub async fn run(daylee: &Daylee, config: &DayleeConfig, question: &str, seed: Option<u64>) -> Result<()> {
    let mut conversation = Conversation::default();
    if conversation.push_user(question).is_none() {
        anyhow::bail!("Please ask a question");
    }

    let mut assistant = assistant_for(seed);
    think(config.thinking_delay()?).await;

    if let Some(reply) = conversation.push_reply(daylee.ask(&mut assistant, question)) {
        println!("{}", reply.render());
    }

    Ok(())
}
