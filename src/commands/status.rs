use anyhow::Result;
use daylee_core::Daylee;
use owo_colors::OwoColorize;

use super::require_session;
use crate::render::Render;

pub fn run(daylee: &Daylee) -> Result<()> {
    let session = require_session(daylee)?;

    println!("{}", session.render());
    println!(
        "   {} members, {} events ({} for {})",
        session.members.len(),
        session.events.len(),
        session.user_events().len(),
        session.current_user
    );
    println!(
        "{}",
        format!("   Stored at {}", daylee.store().path().display()).dimmed()
    );

    Ok(())
}
