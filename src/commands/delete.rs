use anyhow::Result;
use daylee_core::Daylee;
use owo_colors::OwoColorize;

use super::require_session;

pub fn run(daylee: &mut Daylee, id: u64) -> Result<()> {
    require_session(daylee)?;

    let removed = daylee.delete_event(id)?;
    println!("{}", format!("  Deleted: {}", removed.title).red());

    Ok(())
}
