use anyhow::Result;
use daylee_core::Daylee;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(daylee: &mut Daylee, code: &str) -> Result<()> {
    let session = daylee.join_family(code)?;

    println!("{}", session.render());
    println!(
        "{}",
        "  Joined without checking the code; the member list is a placeholder.".dimmed()
    );

    Ok(())
}
