use anyhow::Result;
use daylee_core::Daylee;
use owo_colors::OwoColorize;

pub fn run(daylee: &mut Daylee) -> Result<()> {
    let name = daylee.session().map(|s| s.name.clone());

    daylee.logout()?;

    match name {
        Some(name) => println!("{}", format!("  Logged out of {name}").green()),
        None => println!("{}", "  Not logged in".dimmed()),
    }

    Ok(())
}
