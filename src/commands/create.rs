use anyhow::Result;
use daylee_core::Daylee;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(daylee: &mut Daylee, name: &str, members: Vec<String>) -> Result<()> {
    let replacing = daylee.session().map(|s| s.name.clone());

    let mut rng = rand::rng();
    let session = daylee.create_family(name, members.as_slice(), &mut rng)?;

    if let Some(previous) = replacing {
        println!("{}", format!("  Replaced {previous}").dimmed());
    }
    println!("{}", session.render());
    println!();
    println!(
        "  Share code {} so your family can join.",
        session.code.to_string().green().bold()
    );

    Ok(())
}
