use anyhow::Result;
use daylee_core::Daylee;
use owo_colors::OwoColorize;

use super::require_session;

pub fn list(daylee: &Daylee) -> Result<()> {
    let session = require_session(daylee)?;

    if session.members.is_empty() {
        println!("{}", "  No family members".dimmed());
    }

    for member in &session.members {
        if *member == session.current_user {
            println!("  {} {}", "●".cyan(), member.cyan().bold());
        } else {
            println!("  {} {}", "○".dimmed(), member);
        }
    }

    Ok(())
}

pub fn switch(daylee: &mut Daylee, member: &str) -> Result<()> {
    require_session(daylee)?;

    daylee.switch_member(member)?;
    println!("{}", format!("  Now using daylee as {}", member.trim()).green());

    Ok(())
}
