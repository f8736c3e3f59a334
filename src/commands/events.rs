use anyhow::Result;
use chrono::Local;
use daylee_core::Daylee;
use owo_colors::OwoColorize;

use super::add::parse_date;
use super::require_session;
use crate::render::Render;

/// Every event in stored order.
pub fn list(daylee: &Daylee) -> Result<()> {
    let session = require_session(daylee)?;

    if session.events.is_empty() {
        println!("{}", "  No events yet".dimmed());
        return Ok(());
    }

    for event in &session.events {
        println!("  {}", event.render());
    }

    Ok(())
}

/// Every event on one date, including the ones the month grid folds into
/// "+N more".
pub fn day(daylee: &Daylee, date: Option<&str>) -> Result<()> {
    let session = require_session(daylee)?;

    let date = match date {
        Some(d) => parse_date(d)?,
        None => Local::now().date_naive(),
    };

    println!("{}", date.format("%A, %B %-d %Y").to_string().bold());

    let events = session.events_on(date);
    if events.is_empty() {
        println!("{}", "  Nothing planned".dimmed());
        return Ok(());
    }

    for event in events {
        println!("  {}", event.render());
    }

    Ok(())
}
