use anyhow::Result;
use chrono::{Local, NaiveDate};
use daylee_core::event::parse_time;
use daylee_core::{Daylee, NewEvent};
use dialoguer::{Input, MultiSelect};
use owo_colors::OwoColorize;

use super::require_session;
use crate::render::Render;

pub fn run(
    daylee: &mut Daylee,
    title: Option<String>,
    date: Option<String>,
    time: &str,
    description: Option<String>,
    members: Vec<String>,
) -> Result<()> {
    let roster = require_session(daylee)?.members.clone();
    let interactive = title.is_none() || members.is_empty();

    // --- Title ---
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Date & time ---
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => Local::now().date_naive(),
    };
    let time = parse_time(time)
        .ok_or_else(|| anyhow::anyhow!("Invalid time \"{}\". Expected HH:MM", time))?;

    // --- Members ---
    let members = if members.is_empty() {
        prompt_members(&roster)?
    } else {
        members
    };

    let mut event = NewEvent::new(title, date).at(time).for_members(members);
    if let Some(description) = description {
        event = event.with_description(description);
    }

    let added = daylee.add_event(event)?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", added.title).green());
    println!("  {}", added.render());

    Ok(())
}

/// Ask which roster members the event is for.
fn prompt_members(roster: &[String]) -> Result<Vec<String>> {
    if roster.is_empty() {
        anyhow::bail!("This family has no members to choose from. Use --member to name one.");
    }

    let selection = MultiSelect::new()
        .with_prompt("  Who is it for? (space to select)")
        .items(roster)
        .interact()?;

    Ok(selection
        .into_iter()
        .filter_map(|i| roster.get(i).cloned())
        .collect())
}

/// Weekday short forms fuzzydate only understands spelled out.
const WEEKDAY_ABBREVIATIONS: &[(&str, &str)] = &[
    ("mon", "monday"),
    ("tue", "tuesday"),
    ("tues", "tuesday"),
    ("wed", "wednesday"),
    ("thu", "thursday"),
    ("thurs", "thursday"),
    ("fri", "friday"),
    ("sat", "saturday"),
    ("sun", "sunday"),
];

fn spell_out_weekdays(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let word = word.to_lowercase();
            WEEKDAY_ABBREVIATIONS
                .iter()
                .find(|(short, _)| *short == word)
                .map_or(word, |(_, full)| (*full).to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse `YYYY-MM-DD`, or a natural language date such as "next friday".
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
        return Ok(date);
    }

    let expanded = spell_out_weekdays(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn short_weekdays_are_spelled_out() {
        assert_eq!(spell_out_weekdays("Sat"), "saturday");
        assert_eq!(spell_out_weekdays("next thurs"), "next thursday");
    }

    #[test]
    fn other_words_are_only_lowercased() {
        assert_eq!(spell_out_weekdays("Tomorrow"), "tomorrow");
        assert_eq!(spell_out_weekdays("march  20"), "march 20");
    }

    #[test]
    fn parse_date_iso() {
        assert_eq!(
            parse_date("2026-03-20").unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 20).unwrap()
        );
    }

    #[test]
    fn parse_date_natural_language() {
        assert!(parse_date("tomorrow").is_ok());
        assert!(parse_date("next fri").is_ok());
    }

    #[test]
    fn parse_date_absolute_month_day() {
        let date = parse_date("march 20").unwrap();
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 20);
    }

    #[test]
    fn parse_date_invalid_input() {
        assert!(parse_date("not a date at all xyz").is_err());
    }
}
