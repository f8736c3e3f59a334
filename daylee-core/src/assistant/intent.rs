//! Query classification.
//!
//! Rules are tried top to bottom and the first one that recognizes the
//! query decides the intent. A rule that declines (for example an
//! availability question without a day in it) lets the next rule look.

use std::fmt;

use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::event::Event;

static DAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:on|this|next)?\s*(monday|tuesday|wednesday|thursday|friday|saturday|sunday|tomorrow|today)",
    )
    .expect("valid day regex")
});

/// Day named in an availability question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Weekday(Weekday),
    Today,
    Tomorrow,
}

impl Day {
    /// Find the first day word in `query`, optionally preceded by
    /// "on", "this" or "next".
    pub fn find_in(query: &str) -> Option<Self> {
        let captures = DAY_PATTERN.captures(query)?;
        Self::from_word(captures.get(1)?.as_str())
    }

    fn from_word(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "today" => Some(Day::Today),
            "tomorrow" => Some(Day::Tomorrow),
            other => other.parse::<Weekday>().ok().map(Day::Weekday),
        }
    }

    /// Lowercase word as it appears in replies.
    pub fn name(&self) -> &'static str {
        match self {
            Day::Today => "today",
            Day::Tomorrow => "tomorrow",
            Day::Weekday(Weekday::Mon) => "monday",
            Day::Weekday(Weekday::Tue) => "tuesday",
            Day::Weekday(Weekday::Wed) => "wednesday",
            Day::Weekday(Weekday::Thu) => "thursday",
            Day::Weekday(Weekday::Fri) => "friday",
            Day::Weekday(Weekday::Sat) => "saturday",
            Day::Weekday(Weekday::Sun) => "sunday",
        }
    }

    /// Whether `event` counts as happening on this day.
    ///
    /// "today" and "tomorrow" match every event regardless of its date.
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Day::Today | Day::Tomorrow => true,
            Day::Weekday(_) => event.weekday_name() == self.name(),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What a free-text question is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// "Can I ... on <day>?"
    Availability { day: Day },
    /// "What's my schedule?" / "What do I have?"
    ScheduleSummary,
    /// Anything else: answered with the help text.
    Fallback,
}

/// A classification rule: given the original and the lowercased query,
/// return the intent it recognizes, if any.
pub struct Rule {
    pub name: &'static str,
    pub recognize: fn(query: &str, lower: &str) -> Option<Intent>,
}

fn availability(query: &str, lower: &str) -> Option<Intent> {
    if !lower.contains("can i") {
        return None;
    }
    Day::find_in(query).map(|day| Intent::Availability { day })
}

fn schedule_summary(_query: &str, lower: &str) -> Option<Intent> {
    (lower.contains("schedule") || lower.contains("what do i have")).then_some(Intent::ScheduleSummary)
}

/// Rules in priority order.
pub static RULES: &[Rule] = &[
    Rule {
        name: "availability",
        recognize: availability,
    },
    Rule {
        name: "schedule-summary",
        recognize: schedule_summary,
    },
];

/// Classify a query by the first matching rule, or [`Intent::Fallback`].
pub fn classify(query: &str) -> Intent {
    let lower = query.to_lowercase();

    RULES
        .iter()
        .find_map(|rule| {
            let intent = (rule.recognize)(query, &lower)?;
            tracing::debug!(rule = rule.name, ?intent, "query matched");
            Some(intent)
        })
        .unwrap_or(Intent::Fallback)
}
