//! Family calendar events.
//!
//! Events are date-only with a wall-clock time of day. Neither carries a
//! timezone: an event on 2026-03-04 is on that calendar day wherever it is
//! read back.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{DayleeError, DayleeResult};

/// A calendar event shared by one or more family members.
///
/// Events are created through [`NewEvent`] and deleted by id; they are never
/// edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    /// Member names this event applies to. Names are not checked against the
    /// roster, so they may refer to people no longer (or never) in it.
    pub members: Vec<String>,
}

impl Event {
    pub fn is_for(&self, member: &str) -> bool {
        self.members.iter().any(|m| m == member)
    }

    /// Check a stored event against the add-form guards. The event must
    /// also already be in the trimmed form `NewEvent::into_event` produces.
    pub fn validate(&self) -> DayleeResult<()> {
        let checked = NewEvent::from(self.clone()).into_event(self.id)?;
        if checked != *self {
            return Err(DayleeError::Serialization(format!(
                "event {} is not in normalized form",
                self.id
            )));
        }
        Ok(())
    }

    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// Lowercase English weekday name of the event's date ("wednesday").
    pub fn weekday_name(&self) -> String {
        self.date.format("%A").to_string().to_lowercase()
    }

    /// Time of day as `HH:MM`.
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Time an event form starts out with.
pub fn default_event_time() -> NaiveTime {
    NaiveTime::MIN + Duration::hours(9)
}

/// Parse `HH:MM` (or `HH:MM:SS`) into a time of day. Seconds are dropped:
/// events are stored to the minute.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s.trim(), "%H:%M:%S"))
        .ok()
        .map(to_minute)
}

fn to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

/// An event as entered in the add-event form, before it has an id.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub members: Vec<String>,
}

impl NewEvent {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        NewEvent {
            title: title.into(),
            description: None,
            date,
            time: default_event_time(),
            members: Vec::new(),
        }
    }

    pub fn at(mut self, time: NaiveTime) -> Self {
        self.time = time;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn for_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn for_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }

    /// Check the form guards and assign the event its id.
    pub fn into_event(self, id: u64) -> DayleeResult<Event> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DayleeError::EmptyEventTitle);
        }

        let members: Vec<String> = self
            .members
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();
        if members.is_empty() {
            return Err(DayleeError::NoMembersSelected);
        }

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Event {
            id,
            title: title.to_string(),
            description,
            date: self.date,
            time: to_minute(self.time),
            members,
        })
    }
}

impl From<Event> for NewEvent {
    fn from(event: Event) -> Self {
        NewEvent {
            title: event.title,
            description: event.description,
            date: event.date,
            time: event.time,
            members: event.members,
        }
    }
}

/// Serde adapter storing a `NaiveTime` as `HH:MM`.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_time(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid time '{s}', expected HH:MM")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_event_defaults_to_nine_am() {
        let event = NewEvent::new("Soccer", date(2026, 3, 4))
            .for_member("Ava")
            .into_event(1)
            .unwrap();
        assert_eq!(event.time_label(), "09:00");
    }

    #[test]
    fn blank_title_is_rejected() {
        let result = NewEvent::new("   ", date(2026, 3, 4))
            .for_member("Ava")
            .into_event(1);
        assert!(matches!(result, Err(DayleeError::EmptyEventTitle)));
    }

    #[test]
    fn missing_members_are_rejected() {
        let result = NewEvent::new("Soccer", date(2026, 3, 4)).into_event(1);
        assert!(matches!(result, Err(DayleeError::NoMembersSelected)));

        let result = NewEvent::new("Soccer", date(2026, 3, 4))
            .for_member("  ")
            .into_event(1);
        assert!(matches!(result, Err(DayleeError::NoMembersSelected)));
    }

    #[test]
    fn empty_description_becomes_none() {
        let event = NewEvent::new("Soccer", date(2026, 3, 4))
            .with_description("  ")
            .for_member("Ava")
            .into_event(1)
            .unwrap();
        assert_eq!(event.description, None);
    }

    #[test]
    fn weekday_name_is_lowercase() {
        let event = NewEvent::new("Soccer", date(2026, 3, 4))
            .for_member("Ava")
            .into_event(1)
            .unwrap();
        assert_eq!(event.weekday_name(), "wednesday");
    }

    #[test]
    fn time_serializes_as_hours_and_minutes() {
        let event = NewEvent::new("Soccer", date(2026, 3, 4))
            .at(parse_time("16:00").unwrap())
            .for_member("Ava")
            .into_event(7)
            .unwrap();

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["time"], "16:00");
        assert_eq!(json["date"], "2026-03-04");
        assert!(json.get("description").is_none());

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn parse_time_accepts_seconds() {
        assert_eq!(parse_time("07:30:00"), parse_time("07:30"));
        assert!(parse_time("7pm").is_none());
    }

    #[test]
    fn seconds_are_dropped() {
        assert_eq!(parse_time("16:00:45"), parse_time("16:00"));

        let precise = NaiveTime::from_hms_milli_opt(16, 0, 45, 250).unwrap();
        let event = NewEvent::new("Soccer", date(2026, 3, 4))
            .at(precise)
            .for_member("Ava")
            .into_event(1)
            .unwrap();
        assert_eq!(Some(event.time), parse_time("16:00"));
    }

    #[test]
    fn validate_rejects_what_the_form_would() {
        let good = NewEvent::new("Soccer", date(2026, 3, 4))
            .for_member("Ava")
            .into_event(1)
            .unwrap();
        assert!(good.validate().is_ok());

        let untitled = Event {
            title: String::new(),
            ..good.clone()
        };
        assert!(matches!(untitled.validate(), Err(DayleeError::EmptyEventTitle)));

        let nobody = Event {
            members: Vec::new(),
            ..good.clone()
        };
        assert!(matches!(nobody.validate(), Err(DayleeError::NoMembersSelected)));

        let padded = Event {
            title: " Soccer ".to_string(),
            ..good
        };
        assert!(matches!(padded.validate(), Err(DayleeError::Serialization(_))));
    }
}
