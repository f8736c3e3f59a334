//! The family session: the single unit of state daylee works on.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use tracing::debug;

use crate::error::{DayleeError, DayleeResult};
use crate::event::{Event, NewEvent};
use crate::family::{FamilyCode, JOINED_FAMILY_NAME, PLACEHOLDER_MEMBER, joined_roster};

/// Family code, name, roster, events and the member currently using the
/// calendar. Creating or joining a family replaces the whole value.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilySession {
    pub code: FamilyCode,
    pub name: String,
    pub members: Vec<String>,
    pub events: Vec<Event>,
    pub current_user: String,
}

impl FamilySession {
    /// Start a new family with a freshly generated code.
    ///
    /// Every member entry must be non-blank. An empty roster is allowed, in
    /// which case the active member is the placeholder.
    pub fn create<R, S>(name: &str, members: &[S], rng: &mut R) -> DayleeResult<Self>
    where
        R: Rng + ?Sized,
        S: AsRef<str>,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(DayleeError::EmptyFamilyName);
        }
        if members.iter().any(|m| m.as_ref().trim().is_empty()) {
            return Err(DayleeError::BlankMemberName);
        }

        let members: Vec<String> = members.iter().map(|m| m.as_ref().trim().to_string()).collect();
        let current_user = members
            .first()
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER_MEMBER.to_string());

        Ok(FamilySession {
            code: FamilyCode::generate(rng),
            name: name.to_string(),
            members,
            events: Vec::new(),
            current_user,
        })
    }

    /// Join an existing family by code. Nothing checks that the family
    /// exists; the roster is a two-member placeholder.
    pub fn join(code: &str) -> DayleeResult<Self> {
        let code = FamilyCode::parse(code)?;

        Ok(FamilySession {
            code,
            name: JOINED_FAMILY_NAME.to_string(),
            members: joined_roster(),
            events: Vec::new(),
            current_user: PLACEHOLDER_MEMBER.to_string(),
        })
    }

    /// Id for an event created at `now`: its millisecond timestamp, bumped
    /// past every existing id so ids stay unique and increasing.
    pub fn next_event_id(&self, now: DateTime<Utc>) -> DayleeResult<u64> {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        match self.events.iter().map(|e| e.id).max() {
            Some(last) if last >= millis => last.checked_add(1).ok_or(DayleeError::EventIdsExhausted),
            _ => Ok(millis),
        }
    }

    pub fn add_event(&mut self, event: NewEvent, now: DateTime<Utc>) -> DayleeResult<&Event> {
        let id = self.next_event_id(now)?;
        let event = event.into_event(id)?;

        debug!(id, title = %event.title, date = %event.date, "adding event");
        self.events.push(event);

        self.events.last().ok_or(DayleeError::EventNotFound(id))
    }

    /// Remove an event by id, returning it if it existed.
    pub fn delete_event(&mut self, id: u64) -> Option<Event> {
        let index = self.events.iter().position(|e| e.id == id)?;
        Some(self.events.remove(index))
    }

    pub fn event(&self, id: u64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Make `member` the active member. Only roster names are accepted.
    pub fn switch_member(&mut self, member: &str) -> DayleeResult<()> {
        let member = member.trim();
        if !self.members.iter().any(|m| m == member) {
            return Err(DayleeError::UnknownMember(member.to_string()));
        }
        self.current_user = member.to_string();
        Ok(())
    }

    /// Events that include `member`, in stored order.
    pub fn events_for(&self, member: &str) -> Vec<&Event> {
        self.events.iter().filter(|e| e.is_for(member)).collect()
    }

    /// Events that include the active member, in stored order.
    pub fn user_events(&self) -> Vec<&Event> {
        self.events_for(&self.current_user)
    }

    /// Every event on `date`, in stored order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.occurs_on(date)).collect()
    }
}
