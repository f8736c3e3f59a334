//! Session controller.
//!
//! `Daylee` owns the active session and its store. The session is loaded
//! once when the controller is opened and saved after every change; a
//! change that fails to save leaves the previous session in place.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use tracing::info;

use crate::assistant::Assistant;
use crate::error::{DayleeError, DayleeResult};
use crate::event::{Event, NewEvent};
use crate::grid::{MonthGrid, build_month_grid};
use crate::month::YearMonth;
use crate::session::FamilySession;
use crate::store::SessionStore;

pub struct Daylee {
    store: SessionStore,
    session: Option<FamilySession>,
}

impl Daylee {
    /// Open the controller, restoring whatever session the store holds.
    pub fn open(store: SessionStore) -> Self {
        let session = store.load();
        Daylee { store, session }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn session(&self) -> Option<&FamilySession> {
        self.session.as_ref()
    }

    pub fn require_session(&self) -> DayleeResult<&FamilySession> {
        self.session.as_ref().ok_or(DayleeError::NoSession)
    }

    fn commit(&mut self, session: FamilySession) -> DayleeResult<&FamilySession> {
        self.store.save(&session)?;
        Ok(self.session.insert(session))
    }

    // SESSION LIFECYCLE:

    /// Create a new family, replacing any current session.
    pub fn create_family<R, S>(&mut self, name: &str, members: &[S], rng: &mut R) -> DayleeResult<&FamilySession>
    where
        R: Rng + ?Sized,
        S: AsRef<str>,
    {
        let session = FamilySession::create(name, members, rng)?;
        info!(code = %session.code, members = session.members.len(), "created family");
        self.commit(session)
    }

    /// Join a family by code, replacing any current session.
    pub fn join_family(&mut self, code: &str) -> DayleeResult<&FamilySession> {
        let session = FamilySession::join(code)?;
        info!(code = %session.code, "joined family");
        self.commit(session)
    }

    /// Drop the session and everything stored for it.
    pub fn logout(&mut self) -> DayleeResult<()> {
        self.store.clear()?;
        if let Some(session) = self.session.take() {
            info!(code = %session.code, "logged out");
        }
        Ok(())
    }

    // EVENTS:

    pub fn add_event(&mut self, event: NewEvent) -> DayleeResult<Event> {
        self.add_event_at(event, Utc::now())
    }

    pub fn add_event_at(&mut self, event: NewEvent, now: DateTime<Utc>) -> DayleeResult<Event> {
        let mut session = self.require_session()?.clone();
        let added = session.add_event(event, now)?.clone();
        self.commit(session)?;
        Ok(added)
    }

    pub fn delete_event(&mut self, id: u64) -> DayleeResult<Event> {
        let mut session = self.require_session()?.clone();
        let removed = session
            .delete_event(id)
            .ok_or(DayleeError::EventNotFound(id))?;
        self.commit(session)?;
        info!(id, title = %removed.title, "deleted event");
        Ok(removed)
    }

    pub fn switch_member(&mut self, member: &str) -> DayleeResult<()> {
        let mut session = self.require_session()?.clone();
        session.switch_member(member)?;
        self.commit(session)?;
        Ok(())
    }

    // VIEWS:

    /// Month grid over all of the family's events. Without a session the
    /// grid is empty but still complete.
    pub fn month_grid(&self, month: YearMonth, today: NaiveDate) -> MonthGrid<'_> {
        let events = self.session.as_ref().map(|s| s.events.as_slice()).unwrap_or(&[]);
        build_month_grid(month, events, today)
    }

    /// Ask the assistant about the active member's events. Without a
    /// session there is nothing to look at, so the answer is the help text.
    pub fn ask<R: Rng>(&self, assistant: &mut Assistant<R>, query: &str) -> String {
        match &self.session {
            Some(session) => assistant.reply(query, &session.user_events()),
            None => assistant.fallback(),
        }
    }
}
