//! Persisted session snapshot.
//!
//! The whole session is written as one JSON document on every change and
//! read back wholesale on start. Anything that does not parse as the current
//! snapshot version is treated as "no session".

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{DayleeError, DayleeResult};
use crate::event::Event;
use crate::family::FamilyCode;
use crate::session::FamilySession;

/// Version written into every snapshot. Other versions are rejected on load.
pub const SNAPSHOT_VERSION: u32 = 1;

/// File name of the snapshot inside the data directory.
pub const SESSION_FILE: &str = "session.json";

/// On-disk shape of a [`FamilySession`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SessionSnapshot {
    pub version: u32,
    pub family_code: String,
    pub family_name: String,
    pub events: Vec<Event>,
    pub family_members: Vec<String>,
    pub current_user: String,
}

impl From<&FamilySession> for SessionSnapshot {
    fn from(session: &FamilySession) -> Self {
        SessionSnapshot {
            version: SNAPSHOT_VERSION,
            family_code: session.code.to_string(),
            family_name: session.name.clone(),
            events: session.events.clone(),
            family_members: session.members.clone(),
            current_user: session.current_user.clone(),
        }
    }
}

impl SessionSnapshot {
    pub fn into_session(self) -> DayleeResult<FamilySession> {
        if self.version != SNAPSHOT_VERSION {
            return Err(DayleeError::Serialization(format!(
                "unsupported snapshot version {} (expected {})",
                self.version, SNAPSHOT_VERSION
            )));
        }

        let code = FamilyCode::parse(&self.family_code)?;

        let mut seen = HashSet::new();
        for event in &self.events {
            event.validate()?;
            if !seen.insert(event.id) {
                return Err(DayleeError::Serialization(format!(
                    "duplicate event id {}",
                    event.id
                )));
            }
        }

        Ok(FamilySession {
            code,
            name: self.family_name,
            members: self.family_members,
            events: self.events,
            current_user: self.current_user,
        })
    }
}

/// Reads and writes the snapshot file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    /// Store using the default snapshot file name inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SESSION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session. Missing, unreadable or malformed snapshots
    /// all yield `None`, as do snapshots holding events the add form would
    /// have refused or two events sharing an id.
    pub fn load(&self) -> Option<FamilySession> {
        match self.try_load() {
            Ok(Some(session)) => {
                info!(path = %self.path.display(), code = %session.code, "loaded session");
                Some(session)
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "no stored session");
                None
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unusable session snapshot");
                None
            }
        }
    }

    fn try_load(&self) -> DayleeResult<Option<FamilySession>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let snapshot: SessionSnapshot =
            serde_json::from_str(&content).map_err(|e| DayleeError::Serialization(e.to_string()))?;

        snapshot.into_session().map(Some)
    }

    /// Write the whole session, replacing whatever was stored.
    pub fn save(&self, session: &FamilySession) -> DayleeResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let snapshot = SessionSnapshot::from(session);
        let content = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| DayleeError::Serialization(e.to_string()))?;

        // Write next to the target and rename so a reader never sees half a file
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content)?;
        std::fs::rename(&tmp_path, &self.path)?;

        debug!(path = %self.path.display(), events = session.events.len(), "saved session");
        Ok(())
    }

    /// Forget the stored session.
    pub fn clear(&self) -> DayleeResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            info!(path = %self.path.display(), "cleared session");
        }
        Ok(())
    }
}
