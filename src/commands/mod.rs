pub mod add;
pub mod ask;
pub mod chat;
pub mod config;
pub mod create;
pub mod delete;
pub mod events;
pub mod join;
pub mod logout;
pub mod members;
pub mod month;
pub mod status;

use anyhow::Result;
use daylee_core::{Daylee, FamilySession};

/// The active session, or a hint on how to start one.
fn require_session(daylee: &Daylee) -> Result<&FamilySession> {
    match daylee.session() {
        Some(session) => Ok(session),
        None => anyhow::bail!(
            "No family calendar yet.\n\n\
            Create one with:\n  \
            daylee create \"The Smiths\" --member Ava --member Ben\n\n\
            Or join one with:\n  \
            daylee join ABC123"
        ),
    }
}
