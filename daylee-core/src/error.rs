//! Error types for daylee.

use thiserror::Error;

/// Errors that can occur in daylee operations.
///
/// The validation variants are the guard conditions of the input forms: they
/// block the action and are shown to the user, nothing more.
#[derive(Error, Debug)]
pub enum DayleeError {
    #[error("Please enter a family name")]
    EmptyFamilyName,

    #[error("Please fill in all member names")]
    BlankMemberName,

    #[error("Please enter a family code")]
    EmptyFamilyCode,

    #[error("Invalid family code '{0}': expected up to 6 letters or digits")]
    InvalidFamilyCode(String),

    #[error("Please enter an event title")]
    EmptyEventTitle,

    #[error("Please select at least one family member")]
    NoMembersSelected,

    #[error("No event ids left to assign")]
    EventIdsExhausted,

    #[error("Event not found: {0}")]
    EventNotFound(u64),

    #[error("'{0}' is not a member of this family")]
    UnknownMember(String),

    #[error("No family calendar is set up")]
    NoSession,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for daylee operations.
pub type DayleeResult<T> = Result<T, DayleeError>;
