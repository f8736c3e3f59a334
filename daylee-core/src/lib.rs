//! Core types for daylee, a shared family calendar.
//!
//! - `session` / `store` / `daylee`: the family session, its persisted
//!   snapshot and the controller that ties them together
//! - `grid` / `month`: the 6×7 month view
//! - `assistant`: the keyword-driven schedule assistant

pub mod assistant;
pub mod config;
pub mod daylee;
pub mod error;
pub mod event;
pub mod family;
pub mod grid;
pub mod month;
pub mod session;
pub mod store;

pub use daylee::Daylee;
pub use error::{DayleeError, DayleeResult};
pub use event::{Event, NewEvent};
pub use session::FamilySession;
