//! Assessment session domain.
//!
//! - [`entities::Session`] — one forward-only attempt at a quiz or interview
//! - [`entities::SessionState`] — Created / InProgress / Complete

pub mod entities;

pub use entities::{Session, SessionState};
