//! External service module
//!
//! This module contains the preferences store that keeps the last configured
//! duration across restarts.

pub mod preferences;

// Re-export main types
pub use preferences::{Preferences, PreferencesError, DURATION_KEY};
