//! State management module
//!
//! This module contains the countdown timer, the snapshots published to
//! renderers, and the shared application state that serializes access to both.

pub mod app_state;
pub mod snapshot;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use snapshot::TimerSnapshot;
pub use timer_state::{CountdownTimer, TimerPhase, DEFAULT_DURATION_SECONDS};
