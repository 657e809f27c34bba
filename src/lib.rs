//! Meeting Timer - A countdown clock for public meetings
//!
//! This library provides the countdown state machine, the display policy
//! derived from it, duration persistence, and an HTTP control surface that
//! display clients use to drive and render the timer.

pub mod config;
pub mod state;
pub mod display;
pub mod controls;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, CountdownTimer, TimerSnapshot};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
