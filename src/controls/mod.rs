//! User controls module
//!
//! Preset durations and the keyboard shortcut mapping shared by every
//! display client.

pub mod presets;
pub mod shortcuts;

// Re-export main types
pub use presets::Preset;
pub use shortcuts::Shortcut;
