//! Display policy module
//!
//! Derived values a renderer needs to draw the clock: the `M:SS` readout,
//! arc color bands and button labels. Nothing here is timer state.

pub mod duration_text;
pub mod progress;

// Re-export main functions
pub use duration_text::{filter_duration_input, parse_duration, render_duration};
pub use progress::{action_label, ProgressBand, TrackStyle};
