//! Progress arc and control label policy

use serde::{Deserialize, Serialize};

use crate::state::{CountdownTimer, TimerPhase};

/// Progress at which the arc turns orange
pub const WARNING_THRESHOLD: f64 = 0.75;
/// Progress at which the arc turns red
pub const CRITICAL_THRESHOLD: f64 = 0.875;

/// Color band for the progress arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressBand {
    Green,
    Orange,
    Red,
}

impl ProgressBand {
    pub fn for_timer(timer: &CountdownTimer) -> Self {
        if timer.is_complete() {
            return Self::Red;
        }
        Self::for_progress(timer.progress())
    }

    pub fn for_progress(progress: f64) -> Self {
        if progress >= CRITICAL_THRESHOLD {
            Self::Red
        } else if progress >= WARNING_THRESHOLD {
            Self::Orange
        } else {
            Self::Green
        }
    }
}

/// Stroke style for the outer ring: dark while running, grey otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackStyle {
    Active,
    Inactive,
}

impl TrackStyle {
    pub fn for_timer(timer: &CountdownTimer) -> Self {
        if timer.is_running() {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

/// Label for the start/stop button
pub fn action_label(timer: &CountdownTimer) -> &'static str {
    match timer.phase() {
        TimerPhase::Running => "Pause",
        TimerPhase::Idle => "Start",
        TimerPhase::Complete => "Restart",
    }
}
