//! Read-only timer snapshot handed to renderers

use serde::{Deserialize, Serialize};

use super::{CountdownTimer, TimerPhase};
use crate::display::{action_label, render_duration, ProgressBand, TrackStyle};

/// Everything a renderer needs to draw the clock at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub running: bool,
    pub elapsed_seconds: u64,
    pub duration_seconds: u64,
    pub remaining_seconds: u64,
    pub phase: TimerPhase,
    pub progress: f64,
    /// Remaining time as `M:SS`
    pub clock_text: String,
    /// Configured duration as `M:SS`
    pub duration_text: String,
    pub band: ProgressBand,
    pub track: TrackStyle,
    pub action_label: String,
}

impl From<&CountdownTimer> for TimerSnapshot {
    fn from(timer: &CountdownTimer) -> Self {
        Self {
            running: timer.is_running(),
            elapsed_seconds: timer.elapsed(),
            duration_seconds: timer.duration(),
            remaining_seconds: timer.remaining_time(),
            phase: timer.phase(),
            progress: timer.progress(),
            clock_text: render_duration(timer.remaining_time()),
            duration_text: render_duration(timer.duration()),
            band: ProgressBand::for_timer(timer),
            track: TrackStyle::for_timer(timer),
            action_label: action_label(timer).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_of_running_timer() {
        let mut timer = CountdownTimer::new(185);
        timer.start_or_stop();
        timer.tick();

        let snapshot = TimerSnapshot::from(&timer);
        assert!(snapshot.running);
        assert_eq!(snapshot.elapsed_seconds, 1);
        assert_eq!(snapshot.remaining_seconds, 184);
        assert_eq!(snapshot.clock_text, "3:04");
        assert_eq!(snapshot.duration_text, "3:05");
        assert_eq!(snapshot.phase, TimerPhase::Running);
        assert_eq!(snapshot.band, ProgressBand::Green);
        assert_eq!(snapshot.action_label, "Pause");
    }

    #[test]
    fn snapshot_serializes_lowercase_enums() {
        let snapshot = TimerSnapshot::from(&CountdownTimer::new(10));
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["phase"], "idle");
        assert_eq!(json["band"], "green");
        assert_eq!(json["track"], "inactive");
        assert_eq!(json["clock_text"], "0:10");
    }
}
