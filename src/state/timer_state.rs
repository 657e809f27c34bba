//! Countdown timer state and transitions

use serde::{Deserialize, Serialize};

/// Duration used when nothing has been configured yet (3 minutes)
pub const DEFAULT_DURATION_SECONDS: u64 = 180;

/// Logical phase derived from the timer fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Idle,
    Running,
    Complete,
}

/// Countdown toward a target duration, advanced one second per tick.
///
/// `elapsed` never exceeds `duration`, and the timer is never running once
/// `elapsed` reaches `duration`. A zero duration is clamped to one second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    running: bool,
    elapsed: u64,
    duration: u64,
}

impl CountdownTimer {
    /// Create an idle timer counting toward `duration` seconds
    pub fn new(duration: u64) -> Self {
        Self {
            running: false,
            elapsed: 0,
            duration: duration.max(1),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Advance by one second if running. Stops automatically on completion.
    pub fn tick(&mut self) {
        if self.running && self.elapsed < self.duration {
            self.elapsed += 1;
            if self.elapsed >= self.duration {
                self.running = false;
            }
        }
    }

    /// Reset and count toward a new duration (minimum one second)
    pub fn set_duration(&mut self, duration: u64) {
        self.reset();
        self.duration = duration.max(1);
    }

    /// Toggle running. Starting a completed timer restarts it from zero.
    pub fn start_or_stop(&mut self) {
        if !self.running && self.elapsed >= self.duration {
            self.reset();
        }
        self.running = !self.running;
    }

    /// Stop without touching elapsed time
    pub fn pause(&mut self) {
        if self.running {
            self.start_or_stop();
        }
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed = 0;
    }

    /// Reset and lengthen the countdown by a minute
    pub fn add_minute(&mut self) {
        self.reset();
        self.duration = self.duration.saturating_add(60);
    }

    /// Reset and shorten the countdown by a minute, never going below one minute
    pub fn remove_minute(&mut self) {
        self.reset();
        if self.duration > 60 {
            self.duration -= 60;
        }
    }

    /// Fraction of the duration elapsed, in `[0.0, 1.0]`
    pub fn progress(&self) -> f64 {
        if self.duration == 0 {
            return 0.0;
        }
        self.elapsed as f64 / self.duration as f64
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed == self.duration
    }

    pub fn remaining_time(&self) -> u64 {
        self.duration.saturating_sub(self.elapsed)
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else if self.is_complete() {
            TimerPhase::Complete
        } else {
            TimerPhase::Idle
        }
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(duration: u64) -> CountdownTimer {
        let mut timer = CountdownTimer::new(duration);
        timer.start_or_stop();
        timer
    }

    fn assert_bounds(timer: &CountdownTimer) {
        assert!(timer.elapsed() <= timer.duration());
        if timer.is_complete() {
            assert!(!timer.is_running());
        }
    }

    #[test]
    fn new_timer_is_idle() {
        let timer = CountdownTimer::default();
        assert_eq!(timer.duration(), 180);
        assert_eq!(timer.elapsed(), 0);
        assert!(!timer.is_running());
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn full_countdown_stops_at_completion() {
        let mut timer = started(180);
        for _ in 0..180 {
            timer.tick();
            assert_bounds(&timer);
        }
        assert_eq!(timer.elapsed(), 180);
        assert!(!timer.is_running());
        assert!(timer.is_complete());
        assert_eq!(timer.remaining_time(), 0);
        assert_eq!(timer.phase(), TimerPhase::Complete);
    }

    #[test]
    fn extra_ticks_after_completion_are_ignored() {
        let mut timer = started(3);
        for _ in 0..10 {
            timer.tick();
        }
        assert_eq!(timer.elapsed(), 3);
        assert!(!timer.is_running());
    }

    #[test]
    fn tick_while_stopped_does_nothing() {
        let mut timer = CountdownTimer::new(10);
        timer.tick();
        timer.tick();
        assert_eq!(timer.elapsed(), 0);
    }

    #[test]
    fn start_then_stop_returns_to_idle() {
        let mut timer = CountdownTimer::new(10);
        let before = timer.clone();
        timer.start_or_stop();
        timer.start_or_stop();
        assert_eq!(timer, before);
    }

    #[test]
    fn pause_and_resume_keep_elapsed() {
        let mut timer = started(10);
        for _ in 0..5 {
            timer.tick();
        }
        timer.start_or_stop();
        assert_eq!(timer.elapsed(), 5);
        assert!(!timer.is_running());

        timer.start_or_stop();
        assert!(timer.is_running());
        assert_eq!(timer.elapsed(), 5);
    }

    #[test]
    fn starting_completed_timer_restarts_from_zero() {
        let mut timer = started(2);
        timer.tick();
        timer.tick();
        assert!(timer.is_complete());

        timer.start_or_stop();
        assert_eq!(timer.elapsed(), 0);
        assert!(timer.is_running());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut timer = started(10);
        timer.tick();
        timer.reset();
        let once = timer.clone();
        timer.reset();
        assert_eq!(timer, once);
        assert_eq!(timer.duration(), 10);
        assert_eq!(timer.elapsed(), 0);
    }

    #[test]
    fn set_duration_mid_countdown_resets() {
        let mut timer = started(180);
        for _ in 0..50 {
            timer.tick();
        }
        timer.set_duration(300);
        assert_eq!(timer.elapsed(), 0);
        assert_eq!(timer.duration(), 300);
        assert!(!timer.is_running());
    }

    #[test]
    fn zero_duration_is_clamped() {
        let mut timer = CountdownTimer::new(0);
        assert_eq!(timer.duration(), 1);
        timer.set_duration(0);
        assert_eq!(timer.duration(), 1);
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn progress_tracks_elapsed_fraction() {
        let mut timer = started(4);
        timer.tick();
        assert_eq!(timer.progress(), 0.25);
        timer.tick();
        timer.tick();
        timer.tick();
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn pause_only_stops_running_timer() {
        let mut timer = CountdownTimer::new(10);
        timer.pause();
        assert!(!timer.is_running());

        let mut timer = started(10);
        timer.tick();
        timer.pause();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(), 1);
    }

    #[test]
    fn mixed_operations_stay_in_bounds() {
        let mut timer = CountdownTimer::new(3);
        let steps: [fn(&mut CountdownTimer); 16] = [
            |t| t.start_or_stop(),
            |t| t.tick(),
            |t| t.tick(),
            |t| t.set_duration(0),
            |t| t.start_or_stop(),
            |t| t.tick(),
            |t| t.tick(),
            |t| t.start_or_stop(),
            |t| t.add_minute(),
            |t| t.start_or_stop(),
            |t| t.tick(),
            |t| t.pause(),
            |t| t.remove_minute(),
            |t| t.start_or_stop(),
            |t| t.reset(),
            |t| t.tick(),
        ];

        for step in steps {
            step(&mut timer);
            assert_bounds(&timer);
            assert!(timer.duration() >= 1);
            assert!((0.0..=1.0).contains(&timer.progress()));
        }
    }

    #[test]
    fn remaining_time_never_underflows() {
        let timer = CountdownTimer {
            running: true,
            elapsed: 5,
            duration: 0,
        };
        assert_eq!(timer.remaining_time(), 0);

        let snapshot = crate::state::TimerSnapshot::from(&timer);
        assert_eq!(snapshot.clock_text, "0:00");
    }

    #[test]
    fn minute_adjustments() {
        let mut timer = started(120);
        timer.tick();
        timer.add_minute();
        assert_eq!(timer.duration(), 180);
        assert_eq!(timer.elapsed(), 0);
        assert!(!timer.is_running());

        timer.remove_minute();
        timer.remove_minute();
        assert_eq!(timer.duration(), 60);
        timer.remove_minute();
        assert_eq!(timer.duration(), 60);

        timer.set_duration(30);
        timer.remove_minute();
        assert_eq!(timer.duration(), 30);
    }
}
