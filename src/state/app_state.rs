//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{CountdownTimer, TimerSnapshot};
use crate::{
    controls::{Preset, Shortcut},
    display::{filter_duration_input, parse_duration, render_duration},
    services::Preferences,
};

/// Main application state: the countdown and everything that observes it
#[derive(Debug)]
pub struct AppState {
    /// The countdown. Ticks and user actions are serialized through this lock.
    pub timer: Arc<Mutex<CountdownTimer>>,
    /// Where the configured duration is persisted, if anywhere
    pub preferences: Option<Preferences>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel for timer updates
    pub timer_update_tx: watch::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_update_rx: watch::Receiver<TimerSnapshot>,
}

impl AppState {
    /// Create a new AppState with an idle timer counting toward `duration_seconds`
    pub fn new(
        port: u16,
        host: String,
        duration_seconds: u64,
        preferences: Option<Preferences>,
    ) -> Self {
        let timer = CountdownTimer::new(duration_seconds);
        let (timer_update_tx, timer_update_rx) = watch::channel(TimerSnapshot::from(&timer));

        Self {
            timer: Arc::new(Mutex::new(timer)),
            preferences,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
        }
    }

    /// Apply a user action to the timer, persist duration changes and notify watchers
    pub fn update_timer<F>(&self, action: &str, updater: F) -> Result<TimerSnapshot, String>
    where
        F: FnOnce(&mut CountdownTimer),
    {
        let mut timer = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer: {}", e))?;

        let previous_duration = timer.duration();
        updater(&mut *timer);
        let snapshot = TimerSnapshot::from(&*timer);

        // Saved and published under the lock so watchers and the file see changes in order.
        // The write is a few bytes and only happens on duration changes; a slow disk
        // delays the ticker and other handlers until it finishes.
        if timer.duration() != previous_duration {
            self.persist_duration(timer.duration());
        }
        self.publish(snapshot.clone());
        drop(timer);

        debug!("Action '{}' -> {:?}, {}s elapsed of {}s",
               action, snapshot.phase, snapshot.elapsed_seconds, snapshot.duration_seconds);

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        Ok(snapshot)
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the new snapshot when the tick changed anything.
    pub fn tick(&self) -> Result<Option<TimerSnapshot>, String> {
        let mut timer = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer: {}", e))?;

        let before = timer.clone();
        timer.tick();
        if *timer == before {
            return Ok(None);
        }

        let snapshot = TimerSnapshot::from(&*timer);
        self.publish(snapshot.clone());
        drop(timer);

        if snapshot.remaining_seconds == 0 {
            info!("Countdown of {} complete", snapshot.duration_text);
        }

        Ok(Some(snapshot))
    }

    pub fn start_or_stop(&self) -> Result<TimerSnapshot, String> {
        let snapshot = self.update_timer("start-stop", |timer| timer.start_or_stop())?;
        info!("Timer {} at {}", if snapshot.running { "started" } else { "paused" }, snapshot.clock_text);
        Ok(snapshot)
    }

    pub fn reset(&self) -> Result<TimerSnapshot, String> {
        info!("Resetting timer");
        self.update_timer("reset", |timer| timer.reset())
    }

    /// Reset and count toward a new duration
    pub fn set_duration(&self, seconds: u64) -> Result<TimerSnapshot, String> {
        if seconds == 0 {
            warn!("Duration of 0s requested, using 1s");
        }
        info!("Setting duration to {}", render_duration(seconds.max(1)));
        self.update_timer("set-duration", |timer| timer.set_duration(seconds))
    }

    /// Apply a committed `M:SS` value from the settings surface
    pub fn set_duration_text(&self, text: &str) -> Result<TimerSnapshot, String> {
        let filtered = filter_duration_input(text);
        if filtered != text {
            debug!("Filtered duration input '{}' to '{}'", text, filtered);
        }
        self.set_duration(parse_duration(&filtered))
    }

    /// Pause the timer for editing and return the current duration as `M:SS`
    pub fn begin_duration_edit(&self) -> Result<String, String> {
        let snapshot = self.update_timer("edit-duration", |timer| timer.pause())?;
        Ok(snapshot.duration_text)
    }

    pub fn apply_preset(&self, preset: Preset) -> Result<TimerSnapshot, String> {
        info!("Applying preset {}", preset.label());
        self.update_timer(preset.as_str(), |timer| timer.set_duration(preset.seconds()))
    }

    pub fn add_minute(&self) -> Result<TimerSnapshot, String> {
        self.update_timer("add-minute", |timer| timer.add_minute())
    }

    pub fn remove_minute(&self) -> Result<TimerSnapshot, String> {
        self.update_timer("remove-minute", |timer| timer.remove_minute())
    }

    pub fn apply_shortcut(&self, shortcut: Shortcut) -> Result<TimerSnapshot, String> {
        self.update_timer(shortcut.action_name(), |timer| shortcut.apply(timer))
    }

    /// Get current timer snapshot
    pub fn get_timer_snapshot(&self) -> Result<TimerSnapshot, String> {
        self.timer.lock()
            .map(|timer| TimerSnapshot::from(&*timer))
            .map_err(|e| format!("Failed to lock timer: {}", e))
    }

    /// Subscribe to snapshots published after every change
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.timer_update_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn publish(&self, snapshot: TimerSnapshot) {
        if let Err(e) = self.timer_update_tx.send(snapshot) {
            warn!("Failed to send timer update: {}", e);
        }
    }

    fn persist_duration(&self, seconds: u64) {
        if let Some(preferences) = &self.preferences {
            if let Err(e) = preferences.save_duration(seconds) {
                warn!("Failed to save duration: {}", e);
            }
        }
    }
}
