//! Keyboard shortcut mapping

use crate::state::CountdownTimer;

/// Timer actions reachable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Reset,
    StartOrStop,
}

impl Shortcut {
    /// Map a key name (as reported by a browser or terminal) to an action.
    ///
    /// Escape/Delete reset, Space/Return start or stop. Everything else is unmapped.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "escape" | "esc" | "delete" | "del" | "backspace" => Some(Shortcut::Reset),
            "space" | " " | "return" | "enter" => Some(Shortcut::StartOrStop),
            _ => None,
        }
    }

    pub fn apply(self, timer: &mut CountdownTimer) {
        match self {
            Shortcut::Reset => timer.reset(),
            Shortcut::StartOrStop => timer.start_or_stop(),
        }
    }

    pub fn action_name(self) -> &'static str {
        match self {
            Shortcut::Reset => "reset",
            Shortcut::StartOrStop => "start-stop",
        }
    }
}
