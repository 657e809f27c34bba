//! Preferences persistence for the last configured duration

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::state::DEFAULT_DURATION_SECONDS;

/// Key the countdown duration is stored under
pub const DURATION_KEY: &str = "Countdown duration";

/// Errors that can occur while reading or writing preferences
#[derive(Error, Debug)]
pub enum PreferencesError {
    /// Reading or writing the preferences file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preferences file is not a JSON object
    #[error("Invalid preferences file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Small key/value store backed by a JSON file
#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
}

impl Preferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `preferences.json` in the platform config directory, if one exists
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "PublicMeeting", "MeetingTimer")
            .map(|dirs| dirs.config_dir().join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all stored values. A missing file is an empty store.
    pub fn load(&self) -> Result<Map<String, Value>, PreferencesError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No preferences file at {}", self.path.display());
                return Ok(Map::new());
            }
            Err(source) => {
                return Err(PreferencesError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents).map_err(|source| PreferencesError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Stored duration in seconds, or the default when absent or zero
    pub fn load_duration(&self) -> Result<u64, PreferencesError> {
        let stored = self
            .load()?
            .get(DURATION_KEY)
            .and_then(Value::as_u64)
            .unwrap_or(0);

        if stored == 0 {
            Ok(DEFAULT_DURATION_SECONDS)
        } else {
            Ok(stored)
        }
    }

    /// Store the duration, keeping any other keys already in the file
    pub fn save_duration(&self, seconds: u64) -> Result<(), PreferencesError> {
        let mut values = match self.load() {
            Ok(values) => values,
            Err(PreferencesError::Parse { .. }) => {
                warn!(
                    "Overwriting unreadable preferences file {}",
                    self.path.display()
                );
                Map::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(DURATION_KEY.to_string(), Value::from(seconds));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| PreferencesError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = serde_json::to_string_pretty(&values).map_err(|source| {
            PreferencesError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, contents).map_err(|source| PreferencesError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!("Saved countdown duration {}s to {}", seconds, self.path.display());
        Ok(())
    }
}
