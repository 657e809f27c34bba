//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

use crate::{display::parse_duration, services::Preferences};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "meeting-timer")]
#[command(about = "A countdown timer for public meetings, controlled over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Starting duration as M:SS or seconds, overriding the saved one
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Preferences file (defaults to the platform config directory)
    #[arg(long)]
    pub preferences: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Starting duration override in seconds, if one was given
    pub fn duration_seconds(&self) -> Option<u64> {
        self.duration.as_deref().map(parse_duration)
    }

    /// Preferences store from the flag or the platform default location
    pub fn preferences(&self) -> Option<Preferences> {
        self.preferences
            .clone()
            .or_else(Preferences::default_path)
            .map(Preferences::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["meeting-timer"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.duration_seconds(), None);
    }

    #[test]
    fn overrides() {
        let config = Config::try_parse_from([
            "meeting-timer",
            "-p",
            "8080",
            "--duration",
            "2:30",
            "--preferences",
            "/tmp/prefs.json",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.duration_seconds(), Some(150));
        assert_eq!(config.log_level(), "debug");
        assert_eq!(
            config.preferences().unwrap().path(),
            std::path::Path::new("/tmp/prefs.json")
        );
    }
}
