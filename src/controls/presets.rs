//! Preset countdown durations

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Durations offered as one-click buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    FiveMinutes,
    ThreeMinutes,
    TenSeconds,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::FiveMinutes, Preset::ThreeMinutes, Preset::TenSeconds];

    pub fn seconds(self) -> u64 {
        match self {
            Preset::FiveMinutes => 5 * 60,
            Preset::ThreeMinutes => 3 * 60,
            Preset::TenSeconds => 10,
        }
    }

    /// Name used in URLs
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::FiveMinutes => "five-minutes",
            Preset::ThreeMinutes => "three-minutes",
            Preset::TenSeconds => "ten-seconds",
        }
    }

    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            Preset::FiveMinutes => "5 Min",
            Preset::ThreeMinutes => "3 Min",
            Preset::TenSeconds => "10 Sec",
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown preset: {}", s))
    }
}
