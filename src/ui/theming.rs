// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection with system detection.

use iced::Theme;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selectable theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// All selectable modes, for pick lists.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Resolves the mode to an Iced theme.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "Light"),
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::System => write!(f, "System"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" | "auto" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_without_detection() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on the host; just ensure it resolves.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn parses_mode_names_case_insensitively() {
        assert_eq!("Light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!("DARK".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("auto".parse::<ThemeMode>(), Ok(ThemeMode::System));
        assert!("neon".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn display_matches_pick_list_labels() {
        assert_eq!(ThemeMode::Light.to_string(), "Light");
        assert_eq!(ThemeMode::System.to_string(), "System");
    }
}
