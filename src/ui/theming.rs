// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.

use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follows the OS preference.
    #[default]
    System,
}

impl ThemeMode {
    /// Whether the effective theme is dark. System mode asks the OS and
    /// defaults to dark when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        // System depends on the host; just make sure detection does not panic.
        let _ = ThemeMode::System.theme();
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        #[derive(Serialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let out = toml::to_string(&Wrapper {
            mode: ThemeMode::Dark,
        })
        .unwrap();
        assert_eq!(out.trim(), "mode = \"dark\"");
    }
}
