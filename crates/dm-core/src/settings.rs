//! User settings

use serde::{Deserialize, Serialize};

/// Storage key under which the settings are persisted
pub const SETTINGS_KEY: &str = "dm_settings";

pub const MIN_FONT_SIZE: f32 = 8.0;
pub const MAX_FONT_SIZE: f32 = 32.0;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Use the dark palette instead of the light one
    pub dark_mode: bool,

    /// Custom window background, `None` keeps the theme colour
    pub background: Option<[u8; 3]>,

    /// Body text size in points
    pub font_size: f32,

    pub show_toolbar: bool,

    pub show_status_bar: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            background: None,
            font_size: 13.0,
            show_toolbar: true,
            show_status_bar: true,
        }
    }
}

impl AppSettings {
    /// Clamp values loaded from storage into their valid ranges
    pub fn sanitized(mut self) -> Self {
        self.font_size = if self.font_size.is_finite() {
            self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
        } else {
            Self::default().font_size
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_clamps_font() {
        let settings = AppSettings {
            font_size: 100.0,
            ..Default::default()
        };
        assert_eq!(settings.sanitized().font_size, MAX_FONT_SIZE);

        let settings = AppSettings {
            font_size: f32::NAN,
            ..Default::default()
        };
        assert_eq!(settings.sanitized().font_size, 13.0);
    }

}
