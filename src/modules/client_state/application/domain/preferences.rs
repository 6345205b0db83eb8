use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the operating system setting.
    #[default]
    System,
}

/// Display preferences of one browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "animations_default")]
    pub animations_enabled: bool,
}

fn animations_default() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            animations_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert!(prefs.animations_enabled);
    }

    #[test]
    fn serializes_theme_in_lowercase() {
        let json = serde_json::to_value(Preferences {
            theme: Theme::Light,
            animations_enabled: false,
        })
        .unwrap();
        assert_eq!(json["theme"], "light");
        assert_eq!(json["animations_enabled"], false);
    }
}
