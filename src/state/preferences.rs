//! User preferences persisted between sessions.

use rcatalog::MarkupMode;
use serde::{Deserialize, Serialize};

/// Preferences saved through eframe storage as one JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// How card values are placed into exported HTML
    pub markup_mode: MarkupMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.markup_mode, MarkupMode::Escaped);
    }

    #[test]
    fn test_roundtrip_keeps_markup_mode() {
        let prefs = Preferences {
            markup_mode: MarkupMode::Raw,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let loaded: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, prefs);
    }
}
