//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting application settings to storage.
//! Settings are stored as JSON strings under a key each.

use serde::{Deserialize, Serialize};

/// Storage key of the persisted [`crate::state::Preferences`].
pub const PREFERENCES_KEY: &str = "preferences";

/// Coordinates generic settings persistence.
///
/// This coordinator provides type-safe loading and saving of any serializable
/// settings to eframe's persistent storage. Settings are stored as JSON strings.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a default fallback.
    ///
    /// # Type Parameters
    /// * `T` - The type to deserialize, must implement Deserialize and Default
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise the default value for type T
    ///
    /// # Examples
    /// ```ignore
    /// let preferences: Preferences = SettingsCoordinator::load_setting(
    ///     storage,
    ///     PREFERENCES_KEY
    /// );
    /// ```
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        T::default()
    }

    /// Saves a setting to persistent storage.
    ///
    /// # Type Parameters
    /// * `T` - The type to serialize, must implement Serialize
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    ///
    /// # Examples
    /// ```ignore
    /// SettingsCoordinator::save_setting(storage, PREFERENCES_KEY, &state.preferences);
    /// ```
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Preferences;
    use rcatalog::MarkupMode;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_preferences_roundtrip() {
        let mut storage = MockStorage::new();
        let prefs = Preferences {
            markup_mode: MarkupMode::Raw,
        };

        SettingsCoordinator::save_setting(&mut storage, PREFERENCES_KEY, &prefs);
        let loaded: Preferences = SettingsCoordinator::load_setting(Some(&storage), PREFERENCES_KEY);
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_corrupt_preferences_fall_back() {
        let mut storage = MockStorage::new();
        eframe::Storage::set_string(&mut storage, PREFERENCES_KEY, "not json".to_string());

        let loaded: Preferences = SettingsCoordinator::load_setting(Some(&storage), PREFERENCES_KEY);
        assert_eq!(loaded, Preferences::default());
    }

    #[test]
    fn test_no_storage_gives_default() {
        let loaded: Preferences = SettingsCoordinator::load_setting(None, PREFERENCES_KEY);
        assert_eq!(loaded.markup_mode, MarkupMode::Escaped);
    }
}
