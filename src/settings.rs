//! Viewer options persistence.
//!
//! Stores [`ViewerOptions`] in `eframe`'s persistent storage as a JSON
//! payload under a fixed key, so embedding applications keep their view
//! configuration across runs.

use crate::options::ViewerOptions;

/// Storage key for the serialized viewer options.
pub const OPTIONS_STORAGE_KEY: &str = "wavescope_viewer_options";

/// Loads and saves [`ViewerOptions`] through [`eframe::Storage`].
pub struct OptionsStore;

impl OptionsStore {
    /// Loads options from storage, falling back to defaults when the key is
    /// absent or the payload does not deserialize.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> ViewerOptions {
        Self::try_load(storage).unwrap_or_default()
    }

    /// Attempts to load options, returning `None` when absent or invalid.
    pub fn try_load(storage: Option<&dyn eframe::Storage>) -> Option<ViewerOptions> {
        let storage = storage?;
        let json = storage.get_string(OPTIONS_STORAGE_KEY)?;
        serde_json::from_str(&json).ok()
    }

    /// Serializes options into storage and flushes.
    pub fn save(storage: &mut dyn eframe::Storage, options: &ViewerOptions) {
        if let Ok(json) = serde_json::to_string(options) {
            storage.set_string(OPTIONS_STORAGE_KEY, json);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple in-memory storage for testing
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
    fn test_save_and_load_round_trip() {
        let mut storage = MockStorage::new();
        let options = ViewerOptions {
            zoomview_span_secs: 7.5,
            highlight_color: "#808080".to_string(),
            ..Default::default()
        };

        OptionsStore::save(&mut storage, &options);
        let loaded = OptionsStore::load(Some(&storage));

        assert_eq!(loaded, options);
    }

    #[test]
    fn test_load_missing_returns_defaults() {
        let storage = MockStorage::new();
        assert_eq!(OptionsStore::load(Some(&storage)), ViewerOptions::default());
        assert_eq!(OptionsStore::load(None), ViewerOptions::default());
    }

    #[test]
    fn test_try_load_invalid_payload() {
        let mut storage = MockStorage::new();
        storage.set_string(OPTIONS_STORAGE_KEY, "not json".to_string());

        assert!(OptionsStore::try_load(Some(&storage)).is_none());
        assert_eq!(OptionsStore::load(Some(&storage)), ViewerOptions::default());
    }
}
