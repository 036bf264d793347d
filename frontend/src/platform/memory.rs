//! In-memory preference store for native builds and tests

use super::Preferences;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, bool>>,
}

impl Preferences for MemoryPreferences {
    fn load_bool(&self, key: &str) -> Option<bool> {
        self.values.lock().ok()?.get(key).copied()
    }

    fn store_bool(&self, key: &str, value: bool) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_as_none() {
        let prefs = MemoryPreferences::default();
        assert_eq!(prefs.load_bool("side_inline"), None);
    }

    #[test]
    fn stored_value_round_trips() {
        let prefs = MemoryPreferences::default();
        prefs.store_bool("side_inline", true);
        assert_eq!(prefs.load_bool("side_inline"), Some(true));
    }
}
