//! Web Storage preference store
//!
//! Backed by zoon's `local_storage()`. A missing key, a deserialization
//! error, and an unavailable storage area all read as "absent".

use super::Preferences;
use zoon::*;

#[derive(Default)]
pub struct WebPreferences;

impl Preferences for WebPreferences {
    fn load_bool(&self, key: &str) -> Option<bool> {
        local_storage().get(key)?.ok()
    }

    fn store_bool(&self, key: &str, value: bool) {
        if local_storage().insert(key, &value).is_err() {
            zoon::println!("storage write failed for preference {key}");
        }
    }
}
