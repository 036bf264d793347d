//! Platform abstraction for persisted UI preferences
//!
//! The shell persists a handful of named scalar preferences across
//! sessions. In the browser they live in Web Storage; native builds (and
//! tests) use an in-memory store. Reads never fail: absence and storage
//! errors both degrade to "no stored value".

use std::sync::Arc;

/// Durable store for named UI preferences.
pub trait Preferences: Send + Sync {
    /// `None` when the key is absent or the backing store rejected the read.
    fn load_bool(&self, key: &str) -> Option<bool>;

    /// Write failures are swallowed; the in-memory value stays valid.
    fn store_bool(&self, key: &str, value: bool);
}

#[cfg(target_arch = "wasm32")]
pub mod web;
#[cfg(target_arch = "wasm32")]
pub use web::WebPreferences as CurrentPreferences;

#[cfg(not(target_arch = "wasm32"))]
pub mod memory;
#[cfg(not(target_arch = "wasm32"))]
pub use memory::MemoryPreferences as CurrentPreferences;

#[cfg(all(test, target_arch = "wasm32"))]
pub mod memory;

/// The preference store for the running platform.
pub fn preferences() -> Arc<dyn Preferences> {
    Arc::new(CurrentPreferences::default())
}
