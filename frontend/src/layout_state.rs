//! Sidebar layout state
//!
//! Two named boolean toggles drive the shell chrome:
//!
//! - `collapsed`: sidebar folded to icon width. Session-only; it resets
//!   on reload and is never written to the preference store.
//! - `side_inline`: sidebar theme (inline/light vs dark). Durable; read
//!   once at construction and written back on every toggle, in the same
//!   actor step as the in-memory flip, so store and memory always agree
//!   once a toggle has been processed.

use crate::dataflow::{Actor, Relay, relay};
use crate::platform::Preferences;
use futures::StreamExt;
use std::sync::Arc;
use zoon::Signal;

/// Preference-store key for the durable sidebar theme flag.
const SIDE_INLINE_KEY: &str = "side_inline";

#[derive(Clone)]
pub struct LayoutState {
    collapsed: Actor<bool>,
    side_inline: Actor<bool>,
    /// Header fold/unfold trigger pressed.
    pub collapse_toggled_relay: Relay,
    /// Sidebar theme switch pressed.
    pub side_theme_toggled_relay: Relay,
}

impl LayoutState {
    pub fn new(preferences: Arc<dyn Preferences>) -> Self {
        let (collapse_toggled_relay, mut collapse_stream) = relay();
        let (side_theme_toggled_relay, mut side_theme_stream) = relay();

        let collapsed = Actor::new(false, async move |state| {
            while let Some(()) = collapse_stream.next().await {
                let flipped = !state.get_cloned();
                state.set_neq(flipped);
            }
        });

        let initial_side_inline = preferences.load_bool(SIDE_INLINE_KEY).unwrap_or(false);
        let side_inline = Actor::new(initial_side_inline, async move |state| {
            while let Some(()) = side_theme_stream.next().await {
                let flipped = !state.get_cloned();
                state.set_neq(flipped);
                // Written before the next event is drained, keeping the
                // store in lockstep with memory.
                preferences.store_bool(SIDE_INLINE_KEY, flipped);
            }
        });

        Self {
            collapsed,
            side_inline,
            collapse_toggled_relay,
            side_theme_toggled_relay,
        }
    }

    pub fn collapsed_signal(&self) -> impl Signal<Item = bool> {
        self.collapsed.signal()
    }

    pub fn side_inline_signal(&self) -> impl Signal<Item = bool> {
        self.side_inline.signal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::memory::MemoryPreferences;
    use futures::StreamExt;
    use zoon::SignalExt;

    fn sleep_for_actor() -> tokio::time::Sleep {
        tokio::time::sleep(tokio::time::Duration::from_millis(10))
    }

    #[tokio::test]
    async fn side_inline_defaults_to_false_when_absent() {
        let layout = LayoutState::new(Arc::new(MemoryPreferences::default()));
        assert_eq!(layout.side_inline_signal().to_stream().next().await, Some(false));
    }

    #[tokio::test]
    async fn side_inline_toggle_persists_and_reloads() {
        let preferences = Arc::new(MemoryPreferences::default());
        let layout = LayoutState::new(preferences.clone());

        layout.side_theme_toggled_relay.send(());
        sleep_for_actor().await;

        assert_eq!(preferences.load_bool("side_inline"), Some(true));
        assert_eq!(layout.side_inline_signal().to_stream().next().await, Some(true));

        // A fresh construction observes the persisted value.
        let reloaded = LayoutState::new(preferences.clone());
        assert_eq!(reloaded.side_inline_signal().to_stream().next().await, Some(true));
    }

    #[tokio::test]
    async fn collapse_toggle_never_touches_the_store() {
        let preferences = Arc::new(MemoryPreferences::default());
        let layout = LayoutState::new(preferences.clone());

        layout.collapse_toggled_relay.send(());
        sleep_for_actor().await;

        assert_eq!(layout.collapsed_signal().to_stream().next().await, Some(true));
        assert_eq!(preferences.load_bool("side_inline"), None);
    }

    #[tokio::test]
    async fn toggles_flip_back_and_forth() {
        let preferences = Arc::new(MemoryPreferences::default());
        let layout = LayoutState::new(preferences.clone());
        let toggle = || layout.side_theme_toggled_relay.send(());

        toggle();
        sleep_for_actor().await;
        toggle();
        sleep_for_actor().await;

        assert_eq!(layout.side_inline_signal().to_stream().next().await, Some(false));
        assert_eq!(preferences.load_bool("side_inline"), Some(false));
    }
}
