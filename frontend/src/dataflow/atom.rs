//! Local UI state Atom helper
//!
//! Atom wraps a single-value Actor for purely local UI state: menu
//! open/closed, hover flags, dialog visibility. Domain state belongs in
//! explicitly wired Actors instead.

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use zoon::Signal;

#[derive(Clone, Debug)]
enum AtomUpdate<T> {
    Set(T),
    SetNeq(T),
    /// Derive the next value from the current one, inside the processor
    /// loop, so queued updates never read stale state.
    Modify(fn(&T) -> T),
}

/// Convenience wrapper over Actor+Relay for local component state.
#[derive(Clone, Debug)]
pub struct Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    actor: Actor<T>,
    setter: Relay<AtomUpdate<T>>,
}

impl<T> Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self
    where
        T: PartialEq,
    {
        let (setter, mut setter_stream) = relay();

        let actor = Actor::new(initial, async move |state| {
            while let Some(update) = setter_stream.next().await {
                match update {
                    AtomUpdate::Set(new_value) => state.set(new_value),
                    AtomUpdate::SetNeq(new_value) => state.set_neq(new_value),
                    AtomUpdate::Modify(modify) => {
                        let next = modify(&state.get_cloned());
                        state.set(next);
                    }
                }
            }
        });

        Self { actor, setter }
    }

    pub fn set(&self, value: T) {
        self.send_update(AtomUpdate::Set(value));
    }

    /// Update only when the value actually changed, suppressing redundant
    /// signal emissions.
    pub fn set_neq(&self, value: T)
    where
        T: PartialEq,
    {
        self.send_update(AtomUpdate::SetNeq(value));
    }

    // Keeps `set` and `set_neq` on the relay's single permitted emit site.
    fn send_update(&self, update: AtomUpdate<T>) {
        self.setter.send(update);
    }

    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.actor.signal()
    }

    /// Current value for event handlers only; prefer signals everywhere else.
    pub fn get_cloned(&self) -> T {
        self.actor.get_cloned()
    }
}

impl Atom<bool> {
    /// Flip the current value. Resolved in the processor loop, so toggles
    /// queued in the same tick each take effect.
    pub fn toggle(&self) {
        self.send_update(AtomUpdate::Modify(|value| !value));
    }
}

impl<T> Default for Atom<T>
where
    T: Clone + Send + Sync + Default + PartialEq + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use zoon::SignalExt;

    #[tokio::test]
    async fn atom_set_and_read() {
        let atom = Atom::new(42);

        assert_eq!(atom.signal().to_stream().next().await, Some(42));

        atom.set(100);
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        assert_eq!(atom.signal().to_stream().next().await, Some(100));
    }

    #[tokio::test]
    async fn atom_toggle_flips_bools() {
        let open = Atom::new(false);

        open.toggle();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        assert_eq!(open.signal().to_stream().next().await, Some(true));
    }

    #[tokio::test]
    async fn toggles_queued_in_one_tick_each_flip() {
        let open = Atom::new(false);
        let flip = || open.toggle();

        // Both sent before the processor runs; each must still observe the
        // other's effect.
        flip();
        flip();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert_eq!(open.signal().to_stream().next().await, Some(false));

        flip();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert_eq!(open.signal().to_stream().next().await, Some(true));
    }
}
