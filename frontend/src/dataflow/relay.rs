//! Event streaming Relay built on unbounded channels
//!
//! A Relay carries one kind of event from the UI (or another actor) into
//! the actor loops that own state. Unlike a plain mpsc channel it supports
//! late subscription, because shell events such as route changes fan out to
//! several independent actors.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use std::sync::{Arc, Mutex, OnceLock};

/// Type-safe event relay.
///
/// Cloning a Relay clones the sending side only; every call to
/// [`Relay::subscribe`] opens an independent stream that observes all
/// events sent afterwards.
///
/// Relays follow the `{source}_{event}_relay` naming pattern:
/// - `route_changed_relay` - browser navigation landed on a new URL
/// - `sign_out_requested_relay` - user picked "signout" in the user menu
#[derive(Clone, Debug)]
pub struct Relay<T = ()>
where
    T: Clone + Send + Sync + 'static,
{
    subscribers: Arc<Mutex<Vec<UnboundedSender<T>>>>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

/// Error type for Relay operations
#[derive(Debug, Clone)]
pub enum RelayError {
    /// No live subscriber streams remain
    ChannelClosed,
    /// Relay send called from multiple locations (debug builds only)
    #[cfg(debug_assertions)]
    MultipleEmitters {
        previous: &'static std::panic::Location<'static>,
        current: &'static std::panic::Location<'static>,
    },
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a Relay together with its first subscription stream.
    ///
    /// Prefer the [`relay()`] function, which mirrors Rust's channel
    /// constructor conventions.
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let relay = Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
            #[cfg(debug_assertions)]
            emit_location: Arc::new(OnceLock::new()),
        };
        let receiver = relay.subscribe();
        (relay, receiver)
    }

    /// Open a new stream over future events.
    pub fn subscribe(&self) -> UnboundedReceiver<T> {
        let (sender, receiver) = unbounded();
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(sender);
        }
        receiver
    }

    /// Enforce the single-emitter constraint in debug builds.
    #[cfg(debug_assertions)]
    #[track_caller]
    fn check_single_source(&self) -> Result<(), RelayError> {
        let caller = std::panic::Location::caller();
        match self.emit_location.set(caller) {
            Ok(()) => Ok(()),
            Err(previous) if previous == caller => Ok(()),
            Err(previous) => Err(RelayError::MultipleEmitters {
                previous,
                current: caller,
            }),
        }
    }

    /// Send an event to every live subscriber.
    ///
    /// Subscribers whose streams have been dropped are pruned; if none
    /// remain the event is silently discarded. In debug builds, panics when
    /// the relay is emitted from more than one code location.
    #[track_caller]
    pub fn send(&self, value: T) {
        #[cfg(debug_assertions)]
        if let Err(error) = self.check_single_source() {
            panic!("{error:?}");
        }
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.retain(|sender| sender.unbounded_send(value.clone()).is_ok());
        }
    }

    /// Like [`Relay::send`] but reports delivery failure instead of
    /// discarding the event.
    #[track_caller]
    pub fn try_send(&self, value: T) -> Result<(), RelayError> {
        #[cfg(debug_assertions)]
        self.check_single_source()?;
        let Ok(mut subscribers) = self.subscribers.lock() else {
            return Err(RelayError::ChannelClosed);
        };
        subscribers.retain(|sender| sender.unbounded_send(value.clone()).is_ok());
        if subscribers.is_empty() {
            return Err(RelayError::ChannelClosed);
        }
        Ok(())
    }
}

impl<T> Default for Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// A relay with no subscribers; events are silently discarded until
    /// someone subscribes. Useful as placeholder wiring in tests.
    fn default() -> Self {
        let (relay, receiver) = Self::new();
        drop(receiver);
        relay
    }
}

/// Creates a new Relay with an associated receiver stream.
pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn relay_delivers_events() {
        let (relay, mut receiver) = Relay::new();

        relay.send("navigated".to_string());

        assert_eq!(receiver.next().await, Some("navigated".to_string()));
    }

    #[tokio::test]
    async fn relay_broadcasts_to_all_subscribers() {
        let (relay, mut first) = relay::<u32>();
        let mut second = relay.subscribe();

        relay.send(7);

        assert_eq!(first.next().await, Some(7));
        assert_eq!(second.next().await, Some(7));
    }

    #[tokio::test]
    async fn try_send_reports_closed_channel() {
        let (relay, receiver) = relay::<String>();
        // Single emit site, as the debug-build check demands.
        let emit = |value: &str| relay.try_send(value.to_string());

        assert!(emit("live").is_ok());
        drop(receiver);
        assert!(emit("dead").is_err());
    }

    #[tokio::test]
    async fn late_subscriber_misses_earlier_events() {
        let (relay, mut first) = relay::<u32>();
        let emit = |value| relay.send(value);

        emit(1);
        let mut late = relay.subscribe();
        emit(2);

        assert_eq!(first.next().await, Some(1));
        assert_eq!(first.next().await, Some(2));
        assert_eq!(late.next().await, Some(2));
    }
}
