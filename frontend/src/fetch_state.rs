//! Global in-flight request flag
//!
//! Pages report their request lifecycles here; the shell only consumes the
//! derived `is_fetching` boolean to decide when a route transition's
//! progress indicator may complete.

use crate::dataflow::{Actor, Relay, relay};
use futures::{StreamExt, select};
use zoon::{Signal, SignalExt};

#[derive(Clone)]
pub struct FetchState {
    in_flight: Actor<u32>,
    /// A page started a data request.
    pub request_started_relay: Relay,
    /// A previously started request settled (success or failure).
    pub request_finished_relay: Relay,
}

impl FetchState {
    pub fn new() -> Self {
        let (request_started_relay, mut started_stream) = relay();
        let (request_finished_relay, mut finished_stream) = relay();

        let in_flight = Actor::new(0u32, async move |state| {
            loop {
                select! {
                    started = started_stream.next() => match started {
                        Some(()) => state.set(state.get_cloned() + 1),
                        None => break,
                    },
                    finished = finished_stream.next() => match finished {
                        Some(()) => state.set(state.get_cloned().saturating_sub(1)),
                        None => break,
                    },
                }
            }
        });

        Self {
            in_flight,
            request_started_relay,
            request_finished_relay,
        }
    }

    pub fn is_fetching_signal(&self) -> impl Signal<Item = bool> {
        self.in_flight.signal_ref(|count| *count > 0).dedupe()
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn fetching_while_any_request_is_in_flight() {
        let fetch_state = FetchState::new();
        let started = || fetch_state.request_started_relay.send(());
        let finished = || fetch_state.request_finished_relay.send(());

        let mut flags = fetch_state.is_fetching_signal().to_stream();
        assert_eq!(flags.next().await, Some(false));

        started();
        started();
        assert_eq!(flags.next().await, Some(true));

        finished();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        finished();
        assert_eq!(flags.next().await, Some(false));
    }

    #[tokio::test]
    async fn finish_without_start_is_harmless() {
        let fetch_state = FetchState::new();

        fetch_state.request_finished_relay.send(());
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let mut flags = fetch_state.is_fetching_signal().to_stream();
        assert_eq!(flags.next().await, Some(false));
    }
}
