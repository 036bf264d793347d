//! Navigation progress indicator
//!
//! A thin bar at the top of the viewport signals route transitions. The
//! decision logic lives in [`ProgressCursor`], a pure state machine over
//! `(href, is_fetching)` observations; [`NavProgress`] owns the shared bar
//! state and reacts to explicit navigation and fetch-state events instead
//! of render-time side effects.

use crate::dataflow::{Actor, Relay, relay};
use futures::{StreamExt, select};
use zoon::{Signal, SignalExt, Task, Timer};

/// Fraction shown immediately when a transition starts.
const START_FRACTION: f64 = 0.4;
/// Delay before a started transition is marked complete.
const COMPLETE_DELAY_MS: u32 = 300;
/// How long the full bar stays visible before it hides.
const HIDE_DELAY_MS: u32 = 100;

/// Outcome of one `(href, is_fetching)` observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressStep {
    /// Nothing to show; the URL matches the last one already handled.
    Idle,
    /// Jump the bar to the start fraction. When `schedule_done` is set the
    /// delayed completion must also be scheduled.
    Start { schedule_done: bool },
}

/// Tracks the last URL for which the indicator ran.
///
/// Exactly one cursor should exist per running application; it is passed
/// into [`NavProgress`] rather than living in a global so tests can build
/// independent instances.
#[derive(Debug, Default)]
pub struct ProgressCursor {
    last_href: Option<String>,
}

impl ProgressCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one observation through the cursor.
    ///
    /// A changed URL starts the indicator. While a fetch is in flight the
    /// cursor is deliberately not advanced, so every further observation of
    /// the same URL re-triggers the start fraction until one arrives with
    /// `is_fetching == false`; that one advances the cursor *before* the
    /// delayed completion fires.
    pub fn observe(&mut self, href: &str, is_fetching: bool) -> ProgressStep {
        if self.last_href.as_deref() == Some(href) {
            return ProgressStep::Idle;
        }
        let schedule_done = !is_fetching;
        if schedule_done {
            self.last_href = Some(href.to_owned());
        }
        ProgressStep::Start { schedule_done }
    }
}

/// Shared progress bar state: `Some(fraction)` while visible, `None` hidden.
///
/// Completion is fire-and-forget: a timer sends one `done` event after the
/// fixed delay. Timers are never cancelled; completing an already hidden
/// bar is a no-op, which absorbs stale timers from rapid navigation.
#[derive(Clone)]
pub struct NavProgress {
    bar: Actor<Option<f64>>,
    /// Full URL of every navigation, emitted by the router's change handler.
    pub navigated_relay: Relay<String>,
}

impl NavProgress {
    pub fn new(is_fetching: impl Signal<Item = bool> + Send + 'static) -> Self {
        let (navigated_relay, navigated_stream) = relay::<String>();
        let (done_relay, done_stream) = relay();

        let bar = Actor::new(None, async move |state| {
            let mut cursor = ProgressCursor::new();
            let mut current_href: Option<String> = None;
            let mut fetching = false;

            let mut navigated_stream = navigated_stream.fuse();
            let mut fetching_stream = is_fetching.to_stream().fuse();
            let mut done_stream = done_stream.fuse();

            loop {
                let step = select! {
                    href = navigated_stream.next() => match href {
                        Some(href) => {
                            let step = cursor.observe(&href, fetching);
                            current_href = Some(href);
                            step
                        }
                        None => break,
                    },
                    flag = fetching_stream.next() => match flag {
                        Some(flag) => {
                            fetching = flag;
                            match &current_href {
                                Some(href) => cursor.observe(href, fetching),
                                None => ProgressStep::Idle,
                            }
                        }
                        None => break,
                    },
                    done = done_stream.next() => match done {
                        Some(()) => {
                            if state.get_cloned().is_some() {
                                // The full bar must be observable before the
                                // hide, so the two writes are separated by a
                                // real delay rather than landing in one poll.
                                state.set(Some(1.0));
                                Timer::sleep(HIDE_DELAY_MS).await;
                                state.set(None);
                            }
                            ProgressStep::Idle
                        }
                        None => break,
                    },
                };

                if let ProgressStep::Start { schedule_done } = step {
                    state.set(Some(START_FRACTION));
                    if schedule_done {
                        let done_relay = done_relay.clone();
                        Task::start(async move {
                            Timer::sleep(COMPLETE_DELAY_MS).await;
                            done_relay.send(());
                        });
                    }
                }
            }
        });

        Self {
            bar,
            navigated_relay,
        }
    }

    /// `Some(fraction)` while the bar is visible.
    pub fn fraction_signal(&self) -> impl Signal<Item = Option<f64>> {
        self.bar.signal()
    }
}
