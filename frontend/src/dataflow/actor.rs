//! Single-value Actor for reactive state management
//!
//! An Actor owns a `Mutable<T>` and mutates it only from its processor
//! task, which drains relay streams sequentially. Views bind to the state
//! through signals; event handlers never touch it directly.

use std::future::Future;
use std::sync::Arc;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// Single-value reactive state container.
///
/// The processor loop is the single point of mutation; events arriving on
/// multiple relays are interleaved with `select!` so state transitions
/// stay sequential.
///
/// ```ignore
/// let (toggled_relay, mut toggled_stream) = relay();
///
/// let collapsed = Actor::new(false, async move |state| {
///     while let Some(()) = toggled_stream.next().await {
///         let flipped = !state.get_cloned();
///         state.set_neq(flipped);
///     }
/// });
///
/// toggled_relay.send(());
/// collapsed.signal() // reactive view binding
/// ```
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub(crate) state: Mutable<T>,
    _task_handle: Arc<TaskHandle>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create an Actor with an initial value and its event processor.
    ///
    /// Dropping the last clone of the Actor aborts the processor task.
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let state = Mutable::new(initial_state);
        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));

        Self {
            state,
            _task_handle: task_handle,
        }
    }

    /// Reactive view of the state. This is the default way to read an Actor.
    pub fn signal(&self) -> impl Signal<Item = T> {
        self.state.signal_cloned()
    }

    /// Derived signal computed from a reference, avoiding clones of large
    /// state values.
    pub fn signal_ref<U>(&self, f: impl Fn(&T) -> U + Send + Sync + 'static) -> impl Signal<Item = U>
    where
        U: PartialEq + Send + Sync + 'static,
    {
        self.state.signal_ref(f)
    }

    /// Immediate snapshot for event handlers where a signal subscription is
    /// impractical (e.g. the one-shot activation guard). Use sparingly.
    pub fn get_cloned(&self) -> T {
        self.state.lock_ref().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataflow::relay;
    use futures::{StreamExt, select};
    use zoon::SignalExt;

    #[tokio::test]
    async fn actor_applies_events_in_order() {
        let (step_relay, mut step_stream) = relay::<i32>();

        let counter = Actor::new(0, async move |state| {
            while let Some(amount) = step_stream.next().await {
                let next = state.get_cloned() + amount;
                state.set(next);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        let emit = |amount| step_relay.send(amount);
        emit(5);
        emit(3);
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        assert_eq!(counter.signal().to_stream().next().await, Some(8));
    }

    #[tokio::test]
    async fn actor_interleaves_multiple_streams() {
        let (up_relay, mut up_stream) = relay::<u32>();
        let (down_relay, mut down_stream) = relay::<u32>();

        let counter = Actor::new(10u32, async move |state| {
            loop {
                select! {
                    amount = up_stream.next() => match amount {
                        Some(amount) => state.set(state.get_cloned() + amount),
                        None => break,
                    },
                    amount = down_stream.next() => match amount {
                        Some(amount) => state.set(state.get_cloned().saturating_sub(amount)),
                        None => break,
                    },
                }
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        up_relay.send(5);
        down_relay.send(3);
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        assert_eq!(counter.signal().to_stream().next().await, Some(12));
    }
}
