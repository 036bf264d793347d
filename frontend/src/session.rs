//! Session store collaborator
//!
//! Owns the signed-in flag and the current user record. The shell only
//! reads the boolean and passes the user through to the header; how the
//! credentials were verified is out of scope here.
//!
//! Ordering contract: the `session_established` / `session_cleared` events
//! are emitted *after* the state mutation they describe, so listeners (the
//! app-level redirect actor) always observe the new auth state.

use crate::dataflow::{Actor, Relay, relay};
use futures::{StreamExt, select};
use shared::User;
use zoon::Signal;

#[derive(Clone, Debug, PartialEq)]
struct SessionState {
    signed_in: bool,
    user: Option<User>,
}

#[derive(Clone)]
pub struct Session {
    state: Actor<SessionState>,
    /// Sign-in form submitted with a verified user record.
    pub sign_in_submitted_relay: Relay<User>,
    /// "signout" action picked in the header user menu.
    pub sign_out_requested_relay: Relay,
    /// Emitted once per successful sign-in, after the state change.
    pub session_established_relay: Relay,
    /// Emitted once per sign-out, after the session is cleared.
    pub session_cleared_relay: Relay,
}

impl Session {
    pub fn new() -> Self {
        let (sign_in_submitted_relay, mut sign_in_stream) = relay::<User>();
        let (sign_out_requested_relay, mut sign_out_stream) = relay();
        let (session_established_relay, _established_stream) = relay();
        let (session_cleared_relay, _cleared_stream) = relay();

        let established = session_established_relay.clone();
        let cleared = session_cleared_relay.clone();

        let state = Actor::new(
            SessionState {
                signed_in: false,
                user: None,
            },
            async move |state| {
                loop {
                    select! {
                        user = sign_in_stream.next() => match user {
                            Some(user) => {
                                zoon::println!("session established for {}", user.name);
                                state.set(SessionState {
                                    signed_in: true,
                                    user: Some(user),
                                });
                                established.send(());
                            }
                            None => break,
                        },
                        request = sign_out_stream.next() => match request {
                            Some(()) => {
                                zoon::println!("session cleared");
                                state.set(SessionState {
                                    signed_in: false,
                                    user: None,
                                });
                                cleared.send(());
                            }
                            None => break,
                        },
                    }
                }
            },
        );

        Self {
            state,
            sign_in_submitted_relay,
            sign_out_requested_relay,
            session_established_relay,
            session_cleared_relay,
        }
    }

    /// Snapshot read for the one-shot activation guard.
    pub fn signed_in(&self) -> bool {
        self.state.get_cloned().signed_in
    }

    pub fn signed_in_signal(&self) -> impl Signal<Item = bool> {
        self.state.signal_ref(|state| state.signed_in)
    }

    pub fn user_signal(&self) -> impl Signal<Item = Option<User>> {
        self.state.signal_ref(|state| state.user.clone())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn sign_in_establishes_session() {
        let session = Session::new();
        let mut established = session.session_established_relay.subscribe();
        assert!(!session.signed_in());

        session.sign_in_submitted_relay.send(User {
            name: "admin".to_owned(),
        });

        assert_eq!(established.next().await, Some(()));
        assert!(session.signed_in());
    }

    #[tokio::test]
    async fn sign_out_clears_before_notifying() {
        let session = Session::new();
        let mut cleared = session.session_cleared_relay.subscribe();

        session.sign_in_submitted_relay.send(User {
            name: "admin".to_owned(),
        });
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        session.sign_out_requested_relay.send(());

        // The cleared event arrives strictly after the state flip, so the
        // redirect listener always sees a signed-out session.
        assert_eq!(cleared.next().await, Some(()));
        assert!(!session.signed_in());
    }

    #[tokio::test]
    async fn sign_out_notifies_exactly_once() {
        let session = Session::new();
        let mut cleared = session.session_cleared_relay.subscribe();

        session.sign_out_requested_relay.send(());

        assert_eq!(cleared.next().await, Some(()));
        tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        // Still open, but no second event queued.
        assert!(cleared.try_next().is_err());
    }
}
