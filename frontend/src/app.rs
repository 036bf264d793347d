//! Application shell wiring
//!
//! `AdminApp` owns every domain (session, layout, navigation, fetch
//! tracking, progress) and connects them with relays. Construction order
//! matters: every subscriber of `route_changed_relay` must exist before
//! the browser router is built, because the router reports the current
//! URL immediately.
//!
//! Coordination redirects (the activation guard and the session redirect
//! actor) emit onto [`NavigationRequests`]; the router drains that stream.
//! The redirect logic therefore runs, and is tested, without a browser.

use futures::{StreamExt, select};
use std::sync::Arc;
use zoon::*;

use crate::dataflow::{Actor, relay};
use crate::fetch_state::FetchState;
use crate::layout_state::LayoutState;
use crate::platform;
use crate::progress::NavProgress;
use crate::router::{AppRouter, NavigationRequests, RouteChange, RouteState, landing_route};
use crate::session::Session;
use crate::views;
use shared::ShellConfig;

#[derive(Clone)]
pub struct AdminApp {
    pub config: Arc<ShellConfig>,
    pub session: Session,
    pub layout: LayoutState,
    pub fetch_state: FetchState,
    pub progress: NavProgress,
    pub route_state: RouteState,
    pub router: AppRouter,

    /// Redirects after session transitions: established goes to the
    /// authenticated landing, cleared goes back to sign-in.
    _session_redirect_actor: Actor<()>,

    /// Forwards each navigation href into the progress domain.
    _progress_feed_actor: Actor<()>,
}

/// One redirect per session transition, issued strictly after the session
/// actor has already mutated its state (its events fire post-mutation).
fn session_redirect_actor(session: &Session, requests: NavigationRequests) -> Actor<()> {
    let mut established = session.session_established_relay.subscribe().fuse();
    let mut cleared = session.session_cleared_relay.subscribe().fuse();
    Actor::new((), async move |_state| {
        loop {
            select! {
                event = established.next() => match event {
                    Some(()) => requests.request(landing_route(true)),
                    None => break,
                },
                event = cleared.next() => match event {
                    Some(()) => requests.request(landing_route(false)),
                    None => break,
                },
            }
        }
    })
}

/// One-shot gate: whatever URL the app starts on, land on the page
/// matching the current session state.
fn activation_redirect(session: &Session, requests: &NavigationRequests) {
    let landing = landing_route(session.signed_in());
    zoon::println!("activation redirect to {landing:?}");
    requests.request(landing);
}

impl AdminApp {
    pub fn new() -> Self {
        let config = Arc::new(ShellConfig::load());
        let session = Session::new();
        let layout = LayoutState::new(platform::preferences());
        let fetch_state = FetchState::new();
        let progress = NavProgress::new(fetch_state.is_fetching_signal());

        let (route_changed_relay, route_changed_stream) = relay::<RouteChange>();
        let route_state = RouteState::new(route_changed_stream);

        let progress_feed_actor = {
            let mut changes = route_changed_relay.subscribe().fuse();
            let navigated_relay = progress.navigated_relay.clone();
            Actor::new((), async move |_state| {
                while let Some(change) = changes.next().await {
                    navigated_relay.send(change.href);
                }
            })
        };

        let (navigation_requests, navigation_stream) = NavigationRequests::new();
        let router = AppRouter::new(route_changed_relay, navigation_stream);

        let redirect_actor = session_redirect_actor(&session, navigation_requests.clone());
        activation_redirect(&session, &navigation_requests);

        Self {
            config,
            session,
            layout,
            fetch_state,
            progress,
            route_state,
            router,
            _session_redirect_actor: redirect_actor,
            _progress_feed_actor: progress_feed_actor,
        }
    }

    /// Root element: a public page or the full shell, with the progress
    /// bar stacked on top.
    pub fn root(&self) -> impl Element {
        let config = self.config.clone();
        let session = self.session.clone();
        let layout = self.layout.clone();
        let route_state = self.route_state.clone();
        let router = self.router.clone();
        Stack::new()
            .s(Width::fill())
            .s(Height::screen())
            .s(Font::new().family([FontFamily::new("Inter"), FontFamily::SansSerif]))
            .layer(
                El::new().s(Width::fill()).s(Height::fill()).child_signal(
                    self.route_state.pathname_signal().map(move |pathname| {
                        if config.is_open_page(&pathname) {
                            views::public_region(
                                pathname,
                                session.clone(),
                                router.clone(),
                                config.clone(),
                            )
                        } else {
                            views::shell_frame(
                                config.clone(),
                                session.clone(),
                                layout.clone(),
                                route_state.clone(),
                                router.clone(),
                            )
                            .unify()
                        }
                    }),
                ),
            )
            .layer(views::progress_bar(self.progress.clone()))
    }
}
