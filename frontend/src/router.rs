//! Route table, public-page bypass and router wiring
//!
//! The route table is the only contract between the shell and its child
//! views: a matched route carries the URL parameters the view needs and
//! nothing else. Unmatched URLs resolve to `None` and render the Not Found
//! view. Public pages bypass the authenticated layout entirely and are
//! dispatched through an explicit enumeration with an explicit fallback,
//! so an unmatched open page can never produce a blank render.

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use futures::channel::mpsc::UnboundedReceiver;
use std::sync::Arc;
use zoon::*;

/// Declarative route table. Declaration order is match precedence; the
/// literal section paths are tried before their parameterized detail
/// siblings. Detail ids stay raw path segments (any non-empty string
/// matches, like the original `:id` patterns); views interpret them.
#[route]
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    #[route("sign_in")]
    SignIn,
    #[route("sign_up")]
    SignUp,
    #[route("user")]
    Users,
    #[route("user", id)]
    UserDetail { id: String },
    #[route("business")]
    Business,
    #[route("visit")]
    Visits,
    #[route("contract")]
    Contracts,
    #[route("contract", id)]
    ContractDetail { id: String },
}

/// Where the activation guard sends the user. Unconditional: activation
/// always redirects, even when the current path would have been valid.
pub fn landing_route(signed_in: bool) -> Route {
    if signed_in { Route::Users } else { Route::SignIn }
}

/// Finite enumeration of views reachable without authentication.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublicPage {
    SignIn,
    SignUp,
}

impl PublicPage {
    /// Exact pathname dispatch for the open-pages bypass. `None` means the
    /// configuration names an open page this build has no view for; the
    /// caller falls back to the Not Found view instead of rendering
    /// nothing.
    pub fn for_pathname(pathname: &str) -> Option<Self> {
        match pathname {
            "/sign_in" => Some(Self::SignIn),
            "/sign_up" => Some(Self::SignUp),
            _ => None,
        }
    }
}

/// One browser navigation, as observed by the router's change handler.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteChange {
    pub route: Option<Route>,
    pub pathname: String,
    pub href: String,
}

impl RouteChange {
    fn before_first_navigation() -> Self {
        Self {
            route: None,
            pathname: String::new(),
            href: String::new(),
        }
    }
}

/// Current navigation state, fed by `route_changed_relay` events.
#[derive(Clone)]
pub struct RouteState {
    current: Actor<RouteChange>,
}

impl RouteState {
    pub fn new(mut route_changed_stream: UnboundedReceiver<RouteChange>) -> Self {
        let current = Actor::new(
            RouteChange::before_first_navigation(),
            async move |state| {
                while let Some(change) = route_changed_stream.next().await {
                    state.set_neq(change);
                }
            },
        );
        Self { current }
    }

    pub fn route_signal(&self) -> impl Signal<Item = Option<Route>> {
        self.current.signal_ref(|change| change.route.clone())
    }

    pub fn pathname_signal(&self) -> impl Signal<Item = String> {
        self.current.signal_ref(|change| change.pathname.clone())
    }
}

/// Routing intents produced by shell coordination (the activation guard
/// and the session redirect actor).
///
/// [`AppRouter`] drains the paired stream and performs the browser
/// navigation, so the producers of redirects stay runnable without a
/// browser.
#[derive(Clone)]
pub struct NavigationRequests {
    requested_relay: Relay<Route>,
}

impl NavigationRequests {
    pub fn new() -> (Self, UnboundedReceiver<Route>) {
        let (requested_relay, requested_stream) = relay();
        (Self { requested_relay }, requested_stream)
    }

    // Every producer funnels through here, keeping the relay on a single
    // emit site.
    pub fn request(&self, route: Route) {
        self.requested_relay.send(route);
    }
}

/// Browser router handle.
///
/// Owned by the app struct instead of a global; `SendWrapper` lets actors
/// hold clones of the non-Send browser router.
#[derive(Clone)]
pub struct AppRouter {
    router: Arc<SendWrapper<Router<Route>>>,
    _navigation_actor: Actor<()>,
}

impl AppRouter {
    /// Build the router. The change handler fires for the current URL at
    /// construction time, so every consumer of `route_changed_relay` must
    /// already be subscribed.
    pub fn new(
        route_changed_relay: Relay<RouteChange>,
        mut navigation_stream: UnboundedReceiver<Route>,
    ) -> Self {
        let router = Router::new(move |route: Option<Route>| {
            let route_changed_relay = route_changed_relay.clone();
            async move {
                let (pathname, href) = current_location();
                route_changed_relay.send(RouteChange {
                    route,
                    pathname,
                    href,
                });
            }
        });
        let router = Arc::new(SendWrapper::new(router));

        let navigation_actor = {
            let router = router.clone();
            Actor::new((), async move |_state| {
                while let Some(route) = navigation_stream.next().await {
                    router.go(route);
                }
            })
        };

        Self {
            router,
            _navigation_actor: navigation_actor,
        }
    }

    /// Direct navigation for user interactions (menu entries, links).
    /// Coordination redirects go through [`NavigationRequests`] instead.
    pub fn go(&self, route: Route) {
        self.router.go(route);
    }
}

fn current_location() -> (String, String) {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let pathname = location.pathname().unwrap_or_default();
        let href = location.href().unwrap_or_default();
        (pathname, href)
    } else {
        (String::new(), String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(segments: &[&str]) -> Option<Route> {
        Route::from_route_segments(segments.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn section_paths_resolve() {
        assert_eq!(parse(&["user"]), Some(Route::Users));
        assert_eq!(parse(&["business"]), Some(Route::Business));
        assert_eq!(parse(&["visit"]), Some(Route::Visits));
        assert_eq!(parse(&["contract"]), Some(Route::Contracts));
    }

    #[test]
    fn detail_paths_carry_their_id_segment() {
        assert_eq!(
            parse(&["contract", "42"]),
            Some(Route::ContractDetail { id: "42".to_owned() })
        );
        assert_eq!(
            parse(&["user", "7"]),
            Some(Route::UserDetail { id: "7".to_owned() })
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(parse(&[]), None);
        assert_eq!(parse(&["nope"]), None);
        assert_eq!(parse(&["user", "7", "extra"]), None);
    }

    #[test]
    fn activation_guard_redirects_by_auth_state() {
        assert_eq!(landing_route(false), Route::SignIn);
        assert_eq!(landing_route(true), Route::Users);
    }

    #[test]
    fn public_dispatch_is_exact_with_explicit_fallback() {
        assert_eq!(PublicPage::for_pathname("/sign_in"), Some(PublicPage::SignIn));
        assert_eq!(PublicPage::for_pathname("/sign_up"), Some(PublicPage::SignUp));
        assert_eq!(PublicPage::for_pathname("/forgot_password"), None);
        assert_eq!(PublicPage::for_pathname("/sign_in/"), None);
    }
}
