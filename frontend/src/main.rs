//! Crater Admin frontend entry point

use std::sync::OnceLock;
use zoon::*;

mod app;
mod dataflow;
mod fetch_state;
mod layout_state;
mod navigation;
mod pages;
mod platform;
mod progress;
mod router;
mod session;
mod views;

use app::AdminApp;

/// Keeps the app (and the task handles inside its actors) alive for the
/// whole page lifetime.
static APP: OnceLock<AdminApp> = OnceLock::new();

pub fn main() {
    start_app("app", || APP.get_or_init(AdminApp::new).root());
}
