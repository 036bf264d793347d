//! Child view collaborators
//!
//! The shell mounts these through the route table and hands over nothing
//! but the matched URL parameters; every page owns its own data fetching.
//! They are intentionally thin placeholders for the real back-office
//! screens.

use crate::dataflow::Atom;
use crate::router::{AppRouter, Route};
use crate::session::Session;
use shared::User;
use zoon::*;

fn page_frame(title: &str, body: impl Element) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Padding::all(24))
        .s(Gap::both(12))
        .item(
            El::new()
                .s(Font::new()
                    .size(20)
                    .weight(FontWeight::SemiBold)
                    .color("rgb(38, 38, 38)"))
                .child(Text::new(title)),
        )
        .item(body)
}

fn page_note(text: &str) -> impl Element {
    El::new()
        .s(Font::new().size(14).color("rgb(120, 120, 120)"))
        .child(Text::new(text))
}

pub fn users_page() -> impl Element {
    page_frame("Users", page_note("User management loads its own records."))
}

pub fn user_detail_page(id: String) -> impl Element {
    page_frame(
        &format!("User {id}"),
        page_note("Detail data is fetched by the page itself."),
    )
}

pub fn business_page() -> impl Element {
    page_frame("Business", page_note("Business records live here."))
}

pub fn visits_page() -> impl Element {
    page_frame("Visits", page_note("Visit planning and history."))
}

pub fn contracts_page() -> impl Element {
    page_frame("Contracts", page_note("Contract overview."))
}

pub fn contract_detail_page(id: String) -> impl Element {
    page_frame(
        &format!("Contract {id}"),
        page_note("Rendered without the content background."),
    )
}

pub fn not_found_page() -> impl Element {
    page_frame("404", page_note("This page does not exist."))
}

/// Sign-in view. Submitting hands a verified user record to the session
/// store; the app-level coordination redirects once the session is
/// established.
pub fn sign_in_page(session: Session, app_name: String) -> impl Element {
    let hovered = Atom::new(false);
    Column::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Align::center())
        .s(Gap::both(16))
        .item(
            El::new()
                .s(Font::new()
                    .size(24)
                    .weight(FontWeight::Bold)
                    .color("rgb(38, 38, 38)"))
                .child(Text::new(&app_name)),
        )
        .item(
            Button::new()
                .s(Padding::new().x(24).y(8))
                .s(RoundedCorners::all(4))
                .s(Font::new().color("rgb(255, 255, 255)"))
                .s(Background::new().color_signal(hovered.signal().map_bool(
                    || "rgb(64, 169, 255)",
                    || "rgb(24, 144, 255)",
                )))
                .on_hovered_change({
                    let hovered = hovered.clone();
                    move |is_hovered| hovered.set_neq(is_hovered)
                })
                .label("Sign in as admin")
                .on_press(move || {
                    session.sign_in_submitted_relay.send(User {
                        name: "admin".to_owned(),
                    });
                }),
        )
}

pub fn sign_up_page(router: AppRouter) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Align::center())
        .s(Gap::both(16))
        .item(
            El::new()
                .s(Font::new()
                    .size(24)
                    .weight(FontWeight::Bold)
                    .color("rgb(38, 38, 38)"))
                .child(Text::new("Create an account")),
        )
        .item(
            Button::new()
                .s(Font::new().color("rgb(24, 144, 255)"))
                .label("Back to sign in")
                .on_press(move || router.go(Route::SignIn)),
        )
}
