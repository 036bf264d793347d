//! Shell layout: sidebar, header, breadcrumb, content, footer
//!
//! The shell chrome is rendered only around authenticated routes; public
//! pages are mounted bare through [`public_region`]. All chrome state
//! (collapse, sidebar theme, highlighted menu entry) is signal-driven.

use crate::layout_state::LayoutState;
use crate::navigation::{is_contract_detail, menu_key};
use crate::progress::NavProgress;
use crate::router::{AppRouter, PublicPage, Route, RouteState};
use crate::session::Session;
use crate::{dataflow::Atom, pages};
use shared::ShellConfig;
use std::sync::Arc;
use zoon::*;

const SIDEBAR_WIDTH: u32 = 224;
const SIDEBAR_COLLAPSED_WIDTH: u32 = 80;

/// Actions offered by the header user menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMenuAction {
    SignOut,
}

fn on_user_menu_action(session: &Session, action: UserMenuAction) {
    match action {
        UserMenuAction::SignOut => session.sign_out_requested_relay.send(()),
    }
}

/// Thin progress bar pinned to the top of the viewport. Hidden whenever
/// the fraction is `None`.
pub fn progress_bar(progress: NavProgress) -> impl Element {
    El::new()
        .s(Align::new().top().left())
        .s(Height::exact(2))
        .s(Background::new().color("rgb(24, 144, 255)"))
        .update_raw_el(move |raw_el| {
            raw_el.style_signal(
                "width",
                progress.fraction_signal().map(|fraction| match fraction {
                    Some(fraction) => format!("{:.0}%", fraction * 100.0),
                    None => "0%".to_owned(),
                }),
            )
        })
}

/// Public-page bypass: exactly one view, no shell chrome. An open page
/// with no registered view falls back to Not Found instead of a blank
/// region.
pub fn public_region(
    pathname: String,
    session: Session,
    router: AppRouter,
    config: Arc<ShellConfig>,
) -> RawElOrText {
    match PublicPage::for_pathname(&pathname) {
        Some(PublicPage::SignIn) => pages::sign_in_page(session, config.app_name.clone()).unify(),
        Some(PublicPage::SignUp) => pages::sign_up_page(router).unify(),
        None => pages::not_found_page().unify(),
    }
}

/// The authenticated layout: sidebar beside header, breadcrumb, content
/// and footer.
pub fn shell_frame(
    config: Arc<ShellConfig>,
    session: Session,
    layout: LayoutState,
    route_state: RouteState,
    router: AppRouter,
) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Height::fill())
        .item(sidebar(
            config.clone(),
            layout.clone(),
            route_state.clone(),
            router,
        ))
        .item(
            Column::new()
                .s(Width::fill())
                .s(Height::fill())
                .item(header(session, layout))
                .item(breadcrumb(route_state.clone()))
                .item(content(route_state))
                .item(footer(config)),
        )
}

fn sidebar(
    config: Arc<ShellConfig>,
    layout: LayoutState,
    route_state: RouteState,
    router: AppRouter,
) -> impl Element {
    Column::new()
        .s(Height::fill())
        .s(Width::exact_signal(layout.collapsed_signal().map(
            |collapsed| {
                if collapsed {
                    SIDEBAR_COLLAPSED_WIDTH
                } else {
                    SIDEBAR_WIDTH
                }
            },
        )))
        .s(Background::new().color_signal(
            layout
                .side_inline_signal()
                .map_bool(|| "rgb(255, 255, 255)", || "rgb(0, 21, 41)"),
        ))
        .item(
            El::new()
                .s(Padding::new().x(16).y(18))
                .s(Font::new().size(18).weight(FontWeight::Bold).color_signal(
                    layout
                        .side_inline_signal()
                        .map_bool(|| "rgb(38, 38, 38)", || "rgb(255, 255, 255)"),
                ))
                .child_signal(layout.collapsed_signal().map({
                    let app_name = config.app_name.clone();
                    move |collapsed| {
                        let label = if collapsed {
                            app_name.chars().next().map(String::from).unwrap_or_default()
                        } else {
                            app_name.clone()
                        };
                        Text::new(&label)
                    }
                })),
        )
        .item(menu_item("Users", "1", Route::Users, &layout, &route_state, &router))
        .item(menu_item("Business", "2", Route::Business, &layout, &route_state, &router))
        .item(menu_item("Visits", "3", Route::Visits, &layout, &route_state, &router))
        .item(menu_item("Contracts", "4", Route::Contracts, &layout, &route_state, &router))
        .item(theme_switch(layout))
}

/// One sidebar entry. The highlighted entry is the single selection
/// produced by `menu_key`; detail pages highlight nothing.
fn menu_item(
    label: &str,
    key: &'static str,
    route: Route,
    layout: &LayoutState,
    route_state: &RouteState,
    router: &AppRouter,
) -> impl Element {
    let selected_signal = route_state
        .pathname_signal()
        .map(move |pathname| menu_key(&pathname) == key);
    let font_color_signal = map_ref! {
        let selected = route_state
            .pathname_signal()
            .map(move |pathname| menu_key(&pathname) == key),
        let inline = layout.side_inline_signal() =>
        match (*selected, *inline) {
            (true, _) => "rgb(255, 255, 255)",
            (false, true) => "rgb(89, 89, 89)",
            (false, false) => "rgb(166, 177, 186)",
        }
    };
    let router = router.clone();
    Button::new()
        .s(Width::fill())
        .s(Padding::new().x(16).y(10))
        .s(Background::new()
            .color_signal(selected_signal.map_bool(|| "rgb(24, 144, 255)", || "transparent")))
        .s(Font::new().size(14).color_signal(font_color_signal))
        .label(label)
        .on_press(move || router.go(route.clone()))
}

fn theme_switch(layout: LayoutState) -> impl Element {
    let side_theme_toggled_relay = layout.side_theme_toggled_relay.clone();
    Button::new()
        .s(Align::new().bottom())
        .s(Width::fill())
        .s(Padding::new().x(16).y(12))
        .s(Font::new().size(12).color("rgb(140, 140, 140)"))
        .label_signal(
            layout
                .side_inline_signal()
                .map_bool(|| "Theme: light", || "Theme: dark"),
        )
        .on_press(move || side_theme_toggled_relay.send(()))
}

fn header(session: Session, layout: LayoutState) -> impl Element {
    let collapse_toggled_relay = layout.collapse_toggled_relay.clone();
    Row::new()
        .s(Width::fill())
        .s(Height::exact(64))
        .s(Background::new().color("rgb(255, 255, 255)"))
        .s(Padding::new().x(16))
        .item(
            // Fold/unfold trigger, mirrored like the classic menu icon.
            Button::new()
                .s(Font::new().size(18).color("rgb(89, 89, 89)"))
                .label_signal(layout.collapsed_signal().map_bool(|| "▸", || "◂"))
                .on_press(move || collapse_toggled_relay.send(())),
        )
        .item(user_display(session))
}

fn user_display(session: Session) -> impl Element {
    let menu_open = Atom::new(false);
    Row::new()
        .s(Align::new().right())
        .s(Gap::both(12))
        .item(
            El::new()
                .s(Font::new().size(14).color("rgb(38, 38, 38)"))
                .child_signal(
                    session
                        .user_signal()
                        .map(|user| Text::new(&user.map(|user| user.name).unwrap_or_default())),
                ),
        )
        .item(
            Button::new()
                .s(Font::new().size(14).color("rgb(89, 89, 89)"))
                .label_signal(menu_open.signal().map_bool(|| "▴", || "▾"))
                .on_press({
                    let menu_open = menu_open.clone();
                    move || menu_open.toggle()
                }),
        )
        .item_signal(menu_open.signal().map_true(move || {
            let session = session.clone();
            Button::new()
                .s(Font::new().size(14).color("rgb(255, 77, 79)"))
                .label("Sign out")
                .on_press(move || on_user_menu_action(&session, UserMenuAction::SignOut))
        }))
}

fn breadcrumb(route_state: RouteState) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(24).y(12))
        .s(Font::new().size(13).color("rgb(140, 140, 140)"))
        .child_signal(route_state.pathname_signal().map(|pathname| {
            let trail = pathname
                .split('/')
                .filter(|segment| !segment.is_empty())
                .fold("Home".to_owned(), |mut trail, segment| {
                    trail.push_str(" / ");
                    trail.push_str(segment);
                    trail
                });
            Text::new(&trail)
        }))
}

fn content(route_state: RouteState) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Padding::new().x(24).y(16))
        .s(Background::new().color_signal(route_state.pathname_signal().map(
            |pathname| {
                // Contract detail draws its own canvas; the shared white
                // backdrop is suppressed there.
                if is_contract_detail(&pathname) {
                    "transparent"
                } else {
                    "rgb(255, 255, 255)"
                }
            },
        )))
        .child_signal(route_state.route_signal().map(page_for))
}

/// Authenticated route dispatch. The final arm is the unconditional Not
/// Found fallback.
fn page_for(route: Option<Route>) -> RawElOrText {
    match route {
        Some(Route::Users) => pages::users_page().unify(),
        Some(Route::UserDetail { id }) => pages::user_detail_page(id).unify(),
        Some(Route::Business) => pages::business_page().unify(),
        Some(Route::Visits) => pages::visits_page().unify(),
        Some(Route::Contracts) => pages::contracts_page().unify(),
        Some(Route::ContractDetail { id }) => pages::contract_detail_page(id).unify(),
        // Sign-in/up render through the open-pages bypass; inside the
        // authenticated layout they are not part of the route table.
        Some(Route::SignIn) | Some(Route::SignUp) | None => pages::not_found_page().unify(),
    }
}

fn footer(config: Arc<ShellConfig>) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(24).y(16))
        .s(Font::new().size(12).color("rgb(140, 140, 140)"))
        .s(Align::center())
        .child(Text::new(&config.footer_text))
}
