//! Titled placeholder for every catalog screen.
//!
//! ARCHITECTURE
//! ============
//! Business pages live outside this crate. Each route renders the shared
//! frame here: the route title plus navigation to the sibling screens of
//! the same area.

#[cfg(test)]
#[path = "route_page_test.rs"]
mod route_page_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routing::table::{self, Area, RouteEntry, RouteKind};

const NOT_FOUND_TITLE: &str = "Page not found.";

fn page_title(path: &str) -> &'static str {
    table::lookup(path).map_or(NOT_FOUND_TITLE, |route| route.title)
}

/// Public screens are seen by anonymous visitors, who have nothing to sign out of.
fn shows_sign_out(path: &str) -> bool {
    !table::lookup(path).is_some_and(|route| route.area == Area::Public)
}

/// Navigable pages of `area`, in catalog order.
fn area_links(area: Area) -> Vec<&'static RouteEntry> {
    table::ROUTES
        .iter()
        .filter(|route| route.area == area && route.kind == RouteKind::Page)
        .collect()
}

#[component]
pub fn RoutePage() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let path = move || location.pathname.get();

    let links = move || {
        table::lookup(&path())
            .filter(|route| route.area != Area::Public)
            .map(|route| area_links(route.area))
            .unwrap_or_default()
            .into_iter()
            .map(|route| {
                view! { <a class="route-page__link" href=route.path>{route.title}</a> }
            })
            .collect::<Vec<_>>()
    };

    let on_sign_out = move |_| crate::util::auth::sign_out(navigate.clone());

    view! {
        <div class="route-page">
            <header class="route-page__header">
                <h1>{move || page_title(&path())}</h1>
                <Show when=move || shows_sign_out(&path())>
                    <button class="btn" on:click=on_sign_out.clone()>
                        "Sign out"
                    </button>
                </Show>
            </header>
            <nav class="route-page__nav">{links}</nav>
        </div>
    }
}
