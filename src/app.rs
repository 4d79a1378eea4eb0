//! Root application component with routing and the navigation guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::{login::LoginPage, route_page::RoutePage};
use crate::util::auth::install_navigation_guard;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Applies the navigation guard; renders nothing.
#[component]
fn NavigationGuard() -> impl IntoView {
    install_navigation_guard(use_navigate());
}

/// Root application component.
///
/// Catalog screens share one wildcard route; the guard decides who may see
/// them and `RoutePage` looks up their titles.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/takeout-web.css"/>
        <Title text="Takeout"/>

        <Router>
            <NavigationGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=RoutePage/>
                <Route path=WildcardSegment("rest") view=RoutePage/>
            </Routes>
        </Router>
    }
}
