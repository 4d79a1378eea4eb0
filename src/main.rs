//! SSR host: serves the server-rendered app and its WASM bundle.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::path::PathBuf;

    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use takeout_web::app::{App, shell};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;

    tracing_subscriber::fmt::init();

    // An unusable API base is fatal; the app cannot reach its backend.
    let api = match takeout_web::config::init() {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "invalid API configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(api_base = %api.base, "api base resolved");

    let conf = get_configuration(None).expect("leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .route("/healthz", get(|| async { StatusCode::OK }))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");
    tracing::info!(%addr, "takeout-web listening");
    axum::serve(listener, app).await.expect("server failed");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
