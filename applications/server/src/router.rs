/// HTTP routing
use crate::{api, config::ServerConfig, state::AppState, ui};
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// `/api/*` serves JSON, `/` and `/admin` serve HTML, and with the local blob
/// backend the blob directory is served under its public prefix.
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/users",
            get(api::users::list_users).post(api::users::create_user),
        );

    let page_routes = Router::new()
        .route("/", get(ui::pages::form_page).post(ui::pages::submit_form))
        .route(
            "/admin",
            get(ui::pages::admin_page).post(ui::pages::admin_login),
        );

    let mut app = Router::new()
        .nest("/api", api_routes)
        .merge(page_routes);

    if let Some(mount) = config.local_blob_mount() {
        tracing::info!("Serving local blobs under {}", mount);
        app = app.nest_service(mount, ServeDir::new(&config.blob.local_root));
    }

    app.layer(DefaultBodyLimit::max(config.upload.max_body_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
