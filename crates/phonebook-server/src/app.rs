//! Router assembly for each storage variant

use crate::config::StorageKind;
use crate::handlers::{self, persons};
use crate::middleware::{access_log, unknown_endpoint};
use crate::AppState;
use axum::{
    handler::HandlerWithoutStateExt,
    middleware::from_fn,
    routing::{get, MethodRouter},
    Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the router for `storage`.
///
/// The memory variant serves a greeting at `/` and has no update route. The
/// sqlite variant adds `PUT /api/persons/:id`, CORS, and the static bundle
/// in `static_dir`, which is only consulted when no API route matched.
pub fn build_router(state: AppState, storage: StorageKind, static_dir: &Path) -> Router {
    let router = match storage {
        StorageKind::Memory => Router::new()
            .route("/", get(handlers::root))
            .merge(api_routes(false))
            .fallback(unknown_endpoint),
        StorageKind::Sqlite => {
            let static_files = ServeDir::new(static_dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(unknown_endpoint.into_service());
            api_routes(true).fallback_service(static_files)
        }
    };

    let router = match storage {
        StorageKind::Memory => router,
        StorageKind::Sqlite => router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        ),
    };

    // Access log wraps CORS; preflight requests must be logged too
    router
        .layer(from_fn(access_log))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes(with_update: bool) -> Router<AppState> {
    let item: MethodRouter<AppState> = get(persons::get).delete(persons::delete);
    let item = if with_update {
        item.put(persons::update)
    } else {
        item
    };

    Router::new()
        .route(
            "/api/persons",
            get(persons::list)
                .post(persons::create)
                .fallback(unknown_endpoint),
        )
        .route("/api/persons/:id", item.fallback(unknown_endpoint))
        .route("/info", get(handlers::info).fallback(unknown_endpoint))
}
