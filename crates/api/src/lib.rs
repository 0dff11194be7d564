//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /persons
//!   GET    /persons/:id
//!   POST   /persons
//!   PUT    /persons/:id
//!   DELETE /persons/:id

pub mod error;
pub mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use db::{DbPool, SqlPersonStore};

pub use error::ApiError;
pub use handlers::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/persons",
            get(handlers::persons::list).post(handlers::persons::create),
        )
        .route(
            "/persons/:id",
            get(handlers::persons::get)
                .put(handlers::persons::update)
                .delete(handlers::persons::delete),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the built frontend from `dir`, answering unknown paths with its
/// `index.html`.
pub fn with_static_files(router: Router, dir: impl Into<PathBuf>) -> Router {
    let dir = dir.into();
    let index = ServeFile::new(dir.join("index.html"));
    router.fallback_service(ServeDir::new(dir).fallback(index))
}

/// Bind `bind` and serve the API backed by `pool` until the process exits.
pub async fn serve(bind: &str, pool: DbPool, static_dir: Option<PathBuf>) -> std::io::Result<()> {
    let state = AppState::new(Arc::new(SqlPersonStore::new(pool)));
    let mut app = router(state);
    if let Some(dir) = static_dir {
        info!("Serving static files from {}", dir.display());
        app = with_static_files(app, dir);
    }

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}
