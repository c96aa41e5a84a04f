use std::any::Any;
use std::path::Path;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir};

use crate::error::AppError;
use crate::web_pages::{self, AppState, MAX_UPLOAD_BYTES};

/// Multipart framing on top of the image itself.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(web_pages::index_page))
        .route(
            "/generate",
            post(web_pages::generate_suggestions)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + FORM_OVERHEAD_BYTES)),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    log::error!("request handler panicked: {detail}");
    AppError::Internal.into_response()
}
