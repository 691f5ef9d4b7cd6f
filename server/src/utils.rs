use app::{Logo, types::PresentationAttributes};
use axum::http::StatusCode;
use axum::response::{Json, Response};
use serde_json::{Value, json};
use tracing::error;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

fn build_response(body: String, content_type: &str, status: StatusCode) -> Response<String> {
    match Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(body)
    {
        Ok(response) => response,
        Err(build_error) => {
            error!(?build_error, "Failed to build HTTP response");
            let mut fallback = Response::new(String::new());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        }
    }
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "hbrs-site",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Serves the brand mark as a standalone SVG document.
pub async fn favicon_handler() -> Response<String> {
    let markup = Logo::new(&PresentationAttributes::new()).to_markup();
    build_response(markup, SVG_CONTENT_TYPE, StatusCode::OK)
}
