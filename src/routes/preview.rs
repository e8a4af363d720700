use axum::{
    extract::State,
    routing::get,
    Router,
    Json,
    http::Method,
};
use serde::Serialize;
use std::sync::Arc;
use crate::{
    AppState,
    error::AppError,
    models::TableDescription,
    services::{csv, fetch},
};
use tower_http::cors::{CorsLayer, Any};

pub fn routes() -> Router<Arc<AppState>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/preview", get(preview_dataset))
        .layer(cors)
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    table: TableDescription,
    total_rows: usize,
    preview_rows: usize,
}

#[axum::debug_handler]
async fn preview_dataset(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PreviewResponse>, AppError> {
    let start = std::time::Instant::now();
    tracing::info!("Fetching dataset from {}", state.config.dataset_url);

    let fetch_start = std::time::Instant::now();
    let text =
        fetch::load_text_from_url(&state.config.dataset_url, state.config.max_file_size).await?;
    tracing::info!(
        "Dataset fetched, size: {}KB, took: {:?}",
        text.len() / 1024,
        fetch_start.elapsed()
    );

    let response = build_preview(&text, state.config.preview_rows)?;
    tracing::info!(
        "Preview of {} of {} rows built in {:?}",
        response.preview_rows,
        response.total_rows,
        start.elapsed()
    );

    Ok(Json(response))
}

/// Parse the fetched text and cut it down to the preview. Headers are built
/// before any body rows; a parse failure produces no table at all.
fn build_preview(text: &str, limit: usize) -> Result<PreviewResponse, AppError> {
    let parsed = csv::parse_csv(text)?;

    let total_rows = parsed.rows.len();
    let preview = csv::select_preview_rows(&parsed.rows, limit);
    let table = csv::render(&parsed.headers, &preview);

    Ok(PreviewResponse {
        preview_rows: table.rows.len(),
        total_rows,
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_capped_at_limit() {
        let text = "a,b\n1,2\n3,4\n5,6\n7,8\n9,10\n11,12\n13,14";
        let response = build_preview(text, 5).unwrap();
        assert_eq!(response.total_rows, 7);
        assert_eq!(response.preview_rows, 5);
        assert_eq!(response.table.headers, vec!["a", "b"]);
        assert_eq!(response.table.rows.first().unwrap(), &vec!["1", "2"]);
        assert_eq!(response.table.rows.last().unwrap(), &vec!["9", "10"]);
    }

    #[test]
    fn small_dataset_is_shown_whole() {
        let response = build_preview("a,b\n1,2\n3,4", 5).unwrap();
        assert_eq!(response.total_rows, 2);
        assert_eq!(response.preview_rows, 2);
    }

    #[test]
    fn unparseable_text_yields_parse_error() {
        let err = build_preview("   \n\n  ", 5).unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }

    #[test]
    fn response_serializes_as_table_description() {
        let response = build_preview("a,b\n1,2", 5).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["table"]["headers"][0], "a");
        assert_eq!(json["table"]["rows"][0][1], "2");
        assert_eq!(json["total_rows"], 1);
    }
}
