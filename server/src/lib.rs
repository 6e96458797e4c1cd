use anyhow::Result;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use mailsearch_core::query::search;
use mailsearch_core::store::IndexStore;
use mailsearch_core::FileSearchResult;
use serde::Deserialize;
use std::path::PathBuf;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(rename = "searchQuery")]
    pub search_query: String,
}

#[derive(Clone)]
pub struct AppState {
    pub db_path: PathBuf,
}

pub fn build_app(db_path: PathBuf) -> Result<Router> {
    // Create the schema up front so a fresh deployment serves empty results
    // instead of failing until the first ingestion.
    IndexStore::open(&db_path)?;

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/file/search", get(search_handler))
        .with_state(AppState { db_path })
        .layer(TraceLayer::new_for_http())
        .layer(cors);
    Ok(app)
}

/// Ranked top-20 search over the index. An empty result is a successful
/// `200 []`; a storage failure is a 503 so callers can tell the two apart.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<FileSearchResult>>, (StatusCode, String)> {
    // A connection per request: WAL snapshot reads never block the consumer's
    // commits, and queries never serialize behind each other.
    let store = IndexStore::open(&state.db_path).map_err(unavailable)?;
    let results = search(&store, &params.search_query).map_err(unavailable)?;
    Ok(Json(results))
}

fn unavailable(err: anyhow::Error) -> (StatusCode, String) {
    tracing::error!(error = %err, "search failed");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        format!("search unavailable: {err}"),
    )
}
