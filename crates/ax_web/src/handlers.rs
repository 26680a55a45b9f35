use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use ax_core::StatsScope;
use ax_data::export;

use crate::AppState;

#[derive(Deserialize)]
pub struct SearchBody {
    pub term: String,
}

#[derive(Deserialize)]
pub struct CategoryBody {
    pub category: String,
}

#[derive(Deserialize)]
pub struct YearBody {
    pub year: String,
}

/// Either a named navigation action or an absolute page number.
#[derive(Deserialize)]
pub struct PageBody {
    pub action: Option<String>,
    pub goto: Option<usize>,
}

#[derive(Deserialize)]
pub struct StatsParams {
    pub scope: Option<StatsScope>,
}

pub async fn current_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.session.read().await;
    Json(session.current_page())
}

pub async fn article_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let session = state.session.read().await;
    match session.article(&id) {
        Some(article) => Json(article.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("article not found: {}", id) })),
        )
            .into_response(),
    }
}

pub async fn set_search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchBody>,
) -> impl IntoResponse {
    let mut session = state.session.write().await;
    Json(session.set_search(&body.term))
}

pub async fn set_category(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CategoryBody>,
) -> impl IntoResponse {
    let mut session = state.session.write().await;
    Json(session.set_category(&body.category))
}

pub async fn set_year(
    State(state): State<Arc<AppState>>,
    Json(body): Json<YearBody>,
) -> impl IntoResponse {
    let mut session = state.session.write().await;
    Json(session.set_year(&body.year))
}

pub async fn navigate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PageBody>,
) -> impl IntoResponse {
    let mut session = state.session.write().await;
    let page = if let Some(page) = body.goto {
        session.go_to_page(page)
    } else {
        match body.action.as_deref() {
            Some("first") => session.first_page(),
            Some("prev") => session.prev_page(),
            Some("next") => session.next_page(),
            Some("last") => session.last_page(),
            // Unknown actions leave the cursor where it is.
            _ => session.current_page(),
        }
    };
    Json(page)
}

pub async fn stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsParams>,
) -> impl IntoResponse {
    let session = state.session.read().await;
    Json(session.stats(params.scope.unwrap_or(StatsScope::All)))
}

/// Streams the current filtered set as a downloadable JSON document named
/// after today's date.
pub async fn export(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.session.read().await;
    let filtered = session.filtered();
    match export::to_json(&filtered) {
        Ok(body) => {
            let filename = export::export_filename(Utc::now().date_naive());
            (
                [
                    (
                        header::CONTENT_TYPE,
                        "application/json; charset=utf-8".to_string(),
                    ),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                body,
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to serialize export: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
