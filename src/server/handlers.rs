use super::types::{AnnotateRequest, AnnotateResponse, ErrorResponse, PageQuery, WordQuery};
use crate::{
    gateway::{AnnotationGateway, WordDetail},
    render::{self, DetailOverlay},
};
use axum::{
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{Method, StatusCode, header},
    response::{Html, IntoResponse, Json, Response},
};
use serde_json::{Value, json};
use std::{fmt::Display, sync::Arc};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<AnnotationGateway>,
    /// Base for permalinks; empty renders relative links.
    pub public_url: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn internal_error(e: impl Display) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

/// `POST /api/analyze`: full-text annotation.
pub async fn annotate_text(
    State(state): State<AppState>,
    payload: Result<Json<AnnotateRequest>, JsonRejection>,
) -> Result<Json<AnnotateResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Unreadable annotation request: {}", rejection.body_text());
        internal_error(rejection.body_text())
    })?;

    match state.gateway.analyze_full_text(&request.text).await {
        Ok(analysis) => {
            info!("Annotated {} words", analysis.len());
            Ok(Json(AnnotateResponse { analysis }))
        }
        Err(e) => {
            error!("Failed to annotate text: {}", e);
            Err(internal_error(e))
        }
    }
}

/// `GET /api/analyze?word=`: single-word detail.
pub async fn lookup_word(
    State(state): State<AppState>,
    query: Result<Query<WordQuery>, QueryRejection>,
) -> Result<Json<WordDetail>, ApiError> {
    let Query(query) = query.map_err(|rejection| internal_error(rejection.body_text()))?;

    state
        .gateway
        .analyze_single_word(&query.word)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to look up word '{}': {}", query.word, e);
            internal_error(e)
        })
}

pub async fn method_not_allowed(method: Method) -> Response {
    warn!("Rejected {} request to the analysis endpoint", method);
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET, POST")],
        format!("Method {} Not Allowed", method),
    )
        .into_response()
}

/// `GET /?text=`: reading page. Falls back to plain selectable words when
/// annotation fails.
pub async fn page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let tokens = if query.text.trim().is_empty() {
        Vec::new()
    } else {
        match state.gateway.analyze_full_text(&query.text).await {
            Ok(analysis) => render::annotated_tokens(&analysis),
            Err(e) => {
                warn!("Annotation unavailable, rendering plain text: {}", e);
                render::plain_tokens(&query.text)
            }
        }
    };

    let permalink =
        (!query.text.is_empty()).then(|| render::page_url(&state.public_url, &query.text));

    render::render_tokens(&tokens)
        .and_then(|tokens_html| render::render_page(tokens_html, permalink))
        .map(Html)
        .map_err(|e| {
            error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })
}

/// `GET /panel?word=`: body of the word-detail overlay.
pub async fn word_panel(
    State(state): State<AppState>,
    Query(query): Query<WordQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let mut overlay = DetailOverlay::new();
    let token = overlay.select(query.word.as_str());

    let outcome = state
        .gateway
        .analyze_single_word(&query.word)
        .await
        .map_err(|e| {
            warn!("Word lookup failed for '{}': {}", query.word, e);
            e.to_string()
        });
    overlay.resolve(token, outcome);

    overlay.render_body().map(Html).map_err(|e| {
        error!("Failed to render word panel: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
