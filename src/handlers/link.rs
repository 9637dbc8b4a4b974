use axum::{
    async_trait,
    extract::{FromRequest, Request, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{FetchResult, LinkRequest},
    state::AppState,
};

// ── Extractor ──────────────────────────────────────────────────────────────

/// Decode the JSON body and validate `link` before the handler runs, so an
/// invalid link never reaches the fetcher.
#[async_trait]
impl<S> FromRequest<S> for LinkRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await?;
        LinkRequest::from_json(&body).map_err(AppError::Validation)
    }
}

// ── Handler ────────────────────────────────────────────────────────────────

/// POST /buscar-link/
///
/// Fetches the submitted link once and returns its status, its length and the
/// first 2000 characters of its content.
#[utoipa::path(
    post,
    path = "/buscar-link/",
    request_body = LinkRequest,
    responses(
        (status = 200, description = "Link fetched", body = FetchResult),
        (status = 400, description = "Target unreachable, timed out or returned a non-2xx status", body = crate::error::ErrorDetail),
        (status = 422, description = "Body is not a valid link request", body = crate::error::ValidationErrorBody),
    )
)]
pub async fn fetch_link(
    State(state): State<AppState>,
    request: LinkRequest,
) -> AppResult<Json<FetchResult>> {
    info!(link = %request.link, "Fetching link");

    let result = state.fetcher.fetch(&request.link).await?;

    Ok(Json(result))
}
