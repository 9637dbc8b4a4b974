use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use strum::AsRefStr;
use thiserror::Error;
use utoipa::ToSchema;

use crate::fetcher::FetchError;

/// Machine-readable kind of a request validation failure, serialized as the
/// `type` field of a 422 body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IssueKind {
    Missing,
    UrlType,
    UrlParsing,
    UrlScheme,
    UrlTooLong,
    JsonInvalid,
    ModelAttributesType,
    ContentType,
}

/// One entry of the `detail` list returned with 422 Unprocessable Entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl ValidationIssue {
    pub fn new(kind: IssueKind, loc: &[&str], msg: impl Into<String>) -> Self {
        ValidationIssue {
            kind,
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            input: None,
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.loc.join("."), self.msg)
    }
}

/// Body of a 400/404 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Body of a 422 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub detail: Vec<ValidationIssue>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(ValidationIssue),

    #[error("Falha ao buscar a URL: {0}")]
    Fetch(#[from] FetchError),

    #[error("Not Found")]
    NotFound,
}

/// Map axum's JSON body rejections onto validation issues so malformed
/// bodies get the same 422 shape as an invalid link.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let issue = match rejection {
            JsonRejection::JsonSyntaxError(_) => {
                ValidationIssue::new(IssueKind::JsonInvalid, &["body"], "JSON decode error")
            }
            JsonRejection::MissingJsonContentType(_) => ValidationIssue::new(
                IssueKind::ContentType,
                &["body"],
                "Expected request with `Content-Type: application/json`",
            ),
            other => ValidationIssue::new(IssueKind::JsonInvalid, &["body"], other.body_text()),
        };
        AppError::Validation(issue)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(issue) => {
                tracing::debug!(kind = issue.kind.as_ref(), "Rejected request: {}", issue);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ValidationErrorBody {
                        detail: vec![issue],
                    }),
                )
                    .into_response()
            }
            AppError::Fetch(ref e) => {
                tracing::warn!(kind = e.kind(), error = %e, "Fetch failed");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDetail {
                        detail: self.to_string(),
                    }),
                )
                    .into_response()
            }
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorDetail {
                    detail: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
