use utoipa::OpenApi;

use crate::error::{ErrorDetail, IssueKind, ValidationErrorBody, ValidationIssue};
use crate::handlers;
use crate::models::{FetchResult, HealthStatus, LinkRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Busca de URL",
        description = "Uma API que recebe um link via POST e retorna o conteúdo do link."
    ),
    paths(handlers::health_check, handlers::link::fetch_link),
    components(schemas(
        LinkRequest,
        FetchResult,
        HealthStatus,
        ErrorDetail,
        ValidationErrorBody,
        ValidationIssue,
        IssueKind
    ))
)]
pub struct ApiDoc;
