mod link;

pub use link::{FetchResult, InvalidLink, Link, LinkRequest};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const HEALTH_MESSAGE: &str = "A API está funcionando.";

/// Payload of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        HealthStatus {
            status: "ok".into(),
            message: HEALTH_MESSAGE.into(),
        }
    }
}
