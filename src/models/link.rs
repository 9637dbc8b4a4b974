use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use url::Url;
use utoipa::ToSchema;

use crate::error::{IssueKind, ValidationIssue};

const LINK_LOC: &[&str] = &["body", "link"];

/// Why a string was refused as a [`Link`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidLink {
    #[error("Input should be a valid URL, input is empty")]
    Empty,

    #[error("URL should have at most {max} characters")]
    TooLong { max: usize },

    #[error("Input should be a valid URL, {0}")]
    Parse(url::ParseError),

    #[error("URL scheme should be 'http' or 'https'")]
    Scheme,

    #[error("Input should be a valid URL, empty host")]
    MissingHost,
}

impl InvalidLink {
    pub fn kind(&self) -> IssueKind {
        match self {
            InvalidLink::Empty | InvalidLink::Parse(_) | InvalidLink::MissingHost => {
                IssueKind::UrlParsing
            }
            InvalidLink::TooLong { .. } => IssueKind::UrlTooLong,
            InvalidLink::Scheme => IssueKind::UrlScheme,
        }
    }
}

/// An absolute http(s) URL that has passed validation.
///
/// The only way to get one is [`Link::parse`], so holding a `Link` means the
/// value is safe to hand to the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link(Url);

impl Link {
    pub const MAX_LENGTH: usize = 2083;

    pub fn parse(input: &str) -> Result<Self, InvalidLink> {
        let input = input.trim();
        if input.is_empty() {
            return Err(InvalidLink::Empty);
        }
        if input.chars().count() > Self::MAX_LENGTH {
            return Err(InvalidLink::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        let url = Url::parse(input).map_err(InvalidLink::Parse)?;

        match url.scheme() {
            "http" | "https" => {}
            _ => return Err(InvalidLink::Scheme),
        }

        match url.host_str() {
            Some(host) if !host.is_empty() => Ok(Link(url)),
            _ => Err(InvalidLink::MissingHost),
        }
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for Link {
    type Err = InvalidLink;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Link::parse(s)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /buscar-link/`.
#[derive(Debug, Clone, ToSchema)]
pub struct LinkRequest {
    #[schema(value_type = String, example = "https://example.com/")]
    pub link: Link,
}

impl LinkRequest {
    /// Validate a decoded JSON body. Errors point at the offending field the
    /// way a 422 response reports it.
    pub fn from_json(body: &Value) -> Result<Self, ValidationIssue> {
        let fields = body.as_object().ok_or_else(|| {
            ValidationIssue::new(
                IssueKind::ModelAttributesType,
                &["body"],
                "Input should be a valid dictionary or object to extract fields from",
            )
        })?;

        let raw = match fields.get("link") {
            None => {
                return Err(ValidationIssue::new(
                    IssueKind::Missing,
                    LINK_LOC,
                    "Field required",
                ))
            }
            Some(Value::String(raw)) => raw,
            Some(_) => {
                return Err(ValidationIssue::new(
                    IssueKind::UrlType,
                    LINK_LOC,
                    "URL input should be a string or URL",
                ))
            }
        };

        let link = Link::parse(raw).map_err(|e| {
            ValidationIssue::new(e.kind(), LINK_LOC, e.to_string()).with_input(raw.as_str())
        })?;

        Ok(LinkRequest { link })
    }
}

/// Successful response of `POST /buscar-link/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FetchResult {
    #[serde(rename = "link_original")]
    pub original_url: String,
    pub status_code: u16,
    /// Length of the whole decoded body, in characters.
    #[serde(rename = "tamanho_conteudo")]
    pub content_length: usize,
    #[serde(rename = "conteudo_parcial")]
    pub content_preview: String,
}
