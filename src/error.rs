use std::path::PathBuf;

use crate::tag::TagKind;

/// All errors that can occur while collecting and exporting war league stats.
#[derive(thiserror::Error, Debug)]
pub enum CwlError {
    /// A clan, player or war tag is malformed.
    #[error("invalid {kind} tag {tag:?}")]
    InvalidTag { tag: String, kind: TagKind },

    /// The API token cannot be sent as an `Authorization` header.
    #[error("api token contains characters not allowed in a header")]
    InvalidToken,

    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// The API answered with a non-success status code.
    #[error("api returned {status} for {url}: {reason}{}", detail(.message))]
    Api {
        url: String,
        status: reqwest::StatusCode,
        reason: String,
        message: Option<String>,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not the JSON document we expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// A war record lacks one of its two sides.
    #[error("war #{war} has no `{side}` side")]
    MissingSide { war: String, side: &'static str },

    /// The local configuration could not be loaded.
    #[error("invalid configuration in {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    /// Writing the spreadsheet failed.
    #[error("failed to write spreadsheet: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
}

impl CwlError {
    /// Short label for log fields: `request`, `response` or `other`.
    pub fn class(&self) -> &'static str {
        if self.is_request_error() {
            "request"
        } else if self.is_response_error() {
            "response"
        } else {
            "other"
        }
    }

    /// Whether the error happened before a response was received.
    pub fn is_request_error(&self) -> bool {
        matches!(self, CwlError::Http { .. })
    }

    /// Whether the API answered, but not with a usable payload.
    pub fn is_response_error(&self) -> bool {
        matches!(
            self,
            CwlError::Api { .. } | CwlError::ResponseBody { .. } | CwlError::Decode { .. }
        )
    }
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" ({m})"))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, CwlError>;
