pub(crate) mod clans;
pub(crate) mod wars;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CwlError, Result};

pub const BASE_URL: &str = "https://api.clashofclans.com/v1";

/// Error payload the API sends with non-success responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Fetch a URL and decode the response body as JSON.
///
/// Authentication headers are expected to be set on `client` already.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T> {
    debug!(url, "fetching");

    let response = client.get(url).send().await.map_err(|e| CwlError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| CwlError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    if !status.is_success() {
        return Err(api_error(url, status, &body));
    }

    decode(url, &body)
}

pub(crate) fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| CwlError::Decode {
        url: url.to_owned(),
        source: e,
    })
}

/// Build an [`CwlError::Api`] from a failed response, using the API's
/// `{reason, message}` payload when the body has one.
fn api_error(url: &str, status: reqwest::StatusCode, body: &str) -> CwlError {
    let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();
    let (reason, message) = match parsed {
        Some(ApiErrorBody { reason, message }) => (reason, message),
        None => (None, None),
    };
    CwlError::Api {
        url: url.to_owned(),
        status,
        reason: reason.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown")
                .to_string()
        }),
        message,
    }
}
