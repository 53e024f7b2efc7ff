//! JSON bodies exchanged with the service.

use serde::{Deserialize, Serialize};

use crate::{ApiError, Endpoint, FailureKind};

#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    generated_text: Option<String>,
    error: Option<String>,
}

/// Failure bodies: `{"error": "..."}` from the handlers, `{"detail": ...}` from
/// the framework's own validation layer.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    detail: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct WelcomeBody {
    message: Option<String>,
}

pub(crate) fn encode_request(endpoint: Endpoint, input: &str) -> Result<Vec<u8>, ApiError> {
    let encoded = match endpoint {
        Endpoint::Summarize => serde_json::to_vec(&SummarizeRequest { text: input }),
        Endpoint::Generate => serde_json::to_vec(&GenerateRequest { prompt: input }),
    };
    encoded.map_err(encoding_failed)
}

/// Parses a 2xx body into the endpoint's result text.
pub(crate) fn decode_success(endpoint: Endpoint, body: &str) -> Result<String, ApiError> {
    let (result, error) = match endpoint {
        Endpoint::Summarize => {
            let parsed: SummarizeResponse = serde_json::from_str(body).map_err(malformed)?;
            (parsed.summary, parsed.error)
        }
        Endpoint::Generate => {
            let parsed: GenerateResponse = serde_json::from_str(body).map_err(malformed)?;
            (parsed.generated_text, parsed.error)
        }
    };

    if let Some(error) = non_blank(error) {
        return Err(ApiError::new(FailureKind::ServiceRejected, error.clone())
            .with_server_message(Some(error)));
    }
    result.ok_or_else(|| {
        ApiError::new(
            FailureKind::MalformedResponse,
            format!("{endpoint} response is missing its result field"),
        )
    })
}

/// Extracts the service's error text from a failure body, if there is one.
pub(crate) fn decode_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    if let Some(error) = non_blank(parsed.error) {
        return Some(error);
    }
    match parsed.detail? {
        serde_json::Value::String(detail) => non_blank(Some(detail)),
        _ => None,
    }
}

pub(crate) fn decode_welcome(body: &str) -> Option<String> {
    serde_json::from_str::<WelcomeBody>(body)
        .ok()
        .and_then(|welcome| non_blank(welcome.message))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn encoding_failed(err: serde_json::Error) -> ApiError {
    ApiError::new(FailureKind::RequestEncoding, err.to_string())
}

fn malformed(err: serde_json::Error) -> ApiError {
    ApiError::new(FailureKind::MalformedResponse, err.to_string())
}
