use crate::transport::RawResponse;
use crate::{ClientError, Result};
use domain::dto::{ApiEnvelope, is_truthy};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Normalizes a raw response into an [`ApiEnvelope`].
///
/// The HTTP status is not consulted: the body's `success` flag alone decides
/// the outcome. A falsy or missing flag becomes [`ClientError::RequestFailed`]
/// carrying the server message; a body that is not JSON (or whose `data`
/// does not match `T`) becomes [`ClientError::Api`].
pub fn handle_response<T: DeserializeOwned>(response: &RawResponse) -> Result<ApiEnvelope<T>> {
    let body: Value = serde_json::from_slice(&response.body)?;

    let success = body.get("success").is_some_and(is_truthy);
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_owned);

    if !success {
        return Err(ClientError::request_failed(message));
    }

    let data = match body.get("data") {
        None | Some(Value::Null) => None,
        Some(data) => Some(serde_json::from_value(data.clone())?),
    };

    Ok(ApiEnvelope {
        success: true,
        message,
        data,
    })
}

/// Logs a caught failure and returns the message a component stores as its
/// error state.
pub fn handle_api_error(error: &ClientError) -> String {
    if error.is_validation() {
        tracing::warn!("Request not sent: {}", error);
    } else {
        tracing::error!("API Error: {}", error);
    }
    error.user_message()
}
