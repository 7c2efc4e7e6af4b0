use thiserror::Error;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, ClientError>;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";
pub const REQUEST_FAILED_MESSAGE: &str = "API request failed";

#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure or a body that could not be decoded.
    #[error("{0}")]
    Api(String),

    /// The server answered with a falsy `success` flag.
    #[error("{0}")]
    RequestFailed(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Athlete identifier is required")]
    MissingIdentifier,

    #[error("Page {requested} is outside the available range 1..={total_pages}")]
    PageOutOfRange { requested: u32, total_pages: u32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn api(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Api(GENERIC_ERROR_MESSAGE.to_string())
        } else {
            Self::Api(message)
        }
    }

    pub fn request_failed(message: Option<String>) -> Self {
        Self::RequestFailed(
            message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_string()),
        )
    }

    /// The single string a component stores as its error state.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::MissingIdentifier)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::api(error.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        Self::api(error.to_string())
    }
}

impl From<ValidationErrors> for ClientError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    )
                })
            })
            .collect();
        field_errors.sort();

        Self::Validation(field_errors.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_uses_server_message() {
        let error = ClientError::request_failed(Some("Email already used".to_string()));
        assert_eq!(error.user_message(), "Email already used");
    }

    #[test]
    fn test_request_failed_falls_back() {
        assert_eq!(
            ClientError::request_failed(None).user_message(),
            REQUEST_FAILED_MESSAGE
        );
        assert_eq!(
            ClientError::request_failed(Some("  ".to_string())).user_message(),
            REQUEST_FAILED_MESSAGE
        );
    }

    #[test]
    fn test_api_error_falls_back_to_generic() {
        assert_eq!(ClientError::api("").user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(ClientError::api("connection reset").user_message(), "connection reset");
    }
}
