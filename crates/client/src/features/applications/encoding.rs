use super::ApplicationFiles;
use crate::config::{ApiConfig, CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE};
use crate::transport::{MultipartBody, RequestBody};
use crate::{ClientError, Result};
use domain::dto::ApplicationPayload;
use serde_json::Value;

pub const PROFILE_PICTURE_FIELD: &str = "profile_picture";
pub const ATTACHMENTS_FIELD: &str = "attachments[]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Multipart,
}

/// Any file forces a multipart body; otherwise the payload goes out as JSON.
pub fn choose_encoding(has_profile_picture: bool, has_attachments: bool) -> Encoding {
    if has_profile_picture || has_attachments {
        Encoding::Multipart
    } else {
        Encoding::Json
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EncodedApplication {
    Json(Value),
    Multipart(MultipartBody),
}

impl EncodedApplication {
    pub fn encoding(&self) -> Encoding {
        match self {
            Self::Json(_) => Encoding::Json,
            Self::Multipart(_) => Encoding::Multipart,
        }
    }

    /// The API key is always sent. `Content-Type` is only set for JSON; for
    /// multipart the transport supplies it together with the boundary.
    pub fn headers(&self, config: &ApiConfig) -> Vec<(String, String)> {
        let mut headers = vec![config.api_key_header()];
        if let Self::Json(_) = self {
            headers.push((CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string()));
        }
        headers
    }

    pub fn into_body(self) -> RequestBody {
        match self {
            Self::Json(value) => RequestBody::Json(value),
            Self::Multipart(body) => RequestBody::Multipart(body),
        }
    }
}

pub fn encode_application(
    payload: &ApplicationPayload,
    files: &ApplicationFiles,
) -> Result<EncodedApplication> {
    let value = serde_json::to_value(payload)?;

    match choose_encoding(files.has_profile_picture(), files.has_attachments()) {
        Encoding::Json => Ok(EncodedApplication::Json(value)),
        Encoding::Multipart => {
            let Value::Object(fields) = value else {
                return Err(ClientError::api("Application payload is not an object"));
            };

            let mut body = MultipartBody::new();
            for (name, field) in fields {
                if let Some(text) = form_text(&field) {
                    body.text(name, text);
                }
            }
            if let Some(picture) = &files.profile_picture {
                body.file(PROFILE_PICTURE_FIELD, picture.clone());
            }
            for attachment in &files.attachments {
                body.file(ATTACHMENTS_FIELD, attachment.clone());
            }

            Ok(EncodedApplication::Multipart(body))
        }
    }
}

fn form_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        // 150.0 is sent as "150", matching how the field was typed.
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        }),
        other => Some(other.to_string()),
    }
}
