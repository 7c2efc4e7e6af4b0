use crate::Result;
use reqwest::{Client, Method, Url};
use serde_json::Value;

/// A file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartValue {
    Text(String),
    File(FileUpload),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub value: PartValue,
}

/// Multipart body kept as plain data until the transport sends it, so the
/// boundary is chosen by the HTTP layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartBody {
    parts: Vec<FormPart>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push(FormPart {
            name: name.into(),
            value: PartValue::Text(value.into()),
        });
    }

    pub fn file(&mut self, name: impl Into<String>, file: FileUpload) {
        self.parts.push(FormPart {
            name: name.into(),
            value: PartValue::File(file),
        });
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match &part.value {
            PartValue::Text(text) if part.name == name => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn files_named(&self, name: &str) -> Vec<&FileUpload> {
        self.parts
            .iter()
            .filter_map(|part| match &part.value {
                PartValue::File(file) if part.name == name => Some(file),
                _ => None,
            })
            .collect()
    }

    pub fn text_field_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|part| matches!(part.value, PartValue::Text(_)))
            .count()
    }

    fn into_form(self) -> Result<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for part in self.parts {
            form = match part.value {
                PartValue::Text(text) => form.text(part.name, text),
                PartValue::File(file) => {
                    let file_part = reqwest::multipart::Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.mime_type)?;
                    form.part(part.name, file_part)
                }
            };
        }
        Ok(form)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(MultipartBody),
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        Url::parse(&self.url)
            .map(|url| url.query_pairs().into_owned().collect())
            .unwrap_or_default()
    }

    pub fn query_value(&self, key: &str) -> Option<String> {
        self.query_pairs()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Sends a fully-built request. No retries and no client-side timeout are
/// applied at this layer.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("rentapro-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(serde_json::to_vec(&value)?),
            RequestBody::Multipart(body) => builder.multipart(body.into_form()?),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipart_lookup_helpers() {
        let mut body = MultipartBody::new();
        body.text("email", "a@b.co");
        body.file("attachments[]", FileUpload::new("a.pdf", "application/pdf", b"1".to_vec()));
        body.file("attachments[]", FileUpload::new("b.pdf", "application/pdf", b"2".to_vec()));

        assert_eq!(body.text_value("email"), Some("a@b.co"));
        assert_eq!(body.text_value("phone"), None);
        assert_eq!(body.files_named("attachments[]").len(), 2);
        assert_eq!(body.text_field_count(), 1);
    }

    #[test]
    fn test_request_query_and_header_lookup() {
        let request = ApiRequest {
            method: Method::GET,
            url: "https://api.example.com/athletes.php?page=2&search=tennis+pro".to_string(),
            headers: vec![("X-API-Key".to_string(), "k".to_string())],
            body: RequestBody::Empty,
        };
        assert_eq!(request.header("x-api-key"), Some("k"));
        assert_eq!(request.query_value("page").as_deref(), Some("2"));
        assert_eq!(request.query_value("search").as_deref(), Some("tennis pro"));
    }
}
