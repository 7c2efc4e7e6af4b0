use super::{ApplicationFiles, encode_application};
use crate::Result;
use crate::api::ApiClient;
use crate::response::handle_api_error;
use crate::transport::{ReqwestTransport, Transport};
use domain::dto::{ApiEnvelope, ApplicationPayload, ApplicationReceipt};
use std::sync::Arc;
use validator::Validate;

pub const APPLICATIONS_PATH: &str = "applications.php";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Posts trainer applications. One network call per `submit`, no retries and
/// no draft persistence.
pub struct ApplicationSubmitter<T: Transport = ReqwestTransport> {
    api: Arc<ApiClient<T>>,
    loading: bool,
    error: Option<String>,
    success: bool,
}

impl<T: Transport> ApplicationSubmitter<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self {
            api,
            loading: false,
            error: None,
            success: false,
        }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn status(&self) -> SubmissionStatus {
        if self.loading {
            SubmissionStatus::Loading
        } else if self.success {
            SubmissionStatus::Success
        } else if self.error.is_some() {
            SubmissionStatus::Error
        } else {
            SubmissionStatus::Idle
        }
    }

    pub fn reset_state(&mut self) {
        self.loading = false;
        self.error = None;
        self.success = false;
    }

    pub async fn submit(
        &mut self,
        payload: &ApplicationPayload,
        files: &ApplicationFiles,
    ) -> Result<ApiEnvelope<ApplicationReceipt>> {
        self.reset_state();
        self.loading = true;

        let result = self.send(payload, files).await;
        self.loading = false;

        match &result {
            Ok(envelope) => {
                self.success = true;
                tracing::info!(
                    "Application submitted for {}: {}",
                    payload.email,
                    envelope.message.as_deref().unwrap_or("accepted")
                );
            }
            Err(error) => self.error = Some(handle_api_error(error)),
        }

        result
    }

    async fn send(
        &self,
        payload: &ApplicationPayload,
        files: &ApplicationFiles,
    ) -> Result<ApiEnvelope<ApplicationReceipt>> {
        payload.validate()?;

        let encoded = encode_application(payload, files)?;
        tracing::debug!(
            "Submitting application as {:?} ({} attachment(s), profile picture: {})",
            encoded.encoding(),
            files.attachments.len(),
            files.has_profile_picture()
        );

        let headers = encoded.headers(self.api.config());
        self.api
            .post(APPLICATIONS_PATH, encoded.into_body(), headers)
            .await
    }
}
