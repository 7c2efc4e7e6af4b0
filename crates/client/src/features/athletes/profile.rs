use super::ATHLETES_PATH;
use crate::api::ApiClient;
use crate::response::handle_api_error;
use crate::transport::{ReqwestTransport, Transport};
use crate::{ClientError, Result};
use domain::models::Athlete;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub athlete: Option<Athlete>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Loads a single athlete record and tracks its loading/error/data state.
pub struct AthleteProfile<T: Transport = ReqwestTransport> {
    api: Arc<ApiClient<T>>,
    athlete_id: Option<String>,
    state: ProfileState,
}

impl<T: Transport> AthleteProfile<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self {
            api,
            athlete_id: None,
            state: ProfileState::default(),
        }
    }

    pub fn athlete_id(&self) -> Option<&str> {
        self.athlete_id.as_deref()
    }

    pub fn athlete(&self) -> Option<&Athlete> {
        self.state.athlete.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    /// Tracks the identifier the profile is showing. A fetch is triggered only
    /// when the identifier changes to a new non-empty value; returns whether
    /// one was issued.
    pub async fn set_athlete_id(&mut self, id: impl Into<String>) -> Result<bool> {
        let id = id.into().trim().to_string();
        if id.is_empty() || self.athlete_id.as_deref() == Some(id.as_str()) {
            return Ok(false);
        }

        self.athlete_id = Some(id.clone());
        self.fetch(&id).await?;
        Ok(true)
    }

    pub async fn refetch(&mut self) -> Result<&Athlete> {
        let id = self.athlete_id.clone().unwrap_or_default();
        self.fetch(&id).await
    }

    /// An empty identifier fails without sending a request or touching state.
    pub async fn fetch(&mut self, id: &str) -> Result<&Athlete> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ClientError::MissingIdentifier);
        }

        self.state.loading = true;
        self.state.error = None;

        let result = self
            .api
            .get::<Athlete>(ATHLETES_PATH, &[("id", id.to_string())])
            .await
            .and_then(|envelope| {
                envelope
                    .data
                    .ok_or_else(|| ClientError::api("Response did not include the athlete"))
            });
        self.state.loading = false;

        match result {
            Ok(athlete) => {
                tracing::info!("Athlete {} loaded: {}", athlete.id, athlete.full_name);
                Ok(self.state.athlete.insert(athlete))
            }
            Err(error) => {
                self.state.error = Some(handle_api_error(&error));
                Err(error)
            }
        }
    }
}
