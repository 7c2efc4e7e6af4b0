use crate::api::ApiClient;
use crate::response::handle_api_error;
use crate::transport::{ReqwestTransport, Transport};
use crate::Result;
use domain::models::SportCategory;
use std::sync::Arc;

pub const SPORT_CATEGORIES_PATH: &str = "sport-categories.php";

pub struct SportCategories<T: Transport = ReqwestTransport> {
    api: Arc<ApiClient<T>>,
    categories: Vec<SportCategory>,
    loading: bool,
    error: Option<String>,
}

impl<T: Transport> SportCategories<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self {
            api,
            categories: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn categories(&self) -> &[SportCategory] {
        &self.categories
    }

    pub fn active(&self) -> impl Iterator<Item = &SportCategory> {
        self.categories.iter().filter(|category| category.is_active)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn fetch(&mut self) -> Result<&[SportCategory]> {
        self.loading = true;
        self.error = None;

        let result = self
            .api
            .get::<Vec<SportCategory>>(SPORT_CATEGORIES_PATH, &[])
            .await;
        self.loading = false;

        match result {
            Ok(envelope) => {
                self.categories = envelope.data.unwrap_or_default();
                tracing::info!("Sport categories loaded: {}", self.categories.len());
                Ok(&self.categories)
            }
            Err(error) => {
                self.error = Some(handle_api_error(&error));
                Err(error)
            }
        }
    }
}
