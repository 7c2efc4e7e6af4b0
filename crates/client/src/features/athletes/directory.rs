use super::ATHLETES_PATH;
use super::filters::{DEFAULT_LIMIT, DEFAULT_PAGE, FilterState, ListOptions};
use crate::api::ApiClient;
use crate::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::response::handle_api_error;
use crate::transport::{ReqwestTransport, Transport};
use crate::{ClientError, Result};
use domain::dto::{AthleteList, Pagination};
use domain::models::Athlete;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

/// What to do with a list response when a newer request was issued while it
/// was in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleResponsePolicy {
    /// Only the most recently issued request may write state.
    #[default]
    LatestRequestWins,
    /// Every response writes state; whichever resolves last wins. This is how
    /// the marketplace web client has always behaved.
    LastResolvedWins,
}

#[derive(Debug, Clone, Copy)]
pub struct DirectorySettings {
    pub policy: StaleResponsePolicy,
    pub page_size: u32,
    pub debounce: Duration,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            policy: StaleResponsePolicy::default(),
            page_size: DEFAULT_LIMIT,
            debounce: SEARCH_DEBOUNCE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    pub athletes: Vec<Athlete>,
    pub pagination: Pagination,
    pub filters: FilterState,
    pub loading: bool,
    pub error: Option<String>,
}

struct DirectoryInner<T: Transport> {
    api: Arc<ApiClient<T>>,
    state: RwLock<DirectoryState>,
    issued: AtomicU64,
    in_flight: AtomicUsize,
    policy: StaleResponsePolicy,
    page_size: u32,
}

impl<T: Transport> DirectoryInner<T> {
    async fn fetch(&self, options: ListOptions) -> Result<AthleteList> {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.in_flight.fetch_add(1, Ordering::SeqCst);

        let query = {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
            options.resolve(&state.filters, self.page_size)
        };
        tracing::debug!("Fetching athletes (request #{}): {:?}", generation, query);

        let result = self
            .api
            .get::<AthleteList>(ATHLETES_PATH, &query.to_query_pairs())
            .await
            .and_then(|envelope| {
                envelope
                    .data
                    .ok_or_else(|| ClientError::api("Response did not include athlete data"))
            });

        let still_in_flight = self.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
        let mut state = self.state.write().await;
        state.loading = still_in_flight > 0;

        let superseded = generation != self.issued.load(Ordering::SeqCst);
        if superseded && self.policy == StaleResponsePolicy::LatestRequestWins {
            tracing::warn!(
                "Discarding athlete list response #{}; a newer request was issued",
                generation
            );
            return result;
        }

        match &result {
            Ok(list) => {
                state.athletes = list.athletes.clone();
                state.pagination = list.pagination;
                tracing::info!(
                    "Athletes loaded: {} (page {} of {}, {} total)",
                    list.athletes.len(),
                    list.pagination.current_page,
                    list.pagination.total_pages,
                    list.pagination.total_records
                );
            }
            // Previous results stay on display next to the error.
            Err(error) => state.error = Some(handle_api_error(error)),
        }

        result
    }
}

/// Paginated, filterable athlete listing.
///
/// Text filter changes refetch after a quiet period; page navigation fetches
/// immediately. Debounced fetches run on spawned tasks, so filter setters must
/// be called from within a tokio runtime.
pub struct AthleteDirectory<T: Transport = ReqwestTransport> {
    inner: Arc<DirectoryInner<T>>,
    debouncer: Debouncer,
}

impl<T: Transport> AthleteDirectory<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self::with_settings(api, DirectorySettings::default())
    }

    pub fn with_settings(api: Arc<ApiClient<T>>, settings: DirectorySettings) -> Self {
        let state = DirectoryState {
            pagination: Pagination {
                limit: settings.page_size,
                ..Pagination::default()
            },
            ..DirectoryState::default()
        };

        Self {
            inner: Arc::new(DirectoryInner {
                api,
                state: RwLock::new(state),
                issued: AtomicU64::new(0),
                in_flight: AtomicUsize::new(0),
                policy: settings.policy,
                page_size: settings.page_size,
            }),
            debouncer: Debouncer::new(settings.debounce),
        }
    }

    /// Initial load with the current filters.
    pub async fn load(&self) -> Result<AthleteList> {
        self.fetch(ListOptions::default()).await
    }

    pub async fn fetch(&self, options: ListOptions) -> Result<AthleteList> {
        self.inner.fetch(options).await
    }

    pub async fn refetch(&self) -> Result<AthleteList> {
        self.fetch(ListOptions::default()).await
    }

    pub async fn state(&self) -> DirectoryState {
        self.inner.state.read().await.clone()
    }

    pub async fn athletes(&self) -> Vec<Athlete> {
        self.inner.state.read().await.athletes.clone()
    }

    pub async fn pagination(&self) -> Pagination {
        self.inner.state.read().await.pagination
    }

    pub async fn filters(&self) -> FilterState {
        self.inner.state.read().await.filters.clone()
    }

    pub async fn error(&self) -> Option<String> {
        self.inner.state.read().await.error.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.state.read().await.loading
    }

    pub async fn set_search(&self, search: impl Into<String> + Send) {
        let search = search.into();
        self.update_filters(move |filters| filters.search = search).await;
    }

    pub async fn set_sport(&self, sport: impl Into<String> + Send) {
        let sport = sport.into();
        self.update_filters(move |filters| filters.sport = sport).await;
    }

    pub async fn set_location(&self, location: impl Into<String> + Send) {
        let location = location.into();
        self.update_filters(move |filters| filters.location = location).await;
    }

    /// Stored for display only; does not refetch.
    pub async fn set_price_range(&self, price_range: impl Into<String> + Send) {
        self.inner.state.write().await.filters.price_range = price_range.into();
    }

    pub async fn clear_filters(&self) {
        self.update_filters(|filters| {
            filters.search.clear();
            filters.sport.clear();
            filters.location.clear();
            filters.price_range.clear();
        })
        .await;
    }

    /// Fetches `page` immediately. Pages outside `1..=total_pages` are refused
    /// without sending a request.
    pub async fn go_to_page(&self, page: u32) -> Result<AthleteList> {
        let pagination = self.pagination().await;
        if !pagination.contains_page(page) {
            tracing::warn!(
                "Refusing to navigate to page {} (total pages: {})",
                page,
                pagination.total_pages
            );
            return Err(ClientError::PageOutOfRange {
                requested: page,
                total_pages: pagination.total_pages,
            });
        }

        let list = self.fetch(ListOptions::default().page(page)).await?;
        self.inner.state.write().await.filters.page = page;
        Ok(list)
    }

    pub async fn next_page(&self) -> Result<AthleteList> {
        let current = self.pagination().await.current_page;
        self.go_to_page(current.saturating_add(1)).await
    }

    pub async fn previous_page(&self) -> Result<AthleteList> {
        let current = self.pagination().await.current_page;
        self.go_to_page(current.saturating_sub(1)).await
    }

    pub fn has_pending_fetch(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn cancel_pending(&self) -> bool {
        self.debouncer.cancel()
    }

    async fn update_filters(&self, apply: impl FnOnce(&mut FilterState) + Send) {
        let changed = {
            let mut state = self.inner.state.write().await;
            let before = state.filters.clone();
            apply(&mut state.filters);
            let changed = before.query_differs(&state.filters);
            if changed {
                state.filters.page = DEFAULT_PAGE;
            }
            changed
        };

        if changed {
            self.schedule_refetch();
        }
    }

    fn schedule_refetch(&self) {
        let inner = Arc::clone(&self.inner);
        self.debouncer.schedule(async move {
            if let Err(error) = inner.fetch(ListOptions::default().page(DEFAULT_PAGE)).await {
                tracing::debug!("Debounced athlete fetch failed: {}", error);
            }
        });
    }
}
