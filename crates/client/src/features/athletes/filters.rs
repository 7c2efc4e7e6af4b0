pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 12;
pub const DEFAULT_STATUS: &str = "active";

/// Price buckets offered by the directory. The bucket is kept in the filter
/// state for display but is never sent to the API.
pub const PRICE_RANGES: [&str; 4] = ["", "$50 - $100", "$100 - $200", "$200+"];

/// Client-held criteria driving the athlete list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub sport: String,
    pub location: String,
    pub price_range: String,
    pub page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sport: String::new(),
            location: String::new(),
            price_range: String::new(),
            page: DEFAULT_PAGE,
        }
    }
}

impl FilterState {
    /// Whether the fields that drive a refetch differ between two states.
    pub fn query_differs(&self, other: &FilterState) -> bool {
        self.search != other.search || self.sport != other.sport || self.location != other.location
    }
}

/// Per-call overrides for a list fetch.
///
/// Precedence: a value set here beats the stored [`FilterState`], which beats
/// the built-in default. Zero pages/limits and blank strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub sport_category: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
}

impl ListOptions {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sport_category(mut self, sport_category: impl Into<String>) -> Self {
        self.sport_category = Some(sport_category.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn resolve(&self, filters: &FilterState, default_limit: u32) -> ResolvedQuery {
        ResolvedQuery {
            page: positive(self.page)
                .or(positive(Some(filters.page)))
                .unwrap_or(DEFAULT_PAGE),
            limit: positive(self.limit)
                .or(positive(Some(default_limit)))
                .unwrap_or(DEFAULT_LIMIT),
            status: non_blank(self.status.as_deref())
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            search: non_blank(self.search.as_deref())
                .or_else(|| non_blank(Some(filters.search.as_str()))),
            sport_category: non_blank(self.sport_category.as_deref())
                .or_else(|| non_blank(Some(filters.sport.as_str()))),
            location: non_blank(self.location.as_deref())
                .or_else(|| non_blank(Some(filters.location.as_str()))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    pub page: u32,
    pub limit: u32,
    pub status: String,
    pub search: Option<String>,
    pub sport_category: Option<String>,
    pub location: Option<String>,
}

impl ResolvedQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("status", self.status.clone()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(sport_category) = &self.sport_category {
            pairs.push(("sport_category", sport_category.clone()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        pairs
    }
}

fn positive(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v > 0)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let query = ListOptions::default().resolve(&FilterState::default(), DEFAULT_LIMIT);
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("page", "1".to_string()),
                ("limit", "12".to_string()),
                ("status", "active".to_string()),
            ]
        );
    }

    #[test]
    fn test_overrides_beat_filter_state() {
        let filters = FilterState {
            search: "tennis".to_string(),
            sport: "Tennis".to_string(),
            location: "Austin".to_string(),
            page: 3,
            ..FilterState::default()
        };
        let query = ListOptions::default()
            .page(5)
            .search("golf")
            .status("pending")
            .resolve(&filters, DEFAULT_LIMIT);

        assert_eq!(query.page, 5);
        assert_eq!(query.status, "pending");
        assert_eq!(query.search.as_deref(), Some("golf"));
        assert_eq!(query.sport_category.as_deref(), Some("Tennis"));
        assert_eq!(query.location.as_deref(), Some("Austin"));
    }

    #[test]
    fn test_filter_state_beats_defaults() {
        let filters = FilterState {
            page: 2,
            search: "yoga".to_string(),
            ..FilterState::default()
        };
        let query = ListOptions::default().resolve(&filters, 20);
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 20);
        assert_eq!(query.search.as_deref(), Some("yoga"));
        assert_eq!(query.sport_category, None);
    }

    #[test]
    fn test_blank_and_zero_overrides_fall_through() {
        let filters = FilterState {
            search: "boxing".to_string(),
            ..FilterState::default()
        };
        let query = ListOptions::default()
            .page(0)
            .limit(0)
            .search("   ")
            .status("")
            .resolve(&filters, DEFAULT_LIMIT);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 12);
        assert_eq!(query.status, "active");
        assert_eq!(query.search.as_deref(), Some("boxing"));
    }

    #[test]
    fn test_price_range_not_part_of_query() {
        let filters = FilterState {
            price_range: "$200+".to_string(),
            ..FilterState::default()
        };
        let pairs = ListOptions::default()
            .resolve(&filters, DEFAULT_LIMIT)
            .to_query_pairs();
        assert!(pairs.iter().all(|(_, v)| v != "$200+"));
    }

    #[test]
    fn test_query_differs_ignores_page_and_price() {
        let a = FilterState::default();
        let b = FilterState {
            page: 4,
            price_range: "$200+".to_string(),
            ..FilterState::default()
        };
        assert!(!a.query_differs(&b));

        let c = FilterState {
            location: "Paris".to_string(),
            ..FilterState::default()
        };
        assert!(a.query_differs(&c));
    }
}
