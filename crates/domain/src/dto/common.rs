use crate::models::Athlete;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Envelope every marketplace endpoint wraps its payload in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Loose truthiness used for server flags (`success`, `is_active`), which the
/// API sends as booleans, 0/1 or "0"/"1" depending on the endpoint.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0" && !s.eq_ignore_ascii_case("false"),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

/// Treats an explicit `null` like a missing field. Columns the server leaves
/// empty come back as `null` rather than being omitted.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_records: u64,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_records: 0,
            limit: 12,
        }
    }
}

impl Pagination {
    /// Whether `page` is a page the server reported as existing.
    pub fn contains_page(&self, page: u32) -> bool {
        self.total_pages >= 1 && (1..=self.total_pages).contains(&page)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page controls are only rendered for multi-page results.
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }

    pub fn page_numbers(&self) -> Vec<u32> {
        (1..=self.total_pages).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthleteList {
    #[serde(default)]
    pub athletes: Vec<Athlete>,
    #[serde(default)]
    pub pagination: Pagination,
}
