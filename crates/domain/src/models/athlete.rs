use super::RecordId;
use crate::dto::deserialize_null_default;
use crate::{DomainError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shown when an athlete has no profile picture.
pub const PROFILE_PLACEHOLDER: &str = "/placeholder.svg?height=200&width=200";

/// Athlete (trainer) profile as published by the marketplace API.
///
/// Records are created and mutated server-side only; the client reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: RecordId,
    pub full_name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub phone: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub bio: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub sport_category: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub experience_level: ExperienceLevel,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub hourly_rate: Decimal,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub location: String,
    #[serde(default)]
    pub specializations: Option<String>,
    #[serde(default)]
    pub certifications: Option<String>,
    #[serde(default)]
    pub achievements: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub rating: Decimal,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub total_reviews: u32,
    #[serde(default)]
    pub total_bookings: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub status: AthleteStatus,
}

impl Athlete {
    /// Specializations are stored server-side as one comma-separated string.
    pub fn specialization_list(&self) -> Vec<&str> {
        self.specializations
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn profile_picture_url(&self, asset_base_url: &str) -> String {
        resolve_image_url(self.profile_picture.as_deref(), asset_base_url)
    }

    pub fn is_active(&self) -> bool {
        self.status == AthleteStatus::Active
    }
}

/// Turns the profile picture reference returned by the API into a URL the
/// browser (or any other consumer) can load.
pub fn resolve_image_url(profile_picture: Option<&str>, asset_base_url: &str) -> String {
    let path = match profile_picture.map(str::trim) {
        Some(path) if !path.is_empty() => path,
        _ => return PROFILE_PLACEHOLDER.to_string(),
    };

    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let mut clean = String::with_capacity(path.len());
    for c in path.trim_start_matches('/').chars() {
        if c == '/' && clean.ends_with('/') {
            continue;
        }
        clean.push(c);
    }

    format!("{}/{}", asset_base_url.trim_end_matches('/'), clean)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Professional,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
        ExperienceLevel::Professional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Professional => "professional",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| DomainError::InvalidExperienceLevel(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AthleteStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl AthleteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for AthleteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AthleteStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "pending" => Ok(Self::Pending),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://rentapro.emonadi.com";

    fn sample_json() -> &'static str {
        r#"{
            "id": 7,
            "full_name": "Serena Cole",
            "email": "serena@example.com",
            "phone": "555-0100",
            "profile_picture": "uploads/profiles/serena.jpg",
            "bio": "Former pro, now coaching juniors.",
            "sport_category": "Tennis",
            "experience_level": "professional",
            "hourly_rate": "150.00",
            "location": "Miami",
            "specializations": "Serve, Footwork , ,Mental game",
            "rating": "4.8",
            "total_reviews": 31,
            "status": "active"
        }"#
    }

    #[test]
    fn test_deserialize_api_record() {
        let athlete: Athlete = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(athlete.id.as_str(), "7");
        assert_eq!(athlete.experience_level, ExperienceLevel::Professional);
        assert_eq!(athlete.hourly_rate, Decimal::new(15000, 2));
        assert_eq!(athlete.rating, Decimal::new(48, 1));
        assert_eq!(athlete.total_bookings, None);
        assert!(athlete.is_active());
    }

    #[test]
    fn test_null_columns_fall_back_to_defaults() {
        let athlete: Athlete = serde_json::from_str(
            r#"{
                "id": "12",
                "full_name": "Ana Ruiz",
                "email": null,
                "phone": null,
                "bio": null,
                "sport_category": null,
                "experience_level": null,
                "hourly_rate": null,
                "location": null,
                "rating": null,
                "total_reviews": null,
                "status": null
            }"#,
        )
        .unwrap();
        assert_eq!(athlete.bio, "");
        assert_eq!(athlete.email, "");
        assert_eq!(athlete.hourly_rate, Decimal::ZERO);
        assert_eq!(athlete.rating, Decimal::ZERO);
        assert_eq!(athlete.total_reviews, 0);
        assert_eq!(athlete.experience_level, ExperienceLevel::Intermediate);
        assert!(athlete.is_active());
    }

    #[test]
    fn test_specialization_list_skips_blanks() {
        let athlete: Athlete = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(
            athlete.specialization_list(),
            vec!["Serve", "Footwork", "Mental game"]
        );
    }

    #[test]
    fn test_image_url_placeholder_when_absent() {
        assert_eq!(resolve_image_url(None, BASE), PROFILE_PLACEHOLDER);
        assert_eq!(resolve_image_url(Some(""), BASE), PROFILE_PLACEHOLDER);
    }

    #[test]
    fn test_image_url_absolute_passthrough() {
        let url = "https://cdn.example.com/a.png";
        assert_eq!(resolve_image_url(Some(url), BASE), url);
    }

    #[test]
    fn test_image_url_relative_path_cleanup() {
        assert_eq!(
            resolve_image_url(Some("//uploads//profiles///a.png"), BASE),
            "https://rentapro.emonadi.com/uploads/profiles/a.png"
        );
        assert_eq!(
            resolve_image_url(Some("uploads/a.png"), "https://rentapro.emonadi.com/"),
            "https://rentapro.emonadi.com/uploads/a.png"
        );
    }

    #[test]
    fn test_experience_level_parsing() {
        assert_eq!(
            "Advanced".parse::<ExperienceLevel>().unwrap(),
            ExperienceLevel::Advanced
        );
        assert!("expert".parse::<ExperienceLevel>().is_err());
        assert_eq!(ExperienceLevel::default(), ExperienceLevel::Intermediate);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("pending".parse::<AthleteStatus>().unwrap(), AthleteStatus::Pending);
        assert!("deleted".parse::<AthleteStatus>().is_err());
    }
}
