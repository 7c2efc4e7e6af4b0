use crate::models::{ExperienceLevel, RecordId};
use crate::{DomainError, Result};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Trainer application sent to `applications.php`.
///
/// Files (profile picture, attachments) travel out-of-band from this payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ApplicationPayload {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Full name must be between 1 and 255 characters"
    ))]
    pub full_name: String,

    #[validate(email(message = "Email address is not valid"))]
    pub email: String,

    #[validate(length(min = 1, max = 50, message = "Phone is required"))]
    pub phone: String,

    #[validate(length(min = 1, max = 255, message = "Sport category is required"))]
    pub sport_category: String,

    pub experience_level: ExperienceLevel,

    #[validate(length(min = 1, message = "Bio is required"))]
    pub bio: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "Hourly rate cannot be negative"))]
    pub hourly_rate: Option<f64>,

    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specializations: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<String>,
}

/// `data` of a successful application submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationReceipt {
    #[serde(default)]
    pub application_id: Option<RecordId>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Blank input means "no rate given"; anything else must be a number.
pub fn parse_hourly_rate(raw: &str) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|rate| rate.is_finite())
        .map(Some)
        .ok_or_else(|| DomainError::InvalidHourlyRate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ApplicationPayload {
        ApplicationPayload {
            full_name: "Serena Cole".to_string(),
            email: "serena@example.com".to_string(),
            phone: "555-0100".to_string(),
            sport_category: "Tennis".to_string(),
            experience_level: ExperienceLevel::Advanced,
            bio: "Coaching juniors for ten years.".to_string(),
            hourly_rate: Some(150.0),
            location: "Miami".to_string(),
            specializations: None,
            certifications: None,
            achievements: None,
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut p = payload();
        p.email = "not-an-email".to_string();
        let errors = p.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut p = payload();
        p.hourly_rate = Some(-5.0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_serialization_omits_absent_optionals() {
        let mut p = payload();
        p.hourly_rate = None;
        let value = serde_json::to_value(&p).unwrap();
        assert!(value.get("hourly_rate").is_none());
        assert!(value.get("specializations").is_none());
        assert_eq!(value["experience_level"], "advanced");
    }

    #[test]
    fn test_parse_hourly_rate() {
        assert_eq!(parse_hourly_rate("150").unwrap(), Some(150.0));
        assert_eq!(parse_hourly_rate(" 72.5 ").unwrap(), Some(72.5));
        assert_eq!(parse_hourly_rate("   ").unwrap(), None);
        assert_eq!(
            parse_hourly_rate("lots"),
            Err(DomainError::InvalidHourlyRate("lots".to_string()))
        );
    }
}
