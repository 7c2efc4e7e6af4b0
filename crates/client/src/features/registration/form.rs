use super::WizardStep;
use domain::DomainError;
use domain::dto::{ApplicationPayload, parse_hourly_rate};
use domain::models::ExperienceLevel;
use thiserror::Error;

/// Raw field values collected by the registration wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub sport_category: String,
    pub experience_level: Option<ExperienceLevel>,
    pub hourly_rate: String,
    pub bio: String,
    pub specializations: String,
    pub certifications: String,
    pub achievements: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            city: String::new(),
            sport_category: String::new(),
            experience_level: Some(ExperienceLevel::Intermediate),
            hourly_rate: String::new(),
            bio: String::new(),
            specializations: String::new(),
            certifications: String::new(),
            achievements: String::new(),
        }
    }
}

impl RegistrationForm {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    pub fn to_payload(&self) -> Result<ApplicationPayload, DomainError> {
        Ok(ApplicationPayload {
            full_name: self.full_name(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            sport_category: self.sport_category.trim().to_string(),
            experience_level: self.experience_level.unwrap_or_default(),
            bio: self.bio.trim().to_string(),
            hourly_rate: parse_hourly_rate(&self.hourly_rate)?,
            location: self.city.trim().to_string(),
            specializations: optional(&self.specializations),
            certifications: optional(&self.certifications),
            achievements: optional(&self.achievements),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    FirstName,
    LastName,
    Email,
    Phone,
    City,
    SportCategory,
    ExperienceLevel,
    HourlyRate,
    Bio,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::City => "City",
            Self::SportCategory => "Sport Category",
            Self::ExperienceLevel => "Experience Level",
            Self::HourlyRate => "Hourly Rate",
            Self::Bio => "Bio",
        }
    }

    pub fn is_filled(&self, form: &RegistrationForm) -> bool {
        let text = match self {
            Self::FirstName => &form.first_name,
            Self::LastName => &form.last_name,
            Self::Email => &form.email,
            Self::Phone => &form.phone,
            Self::City => &form.city,
            Self::SportCategory => &form.sport_category,
            Self::ExperienceLevel => return form.experience_level.is_some(),
            Self::HourlyRate => &form.hourly_rate,
            Self::Bio => &form.bio,
        };
        !text.trim().is_empty()
    }
}

const STEP_ONE_FIELDS: &[RequiredField] = &[
    RequiredField::FirstName,
    RequiredField::LastName,
    RequiredField::Email,
    RequiredField::Phone,
];

const STEP_TWO_FIELDS: &[RequiredField] = &[
    RequiredField::City,
    RequiredField::SportCategory,
    RequiredField::ExperienceLevel,
    RequiredField::HourlyRate,
];

const STEP_THREE_FIELDS: &[RequiredField] = &[RequiredField::Bio];

/// Checked again at submit time. Deliberately not the union of the step
/// gates: city and hourly rate are only enforced when leaving step 2.
pub const SUBMISSION_FIELDS: &[RequiredField] = &[
    RequiredField::FirstName,
    RequiredField::LastName,
    RequiredField::Email,
    RequiredField::Phone,
    RequiredField::SportCategory,
    RequiredField::Bio,
];

impl WizardStep {
    pub fn required_fields(&self) -> &'static [RequiredField] {
        match self.number() {
            1 => STEP_ONE_FIELDS,
            2 => STEP_TWO_FIELDS,
            3 => STEP_THREE_FIELDS,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields: {}", join_labels(.0))]
pub struct MissingFields(pub Vec<RequiredField>);

impl MissingFields {
    pub fn labels(&self) -> Vec<&'static str> {
        self.0.iter().map(RequiredField::label).collect()
    }

    pub fn contains(&self, field: RequiredField) -> bool {
        self.0.contains(&field)
    }
}

fn join_labels(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn missing_fields(form: &RegistrationForm, fields: &[RequiredField]) -> Vec<RequiredField> {
    fields
        .iter()
        .copied()
        .filter(|field| !field.is_filled(form))
        .collect()
}

/// Gate for leaving `step`.
pub fn validate_step(form: &RegistrationForm, step: WizardStep) -> Result<(), MissingFields> {
    check(form, step.required_fields())
}

pub fn validate_for_submission(form: &RegistrationForm) -> Result<(), MissingFields> {
    check(form, SUBMISSION_FIELDS)
}

fn check(form: &RegistrationForm, fields: &[RequiredField]) -> Result<(), MissingFields> {
    let missing = missing_fields(form, fields);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "Serena".to_string(),
            last_name: "Cole".to_string(),
            email: "serena@example.com".to_string(),
            phone: "555-0100".to_string(),
            city: "Miami".to_string(),
            sport_category: "Tennis".to_string(),
            experience_level: Some(ExperienceLevel::Advanced),
            hourly_rate: "150".to_string(),
            bio: "Coaching juniors.".to_string(),
            ..RegistrationForm::default()
        }
    }

    #[test]
    fn test_step_one_reports_missing_labels_in_order() {
        let form = RegistrationForm {
            first_name: "Serena".to_string(),
            phone: "   ".to_string(),
            ..RegistrationForm::default()
        };
        let missing = validate_step(&form, WizardStep::FIRST).unwrap_err();
        assert_eq!(missing.labels(), vec!["Last Name", "Email", "Phone"]);
        assert_eq!(
            missing.to_string(),
            "Please fill in all required fields: Last Name, Email, Phone"
        );
    }

    #[test]
    fn test_step_two_requires_rate_and_city() {
        let form = RegistrationForm {
            sport_category: "Tennis".to_string(),
            experience_level: None,
            ..RegistrationForm::default()
        };
        let missing = validate_step(&form, WizardStep::new(2).unwrap()).unwrap_err();
        assert_eq!(
            missing.0,
            vec![
                RequiredField::City,
                RequiredField::ExperienceLevel,
                RequiredField::HourlyRate
            ]
        );
    }

    #[test]
    fn test_review_step_has_no_gate() {
        assert!(validate_step(&RegistrationForm::default(), WizardStep::LAST).is_ok());
    }

    #[test]
    fn test_submission_check_differs_from_step_gates() {
        let mut form = complete_form();
        form.city.clear();
        form.hourly_rate.clear();
        assert!(validate_for_submission(&form).is_ok());
        assert!(validate_step(&form, WizardStep::new(2).unwrap()).is_err());
    }

    #[test]
    fn test_payload_joins_names_and_parses_rate() {
        let payload = complete_form().to_payload().unwrap();
        assert_eq!(payload.full_name, "Serena Cole");
        assert_eq!(payload.hourly_rate, Some(150.0));
        assert_eq!(payload.location, "Miami");
        assert_eq!(payload.specializations, None);
    }

    #[test]
    fn test_payload_trims_names_to_one_space() {
        let mut form = complete_form();
        form.first_name = " Serena ".to_string();
        form.last_name = "Cole  ".to_string();
        assert_eq!(form.to_payload().unwrap().full_name, "Serena Cole");
    }

    #[test]
    fn test_blank_rate_is_omitted() {
        let mut form = complete_form();
        form.hourly_rate = " ".to_string();
        assert_eq!(form.to_payload().unwrap().hourly_rate, None);
    }

    #[test]
    fn test_non_numeric_rate_is_rejected() {
        let mut form = complete_form();
        form.hourly_rate = "a lot".to_string();
        assert!(form.to_payload().is_err());
    }
}
