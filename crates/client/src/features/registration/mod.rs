mod form;
mod wizard;

pub use form::{
    MissingFields, RegistrationForm, RequiredField, SUBMISSION_FIELDS, missing_fields,
    validate_for_submission, validate_step,
};
pub use wizard::{RegistrationWizard, WizardError, WizardPhase, WizardStep};
