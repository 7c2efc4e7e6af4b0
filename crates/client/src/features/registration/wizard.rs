use super::form::{MissingFields, RegistrationForm, validate_for_submission, validate_step};
use crate::ClientError;
use crate::api::ApiClient;
use crate::features::applications::{ApplicationFiles, ApplicationSubmitter, SubmissionStatus};
use crate::transport::{FileUpload, ReqwestTransport, Transport};
use domain::DomainError;
use domain::dto::{ApiEnvelope, ApplicationReceipt};
use std::sync::Arc;
use thiserror::Error;

/// A wizard step, always within `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WizardStep(u8);

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep(1);
    pub const LAST: WizardStep = WizardStep(4);

    pub fn new(number: u8) -> Option<Self> {
        (Self::FIRST.0..=Self::LAST.0)
            .contains(&number)
            .then_some(Self(number))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::LAST.0))
    }

    pub fn previous(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::FIRST.0))
    }

    pub fn is_review(&self) -> bool {
        *self == Self::LAST
    }

    pub fn title(&self) -> &'static str {
        match self.0 {
            1 => "Personal Information",
            2 => "Location & Services",
            3 => "Profile Details",
            _ => "Review & Submit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardPhase {
    #[default]
    Collecting,
    Submitting,
    Submitted,
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    MissingFields(#[from] MissingFields),

    #[error(transparent)]
    InvalidField(#[from] DomainError),

    #[error("Applications can only be submitted from the review step")]
    NotOnReviewStep,

    #[error("Application already submitted; reset the form to start another")]
    AlreadySubmitted,

    #[error(transparent)]
    Submission(#[from] ClientError),
}

impl WizardError {
    fn user_message(&self) -> String {
        match self {
            Self::Submission(error) => error.user_message(),
            other => other.to_string(),
        }
    }
}

/// Four-step trainer registration flow.
///
/// Moving forward is gated on the current step's required fields; moving
/// back never is. A successful submission is terminal until [`reset`].
///
/// [`reset`]: RegistrationWizard::reset
pub struct RegistrationWizard<T: Transport = ReqwestTransport> {
    step: WizardStep,
    phase: WizardPhase,
    form: RegistrationForm,
    files: ApplicationFiles,
    submitter: ApplicationSubmitter<T>,
    last_error: Option<String>,
}

impl<T: Transport> RegistrationWizard<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self {
            step: WizardStep::FIRST,
            phase: WizardPhase::Collecting,
            form: RegistrationForm::default(),
            files: ApplicationFiles::default(),
            submitter: ApplicationSubmitter::new(api),
            last_error: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == WizardPhase::Submitted
    }

    pub fn progress(&self) -> f32 {
        f32::from(self.step.number()) / f32::from(WizardStep::LAST.number())
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.form
    }

    pub fn files(&self) -> &ApplicationFiles {
        &self.files
    }

    pub fn set_profile_picture(&mut self, file: Option<FileUpload>) {
        self.files.profile_picture = file;
    }

    pub fn set_attachments(&mut self, files: Vec<FileUpload>) {
        self.files.attachments = files;
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn submission_status(&self) -> SubmissionStatus {
        self.submitter.status()
    }

    pub fn next_step(&mut self) -> Result<WizardStep, WizardError> {
        if self.is_submitted() {
            return Err(self.fail(WizardError::AlreadySubmitted));
        }
        if let Err(missing) = validate_step(&self.form, self.step) {
            tracing::debug!("Step {} incomplete: {}", self.step.number(), missing);
            return Err(self.fail(missing.into()));
        }

        self.step = self.step.next();
        self.last_error = None;
        Ok(self.step)
    }

    pub fn prev_step(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }

    pub async fn submit(&mut self) -> Result<ApiEnvelope<ApplicationReceipt>, WizardError> {
        if self.is_submitted() {
            return Err(self.fail(WizardError::AlreadySubmitted));
        }
        if !self.step.is_review() {
            return Err(self.fail(WizardError::NotOnReviewStep));
        }

        self.submitter.reset_state();
        if let Err(missing) = validate_for_submission(&self.form) {
            return Err(self.fail(missing.into()));
        }
        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(error) => return Err(self.fail(error.into())),
        };

        self.phase = WizardPhase::Submitting;
        match self.submitter.submit(&payload, &self.files).await {
            Ok(envelope) => {
                self.phase = WizardPhase::Submitted;
                self.last_error = None;
                Ok(envelope)
            }
            Err(error) => {
                self.phase = WizardPhase::Collecting;
                Err(self.fail(error.into()))
            }
        }
    }

    pub fn reset(&mut self) {
        self.step = WizardStep::FIRST;
        self.phase = WizardPhase::Collecting;
        self.form = RegistrationForm::default();
        self.files = ApplicationFiles::default();
        self.last_error = None;
        self.submitter.reset_state();
    }

    fn fail(&mut self, error: WizardError) -> WizardError {
        self.last_error = Some(error.user_message());
        error
    }
}
