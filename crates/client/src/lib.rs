pub mod api;
pub mod config;
pub mod debounce;
pub mod error;
pub mod features;
pub mod response;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::ApiClient;
pub use config::ApiConfig;
pub use error::{ClientError, Result};
pub use transport::{ReqwestTransport, Transport};

pub use features::applications::{ApplicationFiles, ApplicationSubmitter, SubmissionStatus};
pub use features::athletes::{AthleteDirectory, AthleteProfile, FilterState, ListOptions};
pub use features::registration::{RegistrationWizard, WizardError, WizardPhase, WizardStep};
pub use features::sport_categories::SportCategories;
