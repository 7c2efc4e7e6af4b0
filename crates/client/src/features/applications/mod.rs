mod encoding;
mod files;
mod submission;

pub use encoding::{
    ATTACHMENTS_FIELD, EncodedApplication, Encoding, PROFILE_PICTURE_FIELD, choose_encoding,
    encode_application,
};
pub use files::ApplicationFiles;
pub use submission::{APPLICATIONS_PATH, ApplicationSubmitter, SubmissionStatus};
