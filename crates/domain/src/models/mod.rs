mod athlete;
mod record_id;
mod sport_category;

pub use athlete::{
    Athlete, AthleteStatus, ExperienceLevel, PROFILE_PLACEHOLDER, resolve_image_url,
};
pub use record_id::RecordId;
pub use sport_category::SportCategory;
