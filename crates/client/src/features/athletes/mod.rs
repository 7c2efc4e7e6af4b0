mod directory;
mod filters;
mod profile;

pub use directory::{AthleteDirectory, DirectorySettings, DirectoryState, StaleResponsePolicy};
pub use filters::{
    DEFAULT_LIMIT, DEFAULT_PAGE, DEFAULT_STATUS, FilterState, ListOptions, PRICE_RANGES,
    ResolvedQuery,
};
pub use profile::{AthleteProfile, ProfileState};

pub const ATHLETES_PATH: &str = "athletes.php";
