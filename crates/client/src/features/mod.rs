pub mod applications;
pub mod athletes;
pub mod registration;
pub mod sport_categories;
