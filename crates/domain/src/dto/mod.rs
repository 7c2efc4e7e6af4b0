pub mod application;
pub mod common;

pub use application::{ApplicationPayload, ApplicationReceipt, parse_hourly_rate};
pub use common::{
    ApiEnvelope, AthleteList, Pagination, deserialize_flag, deserialize_null_default, is_truthy,
};
