//! Core domain types

pub mod confirm;
pub mod days;
pub mod exclude;
pub mod outcome;

pub use confirm::confirm;
pub use days::{days_between, reference_date};
pub use exclude::ExcludeList;
pub use outcome::Outcome;
