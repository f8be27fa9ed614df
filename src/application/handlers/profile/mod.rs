//! Profile query and maintenance handlers.

mod get_profile;
mod repair_profile;

pub use get_profile::{GetProfileHandler, ProfileView};
pub use repair_profile::{RepairProfileHandler, RepairReport};
