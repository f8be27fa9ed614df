//! Application handlers grouped by aggregate.

pub mod goal;
pub mod profile;
