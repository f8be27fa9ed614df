//! Domain layer - pure business logic with no infrastructure concerns.

pub mod foundation;
pub mod goal;
pub mod leveling;
pub mod profile;
pub mod scoring;
