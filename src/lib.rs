//! Leveler - Personal Goal Tracking with XP-style Progression
//!
//! Goals carry effort/impact attributes, a pure scoring engine derives
//! priority and value scores, and completing a goal credits the user
//! profile through a leveling engine.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
