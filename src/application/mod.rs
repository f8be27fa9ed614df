//! Application layer - command and query handlers.
//!
//! Handlers orchestrate domain operations against the ports. They own
//! no business rules of their own: validation lives in the domain
//! constructors, scoring and leveling in their engines.

pub mod handlers;
