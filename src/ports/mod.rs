//! Ports - trait contracts between the domain and the outside world.

mod goal_repository;
mod profile_store;

pub use goal_repository::GoalRepository;
pub use profile_store::ProfileStore;
