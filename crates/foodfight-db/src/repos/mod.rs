//! Repository modules
//!
//! Each domain has its own repository with CRUD and domain-specific queries.

mod meal;
mod stats;

pub use meal::MealRepo;
pub use stats::StatsRepo;
