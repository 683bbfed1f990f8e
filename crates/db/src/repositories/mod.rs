//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod check_in_log_repo;
pub mod user_repo;

pub use check_in_log_repo::CheckInLogRepo;
pub use user_repo::UserRepo;
