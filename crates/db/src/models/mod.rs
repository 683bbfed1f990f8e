//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` structs matching the database rows
//! - `Deserialize` request DTOs as they arrive over HTTP
//! - validated insert/update inputs consumed by the storage layer

pub mod check_in_log;
pub mod user;
