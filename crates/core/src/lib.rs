//! Domain types and pure validation logic shared by the storage and HTTP
//! layers. Nothing in this crate performs I/O.

pub mod descriptor;
pub mod error;
pub mod types;
