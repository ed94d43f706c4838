//! # Cleanhammer Adapter Layer
//!
//! Storage-side implementations of the use case ports.
//!
//! ## Structure
//!
//! - `repository/in_memory` - Shared, lock-guarded roster
//! - `repository/json_file` - Single JSON document on disk

pub mod repository;

pub use repository::in_memory::InMemoryRoster;
pub use repository::json_file::JsonFileRoster;
