//! Persistence Adapters - Port implementations for the roster
//!
//! Both adapters implement every port from `cleanhammer-usecase`.
//! The file-backed one delegates its rules to the in-memory one.

pub mod in_memory;
pub mod json_file;
