//! Core domain types and storage contracts for the groups API.
//!
//! Pure data and pure functions only; all I/O lives in the server crate's
//! storage backends.

pub mod group;
pub mod pagination;
pub mod storage;
