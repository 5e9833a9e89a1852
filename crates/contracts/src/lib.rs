//! Shared contracts between the inventory UI and the REST backend.
//!
//! Everything in here is plain Rust: wire DTOs, form payloads, list filters
//! and the display rules every page agrees on.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
