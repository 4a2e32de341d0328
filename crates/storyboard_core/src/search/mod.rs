//! Client-side story search.
//!
//! # Responsibility
//! - Narrow the in-memory story list for display without mutating it.

pub mod filter;
