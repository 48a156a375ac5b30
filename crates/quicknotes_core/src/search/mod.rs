//! In-memory search over the cached notes.
//!
//! # Responsibility
//! - Provide the page-level filter used by the topbar search box.
//!
//! # Invariants
//! - Filtering never mutates the underlying collection.

pub mod filter;
