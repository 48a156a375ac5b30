//! Client-side state layer.
//!
//! # Responsibility
//! - Hold the authoritative note cache, loading flag and selection.
//! - Publish every state transition through watch channels.
//!
//! # Invariants
//! - The cache never holds two notes with the same id.
//! - The cache is in display order after any load, create or update.

pub mod notes_store;
