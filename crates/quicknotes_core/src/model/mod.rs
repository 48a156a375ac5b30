//! Domain model for the notes client.
//!
//! # Responsibility
//! - Define the canonical `Note` record and its wire payloads.
//! - Keep the display ordering rule in one place.
//!
//! # Invariants
//! - `Note::id` is assigned by the backend and never changed locally.
//! - `updated_at` is the sole sort key for display order.

pub mod note;
