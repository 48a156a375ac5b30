//! Backend access layer.
//!
//! # Responsibility
//! - Define the use-case oriented backend contract for note CRUD.
//! - Isolate HTTP transport details from store orchestration.
//!
//! # Invariants
//! - The contract returns semantic errors (`Status`) in addition to
//!   transport errors.

pub mod notes_api;
