//! # bd-core
//!
//! Error definitions shared across the bizdays workspace.
//!
//! This crate provides the single error enum, the `Result` alias, and the
//! `ensure!` / `fail!` macros used by the date and holiday crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
