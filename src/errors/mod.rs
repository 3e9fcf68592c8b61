//! Centralized error handling module
//!
//! The library reports typed [`BarkError`]s; the `bark` binary wraps them in
//! `anyhow` at the command boundary.

pub mod types;

pub use types::{BarkError, BarkResult};
