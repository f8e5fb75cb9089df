//! Shared primitives and traits for the detecta signal-detection workspace.
//!
//! `detecta-core` provides the foundation the other detecta crates build on:
//!
//! - **Error types** — [`DetectaError`] and [`Result`] for structured error handling
//! - **Traits** — [`Summarizable`] and [`Annotated`] for display-oriented values

pub mod error;
pub mod traits;

pub use error::{DetectaError, Result};
pub use traits::*;
