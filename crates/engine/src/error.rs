//! The module contains the error the engine can throw.
//!
//! Session operations are total: invalid adds are no-ops and an
//! uncomputable bill yields "no summary" rather than an error. The variants
//! here belong to the strict parsing surface ([`MoneyCents`] and [`Rate`]
//! `FromStr` impls) used when a caller wants a diagnostic instead of the
//! lossy zero-coercion of [`input`].
//!
//! [`MoneyCents`]: crate::MoneyCents
//! [`Rate`]: crate::Rate
//! [`input`]: crate::input
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid rate: {0}")]
    InvalidRate(String),
}
