// File: error.rs
// This file contains the error type shared by every spectrum operation.

use thiserror::Error;

/// Result type for spectrum operations
pub type SpectrumResult<T> = Result<T, SpectrumError>;

/// Represents all possible errors that could happen in spectrum processing.
///
/// Every variant is a precondition violation: the call is rejected and
/// no partial result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectrumError {
    /// The sample spacing was zero, negative, or not finite
    #[error("sample spacing must be a positive finite number, got {0}")]
    InvalidSpacing(f64),

    /// The transform axis is too short for the requested operation
    #[error("signal too short: need at least {required} samples, got {actual}")]
    SignalTooShort { required: usize, actual: usize },

    /// The frequency axis does not line up with the spectrum
    #[error("frequency axis length {freqs} does not match spectrum length {spectrum}")]
    LengthMismatch { spectrum: usize, freqs: usize },

    /// The frequency axis cannot be broadcast to the spectrum shape
    #[error("frequency axis of shape {freqs:?} cannot be broadcast to spectrum shape {spectrum:?}")]
    ShapeMismatch { spectrum: Vec<usize>, freqs: Vec<usize> },

    /// Unrecognized scaling name
    #[error("unknown scaling '{0}', expected one of amplitude, power, R2")]
    InvalidScaling(String),

    /// Unrecognized exclude name
    #[error("unknown exclude mode '{0}', expected one of positive, negative, none")]
    InvalidExclude(String),

    /// R2 scaling was requested without a variance
    #[error("variance required for R2 scaling")]
    MissingVariance,

    /// The variance was negative or not finite
    #[error("variance must be a positive finite number, got {0}")]
    InvalidVariance(f64),

    /// A band bound was negative or not finite
    #[error("{name} must be a non-negative finite frequency, got {value}")]
    InvalidBand { name: &'static str, value: f64 },
}
