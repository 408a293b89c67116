// File: signal_tools.rs
//
// This file contains time-domain statistics of a sampled signal.

use crate::spectrum::{SpectrumError, SpectrumResult};

/// Calculates the DC bias (mean) of the signal. An empty signal has no bias.
#[inline(always)]
pub fn dc_bias(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..signal.len() {
        sum += signal[i];
    }
    sum / signal.len() as f64
}

/// Calculates the unbiased sample variance of the signal (denominator `n - 1`).
///
/// This is the variance that `Scaling::R2` divides by, so with it the R2
/// values of a signal's one-sided spectrum add up to roughly one.
///
/// # Example
///
/// ```
/// use fourier_spectrum::analysis::variance;
/// let var = variance(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert!((var - 5.0 / 3.0).abs() < 1e-12);
/// ```
pub fn variance(signal: &[f64]) -> SpectrumResult<f64> {
    if signal.len() < 2 {
        return Err(SpectrumError::SignalTooShort { required: 2, actual: signal.len() });
    }
    let mean = dc_bias(signal);
    let mut sumsquare: f64 = 0.0;
    for i in 0..signal.len() {
        sumsquare += (signal[i] - mean).powf(2.0);
    }
    Ok(sumsquare / (signal.len() - 1) as f64)
}
