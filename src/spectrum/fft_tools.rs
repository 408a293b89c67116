// File: fft_tools.rs
//
// This file contains helpers for FFT bookkeeping: the frequency axis,
// argument checks, and conversions of complex transform output.

use num::Complex;
use super::error::{SpectrumError, SpectrumResult};

/// Gets the cyclic frequency of every bin of an `n`-point FFT with sample
/// spacing `spacing`.
///
/// Bins `0..ceil(n/2)` hold `0, 1/(n*spacing), 2/(n*spacing), ...` and the
/// remaining bins hold the negative frequencies, ascending toward zero.
///
/// # Example
///
/// ```
/// use fourier_spectrum::spectrum::fftfreq;
/// let freqs = fftfreq(8, 0.5).unwrap();
/// assert_eq!(freqs, vec![0.0, 0.25, 0.5, 0.75, -1.0, -0.75, -0.5, -0.25]);
/// ```
pub fn fftfreq(n: usize, spacing: f64) -> SpectrumResult<Vec<f64>> {
    check_spacing(spacing)?;
    if n == 0 {
        return Err(SpectrumError::SignalTooShort { required: 1, actual: 0 });
    }
    let bin_width = 1.0 / (n as f64 * spacing);
    let num_non_negative = (n - 1) / 2 + 1;
    let mut freqs: Vec<f64> = Vec::with_capacity(n);
    for k in 0..num_non_negative {
        freqs.push(k as f64 * bin_width);
    }
    for k in num_non_negative..n {
        freqs.push(-((n - k) as f64) * bin_width);
    }
    Ok(freqs)
}

/// Rejects a sample spacing that is not a positive finite number.
pub(crate) fn check_spacing(spacing: f64) -> SpectrumResult<()> {
    if spacing.is_finite() && spacing > 0.0 {
        Ok(())
    } else {
        Err(SpectrumError::InvalidSpacing(spacing))
    }
}

/// Rejects a transform axis shorter than `required`.
pub(crate) fn check_length(actual: usize, required: usize) -> SpectrumResult<()> {
    if actual < required {
        Err(SpectrumError::SignalTooShort { required, actual })
    } else {
        Ok(())
    }
}

/// Discards the imaginary part of a reconstructed signal.
pub fn complex_to_real(signal: &[Complex<f64>]) -> Vec<f64> {
    signal.iter().map(|sample| sample.re).collect()
}

/// Converts a complex spectrum into magnitude and phase vectors.
pub fn complex_to_polar(spectrum: &[Complex<f64>]) -> (Vec<f64>, Vec<f64>) {
    let mut magnitude_spectrum = vec![0.0; spectrum.len()];
    let mut phase_spectrum = vec![0.0; spectrum.len()];
    for i in 0..spectrum.len() {
        let (magnitude, phase) = spectrum[i].to_polar();
        magnitude_spectrum[i] = magnitude;
        phase_spectrum[i] = phase;
    }
    (magnitude_spectrum, phase_spectrum)
}
