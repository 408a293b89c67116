// File: summary.rs
//
// This file contains the one-sided spectrum summary: folding a full complex
// FFT into positive-frequency amplitudes, powers, or variance explained.

use num::Complex;
use super::error::{SpectrumError, SpectrumResult};
use super::fft_tools::check_length;
use super::options::Scaling;

/// Scales one-sided amplitudes for a transform of length `n`.
///
/// Construction checks the variance rule for R2 scaling, so a `Scaler`
/// always holds a usable variance when it needs one.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Scaler {
    scaling: Scaling,
    n: f64,
    variance: f64,
}

impl Scaler {
    pub(crate) fn new(scaling: Scaling, n: usize, variance: Option<f64>) -> SpectrumResult<Self> {
        let variance = match (scaling, variance) {
            (Scaling::R2, None) => return Err(SpectrumError::MissingVariance),
            (Scaling::R2, Some(v)) if v == 0.0 => return Err(SpectrumError::MissingVariance),
            (Scaling::R2, Some(v)) if !v.is_finite() || v < 0.0 => return Err(SpectrumError::InvalidVariance(v)),
            (_, v) => v.unwrap_or(0.0),
        };
        Ok(Self { scaling, n: n as f64, variance })
    }

    /// The amplitude of bin `coefficient`, folded onto the positive side
    #[inline(always)]
    pub(crate) fn fold(&self, coefficient: Complex<f64>) -> f64 {
        2.0 * coefficient.norm() / self.n
    }

    #[inline(always)]
    pub(crate) fn scale(&self, pos_amp: f64) -> f64 {
        match self.scaling {
            Scaling::Amplitude => pos_amp,
            Scaling::Power => pos_amp * pos_amp,
            Scaling::R2 => (self.n / 2.0) * (pos_amp * pos_amp) / ((self.n - 1.0) * self.variance),
        }
    }
}

/// The bins kept by a one-sided summary of an `n`-point transform: `1..floor(n/2)`.
/// The range is empty for `n < 4`.
#[inline(always)]
pub(crate) fn positive_bins(n: usize) -> std::ops::Range<usize> {
    1..usize::max(n / 2, 1)
}

/// Computes the one-sided spectrum of a complex FFT.
///
/// The DC bin and everything from bin `floor(n/2)` upward are dropped, and the
/// remaining magnitudes are normalized by `n` and doubled to account for the
/// discarded negative half. The result is then scaled:
/// - `Scaling::Amplitude`: the doubled magnitude
/// - `Scaling::Power`: its square
/// - `Scaling::R2`: `(n/2) * power / ((n-1) * variance)`, the fraction of the
///   signal variance explained by the component. `variance` is required.
///
/// Returns the scaled values and their frequencies, both of length
/// `floor(n/2) - 1`. Spectra shorter than four bins produce empty vectors.
///
/// # Example
///
/// ```
/// use fourier_spectrum::spectrum::{fourier_transform, one_sided_spectrum, Scaling};
/// let signal: Vec<f64> = (0..32).map(|i| f64::cos(std::f64::consts::PI * i as f64 / 4.0)).collect();
/// let (spectrum, freqs) = fourier_transform(&signal, 1.0).unwrap();
/// let (amplitudes, positive_freqs) = one_sided_spectrum(&spectrum, &freqs, Scaling::Amplitude, None).unwrap();
/// assert_eq!(amplitudes.len(), 15);
/// assert!((amplitudes[3] - 1.0).abs() < 1e-9);
/// assert_eq!(positive_freqs[3], 0.125);
/// ```
pub fn one_sided_spectrum(spectrum: &[Complex<f64>], freqs: &[f64], scaling: Scaling, variance: Option<f64>) -> SpectrumResult<(Vec<f64>, Vec<f64>)> {
    let n = spectrum.len();
    check_length(n, 1)?;
    if freqs.len() != n {
        return Err(SpectrumError::LengthMismatch { spectrum: n, freqs: freqs.len() });
    }
    let scaler = Scaler::new(scaling, n, variance)?;

    let bins = positive_bins(n);
    let mut values: Vec<f64> = Vec::with_capacity(bins.len());
    let mut pos_freqs: Vec<f64> = Vec::with_capacity(bins.len());
    for i in bins {
        values.push(scaler.scale(scaler.fold(spectrum[i])));
        pos_freqs.push(freqs[i]);
    }
    Ok((values, pos_freqs))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::analysis::variance;
    use crate::spectrum::fourier_transform;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn cosine(bin: usize, n: usize, amplitude: f64) -> Vec<f64> {
        (0..n).map(|i| amplitude * f64::cos(2.0 * PI * bin as f64 * i as f64 / n as f64)).collect()
    }

    #[test]
    fn test_lengths() {
        for (n, expected) in [(1usize, 0usize), (2, 0), (3, 0), (4, 1), (5, 1), (8, 3), (9, 3), (64, 31)] {
            let spectrum = vec![Complex::new(1.0, 0.0); n];
            let freqs = vec![0.0; n];
            let (values, pos_freqs) = one_sided_spectrum(&spectrum, &freqs, Scaling::Amplitude, None).unwrap();
            assert_eq!(values.len(), expected, "n = {}", n);
            assert_eq!(pos_freqs.len(), expected);
        }
    }

    #[test]
    fn test_amplitude_of_cosine() {
        let n = 64;
        let signal = cosine(6, n, 3.0);
        let (spectrum, freqs) = fourier_transform(&signal, 0.5).unwrap();
        let (amplitudes, pos_freqs) = one_sided_spectrum(&spectrum, &freqs, Scaling::Amplitude, None).unwrap();
        assert_abs_diff_eq!(amplitudes[5], 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pos_freqs[5], 6.0 / (64.0 * 0.5), epsilon = 1e-12);
        for (i, amplitude) in amplitudes.iter().enumerate() {
            if i != 5 {
                assert_abs_diff_eq!(*amplitude, 0.0, epsilon = 1e-9);
            }
        }
        assert_eq!(&pos_freqs[..], &freqs[1..32]);
    }

    #[test]
    fn test_power_is_amplitude_squared() {
        let signal: Vec<f64> = (0..50).map(|i| f64::sin(i as f64 * 0.7) + 0.1 * (i % 7) as f64).collect();
        let (spectrum, freqs) = fourier_transform(&signal, 0.2).unwrap();
        let (amplitudes, _) = one_sided_spectrum(&spectrum, &freqs, Scaling::Amplitude, None).unwrap();
        let (powers, _) = one_sided_spectrum(&spectrum, &freqs, Scaling::Power, None).unwrap();
        assert_eq!(amplitudes.len(), powers.len());
        for (a, p) in amplitudes.iter().zip(powers.iter()) {
            assert_abs_diff_eq!(a * a, *p, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_r2_of_pure_tone_is_one() {
        let n = 40;
        let signal = cosine(3, n, 2.5);
        let var = variance(&signal).unwrap();
        let (spectrum, freqs) = fourier_transform(&signal, 1.0).unwrap();
        let (r2, _) = one_sided_spectrum(&spectrum, &freqs, Scaling::R2, Some(var)).unwrap();
        assert_abs_diff_eq!(r2[2], 1.0, epsilon = 1e-9);
        assert!(r2.iter().all(|value| value.is_finite()));
    }

    #[test]
    fn test_r2_needs_variance() {
        let (spectrum, freqs) = fourier_transform(&cosine(2, 16, 1.0), 1.0).unwrap();
        assert_eq!(
            one_sided_spectrum(&spectrum, &freqs, Scaling::R2, None),
            Err(SpectrumError::MissingVariance)
        );
        assert_eq!(
            one_sided_spectrum(&spectrum, &freqs, Scaling::R2, Some(0.0)),
            Err(SpectrumError::MissingVariance)
        );
        assert_eq!(
            one_sided_spectrum(&spectrum, &freqs, Scaling::R2, Some(-1.0)),
            Err(SpectrumError::InvalidVariance(-1.0))
        );
        assert!(one_sided_spectrum(&spectrum, &freqs, Scaling::R2, Some(0.5)).is_ok());
    }

    #[test]
    fn test_variance_ignored_without_r2() {
        let (spectrum, freqs) = fourier_transform(&cosine(2, 16, 1.0), 1.0).unwrap();
        let with = one_sided_spectrum(&spectrum, &freqs, Scaling::Power, Some(4.0)).unwrap();
        let without = one_sided_spectrum(&spectrum, &freqs, Scaling::Power, None).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_preconditions() {
        let spectrum = vec![Complex::new(1.0, 0.0); 8];
        assert_eq!(
            one_sided_spectrum(&spectrum, &[0.0; 7], Scaling::Amplitude, None),
            Err(SpectrumError::LengthMismatch { spectrum: 8, freqs: 7 })
        );
        assert!(one_sided_spectrum(&[], &[], Scaling::Amplitude, None).is_err());
    }
}
