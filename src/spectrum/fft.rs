// File: fft.rs
//
// This file contains the forward FFT and the band-filtered inverse FFT
// for a single signal, based on the rustfft crate.
//
// The full complex FFT is used for both directions so that real and complex
// signals go through the same path, and so that a filtered spectrum which is
// no longer Hermitian still inverts cleanly.

use rustfft::{FftPlanner, num_complex::Complex};
use tracing::debug;
use super::error::{SpectrumError, SpectrumResult};
use super::fft_tools::{check_length, check_spacing, fftfreq};
use super::options::BandFilter;

/// Calculates the FFT of a signal sampled every `spacing` units.
///
/// The signal may be real (`f64`) or complex (`Complex<f64>`) and needs at
/// least two samples. No normalization is applied.
/// Returns the complex spectrum and the frequency of each bin (see [`fftfreq`]).
///
/// # Example
///
/// ```
/// use fourier_spectrum::spectrum::fourier_transform;
/// let signal: Vec<f64> = (0..16).map(|i| (i % 4) as f64).collect();
/// let (spectrum, freqs) = fourier_transform(&signal, 0.1).unwrap();
/// assert_eq!(spectrum.len(), 16);
/// assert_eq!(freqs.len(), 16);
/// ```
pub fn fourier_transform<T>(signal: &[T], spacing: f64) -> SpectrumResult<(Vec<Complex<f64>>, Vec<f64>)>
where
    T: Copy + Into<Complex<f64>>,
{
    check_spacing(spacing)?;
    check_length(signal.len(), 2)?;
    let n = signal.len();
    debug!(n, spacing, "forward fft");

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    let mut spectrum: Vec<Complex<f64>> = signal.iter().map(|&sample| sample.into()).collect();
    fft.process(&mut spectrum);

    let freqs = fftfreq(n, spacing)?;
    Ok((spectrum, freqs))
}

/// Calculates the inverse FFT of a spectrum after zeroing every coefficient
/// the band filter rejects.
///
/// `freqs` must hold the frequency of every bin of `spectrum`, as produced by
/// [`fourier_transform`]. The input spectrum is left untouched; filtering
/// happens on a copy. The output is normalized by `1/n` and stays complex,
/// so take the real part with [`complex_to_real`](super::complex_to_real)
/// if you need a real signal.
///
/// # Example
///
/// ```
/// use fourier_spectrum::spectrum::{fourier_transform, inverse_fourier_transform, BandFilter, Exclude};
/// let signal: Vec<f64> = (0..16).map(|i| (i % 4) as f64).collect();
/// let (spectrum, freqs) = fourier_transform(&signal, 0.1).unwrap();
/// let filter = BandFilter::new().exclude(Exclude::None);
/// let restored = inverse_fourier_transform(&spectrum, &freqs, &filter).unwrap();
/// assert!((restored[3].re - 3.0).abs() < 1e-9);
/// ```
pub fn inverse_fourier_transform(spectrum: &[Complex<f64>], freqs: &[f64], filter: &BandFilter) -> SpectrumResult<Vec<Complex<f64>>> {
    filter.validate()?;
    check_length(spectrum.len(), 1)?;
    if freqs.len() != spectrum.len() {
        return Err(SpectrumError::LengthMismatch { spectrum: spectrum.len(), freqs: freqs.len() });
    }
    let n = spectrum.len();
    debug!(n, exclude = %filter.exclude, "inverse fft");

    // Zero the rejected bins in a working copy
    let mut coefficients: Vec<Complex<f64>> = Vec::with_capacity(n);
    for i in 0..n {
        if filter.passes(freqs[i]) {
            coefficients.push(spectrum[i]);
        } else {
            coefficients.push(Complex { re: 0.0, im: 0.0 });
        }
    }

    let mut planner = FftPlanner::new();
    let ifft = planner.plan_fft_inverse(n);
    ifft.process(&mut coefficients);

    let norm = 1.0 / n as f64;
    for coefficient in coefficients.iter_mut() {
        *coefficient *= norm;
    }
    Ok(coefficients)
}
