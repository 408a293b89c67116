// File: nd.rs
//
// This file contains the N-dimensional versions of the transform functions.
// The last axis is always the transform axis; every lane along it is treated
// as an independent signal. Leading axes are batch dimensions.

use ndarray::{Array, ArrayBase, ArrayView, Axis, Data, Dimension, Slice};
use rustfft::{FftPlanner, num_complex::Complex};
use tracing::{debug, warn};
use super::error::{SpectrumError, SpectrumResult};
use super::fft_tools::{check_length, check_spacing, fftfreq};
use super::options::{BandFilter, Scaling};
use super::summary::{positive_bins, Scaler};

/// Length of the last axis, or zero for a scalar array.
#[inline(always)]
fn transform_len(shape: &[usize]) -> usize {
    shape.last().copied().unwrap_or(0)
}

/// Broadcasts a frequency axis (1-D, or already full-shape) to the spectrum shape.
fn broadcast_freqs<'a, S, D, E>(freqs: &'a ArrayBase<S, E>, shape: D) -> SpectrumResult<ArrayView<'a, f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
    E: Dimension,
{
    let target = shape.slice().to_vec();
    freqs.broadcast(shape).ok_or_else(|| SpectrumError::ShapeMismatch {
        spectrum: target,
        freqs: freqs.shape().to_vec(),
    })
}

/// Calculates the FFT of every lane along the last axis of `signal`.
///
/// Returns the complex spectrum (same shape as `signal`) and the frequency
/// axis broadcast to that shape, so `freqs[[.., k]]` is the frequency of bin `k`
/// in every batch.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use fourier_spectrum::spectrum::fourier_transform_nd;
/// let signals = array![[0.0, 1.0, 0.0, -1.0], [1.0, 1.0, 1.0, 1.0]];
/// let (spectrum, freqs) = fourier_transform_nd(&signals, 0.25).unwrap();
/// assert_eq!(spectrum.shape(), &[2, 4]);
/// assert_eq!(freqs.row(1).to_vec(), vec![0.0, 1.0, -2.0, -1.0]);
/// ```
pub fn fourier_transform_nd<S, D, T>(signal: &ArrayBase<S, D>, spacing: f64) -> SpectrumResult<(Array<Complex<f64>, D>, Array<f64, D>)>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Copy + Into<Complex<f64>>,
{
    check_spacing(spacing)?;
    let n = transform_len(signal.shape());
    check_length(n, 2)?;
    let axis = Axis(signal.ndim() - 1);
    debug!(n, batches = signal.len() / n, spacing, "forward fft");

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    let mut spectrum: Array<Complex<f64>, D> = signal.mapv(|sample| sample.into());
    let mut buffer: Vec<Complex<f64>> = Vec::with_capacity(n);
    for mut lane in spectrum.lanes_mut(axis) {
        buffer.clear();
        buffer.extend(lane.iter().copied());
        fft.process(&mut buffer);
        for (dst, src) in lane.iter_mut().zip(buffer.iter()) {
            *dst = *src;
        }
    }

    let axis_freqs = Array::from(fftfreq(n, spacing)?);
    let freqs = broadcast_freqs(&axis_freqs, spectrum.raw_dim())?.to_owned();
    Ok((spectrum, freqs))
}

/// Computes the one-sided spectrum of every lane along the last axis.
///
/// `freqs` may be the 1-D frequency axis or an array of the spectrum's shape.
/// The returned values and frequencies keep the leading axes and have
/// `floor(n/2) - 1` entries along the last axis. See
/// [`one_sided_spectrum`](super::one_sided_spectrum) for the scaling rules.
///
/// Multi-dimensional input is accepted, but a warning is logged since the
/// frequency axis is assumed to be the last one.
pub fn one_sided_spectrum_nd<S, D, F, E>(spectrum: &ArrayBase<S, D>, freqs: &ArrayBase<F, E>, scaling: Scaling, variance: Option<f64>) -> SpectrumResult<(Array<f64, D>, Array<f64, D>)>
where
    S: Data<Elem = Complex<f64>>,
    D: Dimension,
    F: Data<Elem = f64>,
    E: Dimension,
{
    if spectrum.ndim() > 1 {
        warn!(shape = ?spectrum.shape(), "ensure that frequency is the final axis");
    }
    let n = transform_len(spectrum.shape());
    check_length(n, 1)?;
    let scaler = Scaler::new(scaling, n, variance)?;
    let freqs = broadcast_freqs(freqs, spectrum.raw_dim())?;
    debug!(n, batches = spectrum.len() / n, %scaling, "one-sided spectrum");

    let axis = Axis(spectrum.ndim() - 1);
    let bins = positive_bins(n);
    let slice = Slice::from(bins.start..bins.end);
    let values = spectrum
        .slice_axis(axis, slice)
        .mapv(|coefficient| scaler.scale(scaler.fold(coefficient)));
    let pos_freqs = freqs.slice_axis(axis, slice).to_owned();
    Ok((values, pos_freqs))
}

/// Calculates the inverse FFT of every lane along the last axis after
/// applying the band filter.
///
/// `freqs` may be the 1-D frequency axis or an array of the spectrum's shape.
/// The input spectrum is not modified. See
/// [`inverse_fourier_transform`](super::inverse_fourier_transform) for the
/// filter semantics.
pub fn inverse_fourier_transform_nd<S, D, F, E>(spectrum: &ArrayBase<S, D>, freqs: &ArrayBase<F, E>, filter: &BandFilter) -> SpectrumResult<Array<Complex<f64>, D>>
where
    S: Data<Elem = Complex<f64>>,
    D: Dimension,
    F: Data<Elem = f64>,
    E: Dimension,
{
    filter.validate()?;
    let n = transform_len(spectrum.shape());
    check_length(n, 1)?;
    let freqs = broadcast_freqs(freqs, spectrum.raw_dim())?;
    debug!(n, batches = spectrum.len() / n, exclude = %filter.exclude, "inverse fft");

    // Zero the rejected bins in a working copy
    let mut coefficients = spectrum.to_owned();
    coefficients.zip_mut_with(&freqs, |coefficient, &freq| {
        if !filter.passes(freq) {
            *coefficient = Complex { re: 0.0, im: 0.0 };
        }
    });

    let mut planner = FftPlanner::new();
    let ifft = planner.plan_fft_inverse(n);
    let norm = 1.0 / n as f64;
    let mut buffer: Vec<Complex<f64>> = Vec::with_capacity(n);
    for mut lane in coefficients.lanes_mut(Axis(spectrum.ndim() - 1)) {
        buffer.clear();
        buffer.extend(lane.iter().copied());
        ifft.process(&mut buffer);
        for (dst, src) in lane.iter_mut().zip(buffer.iter()) {
            *dst = *src * norm;
        }
    }
    Ok(coefficients)
}
