//! # fourier-spectrum
//! Spectral analysis of uniformly sampled signals, built on rustfft.
//!
//! The crate has three independent steps:
//! - [`spectrum::fourier_transform`]: signal to complex spectrum plus frequency axis
//! - [`spectrum::one_sided_spectrum`]: amplitude, power, or variance explained per
//!   positive frequency
//! - [`spectrum::inverse_fourier_transform`]: reconstruction after band filtering
//!
//! Each has an `_nd` counterpart that works along the last axis of an
//! `ndarray` array.
//!
//! # Example
//!
//! ```
//! use fourier_spectrum::{analysis, spectrum};
//! use fourier_spectrum::spectrum::{BandFilter, Exclude, Scaling};
//! let n = 128;
//! let signal: Vec<f64> = (0..n)
//!     .map(|i| f64::sin(2.0 * std::f64::consts::PI * 10.0 * i as f64 / n as f64))
//!     .collect();
//! let (coefficients, freqs) = spectrum::fourier_transform(&signal, 0.01).unwrap();
//!
//! let var = analysis::variance(&signal).unwrap();
//! let (r2, positive_freqs) = spectrum::one_sided_spectrum(&coefficients, &freqs, Scaling::R2, Some(var)).unwrap();
//! assert!((r2[9] - 1.0).abs() < 1e-9);
//! assert!((positive_freqs[9] - 10.0 / 1.28).abs() < 1e-9);
//!
//! let filter = BandFilter::exact(freqs[10]).exclude(Exclude::None);
//! let tone = spectrum::inverse_fourier_transform(&coefficients, &freqs, &filter).unwrap();
//! let tone = spectrum::complex_to_real(&tone);
//! assert!((tone[3] - signal[3]).abs() < 1e-9);
//! ```

pub mod analysis;
pub mod spectrum;
