// File: options.rs
//
// This file contains the typed options for spectrum summaries and
// band-filtered reconstruction.

use std::fmt;
use std::str::FromStr;
use super::error::{SpectrumError, SpectrumResult};

/// Represents how a one-sided spectrum is scaled
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Scaling {
    /// Peak amplitude of each component
    #[default]
    Amplitude,
    /// Squared amplitude
    Power,
    /// Fraction of the signal variance explained by each component
    R2,
}

impl Scaling {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scaling::Amplitude => "amplitude",
            Scaling::Power => "power",
            Scaling::R2 => "R2",
        }
    }
}

impl FromStr for Scaling {
    type Err = SpectrumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "amplitude" => Ok(Scaling::Amplitude),
            "power" => Ok(Scaling::Power),
            "R2" => Ok(Scaling::R2),
            other => Err(SpectrumError::InvalidScaling(other.to_string())),
        }
    }
}

impl fmt::Display for Scaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents which half of the spectrum (by frequency sign) is zeroed
/// before an inverse transform
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Exclude {
    /// Zero every coefficient with a strictly positive frequency
    Positive,
    /// Zero every coefficient with a strictly negative frequency
    #[default]
    Negative,
    /// Keep both halves
    None,
}

impl Exclude {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exclude::Positive => "positive",
            Exclude::Negative => "negative",
            Exclude::None => "none",
        }
    }
}

impl FromStr for Exclude {
    type Err = SpectrumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Exclude::Positive),
            "negative" => Ok(Exclude::Negative),
            "none" => Ok(Exclude::None),
            other => Err(SpectrumError::InvalidExclude(other.to_string())),
        }
    }
}

impl fmt::Display for Exclude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes which coefficients survive an inverse transform.
///
/// The filter is evaluated in a fixed order:
/// 1. sign exclusion (`exclude`)
/// 2. exact band: if `max_freq` is set, non-zero and equal to `min_freq`,
///    only coefficients whose absolute frequency equals it survive
/// 3. upper bound: coefficients above `max_freq` are dropped
/// 4. lower bound: coefficients below `min_freq` are dropped
///
/// A bound of `0.0` counts as unset, so `min_freq == max_freq == 0.0`
/// applies no band constraint at all.
///
/// # Example
///
/// ```
/// use fourier_spectrum::spectrum::{BandFilter, Exclude};
/// let filter = BandFilter::new().min_freq(2.0).max_freq(10.0).exclude(Exclude::None);
/// assert!(filter.passes(-5.0));
/// assert!(!filter.passes(12.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct BandFilter {
    pub min_freq: Option<f64>,
    pub max_freq: Option<f64>,
    pub exclude: Exclude,
}

impl BandFilter {
    /// A filter with no bounds that excludes negative frequencies
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter that isolates a single frequency and its mirror
    pub fn exact(freq: f64) -> Self {
        Self::new().min_freq(freq).max_freq(freq)
    }

    pub fn min_freq(mut self, freq: f64) -> Self {
        self.min_freq = Some(freq);
        self
    }

    pub fn max_freq(mut self, freq: f64) -> Self {
        self.max_freq = Some(freq);
        self
    }

    pub fn exclude(mut self, exclude: Exclude) -> Self {
        self.exclude = exclude;
        self
    }

    /// Checks that both bounds, when present, are non-negative finite numbers.
    pub fn validate(&self) -> SpectrumResult<()> {
        for (name, bound) in [("min_freq", self.min_freq), ("max_freq", self.max_freq)] {
            if let Some(value) = bound {
                if !value.is_finite() || value < 0.0 {
                    return Err(SpectrumError::InvalidBand { name, value });
                }
            }
        }
        Ok(())
    }

    /// Whether a coefficient at `freq` survives the filter.
    pub fn passes(&self, freq: f64) -> bool {
        match self.exclude {
            Exclude::Positive if freq > 0.0 => return false,
            Exclude::Negative if freq < 0.0 => return false,
            _ => (),
        }

        let abs_freq = freq.abs();
        let max_freq = active(self.max_freq);
        let min_freq = active(self.min_freq);

        if let Some(max) = max_freq {
            if self.min_freq == self.max_freq && abs_freq != max {
                return false;
            }
            if abs_freq > max {
                return false;
            }
        }
        if let Some(min) = min_freq {
            if abs_freq < min {
                return false;
            }
        }
        true
    }
}

// Zero bounds are treated as absent
#[inline(always)]
fn active(bound: Option<f64>) -> Option<f64> {
    bound.filter(|value| *value != 0.0)
}
