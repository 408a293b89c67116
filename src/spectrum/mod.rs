// File: mod.rs
// This file stitches the spectrum module together

mod error;
mod fft_tools;
mod fft;
mod nd;
mod options;
mod summary;

pub use error::*;
pub use fft_tools::*;
pub use fft::*;
pub use nd::*;
pub use options::*;
pub use summary::one_sided_spectrum;
