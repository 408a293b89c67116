//! # Analysis
//! The `analysis` module contains time-domain statistics used alongside the
//! spectrum functions, such as the variance that R2 scaling expects.

mod signal_tools;

#[doc(inline)]
pub use signal_tools::*;
