//! Spectrum analysis of sampled data with a radix-2 FFT.

pub mod encode;
pub mod error;
pub mod input;
pub mod report;
pub mod signal;

pub use error::AnalysisError;
