use serde::{Deserialize, Serialize};

use super::window::WindowFunction;

/// One bin of the one-sided spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumEntry {
    /// Hz
    pub frequency: f64,
    pub amplitude: f64,
    /// Radians in (-π, π]
    pub phase: f64,
    pub power: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    pub frequency: f64,
    pub amplitude: f64,
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Samples before zero padding (N)
    pub sample_count: usize,
    /// Transform length (P), a power of two >= N
    pub fft_size: usize,
    pub sample_rate: f64,
    pub window: WindowFunction,
    /// Bin spacing in Hz (R / P)
    pub resolution: f64,
    pub nyquist: f64,
    /// Bins 0..=P/2
    pub spectrum: Vec<SpectrumEntry>,
    /// Greedy, separation-filtered, strongest first
    pub peaks: Vec<Peak>,
    /// Largest non-DC bin, independent of `peaks`
    pub strongest: Option<Peak>,
}

impl Analysis {
    /// Number of zeros appended by the padder.
    pub fn padding(&self) -> usize {
        self.fft_size - self.sample_count
    }
}
