use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Weighting applied to the time-domain samples before the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowFunction {
    /// w = 1
    #[serde(alias = "rect")]
    Rectangular,
    /// w = 0.5 - 0.5*cos(2πt)
    #[default]
    #[serde(alias = "hann")]
    Hanning,
    /// w = 0.54 - 0.46*cos(2πt)
    Hamming,
    /// w = 0.42 - 0.5*cos(2πt) + 0.08*cos(4πt)
    Blackman,
}

impl WindowFunction {
    pub const ALL: [WindowFunction; 4] = [
        WindowFunction::Rectangular,
        WindowFunction::Hanning,
        WindowFunction::Hamming,
        WindowFunction::Blackman,
    ];

    /// Weight for sample `index` of a buffer of `len` samples.
    ///
    /// A single-sample buffer has no span to normalise against, so its weight is 1.
    pub fn weight(self, index: usize, len: usize) -> f64 {
        if len < 2 {
            return 1.0;
        }
        let t = index as f64 / (len - 1) as f64;
        match self {
            WindowFunction::Rectangular => 1.0,
            WindowFunction::Hanning => 0.5 - 0.5 * (2.0 * PI * t).cos(),
            WindowFunction::Hamming => 0.54 - 0.46 * (2.0 * PI * t).cos(),
            WindowFunction::Blackman => {
                0.42 - 0.5 * (2.0 * PI * t).cos() + 0.08 * (4.0 * PI * t).cos()
            }
        }
    }

    /// Multiply every sample by its window weight, in place.
    pub fn apply(self, samples: &mut [f64]) {
        if self == WindowFunction::Rectangular {
            return;
        }
        let len = samples.len();
        for (i, s) in samples.iter_mut().enumerate() {
            *s *= self.weight(i, len);
        }
    }

    /// Window coefficients for a buffer of `len` samples.
    pub fn coefficients(self, len: usize) -> Vec<f64> {
        (0..len).map(|i| self.weight(i, len)).collect()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            WindowFunction::Rectangular => "Rectangular (none)",
            WindowFunction::Hanning => "Hanning",
            WindowFunction::Hamming => "Hamming",
            WindowFunction::Blackman => "Blackman",
        }
    }
}

impl fmt::Display for WindowFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WindowFunction {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rect" | "rectangular" => Ok(WindowFunction::Rectangular),
            "hann" | "hanning" => Ok(WindowFunction::Hanning),
            "hamming" => Ok(WindowFunction::Hamming),
            "blackman" => Ok(WindowFunction::Blackman),
            _ => Err(AnalysisError::UnknownWindow(s.to_string())),
        }
    }
}
