//! The numeric core: window, pad, transform, calibrate, pick peaks.

pub mod analysis;
pub mod features;
pub mod fft;
pub mod padding;
pub mod spectrum;
pub mod window;

pub use analysis::{analyze, AnalysisConfig};
pub use features::{Analysis, Peak, SpectrumEntry};
pub use fft::{Direction, FftEngine};
pub use padding::{next_power_of_two, zero_pad};
pub use spectrum::{detect_peaks, one_sided, strongest_bin, PeakPolicy};
pub use window::WindowFunction;
