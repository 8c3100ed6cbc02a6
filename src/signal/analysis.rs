use crate::error::AnalysisError;

use super::features::Analysis;
use super::fft::FftEngine;
use super::padding::zero_pad;
use super::spectrum::{detect_peaks, one_sided, strongest_bin, PeakPolicy};
use super::window::WindowFunction;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Hz; 1.0 when the real rate is unknown
    pub sample_rate: f64,
    pub window: WindowFunction,
    pub peaks: PeakPolicy,
    /// Run butterfly stages on the rayon pool for large transforms
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_rate: 1.0,
            window: WindowFunction::default(),
            peaks: PeakPolicy::default(),
            parallel: false,
        }
    }
}

/// Window, pad, transform and calibrate `samples`, then pick the dominant peaks.
pub fn analyze(samples: &[f64], config: &AnalysisConfig) -> Result<Analysis, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    let rate = config.sample_rate;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(AnalysisError::InvalidSampleRate(rate));
    }
    let separation = config.peaks.separation_bins;
    if !separation.is_finite() || separation < 0.0 {
        return Err(AnalysisError::InvalidPeakSeparation(separation));
    }

    let sample_count = samples.len();
    let mut windowed = samples.to_vec();
    config.window.apply(&mut windowed);

    let mut buffer = zero_pad(&windowed);
    let fft_size = buffer.len();
    log::debug!(
        "Transforming {} samples as {} points ({} window, {} zeros appended)",
        sample_count,
        fft_size,
        config.window,
        fft_size - sample_count
    );

    FftEngine::new()
        .with_parallel(config.parallel)
        .forward(&mut buffer)?;

    let resolution = rate / fft_size as f64;
    let spectrum = one_sided(&buffer, sample_count, rate);
    let peaks = detect_peaks(&spectrum, resolution, &config.peaks);
    let strongest = strongest_bin(&spectrum);
    log::debug!(
        "Spectrum: {} bins, resolution={:.6} Hz, {} peaks",
        spectrum.len(),
        resolution,
        peaks.len()
    );

    Ok(Analysis {
        sample_count,
        fft_size,
        sample_rate: rate,
        window: config.window,
        resolution,
        nyquist: rate / 2.0,
        spectrum,
        peaks,
        strongest,
    })
}
