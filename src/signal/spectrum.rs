use std::f64::consts::PI;

use rustfft::num_complex::Complex;

use super::features::{Peak, SpectrumEntry};

pub const DEFAULT_MAX_PEAKS: usize = 5;
pub const DEFAULT_SEPARATION_BINS: f64 = 3.0;

/// Greedy peak selection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakPolicy {
    pub max_peaks: usize,
    /// Minimum spacing between accepted peaks, in bins (multiples of Δf).
    pub separation_bins: f64,
}

impl Default for PeakPolicy {
    fn default() -> Self {
        Self {
            max_peaks: DEFAULT_MAX_PEAKS,
            separation_bins: DEFAULT_SEPARATION_BINS,
        }
    }
}

/// Calibrate the raw FFT bins into a one-sided spectrum (bins 0..=P/2).
///
/// Amplitudes are scaled by 2/N against the pre-padding sample count; the DC
/// bin has no mirrored partner so its amplitude is halved back to 1/N. Power
/// is taken from the 2/N amplitude, before that halving.
pub fn one_sided(
    bins: &[Complex<f64>],
    sample_count: usize,
    sample_rate: f64,
) -> Vec<SpectrumEntry> {
    let p = bins.len();
    if p == 0 {
        return Vec::new();
    }
    let resolution = sample_rate / p as f64;
    let scale = 2.0 / sample_count as f64;

    bins[..=p / 2]
        .iter()
        .enumerate()
        .map(|(i, bin)| {
            let raw = bin.norm() * scale;
            let amplitude = if i == 0 { raw / 2.0 } else { raw };
            SpectrumEntry {
                frequency: i as f64 * resolution,
                amplitude,
                phase: principal_phase(bin.arg()),
                power: raw * raw,
            }
        })
        .collect()
}

/// atan2 yields -π for a negative real axis with a -0.0 imaginary part.
fn principal_phase(phase: f64) -> f64 {
    if phase <= -PI {
        PI
    } else {
        phase
    }
}

/// Rank non-DC bins by amplitude and greedily keep the ones that are at
/// least `separation_bins * resolution` away from every peak already kept.
pub fn detect_peaks(
    spectrum: &[SpectrumEntry],
    resolution: f64,
    policy: &PeakPolicy,
) -> Vec<Peak> {
    let mut candidates: Vec<Peak> = spectrum
        .iter()
        .skip(1)
        .map(|e| Peak {
            frequency: e.frequency,
            amplitude: e.amplitude,
        })
        .collect();
    // Stable: equal amplitudes stay in ascending frequency order.
    candidates.sort_by(|a, b| b.amplitude.total_cmp(&a.amplitude));

    let min_distance = resolution * policy.separation_bins;
    let mut peaks: Vec<Peak> = Vec::with_capacity(policy.max_peaks.min(candidates.len()));
    for candidate in candidates {
        if peaks.len() >= policy.max_peaks {
            break;
        }
        let too_close = peaks
            .iter()
            .any(|p| (candidate.frequency - p.frequency).abs() < min_distance);
        if !too_close {
            peaks.push(candidate);
        }
    }
    peaks
}

/// Largest-amplitude bin excluding DC; the lowest frequency wins a tie.
///
/// The search starts from (0 Hz, 0.0), so a spectrum whose non-DC bins are
/// all silent reports 0 Hz. `None` only when there is no non-DC bin at all.
pub fn strongest_bin(spectrum: &[SpectrumEntry]) -> Option<Peak> {
    if spectrum.len() < 2 {
        return None;
    }
    let mut best = Peak {
        frequency: 0.0,
        amplitude: 0.0,
    };
    for e in &spectrum[1..] {
        if e.amplitude > best.amplitude {
            best = Peak {
                frequency: e.frequency,
                amplitude: e.amplitude,
            };
        }
    }
    Some(best)
}
