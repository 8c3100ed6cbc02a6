use crate::signal::Analysis;

/// Human-readable summary printed after a run.
pub fn summary(analysis: &Analysis) -> String {
    let strongest = match analysis.strongest {
        Some(peak) => format!("{:.2} Hz (amplitude: {:.6})", peak.frequency, peak.amplitude),
        None => "none (single-bin spectrum)".to_string(),
    };
    let mut out = format!(
        "=== Summary ===\n\
         Frequency resolution: {:.4} Hz\n\
         Nyquist frequency: {:.4} Hz\n\
         Strongest peak: {}\n\
         \n\
         --- Top peaks ({}) ---\n",
        analysis.resolution,
        analysis.nyquist,
        strongest,
        analysis.peaks.len()
    );
    for (rank, peak) in analysis.peaks.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {:.2} Hz  (amplitude: {:.6})\n",
            rank + 1,
            peak.frequency,
            peak.amplitude
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{analyze, AnalysisConfig, WindowFunction};
    use std::f64::consts::PI;

    #[test]
    fn lists_tone_first() {
        let samples: Vec<f64> = (0..64)
            .map(|n| (2.0 * PI * 8.0 * n as f64 / 64.0).sin())
            .collect();
        let config = AnalysisConfig {
            sample_rate: 64.0,
            window: WindowFunction::Rectangular,
            ..AnalysisConfig::default()
        };
        let text = summary(&analyze(&samples, &config).unwrap());

        assert!(text.contains("Frequency resolution: 1.0000 Hz"));
        assert!(text.contains("Nyquist frequency: 32.0000 Hz"));
        assert!(text.contains("Strongest peak: 8.00 Hz (amplitude: 1.000000)"));
        assert!(text.contains("  1. 8.00 Hz  (amplitude: 1.000000)"));
        assert!(text.contains("--- Top peaks (5) ---"));
    }

    #[test]
    fn single_sample_has_no_peak() {
        let text = summary(&analyze(&[1.0], &AnalysisConfig::default()).unwrap());
        assert!(text.contains("Strongest peak: none"));
        assert!(text.contains("--- Top peaks (0) ---"));
    }

    #[test]
    fn lines_in_order() {
        let samples: Vec<f64> = (0..16).map(|n| (n as f64 * 0.9).cos()).collect();
        let text = summary(&analyze(&samples, &AnalysisConfig::default()).unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "=== Summary ===");
        assert!(lines[1].starts_with("Frequency resolution: "));
        assert!(lines[2].starts_with("Nyquist frequency: "));
        assert!(lines[3].starts_with("Strongest peak: "));
        assert_eq!(lines[4], "");
        assert!(lines[5].starts_with("--- Top peaks ("));
        assert!(lines[6..].iter().all(|l| l.starts_with("  ")));
    }
}
