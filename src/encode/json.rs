use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::signal::Analysis;

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a str,
    analysis: &'a Analysis,
}

pub fn write_json<W: Write>(out: &mut W, input_label: &str, analysis: &Analysis) -> Result<()> {
    let report = JsonReport {
        input: input_label,
        analysis,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{analyze, AnalysisConfig};

    #[test]
    fn carries_spectrum_and_peaks() {
        let samples: Vec<f64> = (0..32).map(|n| (n as f64 * 0.8).sin()).collect();
        let analysis = analyze(&samples, &AnalysisConfig::default()).unwrap();

        let mut buf = Vec::new();
        write_json(&mut buf, "wave.txt", &analysis).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["input"], "wave.txt");
        assert_eq!(value.as_object().unwrap().len(), 2);
        let body = &value["analysis"];
        assert_eq!(body["window"], "hanning");
        assert_eq!(body["fft_size"], 32);
        assert_eq!(body["spectrum"].as_array().unwrap().len(), 17);
        assert_eq!(
            body["peaks"].as_array().unwrap().len(),
            analysis.peaks.len()
        );
        assert!(body["strongest"]["frequency"].is_number());
    }
}
