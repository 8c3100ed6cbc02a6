use anyhow::Result;
use std::io::Write;

use crate::signal::Analysis;

pub const COLUMN_HEADER: &str = "Frequency(Hz),Amplitude,Phase(rad),Power";

/// Commented header block, a column header, then one row per bin with six decimals.
pub fn write_csv<W: Write>(out: &mut W, input_label: &str, analysis: &Analysis) -> Result<()> {
    writeln!(out, "# FFT Analysis Result")?;
    writeln!(out, "# Input: {}", input_label)?;
    writeln!(out, "# Sampling Rate: {} Hz", analysis.sample_rate)?;
    writeln!(out, "# Window: {}", analysis.window)?;
    writeln!(
        out,
        "# Data Points: {}, FFT Size: {}",
        analysis.sample_count, analysis.fft_size
    )?;
    writeln!(out, "# Frequency Resolution: {} Hz", analysis.resolution)?;
    writeln!(out, "#")?;
    writeln!(out, "{}", COLUMN_HEADER)?;

    for e in &analysis.spectrum {
        writeln!(
            out,
            "{:.6},{:.6},{:.6},{:.6}",
            e.frequency, e.amplitude, e.phase, e.power
        )?;
    }
    Ok(())
}
