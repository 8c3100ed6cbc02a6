use clap::Parser;
use std::path::PathBuf;

use fft_analyzer::encode::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "fft-analyzer",
    about = "Frequency spectrum and dominant peaks of sampled data via a radix-2 FFT"
)]
pub struct Cli {
    /// Input file: one column (amplitude) or two columns (time, amplitude),
    /// comma or whitespace separated, '#' comments; or a WAV/FLAC/MP3/OGG file
    pub input: PathBuf,

    /// Sampling rate in Hz [default: from the file, else 1.0]
    #[arg(short = 'r', long)]
    pub sample_rate: Option<f64>,

    /// Window function: rect, hanning, hamming, blackman [default: hanning]
    #[arg(short, long)]
    pub window: Option<String>,

    /// Output file [default: <input stem>_fft_result.<format>]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of peaks to report [default: 5]
    #[arg(long)]
    pub peaks: Option<usize>,

    /// Minimum distance between reported peaks, in frequency bins [default: 3]
    #[arg(long)]
    pub separation: Option<f64>,

    /// Parallelize butterfly stages of large transforms
    #[arg(long)]
    pub parallel: bool,

    /// Config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not print the summary to stdout
    #[arg(short, long)]
    pub quiet: bool,
}
