mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use fft_analyzer::encode::{self, OutputFormat};
use fft_analyzer::input;
use fft_analyzer::report;
use fft_analyzer::signal::{analyze, AnalysisConfig, PeakPolicy, WindowFunction};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    // Explicit --config must load; an auto-discovered one only warns.
    let cfg = match cli.config {
        Some(ref path) => {
            let cfg = config::load_config(path)?;
            log::info!("Loaded config from {}", path.display());
            cfg
        }
        None => match config::discover_config() {
            Some(path) => match config::load_config(&path) {
                Ok(cfg) => {
                    log::info!("Loaded config from {}", path.display());
                    cfg
                }
                Err(err) => {
                    log::warn!("Ignoring config {}: {:#}", path.display(), err);
                    config::Config::default()
                }
            },
            None => config::Config::default(),
        },
    };

    let window_name = cli.window.clone().or(cfg.analysis.window.clone());
    let window = match window_name {
        Some(name) => name.parse::<WindowFunction>().unwrap_or_else(|err| {
            log::warn!("{}; using Hanning", err);
            WindowFunction::Hanning
        }),
        None => WindowFunction::default(),
    };
    let format = cli
        .format
        .or(cfg.output.format)
        .unwrap_or(OutputFormat::default());
    let peaks = PeakPolicy {
        max_peaks: cli
            .peaks
            .or(cfg.analysis.max_peaks)
            .unwrap_or(PeakPolicy::default().max_peaks),
        separation_bins: cli
            .separation
            .or(cfg.analysis.separation_bins)
            .unwrap_or(PeakPolicy::default().separation_bins),
    };

    log::info!("Input: {}", cli.input.display());
    let data = input::load(&cli.input)?;
    log::info!("Data points: {}", data.amplitude.len());

    let sample_rate = if let Some(rate) = cli.sample_rate {
        log::info!("Sampling rate (given): {} Hz", rate);
        rate
    } else if let Some(rate) = data.intrinsic_sample_rate() {
        log::info!("Sampling rate (from file): {} Hz", rate);
        rate
    } else if let Some(rate) = cfg.analysis.sample_rate {
        log::info!("Sampling rate (config): {} Hz", rate);
        rate
    } else {
        log::info!("Sampling rate: 1 Hz (unknown, frequencies are in cycles/sample)");
        1.0
    };

    log::info!("Window: {}", window);

    let analysis_config = AnalysisConfig {
        sample_rate,
        window,
        peaks,
        parallel: cli.parallel || cfg.analysis.parallel,
    };
    let analysis = analyze(&data.amplitude, &analysis_config).context("Analysis failed")?;
    log::info!(
        "FFT size: {} (zero padding: {} points)",
        analysis.fft_size,
        analysis.padding()
    );

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| encode::default_output_path(&cli.input, format));
    let input_label = cli.input.display().to_string();
    encode::write_report(&output, format, &input_label, &analysis)?;

    if !cli.quiet {
        println!("{}", report::summary(&analysis));
    }

    log::info!("Results saved to {}", output.display());
    Ok(())
}
