use thiserror::Error;

/// Failures raised by the signal core. Every one of them aborts the run
/// before any partial output is produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("sample sequence is empty")]
    EmptyInput,

    #[error("sampling rate must be a positive finite number, got {0}")]
    InvalidSampleRate(f64),

    #[error("peak separation must be a non-negative finite number of bins, got {0}")]
    InvalidPeakSeparation(f64),

    #[error("FFT buffer length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("unknown window function '{0}' (expected rect, hanning, hamming or blackman)")]
    UnknownWindow(String),
}
