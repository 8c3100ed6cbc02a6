//! Turn files on disk into a flat sample sequence.

pub mod decode;
pub mod text;

use anyhow::Result;
use std::path::Path;

pub use decode::{decode_audio, is_audio_path};
pub use text::{estimate_sample_rate, load_text, parse_columns};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    /// Timestamps from a leading column, empty for single-column data
    pub time: Vec<f64>,
    pub amplitude: Vec<f64>,
    /// Rate stored in the file header (audio formats only)
    pub sample_rate: Option<f64>,
}

impl DataSet {
    /// Rate carried by the file itself: the audio header, else evenly spaced timestamps.
    pub fn intrinsic_sample_rate(&self) -> Option<f64> {
        self.sample_rate
            .or_else(|| estimate_sample_rate(&self.time))
    }
}

/// Load audio files through the decoder and everything else as text columns.
pub fn load(path: &Path) -> Result<DataSet> {
    if is_audio_path(path) {
        decode_audio(path)
    } else {
        load_text(path)
    }
}
