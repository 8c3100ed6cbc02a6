//! Iterative radix-2 Cooley-Tukey transform (decimation in time).
//!
//! The butterfly network accumulates each block's twiddle factor by repeated
//! multiplication with the stage root instead of evaluating sin/cos per step.
//! The resulting rounding drift is part of the expected output.

use std::f64::consts::PI;

use rayon::prelude::*;
use rustfft::num_complex::Complex;

use crate::error::AnalysisError;

/// Buffers shorter than this stay on the calling thread even in parallel mode.
pub const PARALLEL_MIN_LEN: usize = 1 << 14;

/// Rough number of butterflies handed to one rayon task.
const PARALLEL_GRAIN: usize = 1 << 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

/// In-place complex FFT over power-of-two buffers.
#[derive(Debug, Clone, Default)]
pub struct FftEngine {
    parallel: bool,
}

impl FftEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split the independent blocks of each stage across the rayon pool.
    /// Output is bit-identical to the serial path.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn forward(&self, buffer: &mut [Complex<f64>]) -> Result<(), AnalysisError> {
        self.transform(buffer, Direction::Forward)
    }

    pub fn inverse(&self, buffer: &mut [Complex<f64>]) -> Result<(), AnalysisError> {
        self.transform(buffer, Direction::Inverse)
    }

    /// Transform `buffer` in place. The inverse direction is scaled by 1/P.
    ///
    /// The length must be a power of two; the padder guarantees this for the
    /// analysis pipeline, anything else is rejected up front.
    pub fn transform(
        &self,
        buffer: &mut [Complex<f64>],
        direction: Direction,
    ) -> Result<(), AnalysisError> {
        let n = buffer.len();
        if !n.is_power_of_two() {
            return Err(AnalysisError::NotPowerOfTwo(n));
        }
        if n == 1 {
            return Ok(());
        }

        bit_reverse_permute(buffer);

        let parallel = self.parallel && n >= PARALLEL_MIN_LEN;
        let mut len = 2;
        while len <= n {
            let angle = direction.sign() * 2.0 * PI / len as f64;
            let root = Complex::new(angle.cos(), angle.sin());
            if parallel {
                let min_blocks = (PARALLEL_GRAIN / len).max(1);
                buffer
                    .par_chunks_mut(len)
                    .with_min_len(min_blocks)
                    .for_each(|block| butterfly_block(block, root));
            } else {
                buffer
                    .chunks_mut(len)
                    .for_each(|block| butterfly_block(block, root));
            }
            len <<= 1;
        }

        if direction == Direction::Inverse {
            let scale = n as f64;
            for x in buffer.iter_mut() {
                *x /= scale;
            }
        }

        log::trace!("{:?} FFT of {} points (parallel={})", direction, n, parallel);
        Ok(())
    }
}

/// Reorder so that element `i` lands at the bit-reversed index of `i`.
///
/// Keeps a running reversed counter `j` and toggles its bits from the top
/// down, which is O(n) overall instead of reversing every index from scratch.
fn bit_reverse_permute(buffer: &mut [Complex<f64>]) {
    let n = buffer.len();
    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            buffer.swap(i, j);
        }
    }
}

fn butterfly_block(block: &mut [Complex<f64>], root: Complex<f64>) {
    let half = block.len() / 2;
    let (lower, upper) = block.split_at_mut(half);
    let mut w = Complex::new(1.0, 0.0);
    for (a, b) in lower.iter_mut().zip(upper.iter_mut()) {
        let u = *a;
        let v = *b * w;
        *a = u + v;
        *b = u - v;
        w *= root;
    }
}
