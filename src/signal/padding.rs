use rustfft::num_complex::Complex;

/// Smallest power of two that is >= `n` (1 for an empty input).
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Lift real samples into a complex buffer whose length is the next power of
/// two, filling the tail with zeros. Never truncates.
pub fn zero_pad(samples: &[f64]) -> Vec<Complex<f64>> {
    let size = next_power_of_two(samples.len());
    let mut buffer = vec![Complex::new(0.0, 0.0); size];
    for (slot, &s) in buffer.iter_mut().zip(samples) {
        *slot = Complex::new(s, 0.0);
    }
    buffer
}
