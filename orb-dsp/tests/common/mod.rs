use rand::Rng;
use wavegen::{sine, wf};

pub const SAMPLE_RATE_HZ: f32 = 48_000.0;

/// Synthesize one transform-sized frame of a pure sine aligned to `bin`.
///
/// The frequency is an exact multiple of the bin spacing, so the frame holds
/// a whole number of periods and the spectrum shows no leakage.
pub fn sine_frame(bin: usize, amplitude: f32) -> Vec<f32> {
    let frequency = bin as f32 * SAMPLE_RATE_HZ / orb_dsp::TRANSFORM_SIZE as f32;
    let waveform = wf!(f32, SAMPLE_RATE_HZ, sine!(frequency, amplitude));
    waveform.iter().take(orb_dsp::TRANSFORM_SIZE).collect()
}

/// A transform-sized frame of uniform random samples in [-1, 1].
pub fn random_frame() -> Vec<f32> {
    let mut rng = rand::rng();
    (0..orb_dsp::TRANSFORM_SIZE)
        .map(|_| rng.random_range(-1.0f32..1.0))
        .collect()
}
