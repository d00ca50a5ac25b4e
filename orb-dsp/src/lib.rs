#![no_std]

use microfft::real::rfft_1024;
#[allow(unused_imports)]
use micromath::F32Ext;

#[cfg(feature = "std")]
extern crate std;

// --- Transform Config ---
pub const TRANSFORM_SIZE: usize = 1024;
pub const SPECTRUM_BINS: usize = TRANSFORM_SIZE / 2;

// --- Loudness Config ---
// Inverted decibel scale: 0 is silence, values grow toward the ceiling as
// RMS amplitude approaches 1.0.
pub const DB_CEILING: f32 = 160.0;

// --- Scale Mapping Config ---
pub const SCALE_DB_FLOOR: f32 = 120.0; // Loudness below this pins the scale
pub const SCALE_DB_SPAN: f32 = 40.0; // Decibels mapped onto the scale range
pub const SCALE_MIN: f32 = 0.3;
pub const SCALE_MAX: f32 = 0.6;

// --- Smoothing Config ---
pub const SCALE_RAMP_STEPS: usize = 11;

// --- Display Config ---
pub const MAGNITUDE_DISPLAY_SCALE: f32 = 25.0;

/// Errors produced by the DSP entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DspError {
    /// The input frame contained no samples.
    EmptyFrame,
}

impl core::fmt::Display for DspError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DspError::EmptyFrame => write!(f, "input frame contained no samples"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DspError {}

/// Convert an RMS amplitude to the inverted decibel scale.
///
/// Zero amplitude maps to 0 directly; `log10` is undefined there.
pub fn amplitude_to_db(amplitude: f32) -> f32 {
    if amplitude <= 0.0 {
        return 0.0;
    }
    (DB_CEILING + 10.0 * amplitude.log10()).max(0.0)
}

/// Estimate the perceptual loudness of a frame in inverted decibels.
///
/// Root-mean-square amplitude over every sample, converted with
/// [`amplitude_to_db`]. An empty frame is rejected.
pub fn estimate_loudness_db(frame: &[f32]) -> Result<f32, DspError> {
    if frame.is_empty() {
        return Err(DspError::EmptyFrame);
    }
    let mut sum = 0.0f32;
    for &sample in frame {
        sum += sample * sample;
    }
    let rms = (sum / frame.len() as f32).sqrt();
    Ok(amplitude_to_db(rms))
}

/// Map an inverted-decibel loudness onto the visual scale range.
///
/// Only the top [`SCALE_DB_SPAN`] decibels above [`SCALE_DB_FLOOR`] produce
/// variation; quieter frames pin at [`SCALE_MIN`], louder ones at
/// [`SCALE_MAX`].
pub fn db_to_scale(db: f32) -> f32 {
    let adjusted = (db - SCALE_DB_FLOOR).clamp(0.0, SCALE_DB_SPAN);
    SCALE_MIN + adjusted * ((SCALE_MAX - SCALE_MIN) / SCALE_DB_SPAN)
}

/// Linear ramp of [`SCALE_RAMP_STEPS`] values from `previous` to `current`,
/// both endpoints included.
pub fn interpolate_scale(previous: f32, current: f32) -> [f32; SCALE_RAMP_STEPS] {
    let mut ramp = [0.0f32; SCALE_RAMP_STEPS];
    for (step, value) in ramp.iter_mut().enumerate() {
        let alpha = step as f32 / (SCALE_RAMP_STEPS - 1) as f32;
        *value = (1.0 - alpha) * previous + alpha * current;
    }
    ramp
}

/// Compute the normalized magnitude spectrum of a frame.
///
/// The frame is copied into a zeroed [`TRANSFORM_SIZE`] scratch buffer:
/// shorter frames are zero-padded, longer ones truncated. The transform is
/// real-input, so only the first [`SPECTRUM_BINS`] bins carry independent
/// information; the Nyquist coefficient packed into bin 0's imaginary part
/// is cleared before taking magnitudes. Every magnitude is scaled by
/// [`MAGNITUDE_DISPLAY_SCALE`] / [`TRANSFORM_SIZE`].
pub fn compute_magnitudes(frame: &[f32]) -> [f32; SPECTRUM_BINS] {
    let mut scratch = [0.0f32; TRANSFORM_SIZE];
    let len = frame.len().min(TRANSFORM_SIZE);
    scratch[..len].copy_from_slice(&frame[..len]);

    let spectrum = rfft_1024(&mut scratch);
    spectrum[0].im = 0.0;

    let normalization = MAGNITUDE_DISPLAY_SCALE / TRANSFORM_SIZE as f32;
    let mut magnitudes = [0.0f32; SPECTRUM_BINS];
    for (magnitude, bin) in magnitudes.iter_mut().zip(spectrum.iter()) {
        *magnitude = (bin.re * bin.re + bin.im * bin.im).sqrt() * normalization;
    }
    magnitudes
}
