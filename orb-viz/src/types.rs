use orb_dsp::{SCALE_RAMP_STEPS, SPECTRUM_BINS};

/// One full magnitude spectrum, half the transform size.
pub type SpectrumFrame = [f32; SPECTRUM_BINS];

/// The smoothing ramp emitted for one audio frame.
pub type ScaleRamp = [f32; SCALE_RAMP_STEPS];
