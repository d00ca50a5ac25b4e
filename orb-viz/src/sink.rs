use crate::types::SpectrumFrame;

/// Renderer-facing seam of the pipeline.
///
/// The pipeline pushes values; the sink decides when and how to redraw.
/// Implementations on the audio callback path must not block, allocate, or
/// perform I/O.
pub trait VisualSink {
    /// Receive one loudness scale value in [`orb_dsp::SCALE_MIN`],
    /// [`orb_dsp::SCALE_MAX`]. Called up to [`orb_dsp::SCALE_RAMP_STEPS`]
    /// times per audio frame.
    fn push_scale(&mut self, scale: f32);

    /// Receive one spectrum, replacing the previous one entirely. Called
    /// once per audio frame.
    fn push_spectrum(&mut self, spectrum: &SpectrumFrame);
}
