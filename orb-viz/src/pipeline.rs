use log::trace;
use orb_dsp::{
    compute_magnitudes, db_to_scale, estimate_loudness_db, interpolate_scale, SCALE_MIN,
    TRANSFORM_SIZE,
};

use crate::error::PipelineError;
use crate::sink::VisualSink;

/// Per-frame orchestrator: loudness -> scale -> smoothing ramp, plus the
/// magnitude spectrum, all pushed to a [`VisualSink`].
///
/// The previous scale is the only state carried across frames. Audio
/// callbacks for one stream are strictly sequential, so the pipeline needs
/// no synchronization of its own; it runs on whatever thread delivers the
/// frames.
pub struct VisualizationPipeline {
    previous_scale: f32,
}

impl VisualizationPipeline {
    /// Pipeline starting from the scale floor.
    pub fn new() -> Self {
        Self::with_initial_scale(SCALE_MIN)
    }

    /// Pipeline starting from a chosen scale, for deterministic replay.
    pub fn with_initial_scale(initial_scale: f32) -> Self {
        Self {
            previous_scale: initial_scale,
        }
    }

    /// The scale the next ramp will start from.
    pub fn previous_scale(&self) -> f32 {
        self.previous_scale
    }

    /// Process one audio frame and push its visual updates to `sink`.
    ///
    /// An empty frame skips the callback entirely: no pushes, no state
    /// change. A frame whose length differs from [`TRANSFORM_SIZE`] is still
    /// processed; the spectral stage zero-pads or truncates it.
    pub fn process_frame<S: VisualSink>(
        &mut self,
        frame: &[f32],
        sink: &mut S,
    ) -> Result<(), PipelineError> {
        let db = estimate_loudness_db(frame)?;

        if frame.len() != TRANSFORM_SIZE {
            trace!(
                "frame length {} differs from transform size {}",
                frame.len(),
                TRANSFORM_SIZE
            );
        }

        let scale = db_to_scale(db);
        for value in interpolate_scale(self.previous_scale, scale) {
            sink.push_scale(value);
        }
        self.previous_scale = scale;

        sink.push_spectrum(&compute_magnitudes(frame));
        Ok(())
    }
}

impl Default for VisualizationPipeline {
    fn default() -> Self {
        Self::new()
    }
}
