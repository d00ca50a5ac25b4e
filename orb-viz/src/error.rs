use orb_dsp::DspError;
use thiserror::Error;

/// Errors surfaced by [`crate::VisualizationPipeline`].
///
/// None of these are fatal: a bad frame is skipped and the next one is
/// processed with the smoothing state untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// The delivered frame could not be analyzed.
    #[error("invalid input frame: {0}")]
    InvalidInput(#[from] DspError),
}
