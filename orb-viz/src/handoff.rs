use log::trace;
use orb_dsp::SCALE_RAMP_STEPS;
use ringbuf::{HeapConsumer, HeapProducer, HeapRb};

use crate::sink::VisualSink;
use crate::types::SpectrumFrame;

/// Room for four callbacks' worth of ramp values before scales are dropped.
pub const DEFAULT_SCALE_CAPACITY: usize = SCALE_RAMP_STEPS * 4;

/// Lock-free channel pair carrying visual updates from the audio thread to
/// the render thread.
///
/// The producer half implements [`VisualSink`], so a
/// [`crate::VisualizationPipeline`] can push straight into it from the audio
/// callback. When the consumer falls behind, new values are dropped; the
/// producer never waits, so a slow renderer cannot stall audio capture.
pub fn visual_channel(scale_capacity: usize) -> (VisualChannelTx, VisualChannelRx) {
    let (scale_tx, scale_rx) = HeapRb::<f32>::new(scale_capacity).split();
    let (spectrum_tx, spectrum_rx) = HeapRb::<SpectrumFrame>::new(1).split();
    (
        VisualChannelTx {
            scale_tx,
            spectrum_tx,
        },
        VisualChannelRx {
            scale_rx,
            spectrum_rx,
        },
    )
}

/// Audio-thread half of the visual channel.
pub struct VisualChannelTx {
    scale_tx: HeapProducer<f32>,
    spectrum_tx: HeapProducer<SpectrumFrame>,
}

impl VisualSink for VisualChannelTx {
    fn push_scale(&mut self, scale: f32) {
        if self.scale_tx.push(scale).is_err() {
            trace!("scale queue full, value dropped");
        }
    }

    fn push_spectrum(&mut self, spectrum: &SpectrumFrame) {
        if self.spectrum_tx.push(*spectrum).is_err() {
            trace!("spectrum slot full, frame dropped");
        }
    }
}

/// Render-thread half of the visual channel.
pub struct VisualChannelRx {
    scale_rx: HeapConsumer<f32>,
    spectrum_rx: HeapConsumer<SpectrumFrame>,
}

impl VisualChannelRx {
    /// Next queued scale value, oldest first.
    pub fn pop_scale(&mut self) -> Option<f32> {
        self.scale_rx.pop()
    }

    /// Number of scale values waiting to be consumed.
    pub fn pending_scales(&self) -> usize {
        self.scale_rx.len()
    }

    /// Drain the spectrum slot, keeping only the most recent delivery.
    pub fn latest_spectrum(&mut self) -> Option<SpectrumFrame> {
        let mut latest = None;
        while let Some(spectrum) = self.spectrum_rx.pop() {
            latest = Some(spectrum);
        }
        latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orb_dsp::SPECTRUM_BINS;

    fn spectrum_of(value: f32) -> SpectrumFrame {
        [value; SPECTRUM_BINS]
    }

    #[test]
    fn scales_arrive_in_order() {
        let (mut tx, mut rx) = visual_channel(DEFAULT_SCALE_CAPACITY);

        tx.push_scale(0.3);
        tx.push_scale(0.45);
        tx.push_scale(0.6);

        assert_eq!(rx.pending_scales(), 3);
        assert_eq!(rx.pop_scale(), Some(0.3));
        assert_eq!(rx.pop_scale(), Some(0.45));
        assert_eq!(rx.pop_scale(), Some(0.6));
        assert_eq!(rx.pop_scale(), None);
    }

    #[test]
    fn full_scale_queue_drops_instead_of_blocking() {
        let (mut tx, mut rx) = visual_channel(2);

        tx.push_scale(0.30);
        tx.push_scale(0.33);
        tx.push_scale(0.36);

        assert_eq!(rx.pending_scales(), 2);
        assert_eq!(rx.pop_scale(), Some(0.30));
        assert_eq!(rx.pop_scale(), Some(0.33));
        assert_eq!(rx.pop_scale(), None);
    }

    #[test]
    fn spectrum_slot_holds_one_frame() {
        let (mut tx, mut rx) = visual_channel(DEFAULT_SCALE_CAPACITY);

        tx.push_spectrum(&spectrum_of(1.0));
        tx.push_spectrum(&spectrum_of(2.0));

        let delivered = rx.latest_spectrum().unwrap();
        assert_eq!(delivered[0], 1.0);
        assert_eq!(rx.latest_spectrum(), None);

        // The slot frees up once drained.
        tx.push_spectrum(&spectrum_of(3.0));
        assert_eq!(rx.latest_spectrum().unwrap()[0], 3.0);
    }

    #[test]
    fn channel_crosses_a_thread_boundary() {
        let (mut tx, mut rx) = visual_channel(DEFAULT_SCALE_CAPACITY);

        let producer = std::thread::spawn(move || {
            for step in 0..SCALE_RAMP_STEPS {
                tx.push_scale(0.3 + step as f32 * 0.03);
            }
            tx.push_spectrum(&spectrum_of(4.0));
        });
        producer.join().unwrap();

        let mut received = Vec::new();
        while let Some(scale) = rx.pop_scale() {
            received.push(scale);
        }
        assert_eq!(received.len(), SCALE_RAMP_STEPS);
        assert_eq!(rx.latest_spectrum().unwrap()[0], 4.0);
    }
}
