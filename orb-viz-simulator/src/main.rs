use log::{info, trace};
use orb_dsp::{SPECTRUM_BINS, TRANSFORM_SIZE};
use orb_viz::{visual_channel, VisualizationPipeline, DEFAULT_SCALE_CAPACITY};
use std::{thread, time::Duration};
use wavegen::{sine, wf};

// Constants for the simulated audio source
pub const SAMPLE_RATE_HZ: f32 = 48_000.0;
pub const CALLBACK_COUNT: usize = 256;
pub const RENDER_DELAY_MS: u64 = 16;

/// Duration of one 1024-sample callback at the simulated sample rate.
fn callback_interval() -> Duration {
    Duration::from_micros((TRANSFORM_SIZE as f32 / SAMPLE_RATE_HZ * 1e6) as u64)
}

/// Synthesize the frame a capture tap would deliver for callback `index`.
///
/// The tone wanders across the spectrum while its amplitude swells and
/// fades, so both visual channels move.
fn synthesize_frame(index: usize) -> Vec<f32> {
    let sweep = (index as f32 * 0.08).sin() * 0.5 + 0.5;
    let bin = 8.0 + sweep * 192.0;
    let frequency = bin * SAMPLE_RATE_HZ / TRANSFORM_SIZE as f32;
    let amplitude = 0.05 + 0.95 * ((index as f32 * 0.17).sin() * 0.5 + 0.5);

    let waveform = wf!(f32, SAMPLE_RATE_HZ, sine!(frequency, amplitude));
    waveform.iter().take(TRANSFORM_SIZE).collect()
}

/// Stand-in for the renderer: drain the channel and log what a frame of
/// drawing would consume.
fn render_loop(mut rx: orb_viz::VisualChannelRx) {
    let mut scale = orb_dsp::SCALE_MIN;
    loop {
        let mut drained = 0usize;
        while let Some(value) = rx.pop_scale() {
            scale = value;
            drained += 1;
        }

        if let Some(spectrum) = rx.latest_spectrum() {
            let (peak_bin, peak) = spectrum
                .iter()
                .enumerate()
                .fold((0, 0.0f32), |best, (bin, &magnitude)| {
                    if magnitude > best.1 {
                        (bin, magnitude)
                    } else {
                        best
                    }
                });
            info!(
                "scale {:.3}  peak bin {:>3}/{} at {:.2}  ({} scale updates)",
                scale, peak_bin, SPECTRUM_BINS, peak, drained
            );
        } else {
            trace!("no new spectrum this frame");
        }

        thread::sleep(Duration::from_millis(RENDER_DELAY_MS));
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (mut tx, rx) = visual_channel(DEFAULT_SCALE_CAPACITY);
    let mut pipeline = VisualizationPipeline::new();

    thread::spawn(move || render_loop(rx));

    info!(
        "simulating {} callbacks of {} samples at {} Hz",
        CALLBACK_COUNT, TRANSFORM_SIZE, SAMPLE_RATE_HZ
    );

    for index in 0..CALLBACK_COUNT {
        let frame = synthesize_frame(index);
        if let Err(error) = pipeline.process_frame(&frame, &mut tx) {
            info!("callback {} skipped: {}", index, error);
        }
        thread::sleep(callback_interval());
    }

    info!("simulation finished");
}
