//! Channel interleaving and loop/fade rendering.
//!
//! Decoded channels are merged into one standard-interleave buffer of
//! `loop_end` frames, then the loop region is optionally repeated and
//! a fixed 15-second linear fade-out appended.

use crate::ast::error::{AstError, AstResult};

/// Fade-out duration in seconds, fixed by the original tool.
pub const FADEOUT_SECONDS: u32 = 15;

/// Final interleaved waveform plus the metadata the writer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWaveform {
    /// Interleaved samples, `frames * channels` long
    pub samples: Vec<i16>,
    pub channels: u16,
    pub sample_rate: u32,
}

impl RenderedWaveform {
    /// Number of sample frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }
}

/// Merge per-channel sample sequences into one interleaved buffer of
/// `frames` frames: sample `i` of channel `c` lands at `i*N + c`.
///
/// Fails if any channel decoded fewer than `frames` samples, which
/// indicates a truncated or malformed source stream.
pub fn interleave(channels: &[Vec<i16>], frames: usize) -> AstResult<Vec<i16>> {
    let n = channels.len();
    for (c, samples) in channels.iter().enumerate() {
        if samples.len() < frames {
            return Err(AstError::InsufficientSamples {
                channel: c,
                decoded: samples.len(),
                needed: frames,
            });
        }
    }

    let mut out = vec![0i16; frames * n];
    for (c, samples) in channels.iter().enumerate() {
        for (i, &s) in samples[..frames].iter().enumerate() {
            out[i * n + c] = s;
        }
    }
    Ok(out)
}

/// Render loop repetitions and the trailing fade-out.
///
/// `base` is the interleaved buffer covering frames `[0, loop_end)`.
/// With `loop_start == 0` or `repeat_count == 0` the output is the base
/// buffer unchanged. Otherwise the frame range `[loop_start, loop_end)`
/// is appended `repeat_count` times, then a fade segment copied from
/// the loop start — but only when the loop region is at least as long
/// as the 15-second fade; a loop too short for the full fade gets none.
pub fn render_loop(
    base: Vec<i16>,
    channels: u16,
    sample_rate: u32,
    loop_start: u32,
    loop_end: u32,
    repeat_count: u32,
) -> RenderedWaveform {
    let n = channels as usize;
    let mut samples = base;

    if loop_start > 0 && repeat_count > 0 {
        let loop_frames = (loop_end - loop_start) as usize;
        let region = loop_start as usize * n..loop_end as usize * n;
        for _ in 0..repeat_count {
            samples.extend_from_within(region.clone());
        }

        let fade_frames = (FADEOUT_SECONDS * sample_rate) as usize;
        if fade_frames <= loop_frames {
            let fade_from = loop_start as usize * n;
            for i in 0..fade_frames {
                // Linear ramp, truncating toward zero like the
                // original's float-to-int cast.
                let fraction = (fade_frames - i) as f32 / fade_frames as f32;
                for c in 0..n {
                    let s = samples[fade_from + i * n + c];
                    samples.push((s as f32 * fraction) as i16);
                }
            }
        }
    }

    RenderedWaveform {
        samples,
        channels,
        sample_rate,
    }
}
