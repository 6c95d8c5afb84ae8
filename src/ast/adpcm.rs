//! Adaptive differential (console DSP) sample decoder.
//!
//! ADPCM data is packed in 9-byte frames: one control byte followed by
//! eight data bytes holding 16 signed nibbles (high nibble first). The
//! control byte's high nibble selects a scale factor `1 << n`; its low
//! nibble selects a predictor coefficient pair from a fixed table.
//!
//! Each nibble becomes one 16-bit sample:
//!
//! ```text
//! sample = ((scale * nibble) << 11 + hist*coef0 + hist2*coef1) >> 11
//! ```
//!
//! clamped to [-32767, 32767]. The two history samples persist across
//! frame and block boundaries, so decode within a channel is strictly
//! sequential.

use super::decoder::SampleDecoder;

/// Bytes per ADPCM frame (1 control + 8 data).
pub const FRAME_SIZE: usize = 9;

/// Samples produced by one ADPCM frame.
pub const SAMPLES_PER_FRAME: usize = 16;

/// Fixed-point predictor coefficient pairs, indexed by the control
/// byte's low nibble. Values are Q11 fixed point.
#[rustfmt::skip]
static DSP_COEF: [[i32; 2]; 16] = [
    [ 0x0000,  0x0000],
    [ 0x0800,  0x0000],
    [ 0x0000,  0x0800],
    [ 0x0400,  0x0400],
    [ 0x1000, -0x0800],
    [ 0x0e00, -0x0600],
    [ 0x0c00, -0x0400],
    [ 0x1200, -0x0a00],
    [ 0x1068, -0x08c8],
    [ 0x12c0, -0x08fc],
    [ 0x1400, -0x0c00],
    [ 0x0800, -0x0800],
    [ 0x0400, -0x0400],
    [-0x0400,  0x0400],
    [-0x0400,  0x0000],
    [-0x0800,  0x0000],
];

/// Stateful per-channel ADPCM decoder.
///
/// Holds the two trailing decoded samples that seed the predictor.
/// One instance is owned by exactly one channel and fed that channel's
/// sub-buffer from every block in order.
#[derive(Debug, Default)]
pub struct AdpcmDecoder {
    hist: i16,
    hist2: i16,
}

impl AdpcmDecoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SampleDecoder for AdpcmDecoder {
    fn decode_block(&mut self, raw: &[u8], out: &mut Vec<i16>) {
        // A trailing partial frame (short final block) is dropped.
        for frame in raw.chunks_exact(FRAME_SIZE) {
            let control = frame[0];
            let scale = 1i32 << (control >> 4);
            let coef = DSP_COEF[(control & 0x0f) as usize];

            for k in 0..SAMPLES_PER_FRAME {
                let byte = frame[1 + k / 2];
                let raw = if k % 2 == 0 { byte >> 4 } else { byte & 0x0f };
                // Sign-extend the 4-bit value
                let nibble = if raw >= 8 { i32::from(raw) - 16 } else { i32::from(raw) };

                let mut sample = (scale * nibble) << 11;
                sample += self.hist as i32 * coef[0];
                sample += self.hist2 as i32 * coef[1];
                sample >>= 11;

                let sample = sample.clamp(-32767, 32767) as i16;
                self.hist2 = self.hist;
                self.hist = sample;
                out.push(sample);
            }
        }
    }
}
