//! Linear PCM16 sample decoder.
//!
//! Block payloads are raw big-endian signed 16-bit samples; decoding is
//! a byte swap with no history and no clamping.

use super::decoder::SampleDecoder;

/// Stateless PCM16 decoder.
#[derive(Debug, Default)]
pub struct Pcm16Decoder;

impl Pcm16Decoder {
    pub fn new() -> Self {
        Self
    }
}

impl SampleDecoder for Pcm16Decoder {
    fn decode_block(&mut self, raw: &[u8], out: &mut Vec<i16>) {
        // An odd trailing byte (short final block) is dropped.
        for pair in raw.chunks_exact(2) {
            out.push(i16::from_be_bytes([pair[0], pair[1]]));
        }
    }
}
