//! Sample decoder seam over the two AST codec variants.

use super::adpcm::AdpcmDecoder;
use super::header::Codec;
use super::pcm16::Pcm16Decoder;

/// Converts one channel's raw block bytes into signed 16-bit samples.
///
/// A decoder instance belongs to exactly one channel and is fed that
/// channel's sub-buffer from every block in stream order, so stateful
/// codecs can carry decode history across block boundaries.
pub trait SampleDecoder {
    /// Decode one block's worth of raw bytes, appending to `out`.
    fn decode_block(&mut self, raw: &[u8], out: &mut Vec<i16>);
}

/// Create a fresh per-channel decoder for the given codec.
pub fn new_decoder(codec: Codec) -> Box<dyn SampleDecoder> {
    match codec {
        Codec::Adpcm => Box::new(AdpcmDecoder::new()),
        Codec::Pcm16 => Box::new(Pcm16Decoder::new()),
    }
}
