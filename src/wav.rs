//! RIFF WAVE container writer.
//!
//! Emits a canonical 44-byte little-endian PCM header followed by the
//! interleaved 16-bit sample payload. Size fields are derived from the
//! rendered sample count, never pre-computed from loop metadata.

use crate::render::RenderedWaveform;

/// Total header length: RIFF chunk descriptor + fmt chunk + data header.
pub const WAV_HEADER_SIZE: usize = 44;

const RIFF_TAG: &[u8; 4] = b"RIFF";
const WAVE_TAG: &[u8; 4] = b"WAVE";
const FMT_TAG: &[u8; 4] = b"fmt ";
const DATA_TAG: &[u8; 4] = b"data";

const FMT_CHUNK_SIZE: u32 = 16; // PCM
const AUDIO_FORMAT_PCM: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;

/// Serialize a rendered waveform to a complete WAV file image.
pub fn write_wav(wave: &RenderedWaveform) -> Vec<u8> {
    let bytes_per_sample = u32::from(BITS_PER_SAMPLE / 8);
    let block_align = wave.channels * (BITS_PER_SAMPLE / 8);
    let byte_rate = wave.sample_rate * u32::from(wave.channels) * bytes_per_sample;
    let data_size = wave.samples.len() as u32 * bytes_per_sample;
    let chunk_size = 36 + data_size;

    let mut out = Vec::with_capacity(WAV_HEADER_SIZE + wave.samples.len() * 2);
    out.extend_from_slice(RIFF_TAG);
    out.extend_from_slice(&chunk_size.to_le_bytes());
    out.extend_from_slice(WAVE_TAG);
    out.extend_from_slice(FMT_TAG);
    out.extend_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
    out.extend_from_slice(&AUDIO_FORMAT_PCM.to_le_bytes());
    out.extend_from_slice(&wave.channels.to_le_bytes());
    out.extend_from_slice(&wave.sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());
    out.extend_from_slice(DATA_TAG);
    out.extend_from_slice(&data_size.to_le_bytes());
    for s in &wave.samples {
        out.extend_from_slice(&s.to_le_bytes());
    }
    out
}
