//! AST container header parsing.
//!
//! The container opens with a fixed 64-byte header. Every multi-byte
//! field is stored big-endian:
//!
//! ```text
//! [4 bytes]  magic ("STRM")
//! [4 bytes]  total block-stream size in bytes (excludes this header)
//! [2 bytes]  codec tag (0 = ADPCM, 1 = PCM16)
//! [2 bytes]  bit depth
//! [2 bytes]  channel count
//! [2 bytes]  reserved
//! [4 bytes]  sample rate (Hz)
//! [4 bytes]  total sample count
//! [4 bytes]  loop start (sample index)
//! [4 bytes]  loop end (sample index)
//! [4 bytes]  first block size
//! [8 bytes]  reserved
//! [20 bytes] padding
//! ```

use super::error::{AstError, AstResult};

/// Size of the fixed container header in bytes.
pub const HEADER_SIZE: usize = 0x40;

/// Magic tag found at the start of every known AST file. The original
/// console tools never verify it, so neither do we beyond a warning.
pub const STREAM_MAGIC: [u8; 4] = *b"STRM";

/// Sample codec used by the block payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// 4-bit adaptive differential coding (console DSP codec)
    Adpcm,
    /// Raw big-endian signed 16-bit PCM
    Pcm16,
}

impl Codec {
    fn from_tag(tag: u16) -> AstResult<Self> {
        match tag {
            0 => Ok(Codec::Adpcm),
            1 => Ok(Codec::Pcm16),
            other => Err(AstError::Format(format!("unknown codec tag {}", other))),
        }
    }

    fn tag(self) -> u16 {
        match self {
            Codec::Adpcm => 0,
            Codec::Pcm16 => 1,
        }
    }
}

/// Parsed AST container header, all fields in host byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstHeader {
    pub magic: [u8; 4],
    /// Byte length of the block stream that follows the header
    pub stream_size: u32,
    pub codec: Codec,
    pub bit_depth: u16,
    pub channels: u16,
    pub reserved1: u16,
    pub sample_rate: u32,
    pub total_samples: u32,
    /// Loop start, in samples
    pub loop_start: u32,
    /// Loop end, in samples
    pub loop_end: u32,
    pub first_block_size: u32,
    pub reserved2: u32,
    pub reserved3: u32,
}

fn be_u16(data: &[u8], ofs: usize) -> u16 {
    u16::from_be_bytes([data[ofs], data[ofs + 1]])
}

fn be_u32(data: &[u8], ofs: usize) -> u32 {
    u32::from_be_bytes([data[ofs], data[ofs + 1], data[ofs + 2], data[ofs + 3]])
}

impl AstHeader {
    /// Parse the header from the first [`HEADER_SIZE`] bytes of a stream.
    pub fn from_bytes(data: &[u8]) -> AstResult<Self> {
        if data.len() < HEADER_SIZE {
            return Err(AstError::Format(format!(
                "stream is {} bytes, header needs {}",
                data.len(),
                HEADER_SIZE
            )));
        }

        let magic = [data[0], data[1], data[2], data[3]];
        if magic != STREAM_MAGIC {
            log::warn!("stream magic is {:02x?}, expected \"STRM\"", magic);
        }

        let header = Self {
            magic,
            stream_size: be_u32(data, 4),
            codec: Codec::from_tag(be_u16(data, 8))?,
            bit_depth: be_u16(data, 10),
            channels: be_u16(data, 12),
            reserved1: be_u16(data, 14),
            sample_rate: be_u32(data, 16),
            total_samples: be_u32(data, 20),
            loop_start: be_u32(data, 24),
            loop_end: be_u32(data, 28),
            first_block_size: be_u32(data, 32),
            reserved2: be_u32(data, 36),
            reserved3: be_u32(data, 40),
        };

        if header.channels == 0 {
            return Err(AstError::Format("channel count is zero".into()));
        }
        if header.loop_start > header.loop_end {
            return Err(AstError::Format(format!(
                "loop start {} past loop end {}",
                header.loop_start, header.loop_end
            )));
        }
        if header.loop_end > header.total_samples {
            return Err(AstError::Format(format!(
                "loop end {} past total samples {}",
                header.loop_end, header.total_samples
            )));
        }

        Ok(header)
    }

    /// Re-encode the header to its on-disk big-endian form.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&self.magic);
        out[4..8].copy_from_slice(&self.stream_size.to_be_bytes());
        out[8..10].copy_from_slice(&self.codec.tag().to_be_bytes());
        out[10..12].copy_from_slice(&self.bit_depth.to_be_bytes());
        out[12..14].copy_from_slice(&self.channels.to_be_bytes());
        out[14..16].copy_from_slice(&self.reserved1.to_be_bytes());
        out[16..20].copy_from_slice(&self.sample_rate.to_be_bytes());
        out[20..24].copy_from_slice(&self.total_samples.to_be_bytes());
        out[24..28].copy_from_slice(&self.loop_start.to_be_bytes());
        out[28..32].copy_from_slice(&self.loop_end.to_be_bytes());
        out[32..36].copy_from_slice(&self.first_block_size.to_be_bytes());
        out[36..40].copy_from_slice(&self.reserved2.to_be_bytes());
        out[40..44].copy_from_slice(&self.reserved3.to_be_bytes());
        out
    }
}
