//! Block stream reader.
//!
//! After the 64-byte container header the stream is a sequence of
//! blocks. Each block is a 32-byte header followed by one raw
//! sub-buffer per channel (block-interleaved, not sample-interleaved):
//!
//! ```text
//! [4 bytes]  magic ("BLCK")
//! [4 bytes]  per-channel payload size in bytes (big-endian)
//! [24 bytes] padding
//! [size bytes] channel 0 payload
//! [size bytes] channel 1 payload
//! ...
//! ```
//!
//! Reading stops once the cumulative consumed bytes reach the header's
//! declared stream size (offset by the container header length).

use super::error::{AstError, AstResult};
use super::header::{AstHeader, HEADER_SIZE};

/// Size of a block header in bytes.
pub const BLOCK_HEADER_SIZE: usize = 32;

/// Magic tag opening every block.
pub const BLOCK_MAGIC: [u8; 4] = *b"BLCK";

/// One parsed block: a borrowed payload slice per channel.
#[derive(Debug)]
pub struct Block<'a> {
    pub channels: Vec<&'a [u8]>,
}

/// Walks the block sequence of an in-memory AST stream.
pub struct BlockReader<'a> {
    data: &'a [u8],
    offset: usize,
    end: usize,
    channels: usize,
}

impl<'a> BlockReader<'a> {
    /// Position the reader just past the container header.
    pub fn new(data: &'a [u8], header: &AstHeader) -> Self {
        Self {
            data,
            offset: HEADER_SIZE,
            end: HEADER_SIZE + header.stream_size as usize,
            channels: header.channels as usize,
        }
    }

    /// Read the next block, or `None` once the declared stream size has
    /// been consumed.
    ///
    /// The final block may be shorter on disk than its declared size;
    /// each channel then receives whatever bytes are actually present.
    pub fn next_block(&mut self) -> AstResult<Option<Block<'a>>> {
        if self.offset >= self.end {
            return Ok(None);
        }
        if self.offset + BLOCK_HEADER_SIZE > self.data.len() {
            return Err(AstError::Format(format!(
                "block header truncated at offset 0x{:x}",
                self.offset
            )));
        }

        let tag = [
            self.data[self.offset],
            self.data[self.offset + 1],
            self.data[self.offset + 2],
            self.data[self.offset + 3],
        ];
        if tag != BLOCK_MAGIC {
            return Err(AstError::CorruptStream {
                tag,
                offset: self.offset,
            });
        }

        let block_size = u32::from_be_bytes([
            self.data[self.offset + 4],
            self.data[self.offset + 5],
            self.data[self.offset + 6],
            self.data[self.offset + 7],
        ]) as usize;

        self.offset += BLOCK_HEADER_SIZE;
        log::debug!(
            "block at 0x{:x}: {} bytes x {} channels",
            self.offset - BLOCK_HEADER_SIZE,
            block_size,
            self.channels
        );

        let mut channels = Vec::with_capacity(self.channels);
        for _ in 0..self.channels {
            let start = self.offset.min(self.data.len());
            let stop = (self.offset + block_size).min(self.data.len());
            channels.push(&self.data[start..stop]);
            // Advance by the declared size even past a short final read,
            // mirroring the original tool's offset bookkeeping.
            self.offset += block_size;
        }

        Ok(Some(Block { channels }))
    }
}
