//! AST streaming-audio container parsing and decoding.
//!
//! The AST format is a chunked big-endian container used by console
//! audio engines: a fixed 64-byte header followed by "BLCK" blocks,
//! each carrying one raw payload per channel. Payloads hold either raw
//! big-endian PCM16 or a 4-bit adaptive differential codec.
//!
//! # Architecture
//!
//! - `header` parses the container header
//! - `block` walks the BLCK sequence
//! - `decoder` is the codec seam; `adpcm` and `pcm16` implement it
//! - `error` defines the failure taxonomy

pub mod adpcm;
pub mod block;
pub mod decoder;
pub mod error;
pub mod header;
pub mod pcm16;

pub use block::{Block, BlockReader, BLOCK_HEADER_SIZE, BLOCK_MAGIC};
pub use decoder::{new_decoder, SampleDecoder};
pub use error::{AstError, AstResult};
pub use header::{AstHeader, Codec, HEADER_SIZE, STREAM_MAGIC};
