//! AST streaming-audio container to WAV transcoder.
//!
//! The pipeline runs header parse → block-by-block decode → channel
//! interleave → loop/fade render → WAV write, fully in memory.

pub mod ast;
pub mod cli;
pub mod convert;
pub mod render;
pub mod wav;

pub use ast::{AstError, AstHeader, AstResult, Codec};
pub use cli::Cli;
pub use convert::{convert_bytes, convert_dir, convert_file};
pub use render::RenderedWaveform;
