//! Error types for AST container parsing and decoding.

/// Errors raised while parsing or decoding an AST stream.
///
/// All of these are fatal for the file being converted; batch conversion
/// reports them per file and moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AstError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(String),

    /// Stream too short to hold the structure being parsed
    #[error("Malformed container: {0}")]
    Format(String),

    /// A block carried something other than the "BLCK" tag
    #[error("Corrupt stream: bad block tag {tag:02x?} at offset 0x{offset:x}")]
    CorruptStream { tag: [u8; 4], offset: usize },

    /// A channel decoded fewer samples than the loop-end index requires
    #[error("Channel {channel} decoded {decoded} samples, need {needed}")]
    InsufficientSamples {
        channel: usize,
        decoded: usize,
        needed: usize,
    },
}

/// Result type for AST operations
pub type AstResult<T> = Result<T, AstError>;

impl From<std::io::Error> for AstError {
    fn from(err: std::io::Error) -> Self {
        AstError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_stream_display_has_tag_and_offset() {
        let err = AstError::CorruptStream {
            tag: *b"XXCK",
            offset: 0x40,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("0x40"), "missing offset in: {}", msg);
    }

    #[test]
    fn test_error_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<AstError>();
    }
}
