//! Error types for decompression operations.

use thiserror::Error;

/// Result type alias for decompression operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Decompression error types.
///
/// Every variant is fatal to the decode that raised it; no error is
/// recovered locally, and the output visible to the caller after an error
/// is unspecified.
#[derive(Debug, Error)]
pub enum Error {
    /// The bit reader was asked for bits past the end of the input.
    #[error("input exhausted at bit {bit_pos}")]
    TruncatedInput { bit_pos: usize },

    /// Requested sliding-window size is not one of the supported sizes.
    #[error("window size {0} is not supported (must be a power of two in 256..=32768)")]
    InvalidWindowSize(u32),

    /// Preset dictionary is longer than the sliding window.
    #[error("dictionary of {dictionary} bytes exceeds {window} byte window")]
    InvalidDictionarySize { dictionary: usize, window: usize },

    /// Malformed stream header (zlib envelope or dynamic block counts).
    #[error("invalid header: {0}")]
    InvalidHeader(&'static str),

    /// Block type 11 is reserved by RFC 1951.
    #[error("reserved block type")]
    ReservedBlock,

    /// Stored block LEN and NLEN fields are not one's complements.
    #[error("stored block length mismatch: len={len:#06x} nlen={nlen:#06x}")]
    StoredLengthMismatch { len: u16, nlen: u16 },

    /// Literal/length symbol outside the alphabet (286 or 287).
    #[error("invalid literal/length symbol {0}")]
    InvalidSymbol(u16),

    /// Distance symbol outside the alphabet (30 or 31).
    #[error("invalid distance symbol {0}")]
    InvalidDistanceSymbol(u16),

    /// Back-reference distance is zero, exceeds the window, or reaches
    /// past the history written so far.
    #[error("invalid back-reference distance {distance} with {history} bytes of history")]
    InvalidDistance { distance: usize, history: usize },

    /// Back-reference length is zero or exceeds 258.
    #[error("invalid match length {0}")]
    InvalidLength(usize),

    /// A bit sequence did not decode to any symbol within the maximum
    /// code length.
    #[error("bit sequence does not decode to any symbol")]
    InvalidCode,

    /// A code-length table does not describe a valid prefix code.
    #[error("code lengths do not form a valid prefix code")]
    KraftViolation,

    /// Code-length repeat with no previous length, or a repeat that
    /// overruns the combined alphabet size.
    #[error("invalid code length repeat")]
    InvalidRepeat,

    /// Adler-32 of the decoded output does not match the stream trailer.
    #[error("checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    DataIntegrity { expected: u32, actual: u32 },

    /// Input bytes remain after the checksum trailer.
    #[error("{0} trailing bytes after checksum")]
    TrailingData(usize),

    /// Caller-provided output buffer cannot hold the decoded data.
    #[error("buffer too small: need {required} bytes, got {provided}")]
    BufferTooSmall { required: usize, provided: usize },
}

impl Error {
    /// Create a truncated-input error at a bit position.
    pub fn truncated(bit_pos: usize) -> Self {
        Error::TruncatedInput { bit_pos }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Error::BufferTooSmall { required, provided }
    }

    /// Get error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::TruncatedInput { .. } => "truncated_input",
            Error::InvalidWindowSize(_) => "invalid_window_size",
            Error::InvalidDictionarySize { .. } => "invalid_dictionary_size",
            Error::InvalidHeader(_) => "invalid_header",
            Error::ReservedBlock => "reserved_block",
            Error::StoredLengthMismatch { .. } => "stored_length_mismatch",
            Error::InvalidSymbol(_) => "invalid_symbol",
            Error::InvalidDistanceSymbol(_) => "invalid_distance_symbol",
            Error::InvalidDistance { .. } => "invalid_distance",
            Error::InvalidLength(_) => "invalid_length",
            Error::InvalidCode => "invalid_code",
            Error::KraftViolation => "kraft_violation",
            Error::InvalidRepeat => "invalid_repeat",
            Error::DataIntegrity { .. } => "data_integrity",
            Error::TrailingData(_) => "trailing_data",
            Error::BufferTooSmall { .. } => "buffer_too_small",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = Error::DataIntegrity {
            expected: 0x00420042,
            actual: 1,
        };
        let message = err.to_string();
        assert!(message.contains("0x00420042"));
        assert!(message.contains("0x00000001"));
    }

    #[test]
    fn test_category_is_stable() {
        assert_eq!(Error::truncated(12).category(), "truncated_input");
        assert_eq!(Error::ReservedBlock.category(), "reserved_block");
    }
}
