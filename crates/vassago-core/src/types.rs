//! Core type definitions for decompression operations.

use crate::error::{Error, Result};

/// Supported stream formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Raw DEFLATE bitstream (RFC 1951).
    Deflate,
    /// DEFLATE with Zlib framing and Adler-32 trailer (RFC 1950).
    Zlib,
}

impl Algorithm {
    /// Get algorithm name as string.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Deflate => "deflate",
            Algorithm::Zlib => "zlib",
        }
    }
}

/// Sliding window size for LZ77 back-references.
///
/// RFC 1950 window sizes are powers of two between 256 bytes and 32 KiB.
/// The window bounds how far back a match may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowSize {
    /// 256 byte window.
    W256,
    /// 512 byte window.
    W512,
    /// 1 KiB window.
    W1K,
    /// 2 KiB window.
    W2K,
    /// 4 KiB window.
    W4K,
    /// 8 KiB window.
    W8K,
    /// 16 KiB window.
    W16K,
    /// 32 KiB window (the DEFLATE maximum, and the default).
    #[default]
    W32K,
}

impl WindowSize {
    /// Convert to bytes.
    pub fn to_bytes(self) -> usize {
        match self {
            WindowSize::W256 => 256,
            WindowSize::W512 => 512,
            WindowSize::W1K => 1024,
            WindowSize::W2K => 2048,
            WindowSize::W4K => 4096,
            WindowSize::W8K => 8192,
            WindowSize::W16K => 16384,
            WindowSize::W32K => 32768,
        }
    }

    /// Validate a size in bytes against the supported set.
    pub fn from_bytes(bytes: u32) -> Result<Self> {
        match bytes {
            256 => Ok(WindowSize::W256),
            512 => Ok(WindowSize::W512),
            1024 => Ok(WindowSize::W1K),
            2048 => Ok(WindowSize::W2K),
            4096 => Ok(WindowSize::W4K),
            8192 => Ok(WindowSize::W8K),
            16384 => Ok(WindowSize::W16K),
            32768 => Ok(WindowSize::W32K),
            other => Err(Error::InvalidWindowSize(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_size_roundtrip() {
        for size in [256u32, 512, 1024, 2048, 4096, 8192, 16384, 32768] {
            let window = WindowSize::from_bytes(size).unwrap();
            assert_eq!(window.to_bytes(), size as usize);
        }
    }

    #[test]
    fn test_window_size_rejects_others() {
        for size in [0u32, 1, 128, 300, 65536, u32::MAX] {
            assert!(matches!(
                WindowSize::from_bytes(size),
                Err(Error::InvalidWindowSize(s)) if s == size
            ));
        }
    }

    #[test]
    fn test_default_window_is_deflate_max() {
        assert_eq!(WindowSize::default().to_bytes(), 32768);
    }
}
