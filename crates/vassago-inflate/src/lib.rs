//! # Vassago Inflate
//!
//! ZLIB/DEFLATE decompression: RFC 1951 DEFLATE bitstreams inside the
//! RFC 1950 zlib envelope with its Adler-32 trailer.
//!
//! The decoder is a pure function of its inputs: no I/O, no global state,
//! single-threaded, with every malformed input mapped to a named
//! [`Error`](vassago_core::Error) kind. Decompression bombs are the
//! caller's concern - the output grows as large as the stream demands.
//!
//! ## Example
//!
//! ```ignore
//! use vassago_inflate::{inflate, ZlibDecompressor};
//! use vassago_core::Decompressor;
//!
//! // One-shot, default window:
//! let original = vassago_inflate::zlib_decompress(&compressed)?;
//!
//! // Configured, with a preset dictionary:
//! let mut out = Vec::new();
//! inflate(&compressed, Some(dictionary), 32768, &mut out)?;
//! ```

pub mod adler;
pub mod bits;
pub mod codec;
pub mod huffman;
pub mod inflate;
pub mod window;
pub mod zlib;

// Re-export main types
pub use adler::{adler32, Adler32};
pub use codec::ZlibDecompressor;

// Re-export raw functions for advanced use
pub use zlib::{inflate, zlib_decompress};
