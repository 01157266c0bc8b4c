//! Core traits for decompression.

use crate::error::Result;
use crate::types::Algorithm;

/// One-shot decompression operations.
pub trait Decompressor {
    /// Get the decompression algorithm.
    fn algorithm(&self) -> Algorithm;

    /// Decompress data in one shot.
    ///
    /// # Arguments
    /// * `input` - Compressed data
    ///
    /// # Returns
    /// Decompressed data as a vector.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Decompress data into existing buffer.
    ///
    /// # Arguments
    /// * `input` - Compressed data
    /// * `output` - Buffer to write decompressed data
    ///
    /// # Returns
    /// Number of bytes written to output.
    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Decompress with known output size (more efficient).
    fn decompress_with_size(&self, input: &[u8], output_size: usize) -> Result<Vec<u8>> {
        let mut output = vec![0u8; output_size];
        let written = self.decompress_to(input, &mut output)?;
        output.truncate(written);
        Ok(output)
    }
}

/// Dictionary-based decompression.
///
/// A preset dictionary seeds the decoder's history so back-references in
/// the first bytes of the stream can reach data that was never emitted.
/// It must match the dictionary used for compression.
pub trait DictionaryDecompressor: Decompressor {
    /// Set decompression dictionary.
    fn set_dictionary(&mut self, dictionary: &[u8]) -> Result<()>;

    /// Clear current dictionary.
    fn clear_dictionary(&mut self);
}
