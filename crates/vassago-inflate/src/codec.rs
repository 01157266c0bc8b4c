//! Decompressor types over the zlib inflate core.

use vassago_core::{
    Algorithm, Decompressor, DictionaryDecompressor, Error, Result, WindowSize,
};

use crate::zlib::inflate;

/// Zlib decompressor.
///
/// A configured, reusable front end over [`inflate`]: holds the window
/// size and an optional preset dictionary, and owns no other state.
/// Independent instances may run concurrently on disjoint inputs.
#[derive(Debug, Clone, Default)]
pub struct ZlibDecompressor {
    window: WindowSize,
    dictionary: Option<Vec<u8>>,
}

impl ZlibDecompressor {
    /// Create a decompressor with the default 32 KiB window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decompressor with a specific window size.
    pub fn with_window_size(window: WindowSize) -> Self {
        Self {
            window,
            dictionary: None,
        }
    }
}

impl Decompressor for ZlibDecompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Zlib
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        inflate(
            input,
            self.dictionary.as_deref(),
            self.window.to_bytes() as u32,
            &mut output,
        )?;
        Ok(output)
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let decompressed = self.decompress(input)?;
        if decompressed.len() > output.len() {
            return Err(Error::buffer_too_small(decompressed.len(), output.len()));
        }
        output[..decompressed.len()].copy_from_slice(&decompressed);
        Ok(decompressed.len())
    }
}

impl DictionaryDecompressor for ZlibDecompressor {
    fn set_dictionary(&mut self, dictionary: &[u8]) -> Result<()> {
        if dictionary.len() > self.window.to_bytes() {
            return Err(Error::InvalidDictionarySize {
                dictionary: dictionary.len(),
                window: self.window.to_bytes(),
            });
        }
        self.dictionary = Some(dictionary.to_vec());
        Ok(())
    }

    fn clear_dictionary(&mut self) {
        self.dictionary = None;
    }
}
