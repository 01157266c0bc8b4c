//! Zlib envelope (RFC 1950).
//!
//! A zlib stream is a 2-byte header, a DEFLATE body, and a 4-byte
//! big-endian Adler-32 of the uncompressed data. The decoder consumes the
//! stream in full; anything left after the trailer is an error.

use vassago_core::{Error, Result, WindowSize};

use crate::adler::Adler32;
use crate::bits::BitReader;
use crate::inflate::inflate_blocks;
use crate::window::SlidingWindow;

/// Zlib compression method: DEFLATE.
const CM_DEFLATE: u8 = 8;

/// FLG bit signalling a preset dictionary id in the header.
const FDICT: u8 = 0x20;

/// Decompress a zlib stream, appending the output to `out`.
///
/// `window_size` must be a power of two in 256..=32768 and at least as
/// large as the window the encoder used. `dictionary`, when present, seeds
/// the sliding window as prior history for back-references; its octets are
/// not emitted and do not contribute to the Adler-32. When the header's
/// FDICT flag is set the 4-byte dictionary id is skipped unverified - the
/// dictionary itself always arrives through the parameter.
///
/// On error the contents of `out` beyond its original length are
/// unspecified and should be discarded.
pub fn inflate(
    deflated: &[u8],
    dictionary: Option<&[u8]>,
    window_size: u32,
    out: &mut Vec<u8>,
) -> Result<()> {
    let window_size = WindowSize::from_bytes(window_size)?;
    let mut window = SlidingWindow::new(window_size.to_bytes());
    if let Some(dictionary) = dictionary {
        window.preload(dictionary)?;
    }

    let mut reader = BitReader::new(deflated);

    let header = reader.read_slice(2)?;
    let (cmf, flg) = (header[0], header[1]);
    if cmf & 0x0F != CM_DEFLATE {
        return Err(Error::InvalidHeader("compression method is not deflate"));
    }
    if cmf >> 4 > 7 {
        return Err(Error::InvalidHeader("window size exceeds 32768"));
    }
    if (u16::from(cmf) * 256 + u16::from(flg)) % 31 != 0 {
        return Err(Error::InvalidHeader("header check failed"));
    }
    if flg & FDICT != 0 {
        reader.read_slice(4)?;
    }

    let emitted_from = out.len();
    inflate_blocks(&mut reader, &mut window, out)?;

    reader.align_to_byte()?;
    let trailer = reader.read_slice(4)?;
    let expected = u32::from_be_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);

    let mut checksum = Adler32::new();
    checksum.update(&out[emitted_from..]);
    let actual = checksum.value();
    if actual != expected {
        return Err(Error::DataIntegrity { expected, actual });
    }

    if reader.remaining_bytes() != 0 {
        return Err(Error::TrailingData(reader.remaining_bytes()));
    }
    Ok(())
}

/// Decompress a zlib stream with the default 32 KiB window and no
/// dictionary.
pub fn zlib_decompress(input: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    inflate(input, None, 32768, &mut output)?;
    Ok(output)
}
