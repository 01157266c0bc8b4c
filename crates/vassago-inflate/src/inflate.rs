//! DEFLATE block decoding (RFC 1951).
//!
//! Drives the block loop over a [`BitReader`], emitting decoded octets
//! into both the caller's output and the [`SlidingWindow`]. The zlib
//! envelope and checksum live one layer up, in [`crate::zlib`].

use vassago_core::{Error, Result};

use crate::bits::BitReader;
use crate::huffman::{
    fixed_decoders, HuffmanDecoder, CL_CODE_ORDER, DISTANCE_BASE, DISTANCE_EXTRA_BITS,
    LENGTH_BASE, LENGTH_EXTRA_BITS, MAX_DIST_CODES, MAX_LIT_CODES,
};
use crate::window::SlidingWindow;

/// Decode DEFLATE blocks until the final block's end-of-block symbol.
///
/// On return the reader sits just past the last block, unaligned.
pub(crate) fn inflate_blocks(
    reader: &mut BitReader<'_>,
    window: &mut SlidingWindow,
    out: &mut Vec<u8>,
) -> Result<()> {
    loop {
        let bfinal = reader.read_bits(1)? == 1;
        let btype = reader.read_bits(2)?;

        match btype {
            0 => stored_block(reader, window, out)?,
            1 => {
                let (literal, distance) = fixed_decoders()?;
                decode_block(reader, literal, distance, window, out)?;
            }
            2 => {
                let (literal, distance) = dynamic_decoders(reader)?;
                decode_block(reader, &literal, &distance, window, out)?;
            }
            _ => return Err(Error::ReservedBlock),
        }

        if bfinal {
            return Ok(());
        }
    }
}

/// Decode a stored (uncompressed) block body.
fn stored_block(
    reader: &mut BitReader<'_>,
    window: &mut SlidingWindow,
    out: &mut Vec<u8>,
) -> Result<()> {
    reader.align_to_byte()?;

    let len = reader.read_u16()?;
    let nlen = reader.read_u16()?;
    if len ^ nlen != 0xFFFF {
        return Err(Error::StoredLengthMismatch { len, nlen });
    }

    let bytes = reader.read_slice(len as usize)?;
    for &byte in bytes {
        window.push(byte);
    }
    out.extend_from_slice(bytes);
    Ok(())
}

/// Parse a dynamic block header and build its two alphabets (RFC 1951
/// section 3.2.7).
///
/// The literal/length and distance code lengths are themselves Huffman
/// coded by a third, 19-symbol code-length alphabet whose 3-bit lengths
/// arrive in a fixed permuted order.
fn dynamic_decoders(reader: &mut BitReader<'_>) -> Result<(HuffmanDecoder, HuffmanDecoder)> {
    let hlit = reader.read_bits(5)? as usize + 257;
    let hdist = reader.read_bits(5)? as usize + 1;
    let hclen = reader.read_bits(4)? as usize + 4;

    if hlit > MAX_LIT_CODES {
        return Err(Error::InvalidHeader("too many literal/length codes"));
    }
    if hdist > MAX_DIST_CODES {
        return Err(Error::InvalidHeader("too many distance codes"));
    }

    let mut cl_lengths = [0u8; 19];
    for &position in CL_CODE_ORDER.iter().take(hclen) {
        cl_lengths[position] = reader.read_bits(3)? as u8;
    }
    let cl_decoder = HuffmanDecoder::from_lengths(&cl_lengths)?;

    // Run-length decode the combined literal/length + distance lengths.
    let total = hlit + hdist;
    let mut lengths = vec![0u8; total];
    let mut filled = 0;
    while filled < total {
        let symbol = cl_decoder.decode(reader)?;
        match symbol {
            0..=15 => {
                lengths[filled] = symbol as u8;
                filled += 1;
            }
            16 => {
                // Repeat the previously emitted length 3-6 times.
                if filled == 0 {
                    return Err(Error::InvalidRepeat);
                }
                let previous = lengths[filled - 1];
                let run = 3 + reader.read_bits(2)? as usize;
                if filled + run > total {
                    return Err(Error::InvalidRepeat);
                }
                lengths[filled..filled + run].fill(previous);
                filled += run;
            }
            17 => {
                let run = 3 + reader.read_bits(3)? as usize;
                if filled + run > total {
                    return Err(Error::InvalidRepeat);
                }
                filled += run;
            }
            18 => {
                let run = 11 + reader.read_bits(7)? as usize;
                if filled + run > total {
                    return Err(Error::InvalidRepeat);
                }
                filled += run;
            }
            _ => return Err(Error::InvalidCode),
        }
    }

    let literal = HuffmanDecoder::from_lengths(&lengths[..hlit])?;
    let distance = HuffmanDecoder::from_lengths(&lengths[hlit..])?;
    Ok((literal, distance))
}

/// Decode literal/length and distance symbols until end-of-block.
fn decode_block(
    reader: &mut BitReader<'_>,
    literal: &HuffmanDecoder,
    distance: &HuffmanDecoder,
    window: &mut SlidingWindow,
    out: &mut Vec<u8>,
) -> Result<()> {
    loop {
        let symbol = literal.decode(reader)?;

        if symbol < 256 {
            window.push(symbol as u8);
            out.push(symbol as u8);
        } else if symbol == 256 {
            return Ok(());
        } else if symbol <= 285 {
            let index = (symbol - 257) as usize;
            let length = LENGTH_BASE[index] as usize
                + reader.read_bits(LENGTH_EXTRA_BITS[index] as u32)? as usize;

            let dist_symbol = distance.decode(reader)?;
            if dist_symbol as usize >= MAX_DIST_CODES {
                return Err(Error::InvalidDistanceSymbol(dist_symbol));
            }
            let dist_index = dist_symbol as usize;
            let dist = DISTANCE_BASE[dist_index] as usize
                + reader.read_bits(DISTANCE_EXTRA_BITS[dist_index] as u32)? as usize;

            window.copy_match(length, dist, out)?;
        } else {
            // 286 and 287 have fixed-alphabet codewords but no meaning.
            return Err(Error::InvalidSymbol(symbol));
        }
    }
}
