//! Full-byte FSM backend: one table lookup per input octet.

use crate::error::Error;
use crate::macros::trace;
use crate::tables::full::{ACCEPTING, BIT_TABLE, BYTE_TABLE, STATE_DEPTH};

const INVALID: u8 = 0xff;

/// Decode `src` into `dst`, returning the byte count written.
pub fn decode(src: &[u8], dst: &mut [u8]) -> Result<usize, Error> {
    let mut state = 0usize;
    let mut pos = 0usize;

    for (i, &b) in src.iter().enumerate() {
        let e = &BYTE_TABLE[state * 256 + b as usize];
        if e.emit_count == INVALID {
            trace!("huffman: byte {:#04x} at offset {} matches no codeword", b, i);
            return Err(Error::InvalidPrefix);
        }
        let n = e.emit_count as usize;
        if pos + n > dst.len() {
            return Err(Error::OutputTooSmall);
        }
        if n >= 1 {
            dst[pos] = e.symbols[0];
        }
        if n == 2 {
            dst[pos + 1] = e.symbols[1];
        }
        pos += n;
        state = e.next_state as usize;
    }

    finish(state)?;
    Ok(pos)
}

// End-of-input check: the bits consumed since the last codeword must be a
// valid EOS-prefix padding. See the module docs in `decoder`.
fn finish(state: usize) -> Result<(), Error> {
    if state == 0 {
        return Ok(());
    }
    let depth = STATE_DEPTH[state] as usize;
    if depth >= 8 {
        trace!("huffman: {} bits of padding or truncated codeword", depth);
        return Err(Error::InvalidEos);
    }
    // Were the last byte extended with ones, no further codeword may
    // complete; sentinel entries (0xff) fail the same test.
    let mut s = state;
    for _ in depth..8 {
        let step = &BIT_TABLE[s][1];
        if step.emit_count != 0 {
            trace!("huffman: padding completes another codeword");
            return Err(Error::InvalidPadding);
        }
        s = step.next_state as usize;
    }
    // The pending bits themselves must all be ones.
    if !ACCEPTING[state] {
        trace!("huffman: padding contains a zero bit");
        return Err(Error::InvalidPadding);
    }
    Ok(())
}
