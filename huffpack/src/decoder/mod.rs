//! Huffman decoder.
//!
//! Two interchangeable table-driven backends decode the same language and
//! emit the same bytes and error kinds; they differ only in table size and
//! lookups per input byte. [`decode`] picks one at compile time via the
//! `decoder-full-byte` feature (nibble by default); both stay available
//! here for callers that want an explicit choice.
//!
//! Decoding never interprets the output: whatever octets were encoded come
//! back out, valid UTF-8 or not.
//!
//! # Trailing padding
//!
//! A well-formed input ends on a codeword boundary or with 1..=7 one-bits,
//! the high bits of EOS. The FSM consumes those padding bits like any
//! others, so at end of input the state's depth *is* the padding length.
//! The check shared by both backends rejects, in order:
//!
//! - eight or more bits since the last codeword ([`Error::InvalidEos`]):
//!   over-long padding or a truncated long codeword;
//! - padding that would complete a symbol if the byte were extended with
//!   ones, or that contains a zero bit ([`Error::InvalidPadding`]).
//!
//! An explicit 30-bit EOS codeword never gets this far: the generator
//! turns every transition reaching the EOS leaf into an error entry, so
//! the main loop reports [`Error::InvalidPrefix`].

pub mod full_byte;
pub mod nibble;

use crate::error::Error;

/// Huffman-decode `src` into `dst`, returning the byte count written.
///
/// Empty input decodes to nothing. `dst` must hold the decoded result;
/// [`max_decoded_len`]`(src.len())` always suffices.
pub fn decode(src: &[u8], dst: &mut [u8]) -> Result<usize, Error> {
    if cfg!(feature = "decoder-full-byte") {
        full_byte::decode(src, dst)
    } else {
        nibble::decode(src, dst)
    }
}

/// Decode into a freshly allocated `Vec`.
pub fn decode_to_vec(src: &[u8]) -> Result<Vec<u8>, Error> {
    let mut out = vec![0u8; max_decoded_len(src.len())];
    let n = decode(src, &mut out)?;
    out.truncate(n);
    Ok(out)
}

/// Upper bound on the decoded size of `len` encoded bytes: no codeword is
/// shorter than five bits, so at most `len * 8 / 5` symbols fit.
pub fn max_decoded_len(len: usize) -> usize {
    len * 8 / 5
}
