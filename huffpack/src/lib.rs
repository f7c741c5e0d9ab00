//! Huffman codec for HPACK string literals (RFC 7541 Appendix B).
//!
//! HTTP/2 header compression Huffman-codes the bytes of string literals
//! with a fixed, canonical code: every octet maps to a 5..=30-bit
//! codeword, and the final byte is padded with the high bits of the
//! 30-bit EOS codeword, which are all ones. This crate is only that
//! codec -- the surrounding HPACK machinery (indexing tables, integer
//! prefixes, header framing) lives elsewhere and calls in here.
//!
//! The codec is byte-transparent: decoded output is whatever octets were
//! encoded, with no character-set interpretation or UTF-8 validation.
//!
//! # Shape
//!
//! All lookup tables are derived from the codebook at build time by the
//! `huffpack-build` crate and compiled in as immutable statics. Encoding
//! runs a 64-bit accumulator with batched 32-bit flushes; decoding runs a
//! precomputed finite-state machine with one of two interchangeable
//! backends:
//!
//! - the **nibble FSM** (default): two table hits per input byte against
//!   a packed ~40KiB table;
//! - the **full-byte FSM** (`decoder-full-byte` feature): one table hit
//!   per input byte against a ~1.3MiB table.
//!
//! Both accept exactly the same inputs, produce the same output, and
//! report the same error kinds. Everything is a pure function over
//! caller-owned buffers; the statics are read-only, so any number of
//! threads may encode and decode concurrently.
//!
//! # Example
//!
//! ```rust
//! let mut encoded = vec![0u8; huffpack::max_encoded_len(15)];
//! let n = huffpack::encode(b"www.example.com", &mut encoded).unwrap();
//! assert_eq!(n, 12);
//!
//! let mut decoded = vec![0u8; huffpack::max_decoded_len(n)];
//! let m = huffpack::decode(&encoded[..n], &mut decoded).unwrap();
//! assert_eq!(&decoded[..m], b"www.example.com");
//! ```

pub mod codebook;
pub mod decoder;
pub mod encoder;

mod error;
mod macros;
mod tables;

pub use decoder::{decode, decode_to_vec, max_decoded_len};
pub use encoder::{encode, encode_to_vec, encoded_len, max_encoded_len};
pub use error::Error;
