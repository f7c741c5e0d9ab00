//! `huffpack-build` derives the lookup tables used by the
//! [`huffpack`](https://docs.rs/huffpack) HPACK Huffman codec from the
//! canonical RFC 7541 Appendix B codebook, and emits them as Rust source.
//!
//! Three artifacts are produced:
//!
//! - the per-symbol encode table (codeword pre-sliced into wire octets);
//! - the full-byte decoder FSM (one transition per input octet, large);
//! - the 4-bit nibble decoder FSM (two transitions per octet, compact).
//!
//! Both decoder artifacts also carry the bit-step table, the state-depth
//! table and the accepting-state set that the trailing-padding check needs,
//! so either one is self-contained.
//!
//! # Usage
//!
//! Add it as a build dependency and generate the tables from `build.rs`:
//!
//! ```toml
//! [build-dependencies]
//! huffpack-build = "0.2"
//! ```
//!
//! ```rust,ignore
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let out = std::path::PathBuf::from(std::env::var("OUT_DIR")?);
//!     huffpack_build::generate_encode_table(out.join("huffman_table_encode.rs"))?;
//!     huffpack_build::generate_full_byte(out.join("huffman_table_full.rs"))?;
//!     huffpack_build::generate_nibble(out.join("huffman_table_nibble.rs"))?;
//!     Ok(())
//! }
//! ```
//!
//! The same generators are exposed on the command line as `huffpack-gen
//! --mode={full|nibble|encode} [OUTFILE]`.
//!
//! Every generator re-derives its tables from the codebook and verifies
//! them -- FSM entries stay inside the state space, the root row agrees
//! with the codebook, and each symbol round-trips through the freshly
//! built FSM with RFC padding. A violation panics, failing the build;
//! only I/O errors are returned.

use std::io;
use std::path::Path;

pub mod codebook;

mod encode_table;
mod full_byte;
mod nibble;
mod trie;

/// Emit the per-symbol encode table (plus the codebook arrays).
pub fn generate_encode_table(path: impl AsRef<Path>) -> io::Result<()> {
    encode_table::generate(path.as_ref())
}

/// Emit the full-byte decoder FSM and its padding-check tables.
pub fn generate_full_byte(path: impl AsRef<Path>) -> io::Result<()> {
    full_byte::generate(path.as_ref())
}

/// Emit the packed nibble decoder FSM and its padding-check tables.
pub fn generate_nibble(path: impl AsRef<Path>) -> io::Result<()> {
    nibble::generate(path.as_ref())
}
