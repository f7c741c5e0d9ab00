use std::fmt::Write;
use std::io;
use std::path::Path;

use crate::codebook::{CODE, LEN};

struct EncodeEntry {
    bit_length: u8,
    byte_count: u8,
    bytes: [u8; 5],
}

// Left-align each codeword in a 64-bit word and slice it into octets,
// most significant first. The top `bit_length` bits of the first
// `byte_count` bytes hold the code; everything after is zero.
fn build() -> Vec<EncodeEntry> {
    (0..=256)
        .map(|sym| {
            let length = LEN[sym];
            let aligned = (CODE[sym] as u64) << (64 - length);
            let byte_count = length.div_ceil(8);
            let mut bytes = [0u8; 5];
            for (b, byte) in bytes.iter_mut().enumerate().take(byte_count as usize) {
                *byte = (aligned >> (56 - 8 * b)) as u8;
            }
            EncodeEntry {
                bit_length: length,
                byte_count,
                bytes,
            }
        })
        .collect()
}

fn verify(entries: &[EncodeEntry]) {
    assert_eq!(entries.len(), 257);
    for (sym, e) in entries.iter().enumerate() {
        assert_eq!(e.bit_length, LEN[sym]);
        assert_eq!(e.byte_count, LEN[sym].div_ceil(8));
        assert!((1..=5).contains(&e.byte_count));
        // Reassembling the sliced bytes must give back the codeword.
        let mut aligned = 0u64;
        for (b, &byte) in e.bytes.iter().enumerate() {
            aligned |= (byte as u64) << (56 - 8 * b);
        }
        assert_eq!((aligned >> (64 - e.bit_length)) as u32, CODE[sym]);
        // No stray bits below the code.
        assert_eq!(aligned & ((1u64 << (64 - e.bit_length)) - 1), 0);
    }
}

pub(crate) fn generate(path: &Path) -> io::Result<()> {
    let entries = build();
    verify(&entries);

    let mut buf = String::new();
    writeln!(
        buf,
        "// @generated by huffpack-build from the RFC 7541 Appendix B codebook.\n\
         // Do not edit; regenerate with `huffpack-gen --mode=encode`.\n"
    )
    .unwrap();

    writeln!(buf, "/// Codeword for each symbol, right-justified.").unwrap();
    writeln!(buf, "pub const CODE: [u32; 257] = [").unwrap();
    for row in CODE.chunks(6) {
        let line: Vec<String> = row.iter().map(|c| format!("{c:#x},")).collect();
        writeln!(buf, "    {}", line.join(" ")).unwrap();
    }
    writeln!(buf, "];\n").unwrap();

    writeln!(buf, "/// Codeword bit length for each symbol.").unwrap();
    writeln!(buf, "pub const LEN: [u8; 257] = [").unwrap();
    for row in LEN.chunks(16) {
        let line: Vec<String> = row.iter().map(|l| format!("{l},")).collect();
        writeln!(buf, "    {}", line.join(" ")).unwrap();
    }
    writeln!(buf, "];\n").unwrap();

    writeln!(
        buf,
        "/// A codeword pre-sliced into wire octets: the top `bit_length` bits\n\
         /// of `bytes[..byte_count]` hold the code, most significant first.\n\
         pub struct EncodeEntry {{\n\
         \x20   pub bit_length: u8,\n\
         \x20   pub byte_count: u8,\n\
         \x20   pub bytes: [u8; 5],\n\
         }}\n\n\
         const fn e(bit_length: u8, byte_count: u8, bytes: [u8; 5]) -> EncodeEntry {{\n\
         \x20   EncodeEntry {{ bit_length, byte_count, bytes }}\n\
         }}\n"
    )
    .unwrap();

    writeln!(buf, "pub static ENCODE_TABLE: [EncodeEntry; 257] = [").unwrap();
    for e in &entries {
        writeln!(
            buf,
            "    e({}, {}, [{:#04x}, {:#04x}, {:#04x}, {:#04x}, {:#04x}]),",
            e.bit_length, e.byte_count, e.bytes[0], e.bytes[1], e.bytes[2], e.bytes[3], e.bytes[4]
        )
        .unwrap();
    }
    writeln!(buf, "];").unwrap();

    std::fs::write(path, buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_verify() {
        verify(&build());
    }

    #[test]
    fn nul_is_left_aligned() {
        let entries = build();
        // 0x1ff8 over 13 bits -> 1111111111000 left-aligned.
        assert_eq!(entries[0].bit_length, 13);
        assert_eq!(entries[0].byte_count, 2);
        assert_eq!(entries[0].bytes, [0xff, 0xc0, 0, 0, 0]);
    }
}
