use std::fmt::Write;
use std::io;
use std::path::Path;

use crate::codebook::encode_symbol;
use crate::trie::{Step, Trie, INVALID};

// Packed nibble transition:
//   bit 31      error flag
//   bits 22..31 next state (9 bits)
//   bits 20..22 emit count
//   bits 12..20 first emitted symbol
//   bits  4..12 second emitted symbol
const ERROR_WORD: u32 = 1 << 31;

fn pack(step: &Step) -> u32 {
    if step.emit == INVALID {
        return ERROR_WORD;
    }
    assert!(step.next < 1 << 9, "state does not fit the 9-bit field");
    let mut word = (step.next as u32) << 22 | (step.emit as u32) << 20;
    if step.emit >= 1 {
        word |= (step.sym[0] as u32) << 12;
    }
    if step.emit == 2 {
        word |= (step.sym[1] as u32) << 4;
    }
    word
}

fn build(trie: &Trie) -> Vec<u32> {
    let mut table = Vec::with_capacity(trie.len() * 16);
    for state in 0..trie.len() {
        for nib in 0..16u16 {
            table.push(pack(&trie.feed(state, nib, 4)));
        }
    }
    table
}

fn accepting_words(accepting: &[bool]) -> Vec<u64> {
    let mut words = vec![0u64; accepting.len().div_ceil(64)];
    for (state, &a) in accepting.iter().enumerate() {
        if a {
            words[state / 64] |= 1 << (state % 64);
        }
    }
    words
}

fn verify(trie: &Trie, table: &[u32], depths: &[u8], words: &[u64]) {
    let states = trie.len();
    assert_eq!(table.len(), states * 16);

    for &word in table {
        if word & ERROR_WORD == 0 {
            let next = (word >> 22) & 0x1ff;
            let emit = (word >> 20) & 0x3;
            assert!((next as usize) < states);
            // Four bits can finish at most one five-bit-or-longer code.
            assert!(emit <= 1, "a nibble completed two codes");
        }
    }

    let accepting = |state: usize| words[state / 64] >> (state % 64) & 1 != 0;

    // Per-symbol round-trip through the nibble FSM.
    for sym in 0..=255usize {
        let mut state = 0usize;
        let mut out = Vec::new();
        for b in encode_symbol(sym) {
            for nib in [b >> 4, b & 0xf] {
                let word = table[state * 16 + nib as usize];
                assert_eq!(word & ERROR_WORD, 0, "symbol {sym} hits an error word");
                match (word >> 20) & 0x3 {
                    0 => {}
                    1 => out.push((word >> 12) as u8),
                    _ => {
                        out.push((word >> 12) as u8);
                        out.push((word >> 4) as u8);
                    }
                }
                state = ((word >> 22) & 0x1ff) as usize;
            }
        }
        assert_eq!(out, [sym as u8], "symbol {sym} does not round-trip");
        assert!(
            state == 0 || (depths[state] < 8 && accepting(state)),
            "symbol {sym} ends in a non-accepting state"
        );
    }
}

pub(crate) fn generate(path: &Path) -> io::Result<()> {
    let trie = Trie::build();
    let table = build(&trie);
    let depths = trie.state_depths();
    let bits = trie.bit_steps();
    let words = accepting_words(&trie.accepting_states());
    verify(&trie, &table, &depths, &words);

    let states = trie.len();
    let mut buf = String::new();
    writeln!(
        buf,
        "// @generated by huffpack-build from the RFC 7541 Appendix B codebook.\n\
         // Do not edit; regenerate with `huffpack-gen --mode=nibble`.\n\n\
         /// Single-bit transition, for the trailing-padding check.\n\
         pub struct BitEntry {{\n\
         \x20   pub next_state: u16,\n\
         \x20   pub emit_count: u8,\n\
         }}\n\n\
         const fn b(next_state: u16, emit_count: u8) -> BitEntry {{\n\
         \x20   BitEntry {{ next_state, emit_count }}\n\
         }}\n"
    )
    .unwrap();

    writeln!(
        buf,
        "/// Packed transitions indexed by `state * 16 + nibble`: bit 31\n\
         /// flags an error, bits 22..31 hold the next state, bits 20..22\n\
         /// the emit count, bits 12..20 and 4..12 the emitted symbols.\n\
         pub static NIBBLE_TABLE: [u32; {}] = [",
        states * 16
    )
    .unwrap();
    for row in table.chunks(8) {
        let line: Vec<String> = row.iter().map(|w| format!("{w:#010x},")).collect();
        writeln!(buf, "    {}", line.join(" ")).unwrap();
    }
    writeln!(buf, "];\n").unwrap();

    writeln!(
        buf,
        "/// Bits consumed since the last completed symbol, per state.\n\
         pub static STATE_DEPTH: [u8; {states}] = ["
    )
    .unwrap();
    for row in depths.chunks(16) {
        let line: Vec<String> = row.iter().map(|d| format!("{d},")).collect();
        writeln!(buf, "    {}", line.join(" ")).unwrap();
    }
    writeln!(buf, "];\n").unwrap();

    writeln!(buf, "pub static BIT_TABLE: [[BitEntry; 2]; {states}] = [").unwrap();
    for row in bits.chunks(4) {
        let line: Vec<String> = row
            .iter()
            .map(|[zero, one]| format!("[b({},{}), b({},{})],", zero.0, zero.1, one.0, one.1))
            .collect();
        writeln!(buf, "    {}", line.join(" ")).unwrap();
    }
    writeln!(buf, "];\n").unwrap();

    writeln!(
        buf,
        "/// One bit per state, set where a decode may validly end: the\n\
         /// root, plus the states whose pending bits are an EOS prefix.\n\
         pub static ACCEPTING_WORDS: [u64; {}] = [",
        words.len()
    )
    .unwrap();
    for word in &words {
        writeln!(buf, "    {word:#018x},").unwrap();
    }
    writeln!(buf, "];").unwrap();

    std::fs::write(path, buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_verifies() {
        let trie = Trie::build();
        let table = build(&trie);
        verify(
            &trie,
            &table,
            &trie.state_depths(),
            &accepting_words(&trie.accepting_states()),
        );
    }

    #[test]
    fn packing_round_trips() {
        let step = Step {
            next: 0x1f3,
            emit: 1,
            sym: [0x61, 0],
        };
        let word = pack(&step);
        assert_eq!((word >> 22) & 0x1ff, 0x1f3);
        assert_eq!((word >> 20) & 0x3, 1);
        assert_eq!((word >> 12) & 0xff, 0x61);
        assert_eq!(word & ERROR_WORD, 0);
    }
}
