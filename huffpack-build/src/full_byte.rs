use std::fmt::Write;
use std::io;
use std::path::Path;

use crate::codebook::{encode_symbol, CODE, LEN};
use crate::trie::{Step, Trie, INVALID};

// One FSM row per (state, input byte) pair.
fn build(trie: &Trie) -> Vec<Step> {
    let mut table = Vec::with_capacity(trie.len() * 256);
    for state in 0..trie.len() {
        for byte in 0..256u16 {
            table.push(trie.feed(state, byte, 8));
        }
    }
    table
}

fn verify(trie: &Trie, table: &[Step], depths: &[u8], accepting: &[bool]) {
    let states = trie.len();
    assert_eq!(table.len(), states * 256);

    for e in table {
        if e.emit != INVALID {
            assert!(e.emit <= 2, "entry emits more than two symbols");
            assert!((e.next as usize) < states, "entry escapes the state space");
        }
    }

    // The root row must agree with the codebook: every byte starting with a
    // short code emits that code's symbol first.
    for sym in 0..=255usize {
        let len = LEN[sym] as u32;
        if len > 8 {
            continue;
        }
        let code = CODE[sym] as u16;
        for rest in 0..(1u16 << (8 - len)) {
            let byte = (code << (8 - len)) | rest;
            let e = &table[byte as usize];
            assert!(
                e.emit != INVALID && e.emit >= 1 && e.sym[0] == sym as u8,
                "root row disagrees with the codebook for symbol {sym}"
            );
        }
    }

    // Every symbol, encoded alone with RFC padding, must decode back to
    // itself and leave the FSM in a state the padding rules admit.
    for sym in 0..=255usize {
        let mut state = 0usize;
        let mut out = Vec::new();
        for b in encode_symbol(sym) {
            let e = &table[state * 256 + b as usize];
            assert!(e.emit != INVALID, "symbol {sym} hits an error entry");
            out.extend_from_slice(&e.sym[..e.emit as usize]);
            state = e.next as usize;
        }
        assert_eq!(out, [sym as u8], "symbol {sym} does not round-trip");
        assert!(
            state == 0 || (depths[state] < 8 && accepting[state]),
            "symbol {sym} ends in a non-accepting state"
        );
    }
}

pub(crate) fn generate(path: &Path) -> io::Result<()> {
    let trie = Trie::build();
    let table = build(&trie);
    let depths = trie.state_depths();
    let bits = trie.bit_steps();
    let accepting = trie.accepting_states();
    verify(&trie, &table, &depths, &accepting);

    let states = trie.len();
    let mut buf = String::new();
    writeln!(
        buf,
        "// @generated by huffpack-build from the RFC 7541 Appendix B codebook.\n\
         // Do not edit; regenerate with `huffpack-gen --mode=full`.\n\n\
         /// One transition of the byte-at-a-time decoder, indexed by\n\
         /// `state * 256 + input_byte`. `emit_count` 0xff marks an input\n\
         /// byte that no codeword sequence can produce from this state.\n\
         pub struct ByteEntry {{\n\
         \x20   pub next_state: u16,\n\
         \x20   pub emit_count: u8,\n\
         \x20   pub symbols: [u8; 2],\n\
         }}\n\n\
         /// Single-bit transition, for the trailing-padding check.\n\
         pub struct BitEntry {{\n\
         \x20   pub next_state: u16,\n\
         \x20   pub emit_count: u8,\n\
         }}\n\n\
         const fn e(next_state: u16, emit_count: u8, s0: u8, s1: u8) -> ByteEntry {{\n\
         \x20   ByteEntry {{ next_state, emit_count, symbols: [s0, s1] }}\n\
         }}\n\n\
         const fn b(next_state: u16, emit_count: u8) -> BitEntry {{\n\
         \x20   BitEntry {{ next_state, emit_count }}\n\
         }}\n"
    )
    .unwrap();

    writeln!(buf, "pub static BYTE_TABLE: [ByteEntry; {}] = [", states * 256).unwrap();
    for row in table.chunks(8) {
        let line: Vec<String> = row
            .iter()
            .map(|e| format!("e({},{},{},{}),", e.next, e.emit, e.sym[0], e.sym[1]))
            .collect();
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
            .map(|[zero, one]| {
                format!(
                    "[b({},{}), b({},{})],",
                    zero.0, zero.1, one.0, one.1
                )
            })
            .collect();
        writeln!(buf, "    {}", line.join(" ")).unwrap();
    }
    writeln!(buf, "];\n").unwrap();

    writeln!(
        buf,
        "/// States where a decode may validly end: the root, plus the\n\
         /// states whose pending bits are 1..=7 ones (an EOS prefix).\n\
         pub static ACCEPTING: [bool; {states}] = ["
    )
    .unwrap();
    for row in accepting.chunks(16) {
        let line: Vec<String> = row.iter().map(|a| format!("{a},")).collect();
        writeln!(buf, "    {}", line.join(" ")).unwrap();
    }
    writeln!(buf, "];").unwrap();

    std::fs::write(path, buf)
}
