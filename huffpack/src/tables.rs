// Generated by `huffpack-build` from the canonical codebook (see this
// crate's build.rs). Each module is self-contained: both decoder
// artifacts carry their own copy of the padding-check tables so either
// backend can be compiled alone.

pub mod encode {
    include!(concat!(env!("OUT_DIR"), "/huffman_table_encode.rs"));
}

pub mod full {
    include!(concat!(env!("OUT_DIR"), "/huffman_table_full.rs"));
}

pub mod nibble {
    include!(concat!(env!("OUT_DIR"), "/huffman_table_nibble.rs"));
}
