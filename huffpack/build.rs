fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    let out = std::path::PathBuf::from(std::env::var("OUT_DIR")?);
    huffpack_build::generate_encode_table(out.join("huffman_table_encode.rs"))?;
    huffpack_build::generate_full_byte(out.join("huffman_table_full.rs"))?;
    huffpack_build::generate_nibble(out.join("huffman_table_nibble.rs"))?;
    Ok(())
}
