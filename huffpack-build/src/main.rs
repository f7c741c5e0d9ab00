// Standalone front end for the table generators:
//
//   huffpack-gen --mode=full   [OUTFILE]
//   huffpack-gen --mode=nibble [OUTFILE]
//   huffpack-gen --mode=encode [OUTFILE]
//
// Emits one Rust source artifact per invocation. Exit code 0 on success,
// non-zero on bad arguments, I/O failure, or a table invariant violation.

use std::process::ExitCode;

#[derive(Clone, Copy)]
enum Mode {
    FullByte,
    Nibble,
    Encode,
}

fn usage(program: &str) {
    eprintln!("usage: {program} --mode=[full|nibble|encode] [OUTFILE]");
}

fn main() -> ExitCode {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "huffpack-gen".into());

    let mut mode = None;
    let mut out_path = None;
    for arg in args {
        if let Some(m) = arg.strip_prefix("--mode=") {
            mode = match m {
                "full" => Some(Mode::FullByte),
                "nibble" => Some(Mode::Nibble),
                "encode" => Some(Mode::Encode),
                other => {
                    eprintln!("unknown mode: {other}");
                    usage(&program);
                    return ExitCode::FAILURE;
                }
            };
        } else {
            out_path = Some(arg);
        }
    }

    let Some(mode) = mode else {
        usage(&program);
        return ExitCode::FAILURE;
    };

    let (label, default_path) = match mode {
        Mode::FullByte => ("full-byte FSM", "huffman_table_full.rs"),
        Mode::Nibble => ("nibble FSM", "huffman_table_nibble.rs"),
        Mode::Encode => ("encode", "huffman_table_encode.rs"),
    };
    let out_path = out_path.unwrap_or_else(|| default_path.to_string());

    println!("generating {label} table to {out_path}");

    let result = match mode {
        Mode::FullByte => huffpack_build::generate_full_byte(&out_path),
        Mode::Nibble => huffpack_build::generate_nibble(&out_path),
        Mode::Encode => huffpack_build::generate_encode_table(&out_path),
    };

    match result {
        Ok(()) => {
            println!("done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("cannot write {out_path}: {err}");
            ExitCode::FAILURE
        }
    }
}
