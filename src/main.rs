use std::{env, process};

use rocks_lang::rocks;

/// Hand-parses the single optional `--filename PATH` flag; any other
/// argument shape is a CLI usage error.
fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut interpreter = rocks::new();

    match args.as_slice() {
        [] => interpreter.run_prompt(),
        [flag, path] if flag == "--filename" => interpreter.run_file(path),
        _ => {
            eprintln!("Usage: rocks [--filename PATH]");
            process::exit(64);
        }
    }
}
