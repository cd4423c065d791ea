// lexis-baseform: Base forms of (possibly contracted) multi-word lemmas.
//
// Reads lemmas from stdin (one per line) and prints "lemma -> base form",
// e.g. "couldn't've gone -> could not have go".
//
// Usage:
//   lexis-baseform [-d DATA_PATH] [LEMMA...]
//
// Options:
//   -d, --data-path PATH   Dataset file, or directory containing lexicon.json
//   -h, --help             Print help

use std::io::{self, Write};

fn main() {
    lexis_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = lexis_cli::parse_data_path(&args);

    if lexis_cli::wants_help(&args) {
        println!("lexis-baseform: Reduce lemmas to their base forms.");
        println!();
        println!("Usage: lexis-baseform [-d DATA_PATH] [LEMMA...]");
        println!();
        println!("If LEMMA arguments are given, reduces each one.");
        println!("Otherwise reads lemmas from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Dataset file, or directory containing lexicon.json");
        println!("  -h, --help             Print this help");
        return;
    }

    let handle = lexis_cli::load_handle(data_path.as_deref(), "en")
        .unwrap_or_else(|e| lexis_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for lemma in lexis_cli::inputs(&args) {
        let _ = writeln!(out, "{lemma} -> {}", handle.base_form(&lemma));
    }
}
