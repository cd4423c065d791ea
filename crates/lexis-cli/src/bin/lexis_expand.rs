// lexis-expand: Expand English contractions.
//
// Reads lines from stdin and prints each with its contractions spelled
// out ("I'd've" -> "I would have"). Punctuation is dropped and words are
// re-joined with single spaces.
//
// Usage:
//   lexis-expand [TEXT...]
//
// Options:
//   -h, --help   Print help

use std::io::{self, Write};

use lexis_en::ContractionExpander;

fn main() {
    lexis_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lexis_cli::wants_help(&args) {
        println!("lexis-expand: Expand English contractions.");
        println!();
        println!("Usage: lexis-expand [TEXT...]");
        println!();
        println!("If TEXT arguments are given, expands each one.");
        println!("Otherwise reads lines from stdin.");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }

    let expander = ContractionExpander::new();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in lexis_cli::inputs(&args) {
        match expander.expand(&line) {
            Ok(expanded) => {
                let _ = writeln!(out, "{expanded}");
            }
            Err(e) => eprintln!("skipping {line:?}: {e}"),
        }
    }
}
