// lexis-resolve: Dictionary entries for words from stdin.
//
// Reads words from stdin (one per line) and prints every dictionary entry
// the resolver finds for each: exact matches, suffix fallbacks, or a
// broadened prefix/suffix search.
//
// Usage:
//   lexis-resolve [-d DATA_PATH] [-l LANG] [--json] [WORD...]
//
// Options:
//   -d, --data-path PATH   Dataset file, or directory containing lexicon.json
//   -l, --lang CODE        Language code (default: en)
//       --json             Print one JSON array per word
//   -h, --help             Print help

use std::io::{self, Write};

fn main() {
    lexis_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = lexis_cli::parse_data_path(&args);
    let (lang, args) = lexis_cli::parse_language(&args);

    if lexis_cli::wants_help(&args) {
        println!("lexis-resolve: Look up dictionary entries for words.");
        println!();
        println!("Usage: lexis-resolve [-d DATA_PATH] [-l LANG] [--json] [WORD...]");
        println!();
        println!("If WORD arguments are given, resolves each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Dataset file, or directory containing lexicon.json");
        println!("  -l, --lang CODE        Language code (default: en)");
        println!("      --json             Print one JSON array per word");
        println!("  -h, --help             Print this help");
        return;
    }

    let json = lexis_cli::wants_json(&args);
    let handle = lexis_cli::load_handle(data_path.as_deref(), &lang)
        .unwrap_or_else(|e| lexis_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for word in lexis_cli::inputs(&args) {
        let found = handle.resolve(&word);
        if json {
            match serde_json::to_string(&found) {
                Ok(line) => {
                    let _ = writeln!(out, "{line}");
                }
                Err(e) => lexis_cli::fatal(&format!("failed to encode {word}: {e}")),
            }
        } else if found.is_empty() {
            let _ = writeln!(out, "{word}: (no match)");
        } else {
            let _ = writeln!(out, "{word}:");
            for entry in &found {
                let _ = writeln!(out, "  {entry}");
            }
        }
    }
}
