// lexis-search: Dictionary search by word, prefix or suffix.
//
// Prints up to LIMIT entries for each query, easiest CEFR level first.
//
// Usage:
//   lexis-search [-d DATA_PATH] [-l LANG] [-n LIMIT] [QUERY...]
//
// Options:
//   -d, --data-path PATH   Dataset file, or directory containing lexicon.json
//   -l, --lang CODE        Language code (default: en)
//   -n, --limit N          Maximum entries per query (default: 20)
//   -h, --help             Print help

use std::io::{self, Write};

const DEFAULT_LIMIT: usize = 20;

fn main() {
    lexis_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = lexis_cli::parse_data_path(&args);
    let (lang, args) = lexis_cli::parse_language(&args);

    let mut limit = DEFAULT_LIMIT;
    let mut rest = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "-n" || arg == "--limit" {
            let value = iter
                .next()
                .unwrap_or_else(|| lexis_cli::fatal(&format!("{arg} requires a value")));
            limit = value
                .parse()
                .unwrap_or_else(|_| lexis_cli::fatal(&format!("invalid limit: {value}")));
        } else {
            rest.push(arg.clone());
        }
    }

    if lexis_cli::wants_help(&rest) {
        println!("lexis-search: Search the dictionary.");
        println!();
        println!("Usage: lexis-search [-d DATA_PATH] [-l LANG] [-n LIMIT] [QUERY...]");
        println!();
        println!("If QUERY arguments are given, searches each one.");
        println!("Otherwise reads queries from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Dataset file, or directory containing lexicon.json");
        println!("  -l, --lang CODE        Language code (default: en)");
        println!("  -n, --limit N          Maximum entries per query (default: {DEFAULT_LIMIT})");
        println!("  -h, --help             Print this help");
        return;
    }

    let handle = lexis_cli::load_handle(data_path.as_deref(), &lang)
        .unwrap_or_else(|e| lexis_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for query in lexis_cli::inputs(&rest) {
        let found = handle.search(&query, limit);
        let _ = writeln!(out, "{query}: {} result(s)", found.len());
        for word in &found {
            match word.category() {
                Some(category) => {
                    let _ = writeln!(out, "  {word} [{category}]");
                }
                None => {
                    let _ = writeln!(out, "  {word}");
                }
            }
        }
    }
}
