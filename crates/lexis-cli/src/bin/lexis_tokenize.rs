// lexis-tokenize: Tokenize text into words, punctuation and whitespace.
//
// Reads text from stdin and prints one token per line as
// "TYPE<TAB>POS<TAB>TEXT". Contractions stay whole ("don't").
//
// Usage:
//   lexis-tokenize [--json] [TEXT...]
//
// Options:
//       --json   Print each line's tokens as a JSON array
//   -h, --help   Print help

use std::io::{self, Write};

use lexis_core::TokenType;
use lexis_en::tokenizer::{self, RunMode};

fn type_name(token_type: TokenType) -> &'static str {
    match token_type {
        TokenType::Word => "WORD",
        TokenType::Punctuation => "PUNCT",
        TokenType::Whitespace => "SPACE",
        TokenType::Unknown => "UNKNOWN",
    }
}

fn main() {
    lexis_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lexis_cli::wants_help(&args) {
        println!("lexis-tokenize: Split text into tokens.");
        println!();
        println!("Usage: lexis-tokenize [--json] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, tokenizes each one.");
        println!("Otherwise reads lines from stdin.");
        println!();
        println!("Options:");
        println!("      --json   Print each line's tokens as a JSON array");
        println!("  -h, --help   Print this help");
        return;
    }

    let json = lexis_cli::wants_json(&args);
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in lexis_cli::inputs(&args) {
        let tokens = tokenizer::tokenize(&line, RunMode::Contraction);
        if json {
            match serde_json::to_string(&tokens) {
                Ok(encoded) => {
                    let _ = writeln!(out, "{encoded}");
                }
                Err(e) => lexis_cli::fatal(&format!("failed to encode tokens: {e}")),
            }
            continue;
        }
        for token in &tokens {
            let _ = writeln!(out, "{}\t{}\t{}", type_name(token.token_type), token.pos, token.text);
        }
        let _ = writeln!(out);
    }
}
