// lexis-analyze: Part-of-speech and CEFR-level statistics for a text.
//
// Reads the whole of stdin (or the TEXT arguments joined by spaces) as one
// text and prints its level distribution, per-part-of-speech word counts
// and summary statistics.
//
// Usage:
//   lexis-analyze [-d DATA_PATH] [-l LANG] [--all] [--lowest-level] [--expand] [--json] [TEXT...]
//
// Options:
//   -d, --data-path PATH   Dataset file, or directory containing lexicon.json
//   -l, --lang CODE        Language code (default: en)
//       --all              Keep functional (closed-class) words
//       --lowest-level     Pick the easiest candidate instead of the first
//       --expand           Expand contractions before splitting into words
//       --json             Print the statistics as JSON
//   -h, --help             Print help

use std::io::{self, Read, Write};

use serde_json::json;

use lexis_en::{AnalysisResult, CandidatePolicy};

fn print_help() {
    println!("lexis-analyze: Lexical statistics for a text.");
    println!();
    println!(
        "Usage: lexis-analyze [-d DATA_PATH] [-l LANG] [--all] [--lowest-level] [--expand] [--json] [TEXT...]"
    );
    println!();
    println!("If TEXT arguments are given, analyzes them as one text.");
    println!("Otherwise reads the whole of stdin.");
    println!();
    println!("Options:");
    println!("  -d, --data-path PATH   Dataset file, or directory containing lexicon.json");
    println!("  -l, --lang CODE        Language code (default: en)");
    println!("      --all              Keep functional (closed-class) words");
    println!("      --lowest-level     Pick the easiest candidate instead of the first");
    println!("      --expand           Expand contractions before splitting into words");
    println!("      --json             Print the statistics as JSON");
    println!("  -h, --help             Print this help");
}

fn to_json(result: &AnalysisResult) -> serde_json::Value {
    let levels: serde_json::Map<String, serde_json::Value> = result
        .level_distribution()
        .iter()
        .map(|(level, share)| (level.to_string(), json!(share)))
        .collect();
    let parts: serde_json::Map<String, serde_json::Value> = result
        .part_of_speech_breakdown()
        .iter()
        .map(|(pos, counts)| {
            let mut words: Vec<(&str, usize)> =
                counts.iter().map(|(w, &n)| (w.term(), n)).collect();
            words.sort();
            let words: serde_json::Map<String, serde_json::Value> = words
                .into_iter()
                .map(|(term, n)| (term.to_string(), json!(n)))
                .collect();
            (pos.as_str().to_string(), serde_json::Value::Object(words))
        })
        .collect();
    json!({
        "tokens": result.token_count(),
        "retained": result.retained_count(),
        "unique": result.unique_words(),
        "unclassified": result.unclassified_count(),
        "type_token_ratio": result.type_token_ratio(),
        "lexical_density": result.lexical_density(),
        "levels": levels,
        "parts_of_speech": parts,
    })
}

fn print_text(out: &mut impl Write, result: &AnalysisResult) -> io::Result<()> {
    writeln!(
        out,
        "tokens: {}  retained: {}  unique: {}  unclassified: {}",
        result.token_count(),
        result.retained_count(),
        result.unique_words(),
        result.unclassified_count()
    )?;
    writeln!(
        out,
        "type/token ratio: {:.3}  lexical density: {:.3}",
        result.type_token_ratio(),
        result.lexical_density()
    )?;

    writeln!(out, "\nCEFR levels:")?;
    for (level, share) in result.level_distribution() {
        let count = result.level_counts().get(level).copied().unwrap_or(0);
        writeln!(out, "  {:<8} {count:>5}  {:>6.1}%", level.as_str(), share * 100.0)?;
    }

    writeln!(out, "\nParts of speech:")?;
    for (pos, counts) in result.part_of_speech_breakdown() {
        let mut words: Vec<_> = counts.iter().collect();
        words.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.term().cmp(b.0.term())));
        let listed: Vec<String> = words
            .iter()
            .map(|(word, n)| format!("{} x{n}", word.term()))
            .collect();
        writeln!(out, "  {pos}: {}", listed.join(", "))?;
    }
    Ok(())
}

fn main() {
    lexis_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = lexis_cli::parse_data_path(&args);
    let (lang, args) = lexis_cli::parse_language(&args);

    if lexis_cli::wants_help(&args) {
        print_help();
        return;
    }

    let keep_functional = args.iter().any(|a| a == "--all");
    let lowest_level = args.iter().any(|a| a == "--lowest-level");
    let expand = args.iter().any(|a| a == "--expand");
    let json = lexis_cli::wants_json(&args);

    let positional: Vec<&str> = args
        .iter()
        .filter(|a| !a.starts_with('-'))
        .map(String::as_str)
        .collect();
    let text = if positional.is_empty() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .unwrap_or_else(|e| lexis_cli::fatal(&format!("error reading stdin: {e}")));
        buf
    } else {
        positional.join(" ")
    };

    let mut handle = lexis_cli::load_handle(data_path.as_deref(), &lang)
        .unwrap_or_else(|e| lexis_cli::fatal(&e));
    handle.set_exclude_functional(!keep_functional);
    handle.set_expand_contractions(expand);
    if lowest_level {
        handle.set_candidate_policy(CandidatePolicy::LowestLevel);
    }

    let result = handle
        .analyze(&text)
        .unwrap_or_else(|e| lexis_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let written = if json {
        writeln!(out, "{:#}", to_json(&result))
    } else {
        print_text(&mut out, &result)
    };
    if let Err(e) = written {
        lexis_cli::fatal(&format!("failed to write output: {e}"));
    }
}
