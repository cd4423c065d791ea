// lexis-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use lexis_en::{LexisError, LexisHandle};

/// Dataset file name looked up in each search directory.
const DATASET_FILE: &str = "lexicon.json";

/// Environment variable holding a dataset file or directory.
const DATA_PATH_ENV: &str = "LEXIS_DATA_PATH";

/// Environment variable holding the log filter.
const LOG_ENV: &str = "LEXIS_LOG";

/// Install a stderr log subscriber filtered by `LEXIS_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Search for a dataset and create a LexisHandle.
///
/// Search order:
/// 1. `data_path` argument (file, or directory containing `lexicon.json`)
/// 2. `LEXIS_DATA_PATH` environment variable (same)
/// 3. `~/.lexis/lexicon.json`
/// 4. `/usr/share/lexis/lexicon.json`
/// 5. `./lexicon.json`
pub fn load_handle(data_path: Option<&str>, language: &str) -> Result<LexisHandle, String> {
    let candidates = build_search_paths(data_path);

    for path in &candidates {
        if path.is_file() {
            let data = std::fs::read(path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            tracing::debug!(path = %path.display(), "loading lexical dataset");
            return LexisHandle::from_bytes(&data, language).map_err(|e: LexisError| {
                format!("failed to load {}: {e}", path.display())
            });
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DATASET_FILE,
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Expand a user-supplied path: files are taken as is, anything else is
/// treated as a directory holding `lexicon.json`.
fn dataset_candidates(path: &str) -> [PathBuf; 2] {
    let path = PathBuf::from(path);
    let nested = path.join(DATASET_FILE);
    [path, nested]
}

/// Build the list of dataset files to try, in order.
fn build_search_paths(data_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = data_path {
        paths.extend(dataset_candidates(p));
    }

    if let Ok(env_path) = std::env::var(DATA_PATH_ENV) {
        paths.extend(dataset_candidates(&env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".lexis").join(DATASET_FILE));
    }

    paths.push(PathBuf::from("/usr/share/lexis").join(DATASET_FILE));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DATASET_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Pull `--NAME=VALUE`, `--NAME VALUE` or `-S VALUE` out of `args`.
///
/// Returns `(value, remaining_args)`, or an error for a flag without a value.
fn take_option(
    args: &[String],
    long: &str,
    short: &str,
) -> Result<(Option<String>, Vec<String>), String> {
    let mut value = None;
    let mut remaining = Vec::new();
    let prefix = format!("{long}=");
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Parse a `--data-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(data_path, remaining_args)`.
pub fn parse_data_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "--data-path", "-d").unwrap_or_else(|e| fatal(&e))
}

/// Parse a `--lang=CODE` or `-l CODE` argument; defaults to `en`.
///
/// Returns `(language, remaining_args)`.
pub fn parse_language(args: &[String]) -> (String, Vec<String>) {
    let (lang, rest) = take_option(args, "--lang", "-l").unwrap_or_else(|e| fatal(&e));
    (lang.unwrap_or_else(|| "en".to_string()), rest)
}

/// Positional arguments, or non-empty stdin lines when there are none.
pub fn inputs(args: &[String]) -> Vec<String> {
    let positional: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();
    if !positional.is_empty() {
        return positional;
    }

    use std::io::BufRead;
    let mut lines = Vec::new();
    for line in std::io::stdin().lock().lines() {
        match line {
            Ok(l) if !l.trim().is_empty() => lines.push(l.trim().to_string()),
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        }
    }
    lines
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check if `--json` is in the args.
pub fn wants_json(args: &[String]) -> bool {
    args.iter().any(|a| a == "--json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn data_path_short_and_long_forms() {
        let (path, rest) = parse_data_path(&args(&["-d", "/tmp/x", "walk"]));
        assert_eq!(path.as_deref(), Some("/tmp/x"));
        assert_eq!(rest, args(&["walk"]));

        let (path, rest) = parse_data_path(&args(&["walk", "--data-path=/srv/lexicon.json"]));
        assert_eq!(path.as_deref(), Some("/srv/lexicon.json"));
        assert_eq!(rest, args(&["walk"]));
    }

    #[test]
    fn missing_option_value_is_an_error() {
        assert!(take_option(&args(&["-d"]), "--data-path", "-d").is_err());
    }

    #[test]
    fn language_defaults_to_english() {
        let (lang, rest) = parse_language(&args(&["walk"]));
        assert_eq!(lang, "en");
        assert_eq!(rest, args(&["walk"]));
        let (lang, _) = parse_language(&args(&["-l", "sv"]));
        assert_eq!(lang, "sv");
    }

    #[test]
    fn explicit_path_is_searched_first() {
        let paths = build_search_paths(Some("/data"));
        assert_eq!(paths[0], PathBuf::from("/data"));
        assert_eq!(paths[1], PathBuf::from("/data/lexicon.json"));
        assert!(paths.contains(&PathBuf::from("/usr/share/lexis/lexicon.json")));
    }

    #[test]
    fn loads_sample_dataset() {
        let sample = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/sample-lexicon.json");
        let handle = load_handle(Some(sample), "en").unwrap();
        assert!(!handle.resolve("walking").is_empty());
    }

    #[test]
    fn flags() {
        assert!(wants_help(&args(&["x", "-h"])));
        assert!(wants_json(&args(&["--json"])));
        assert!(!wants_json(&args(&["json"])));
    }
}
