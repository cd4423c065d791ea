// Criterion benchmarks for lexis-en.
//
// Uses the sample dataset at ../../data/sample-lexicon.json relative to the
// crate root. LEXIS_DATA_PATH may point at a larger dataset file instead.
//
// Run:
//   cargo bench -p lexis-en
//   LEXIS_DATA_PATH=/path/to/lexicon.json cargo bench -p lexis-en --features parallel

use criterion::{Criterion, criterion_group, criterion_main};

use lexis_en::{ContractionExpander, LexisHandle};

// ---------------------------------------------------------------------------
// Dataset discovery
// ---------------------------------------------------------------------------

fn dataset_path() -> std::path::PathBuf {
    if let Ok(path) = std::env::var("LEXIS_DATA_PATH") {
        let path = std::path::PathBuf::from(path);
        if path.is_file() {
            return path;
        }
    }
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/sample-lexicon.json")
}

fn load_handle() -> LexisHandle {
    let data = std::fs::read(dataset_path()).expect("failed to read dataset");
    LexisHandle::from_bytes(&data, "en").expect("LexisHandle")
}

const ESSAY: &str = "The quick brown fox jumps over the lazy dog. It's happy and it \
    often walks to the garden, but the dog doesn't. We'd've gone with them if the \
    children hadn't been so tired; they'll run in the school garden tomorrow.";

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Resolve tokens that hit each stage of the cascade.
fn bench_resolve_tokens(c: &mut Criterion) {
    let handle = load_handle();
    let tokens = [
        "walk", "walking", "walked", "movement", "beautiful", "admission", "fragility", "is",
        "1984", "side", "zzyzx",
    ];

    c.bench_function("resolve_11_tokens", |b| {
        b.iter(|| {
            for token in &tokens {
                std::hint::black_box(handle.resolve(token));
            }
        });
    });
}

fn bench_expand(c: &mut Criterion) {
    let expander = ContractionExpander::new();

    c.bench_function("expand_essay", |b| {
        b.iter(|| std::hint::black_box(expander.expand(ESSAY)));
    });
}

fn bench_analyze_essay(c: &mut Criterion) {
    let mut handle = load_handle();

    c.bench_function("analyze_essay", |b| {
        b.iter(|| std::hint::black_box(handle.analyze(ESSAY)));
    });

    handle.set_parallel(true);
    let long = ESSAY.repeat(40);
    c.bench_function("analyze_long_text_parallel", |b| {
        b.iter(|| std::hint::black_box(handle.analyze(&long)));
    });
}

/// Repeated reads of an unchanged analyzer are served from the cache.
fn bench_cached_reads(c: &mut Criterion) {
    let handle = load_handle();
    let analyzer = handle.analyzer(ESSAY).expect("analyzer");

    c.bench_function("cached_level_distribution", |b| {
        b.iter(|| std::hint::black_box(analyzer.level_distribution().len()));
    });
}

criterion_group!(
    benches,
    bench_resolve_tokens,
    bench_expand,
    bench_analyze_essay,
    bench_cached_reads,
);
criterion_main!(benches);
