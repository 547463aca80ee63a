// Criterion benchmarks for index construction and the search operations.
//
// Runs against a synthetic root set so no dataset file is required:
//   cargo bench -p lugat-index

use criterion::{Criterion, criterion_group, criterion_main};

use lugat_core::{PartOfSpeech, Root, RootSet};
use lugat_index::{Index, SearchField};

/// Deterministic synthetic dictionary: Latin-ish spellings over a small
/// alphabet paired with valid visenc spellings.
fn synthetic_roots(count: usize) -> RootSet {
    let latin_letters = ['e', 'm', 'r', 'a', 'k', 's', 'd', 'l'];
    let visenc_tokens = ["e", "m", "r", "h", "k", "s", "d", "l", "bu1", "fo2", "so3"];

    let mut roots = Vec::with_capacity(count);
    for i in 0..count {
        let len = 2 + i % 6;
        let mut latin = String::new();
        let mut visenc = String::new();
        for j in 0..len {
            latin.push(latin_letters[(i + j * 3) % latin_letters.len()]);
            visenc.push_str(visenc_tokens[(i + j * 5) % visenc_tokens.len()]);
        }
        roots.push(Root::new(&latin, &visenc, PartOfSpeech::Noun).expect("valid root"));
    }
    RootSet::new(roots)
}

fn bench_build_index(c: &mut Criterion) {
    let roots = synthetic_roots(5_000);
    c.bench_function("build_index_5k", |b| {
        b.iter(|| std::hint::black_box(Index::build(roots.clone())));
    });
}

fn bench_prefix_search(c: &mut Criterion) {
    let index = Index::build(synthetic_roots(5_000));
    c.bench_function("prefix_search_5k", |b| {
        b.iter(|| std::hint::black_box(index.prefix_search(SearchField::Latin, "em", 20)));
    });
}

fn bench_fuzzy_search(c: &mut Criterion) {
    let index = Index::build(synthetic_roots(5_000));
    c.bench_function("fuzzy_search_5k", |b| {
        b.iter(|| std::hint::black_box(index.fuzzy_search(SearchField::Latin, "emr", 20)));
    });
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_visenc", |b| {
        b.iter(|| std::hint::black_box(lugat_core::visenc::tokenize("ewao1wro1bu1eo6bu1", true)));
    });
}

criterion_group!(
    benches,
    bench_build_index,
    bench_prefix_search,
    bench_fuzzy_search,
    bench_tokenize
);
criterion_main!(benches);
