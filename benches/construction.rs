use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use skewsa::{AlphabetSize, SuffixArrayConstruction, build_suffix_array};

fn random_text(len: usize, max_symbol: u8) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(len as u64);
    (0..len).map(|_| rng.random_range(1..=max_symbol)).collect()
}

fn suffix_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix array");

    for len in [1_000, 100_000, 1_000_000] {
        let dna = random_text(len, 4);
        group.bench_with_input(BenchmarkId::new("dna", len), &dna, |b, text| {
            b.iter(|| build_suffix_array(text, 4))
        });

        let bytes = random_text(len, u8::MAX);
        group.bench_with_input(BenchmarkId::new("bytes", len), &bytes, |b, text| {
            b.iter(|| build_suffix_array(text, u8::MAX.into()))
        });
    }

    // maximal recursion depth
    let periodic = vec![1u8; 100_000];
    group.bench_function("single symbol", |b| {
        b.iter(|| build_suffix_array(&periodic, 1))
    });

    group.finish();
}

fn lcp(c: &mut Criterion) {
    let text = random_text(100_000, 4);
    let mut suffix_array_buffer = vec![0u32; text.len()];
    let mut lcp_buffer = vec![0u32; text.len()];

    c.benchmark_group("lcp").bench_function("dna 100000", |b| {
        b.iter(|| {
            SuffixArrayConstruction::for_text(&text)
                .in_borrowed_buffer(&mut suffix_array_buffer)
                .with_alphabet_size(AlphabetSize::new(4))
                .run()
                .unwrap()
                .lcp_construction()
                .in_borrowed_buffer(&mut lcp_buffer)
                .run()
                .unwrap()
                .distinct_substrings()
        })
    });
}

criterion_group!(benches, suffix_array, lcp);
criterion_main!(benches);
