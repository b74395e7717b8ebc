use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use selsort::{sort_numeric_array, sort_reference_list, sort_sequence};
use sort_test_tools::patterns;

// Quadratic sorts, keep the input sizes modest.
const BENCH_SIZES: [usize; 3] = [10, 100, 1_000];

fn bench_adapter(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: fn(usize) -> Vec<i32>,
    bench_name: &str,
    sort_func: impl Fn(&mut Vec<i32>, usize),
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("{bench_name}-{pattern_name}-{test_size}"), |b| {
        b.iter_batched(
            || pattern_provider(test_size),
            |mut test_data| {
                let n = test_data.len();
                sort_func(black_box(&mut test_data), n);
            },
            batch_size,
        )
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let pattern_fns: [(&str, fn(usize) -> Vec<i32>); 4] = [
        ("random", patterns::random),
        ("random_d16", |size| patterns::random_uniform(size, 0..16)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
    ];

    for (pattern_name, pattern_provider) in pattern_fns {
        for test_size in BENCH_SIZES {
            bench_adapter(
                c,
                test_size,
                pattern_name,
                pattern_provider,
                "sequence",
                |v, n| sort_sequence(v, n),
            );

            bench_adapter(
                c,
                test_size,
                pattern_name,
                pattern_provider,
                "ref_list",
                |v, n| sort_reference_list(v, n),
            );

            bench_adapter(
                c,
                test_size,
                pattern_name,
                pattern_provider,
                "numeric_array",
                |v, n| sort_numeric_array(v, n),
            );
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
