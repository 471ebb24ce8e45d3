//! Draw throughput across pool capacities and thread counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use randomizer::{EntropySource, HashPool};
use std::sync::Arc;
use std::thread;

const DRAWS_PER_THREAD: u64 = 10_000;

fn bench_single_thread(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_u64");
    for capacity in [0, 1, 50] {
        let pool = HashPool::new(capacity);
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &pool, |b, pool| {
            b.iter(|| black_box(pool.next_u64()))
        });
    }
    group.finish();
}

fn bench_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_u64_threads");
    let pool = Arc::new(HashPool::default());

    for threads in [1u64, 2, 4, 8, 16, 32] {
        group.throughput(Throughput::Elements(threads * DRAWS_PER_THREAD));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let pool = Arc::clone(&pool);
                        thread::spawn(move || {
                            for _ in 0..DRAWS_PER_THREAD {
                                black_box(pool.next_u64());
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_thread, bench_threads);
criterion_main!(benches);
