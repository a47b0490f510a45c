//! Benchmarks for RelayKV verb classification
//!
//! Classification sits on the per-request hot path of the proxy, ahead
//! of any backend I/O.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use relaykv::classify;

fn classify_benchmarks(c: &mut Criterion) {
    // Exact-case hit on a short verb
    c.bench_function("classify_hit_upper", |b| {
        b.iter(|| classify(black_box(b"GET")))
    });

    // Hit that needs case normalization
    c.bench_function("classify_hit_lower", |b| {
        b.iter(|| classify(black_box(b"hgetall")))
    });

    // Longest verb in the vocabulary
    c.bench_function("classify_hit_longest", |b| {
        b.iter(|| classify(black_box(b"ZREVRANGEBYSCORE")))
    });

    // Unknown verb, falls through to Unsupported
    c.bench_function("classify_miss", |b| {
        b.iter(|| classify(black_box(b"NOTACOMMAND")))
    });

    // Over-length input, short-circuits before the table
    c.bench_function("classify_overlength", |b| {
        b.iter(|| classify(black_box(b"THISVERBISMUCHTOOLONGTOMATCH")))
    });

    // Mixed workload approximating proxy traffic
    let workload: &[&[u8]] = &[b"GET", b"set", b"HGETALL", b"ZADD", b"PING", b"KEYS", b"MGET"];
    c.bench_function("classify_mixed", |b| {
        b.iter(|| {
            for verb in workload {
                classify(black_box(verb));
            }
        })
    });
}

criterion_group!(benches, classify_benchmarks);
criterion_main!(benches);
