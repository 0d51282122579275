//! Construction and extraction cost, with and without stack capture.

use std::hint::black_box;
use std::io;

use criterion::{criterion_group, criterion_main, Criterion};
use errs::config::TraceConfig;
use errs::Error;

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    TraceConfig::default().apply();
    group.bench_function("new_untraced", |b| {
        b.iter(|| black_box(Error::new(black_box(111), "inner fail")))
    });
    group.bench_function("wrap_foreign_untraced", |b| {
        b.iter(|| {
            let cause = io::Error::new(io::ErrorKind::TimedOut, "deadline exceeded");
            black_box(Error::wrap(cause, 101, "just wrap"))
        })
    });

    TraceConfig {
        traceable: true,
        ..TraceConfig::default()
    }
    .apply();
    group.bench_function("new_traced", |b| {
        b.iter(|| black_box(Error::new(black_box(111), "inner fail")))
    });
    group.bench_function("new_traced_rendered", |b| {
        b.iter(|| black_box(format!("{:#}", Error::new(111, "inner fail"))))
    });
    group.bench_function("wrap_errs_traced", |b| {
        b.iter(|| {
            let inner = Error::new(111, "inner fail");
            black_box(Error::wrap(inner, 222, "wrap err"))
        })
    });

    TraceConfig::default().apply();
    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    TraceConfig::default().apply();

    let nested: io::Error = Error::wrap(Error::new(111, "inner fail"), 222, "wrap err").into();
    let foreign = io::Error::new(io::ErrorKind::Other, "unknown error");

    group.bench_function("code_nested", |b| {
        b.iter(|| errs::code(black_box(Some(&nested))))
    });
    group.bench_function("code_foreign", |b| {
        b.iter(|| errs::code(black_box(Some(&foreign))))
    });
    group.bench_function("msg_nested", |b| {
        b.iter(|| errs::msg(black_box(Some(&nested))))
    });

    group.finish();
}

criterion_group!(benches, bench_construct, bench_extract);
criterion_main!(benches);
