use core::str::FromStr;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use bigdec::Decimal;

fn mk_strings() -> Vec<String> {
    (0..1500u32)
        .map(|i| match i % 4 {
            0 => format!("{}.{:06}", i, (i * 13) % 1_000_000),
            1 => format!("-{}.{:02}", i / 100, i % 100),
            2 => format!("{}E+{}", i, i % 40),
            _ => format!("{}E-{}", i, i % 40),
        })
        .collect()
}

fn convert_benches(c: &mut Criterion) {
    let strings = mk_strings();
    let values: Vec<Decimal> = strings.iter().map(|s| Decimal::from_str(s).unwrap()).collect();

    let mut g = c.benchmark_group("convert");
    g.throughput(Throughput::Elements(strings.len() as u64));

    g.bench_with_input(BenchmarkId::new("parse", "mixed"), &strings, |b, data| {
        b.iter(|| {
            let mut digits = 0u64;
            for s in data.iter() {
                let d = Decimal::from_str(black_box(s)).unwrap();
                digits += u64::from(d.prec());
            }
            black_box(digits)
        })
    });

    g.bench_with_input(BenchmarkId::new("to_string", "mixed"), &values, |b, data| {
        b.iter(|| {
            let mut len = 0usize;
            for d in data.iter() {
                len += black_box(d).to_string().len();
            }
            black_box(len)
        })
    });

    g.finish();
}

criterion_group!(benches, convert_benches);
criterion_main!(benches);
