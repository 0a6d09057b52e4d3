use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flytekit_record::{interface_of, read_value, to_literal_map, Duration, Record, Timestamp};

#[derive(Debug, Clone, PartialEq, Record)]
struct BenchInput {
    i: i64,
    f: f64,
    s: String,
    b: bool,
    t: Option<Timestamp>,
    d: Duration,
}

fn sample() -> BenchInput {
    BenchInput {
        i: 42,
        f: 42.0,
        s: "42".to_string(),
        b: false,
        t: Some(Timestamp::create(1_700_000_000, 0)),
        d: Duration::create(0, 42),
    }
}

fn bench_interface(c: &mut Criterion) {
    c.bench_function("interface_of", |b| {
        b.iter(|| interface_of::<BenchInput>().unwrap());
    });
}

fn bench_marshal(c: &mut Criterion) {
    let mut group = c.benchmark_group("marshal");

    let input = sample();
    group.bench_function("to_literal_map", |b| {
        b.iter(|| to_literal_map(black_box(&input)));
    });

    let literals = to_literal_map(&input);
    group.bench_function("read_value", |b| {
        b.iter(|| read_value::<BenchInput>(black_box(&literals)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_interface, bench_marshal);
criterion_main!(benches);
