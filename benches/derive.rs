use criterion::Criterion;
use hybrid_cordic::{CordicConfig, CordicTables};
use std::hint::black_box;

pub fn bench_derive(c: &mut Criterion) {
    let configs = [
        ("compact", CordicConfig::compact()),
        ("reference", CordicConfig::reference()),
    ];

    for (name, config) in configs {
        c.bench_function(format!("Derive tables {name}").as_str(), |b| {
            b.iter(|| CordicTables::derive(black_box(config)).unwrap())
        });
    }
}
