use criterion::{criterion_group, criterion_main};

mod derive;
use derive::bench_derive;

use sin_cos::bench_sin_cos;

criterion_group!(benches, bench_derive, bench_sin_cos);
criterion_main!(benches);
