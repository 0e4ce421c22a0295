use criterion::{criterion_group, criterion_main};

mod command;

criterion_group!(
    benches,
    command::dispatch::bench_poll_lines,
    command::dispatch::bench_dispatch_line,
    command::dispatch::bench_overflowing_line
);
criterion_main!(benches);
