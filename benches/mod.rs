use criterion::{criterion_group, criterion_main};

mod shell;

criterion_group!(
    benches,
    shell::input::bench_typing,
    shell::input::bench_history_browse,
    shell::input::bench_dispatch,
    shell::input::bench_set_parameter
);
criterion_main!(benches);
