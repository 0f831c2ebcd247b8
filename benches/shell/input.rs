use criterion::{Criterion, Throughput};
use libshell::io::Transport;
use libshell::{CommandResult, Config, ParamValue, Shell};
use std::cell::Cell;
use std::hint::black_box;

/// Transport that discards output and never yields input.
struct Sink;

impl Transport for Sink {
    type Error = ();

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(None)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        black_box(byte);
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        black_box(text);
        Ok(())
    }
}

fn noop(_shell: &mut Shell<'_, Sink>, args: &[&str]) -> CommandResult {
    black_box(args);
    Ok(())
}

fn new_shell<'a>() -> Shell<'a, Sink> {
    Shell::new(Sink, Config::default()).expect("Failed to create shell")
}

pub fn bench_typing(c: &mut Criterion) {
    let line = b"set sensor.threshold 1234 \x1b[D\x1b[D\x7f5\x1b[F\x03";
    let mut group = c.benchmark_group("shell_input");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("typing", |b| {
        let mut shell = new_shell();
        b.iter(|| shell.input(black_box(line)))
    });
    group.finish();
}

pub fn bench_history_browse(c: &mut Criterion) {
    let mut shell = new_shell();
    for i in 0..10 {
        shell
            .history_mut()
            .commit(&format!("command number {}", i))
            .expect("Failed to seed history");
    }

    c.bench_function("history_browse", |b| {
        b.iter(|| {
            shell.input(black_box(b"\x1b[A\x1b[A\x1b[A\x1b[B\x1b[B\x1b[B"));
        })
    });
}

pub fn bench_dispatch(c: &mut Criterion) {
    let mut shell = new_shell();
    shell
        .register_command("noop", "Do nothing", noop)
        .expect("Failed to register command");

    c.bench_function("dispatch", |b| {
        b.iter(|| shell.execute(black_box("noop a b c d e f")))
    });
}

pub fn bench_set_parameter(c: &mut Criterion) {
    let value = Cell::new(0i32);
    let mut shell = new_shell();
    shell
        .register_parameter("value", ParamValue::Int(&value))
        .expect("Failed to register parameter");

    c.bench_function("set_parameter", |b| {
        b.iter(|| shell.execute(black_box("set value -123456")))
    });
}
