use criterion::{Criterion, Throughput};
use std::hint::black_box;
use serialcmd::stream::SliceSource;
use serialcmd::{SerialCommand, Tokens};

const NAMES: [&str; 12] = [
    "LED", "PWM", "ADC", "GPIO", "RESET", "STATUS", "BAUD", "ECHO", "TIME", "DATE", "SLEEP", "SET",
];

fn consume(args: &mut Tokens<'_>) {
    for token in args {
        black_box(token);
    }
}

fn unknown(command: &str, _: &mut Tokens<'_>) {
    black_box(command);
}

fn dispatcher() -> SerialCommand {
    let mut commands = SerialCommand::new();
    for name in NAMES {
        commands
            .add_command(name, consume)
            .expect("table sized for the benchmark commands");
    }
    commands.set_default_handler(Some(unknown));
    commands
}

pub fn bench_poll_lines(c: &mut Criterion) {
    let mut stream = Vec::new();
    for i in 0..64 {
        let name = NAMES[i % NAMES.len()];
        stream.extend_from_slice(name.as_bytes());
        stream.extend_from_slice(b" 12 34 on\r\n");
    }

    let mut group = c.benchmark_group("poll");
    group.throughput(Throughput::Bytes(stream.len() as u64));
    group.bench_function("64_mixed_lines", |b| {
        let mut commands = dispatcher();
        b.iter(|| {
            let lines = commands.poll(SliceSource::new(black_box(&stream)));
            black_box(lines)
        })
    });
    group.finish();
}

pub fn bench_dispatch_line(c: &mut Criterion) {
    let commands = dispatcher();
    let mut group = c.benchmark_group("dispatch_line");
    group.bench_function("first_entry", |b| {
        b.iter(|| black_box(commands.dispatch_line(black_box("LED 1 2"))))
    });
    group.bench_function("last_entry", |b| {
        b.iter(|| black_box(commands.dispatch_line(black_box("SET 1 2"))))
    });
    group.bench_function("default_handler", |b| {
        b.iter(|| black_box(commands.dispatch_line(black_box("NOPE 1 2"))))
    });
    group.finish();
}

pub fn bench_overflowing_line(c: &mut Criterion) {
    let line: Vec<u8> = core::iter::repeat_n(b'A', 1024).chain([b'\n']).collect();
    let mut group = c.benchmark_group("overflow");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("1k_line_into_32_byte_buffer", |b| {
        let mut commands = dispatcher();
        b.iter(|| black_box(commands.input(black_box(&line))))
    });
    group.finish();
}
