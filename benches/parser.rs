//! Tokenizer benchmarks

use bios_screen::parser::{shell_text, ConsoleContext, Tokenizer};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

/// A full setup redraw: every row painted, then one entry per row
fn setup_redraw() -> String {
    let mut input = String::from("\x1b[2J\x1b[01;01H");
    for row in 1..=31 {
        input.push_str("\x1b[0m\x1b[34m\x1b[47m");
        input.push_str(&format!("\x1b[{};1H{}", row, " ".repeat(99)));
    }
    for row in 5..=25 {
        input.push_str(&format!("\x1b[{};2HSetting number {:02}", row, row));
        input.push_str(&format!("\x1b[{};37H<Enabled>", row));
    }
    input
}

fn bench_tokenize_setup_redraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer");

    let redraw = setup_redraw();
    group.throughput(Throughput::Bytes(redraw.len() as u64));

    group.bench_function("setup_redraw", |b| {
        let tokenizer = Tokenizer::new(ConsoleContext::Setup);
        b.iter(|| black_box(tokenizer.split(black_box(&redraw))))
    });

    group.finish();
}

fn bench_tokenize_attribute_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer");

    // Pen changes around every short draw
    let heavy = "\x1b[0;1;37;40m\x1b[9;2HBoot\x1b[0m\x1b[34;47m\x1b[9;37H<UEFI>".repeat(200);
    group.throughput(Throughput::Bytes(heavy.len() as u64));

    group.bench_function("attribute_heavy", |b| {
        let tokenizer = Tokenizer::new(ConsoleContext::Setup);
        b.iter(|| black_box(tokenizer.split(black_box(&heavy))))
    });

    group.finish();
}

fn bench_tokenize_noisy(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer");

    // Embedded controller logs interleaved with draws
    let noisy = "\x1b[10;2HBoot EC Command: 0x80\r\nMode\x1b[11;2HFvbProtocolWrite: lba 3\r\nSecure".repeat(200);
    group.throughput(Throughput::Bytes(noisy.len() as u64));

    group.bench_function("log_noise", |b| {
        let tokenizer = Tokenizer::new(ConsoleContext::Setup);
        b.iter(|| black_box(tokenizer.split(black_box(&noisy))))
    });

    group.finish();
}

fn bench_shell_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer");

    let shell = "Shell> \x1b[1m\x1b[33mfs0:\x1b[0m\r\nEC Command: 0x5A\r\nReceiving EC Data: 0x01\r\nEFI\\Boot\r\n"
        .repeat(200);
    group.throughput(Throughput::Bytes(shell.len() as u64));

    group.bench_function("shell_text", |b| {
        b.iter(|| black_box(shell_text(black_box(shell.as_bytes()), true)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tokenize_setup_redraw,
    bench_tokenize_attribute_heavy,
    bench_tokenize_noisy,
    bench_shell_text
);

criterion_main!(benches);
