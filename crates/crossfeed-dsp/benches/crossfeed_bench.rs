//! Criterion benchmarks for block crossfeed processing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crossfeed_dsp::{ByteOrder, Crossfeed, IntWidth, Level, SampleFormat};

const FRAMES: usize = 1024;

/// Deterministic interleaved stereo noise in [-1, 1].
fn stereo_noise(frames: usize) -> Vec<f64> {
    let mut state: u64 = 0xDEAD_BEEF_CAFE_BABE;
    (0..frames * 2)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 33) as i32) as f64 / (i32::MAX as f64)
        })
        .collect()
}

fn bench_native(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossfeed_native");
    let input = stereo_noise(FRAMES);

    group.bench_function("f64", |b| {
        let mut engine = Crossfeed::with_params(Level::High, 48000);
        let mut buffer = input.clone();
        b.iter(|| {
            buffer.copy_from_slice(&input);
            engine.process(black_box(&mut buffer[..]));
        });
    });

    group.bench_function("i16", |b| {
        let mut engine = Crossfeed::with_params(Level::High, 48000);
        let source: Vec<i16> = input.iter().map(|&v| (v * 32767.0) as i16).collect();
        let mut buffer = source.clone();
        b.iter(|| {
            buffer.copy_from_slice(&source);
            engine.process(black_box(&mut buffer[..]));
        });
    });

    group.finish();
}

fn bench_wire(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossfeed_wire");
    let input = stereo_noise(FRAMES);

    for (name, format) in [
        ("s16le", SampleFormat::int(IntWidth::W16, true, ByteOrder::Little)),
        ("s24be", SampleFormat::int(IntWidth::W24, true, ByteOrder::Big)),
        ("u32be", SampleFormat::int(IntWidth::W32, false, ByteOrder::Big)),
        ("f32be", SampleFormat::float32(ByteOrder::Big)),
    ] {
        let mut source = vec![0u8; FRAMES * format.bytes_per_frame()];
        let width = format.bytes_per_sample();
        for (value, bytes) in input.iter().zip(source.chunks_exact_mut(width)) {
            format.encode(*value, bytes);
        }

        group.bench_function(name, |b| {
            let mut engine = Crossfeed::with_params(Level::High, 48000);
            let mut buffer = source.clone();
            b.iter(|| {
                buffer.copy_from_slice(&source);
                engine.process_bytes(black_box(&mut buffer), format);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_native, bench_wire);
criterion_main!(benches);
