//! Benchmarks for zlib decompression throughput.
//!
//! Run with: `cargo bench -p vassago-inflate`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vassago_inflate::zlib_decompress;

/// Generate test data with varying compressibility.
fn generate_test_data(size: usize, compressibility: f64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut data = Vec::with_capacity(size);

    if compressibility > 0.9 {
        // Highly repetitive data
        let pattern = b"ABCDEFGHIJKLMNOP";
        while data.len() < size {
            data.extend_from_slice(pattern);
        }
        data.truncate(size);
    } else if compressibility > 0.5 {
        // Mixed data - some patterns, some randomness
        let phrases: &[&[u8]] = &[
            b"The quick brown fox jumps over the lazy dog. ",
            b"Pack my box with five dozen liquor jugs! ",
            b"How vexingly quick daft zebras jump!! ",
        ];
        while data.len() < size {
            if rng.gen_bool(compressibility) {
                let phrase = phrases[rng.gen_range(0..phrases.len())];
                data.extend_from_slice(phrase);
            } else {
                data.push(rng.gen::<u8>());
            }
        }
        data.truncate(size);
    } else {
        // Random/incompressible data
        data.resize(size, 0);
        rng.fill(&mut data[..]);
    }

    data
}

fn compress(input: &[u8]) -> Vec<u8> {
    use std::io::Write;
    let mut encoder =
        flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(input).unwrap();
    encoder.finish().unwrap()
}

fn bench_inflate_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("inflate_by_size");

    for size in [4 * 1024, 64 * 1024, 256 * 1024, 1024 * 1024] {
        let data = generate_test_data(size, 0.7);
        let compressed = compress(&data);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &compressed,
            |b, compressed| {
                b.iter(|| zlib_decompress(black_box(compressed)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_inflate_by_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("inflate_by_shape");
    let size = 256 * 1024;

    for (name, compressibility) in [("repetitive", 0.95), ("mixed", 0.7), ("random", 0.1)] {
        let data = generate_test_data(size, compressibility);
        let compressed = compress(&data);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &compressed,
            |b, compressed| {
                b.iter(|| zlib_decompress(black_box(compressed)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_inflate_by_size, bench_inflate_by_shape);
criterion_main!(benches);
