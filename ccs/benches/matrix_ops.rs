//! Benchmarks for point access, bulk construction and the binary codec

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ccs::{CcsMatrix, DenseVectorFactory};

/// Row-major grid with roughly `density` of its cells non-zero
fn random_grid(rows: usize, columns: usize, density: f64, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows * columns)
        .map(|_| {
            if rng.gen_bool(density) {
                rng.gen_range(1..=255)
            } else {
                0
            }
        })
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for &size in &[64usize, 256] {
        let grid = random_grid(size, size, 0.05, 1);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("from_array", size), &grid, |b, grid| {
            b.iter(|| {
                let matrix: CcsMatrix = CcsMatrix::from_array(size, size, grid).unwrap();
                black_box(matrix)
            })
        });

        group.bench_with_input(BenchmarkId::new("set_random", size), &grid, |b, grid| {
            b.iter(|| {
                let mut matrix: CcsMatrix = CcsMatrix::new(size, size).unwrap();
                for (index, &value) in grid.iter().enumerate().rev() {
                    if value != 0 {
                        matrix.set(index / size, index % size, value).unwrap();
                    }
                }
                black_box(matrix)
            })
        });
    }

    group.finish();
}

fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("access");
    let size = 256;
    let grid = random_grid(size, size, 0.1, 2);
    let matrix: CcsMatrix = CcsMatrix::from_array(size, size, &grid).unwrap();

    group.bench_function("get_column_scan", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for row in 0..size {
                sum += u32::from(matrix.get(row, black_box(17)).unwrap());
            }
            black_box(sum)
        })
    });

    group.bench_function("column_extract", |b| {
        b.iter(|| black_box(matrix.column(black_box(17)).unwrap()))
    });

    group.bench_function("row_extract", |b| {
        b.iter(|| black_box(matrix.row_with(black_box(17), &DenseVectorFactory).unwrap()))
    });

    group.bench_function("each_non_zero", |b| {
        b.iter(|| {
            let mut count = 0usize;
            matrix.each_non_zero(|_: usize, _: usize, _: u8| count += 1);
            black_box(count)
        })
    });

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let size = 512;
    let grid = random_grid(size, size, 0.02, 3);
    let matrix: CcsMatrix = CcsMatrix::from_array(size, size, &grid).unwrap();
    let bytes = matrix.to_bytes().unwrap();
    group.throughput(Throughput::Bytes(bytes.len() as u64));

    group.bench_function("serialize", |b| {
        b.iter(|| black_box(matrix.to_bytes().unwrap()))
    });

    group.bench_function("deserialize", |b| {
        b.iter(|| {
            let restored: CcsMatrix = CcsMatrix::from_bytes(black_box(&bytes)).unwrap();
            black_box(restored)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_access, bench_codec);
criterion_main!(benches);
