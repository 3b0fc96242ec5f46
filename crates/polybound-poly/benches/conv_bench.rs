//! Benchmarks comparing static, bounded and dynamic result kinds
//!
//! The same coefficients are convolved and composed through each container
//! kind, so differences come from the result storage alone.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polybound_core::InlineVec;
use polybound_poly::{conv, polycompose};

/// Generate coefficients with a smooth, non-trivial pattern
fn generate_coeffs<const N: usize>() -> [f64; N] {
    std::array::from_fn(|i| (i as f64 * 0.1).sin() * 10.0)
}

macro_rules! bench_conv_sizes {
    ($group:expr, $(($n:literal, $m:literal)),+ $(,)?) => {$(
        {
            let x = generate_coeffs::<$n>();
            let y = generate_coeffs::<$m>();
            let label = format!("{}x{}", $n, $m);

            $group.bench_with_input(BenchmarkId::new("static", &label), &(x, y), |b, (x, y)| {
                b.iter(|| {
                    let r: [f64; $n + $m - 1] = conv(black_box(x), black_box(y));
                    black_box(r)
                });
            });

            let xb = InlineVec::<f64, $n>::from_slice(&x);
            $group.bench_with_input(BenchmarkId::new("bounded", &label), &(xb, y), |b, (x, y)| {
                b.iter(|| {
                    let r: InlineVec<f64, { $n + $m - 1 }> = conv(black_box(x), black_box(y));
                    black_box(r)
                });
            });

            let (xd, yd) = (x.to_vec(), y.to_vec());
            $group.bench_with_input(BenchmarkId::new("dynamic", &label), &(xd, yd), |b, (x, y)| {
                b.iter(|| {
                    let r: Vec<f64> = conv(black_box(x), black_box(y));
                    black_box(r)
                });
            });
        }
    )+};
}

/// Benchmark conv across result kinds
fn bench_conv(c: &mut Criterion) {
    let mut group = c.benchmark_group("conv");
    bench_conv_sizes!(group, (4, 3), (16, 8), (64, 16));
    group.finish();
}

/// Benchmark polycompose across result kinds
fn bench_polycompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("polycompose");

    let p = generate_coeffs::<6>();
    let q = generate_coeffs::<4>();
    // (6 - 1) * (4 - 1) + 1
    group.bench_function("static/6x4", |b| {
        b.iter(|| {
            let r: [f64; 16] = polycompose(black_box(&p), black_box(&q));
            black_box(r)
        });
    });

    let pb = InlineVec::<f64, 6>::from_slice(&p);
    group.bench_function("bounded/6x4", |b| {
        b.iter(|| {
            let r: InlineVec<f64, 16> = polycompose(black_box(&pb), black_box(&q));
            black_box(r)
        });
    });

    let pd = p.to_vec();
    group.bench_function("dynamic/6x4", |b| {
        b.iter(|| {
            let r: Vec<f64> = polycompose(black_box(&pd), black_box(&q));
            black_box(r)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_conv, bench_polycompose);
criterion_main!(benches);
