//! Benchmarks for the vector-add kernels.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vecadd::{ramp, F32x8, I32x8, ScalarF32x4, ScalarF32x8, ScalarI32x8, VectorAdd};

fn bench_kernel<K: VectorAdd>(
    c: &mut Criterion,
    group: &str,
    kernel: &K,
    a: &K::Buffer,
    b: &K::Buffer,
) {
    let mut group = c.benchmark_group(group);
    group.throughput(Throughput::Elements(K::LANES as u64));
    group.bench_function(K::NAME, |bench| {
        bench.iter(|| black_box(kernel.add(black_box(a), black_box(b))));
    });
    group.finish();
}

fn bench_scalar(c: &mut Criterion) {
    let a4: [f32; 4] = ramp();
    bench_kernel(c, "add_f32x4", &ScalarF32x4, &a4, &a4);

    let a8 = F32x8::from(ramp::<8>());
    bench_kernel(c, "add_f32x8", &ScalarF32x8, &a8, &a8);

    let first = I32x8::from(vecadd::bench::FIRST);
    let second = I32x8::from(vecadd::bench::SECOND);
    bench_kernel(c, "add_i32x8", &ScalarI32x8, &first, &second);
}

#[cfg(target_arch = "x86_64")]
fn bench_simd(c: &mut Criterion) {
    use vecadd::{Avx2I32x8, AvxF32x8, SseF32x4};

    let a4: [f32; 4] = ramp();
    bench_kernel(c, "add_f32x4", &SseF32x4::new(), &a4, &a4);

    let a8 = F32x8::from(ramp::<8>());
    if let Ok(kernel) = AvxF32x8::new() {
        bench_kernel(c, "add_f32x8", &kernel, &a8, &a8);
    }

    let first = I32x8::from(vecadd::bench::FIRST);
    let second = I32x8::from(vecadd::bench::SECOND);
    if let Ok(kernel) = Avx2I32x8::new() {
        bench_kernel(c, "add_i32x8", &kernel, &first, &second);
    }
}

#[cfg(not(target_arch = "x86_64"))]
fn bench_simd(_c: &mut Criterion) {}

#[cfg(target_arch = "x86_64")]
fn bench_add_loop(c: &mut Criterion) {
    use vecadd::bench::AddLoop;

    let Ok(kernel) = vecadd::Avx2I32x8::new() else {
        return;
    };
    let mut group = c.benchmark_group("add_loop");
    for iterations in [1_000u64, 100_000] {
        group.throughput(Throughput::Elements(iterations * 8));
        group.bench_function(format!("opaque_{iterations}"), |bench| {
            let plan = AddLoop::new(iterations);
            bench.iter(|| black_box(kernel.run(&plan, &mut std::io::sink())));
        });
    }
    group.finish();
}

#[cfg(not(target_arch = "x86_64"))]
fn bench_add_loop(_c: &mut Criterion) {}

criterion_group!(benches, bench_scalar, bench_simd, bench_add_loop);
criterion_main!(benches);
