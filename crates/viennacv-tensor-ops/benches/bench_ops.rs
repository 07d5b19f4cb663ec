use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use viennacv_tensor::Tensor2;
use viennacv_tensor_ops::ops;

fn bench_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("TensorOps");

    for (rows, cols) in [(256, 224), (512, 448), (1024, 896)].iter() {
        let id = format!("{}x{}", rows, cols);
        let a = Tensor2::<f32>::from_shape_val([*rows, *cols], 0.5);
        let b = Tensor2::<f32>::from_shape_val([*rows, *cols], 1.5);

        group.bench_function(BenchmarkId::new("add", &id), |bencher| {
            bencher.iter(|| black_box(ops::add(&a, &b)))
        });

        group.bench_function(BenchmarkId::new("exp", &id), |bencher| {
            bencher.iter(|| black_box(ops::exp(&a)))
        });

        group.bench_with_input(
            BenchmarkId::new("scaled_add_inplace", &id),
            &(&a, &b),
            |bencher, (a, b)| {
                let mut dst = (*a).clone();
                bencher.iter(|| {
                    let mut window = dst.slice_mut(1..*rows, 1..*cols).ok()?;
                    let src = b.slice(0..*rows - 1, 0..*cols - 1).ok()?;
                    ops::scaled_add_inplace(&mut window, &src, 0.25).ok()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_ops);
criterion_main!(benches);
