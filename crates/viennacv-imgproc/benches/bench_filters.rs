use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use viennacv_image::Image;
use viennacv_imgproc::{
    filter::{convolve, gaussian_blur, kernels, sobel},
    Direction, FilterConfig,
};

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filters");
    let config = FilterConfig::default();

    for (width, height) in [(256, 224), (512, 448)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);
        let image = Image::<f32>::from_size_val([*width, *height].into(), 3, 0.5).unwrap();
        let output = Image::<f32>::zeros(3, *height, *width).unwrap();

        group.bench_with_input(
            BenchmarkId::new("sobel_x", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(sobel(src, &mut dst, Direction::X, config)))
            },
        );

        for kernel_size in [3, 7, 11].iter() {
            let k = *kernel_size;
            let kernel = kernels::gaussian_kernel_2d(k, k, 1.5f32).unwrap();
            group.bench_with_input(
                BenchmarkId::new("convolve_dense", format!("{}x{}", parameter_string, k)),
                &(&image, &output),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(convolve(src, &kernel, &mut dst, &[], config)))
                },
            );
        }
    }

    // the gaussian window is capped at 51x51 for images of this size
    let image = Image::<f32>::from_size_val([64, 48].into(), 1, 0.5).unwrap();
    let output = Image::<f32>::zeros(1, 48, 64).unwrap();
    group.bench_with_input(
        BenchmarkId::new("gaussian_blur", "64x48"),
        &(&image, &output),
        |b, i| {
            let (src, mut dst) = (i.0, i.1.clone());
            b.iter(|| black_box(gaussian_blur(src, 1.5, &mut dst, config)))
        },
    );

    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
