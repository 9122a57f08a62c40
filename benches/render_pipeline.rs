//! Frame computation with each backend.
//!
//! Run with: cargo bench --bench render_pipeline

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fractal_zoom::{
    BulkParallelBackend, Complex, ComputeBackend, ComputeSettings, FrameSize, SequentialBackend,
    Viewport,
};

fn views() -> [(&'static str, Viewport); 2] {
    let deep = Viewport::new(
        Complex::new(-0.16349229306767682, -1.0260970739840185),
        0.01,
        0.01,
        560,
    )
    .unwrap();

    [("default", Viewport::default()), ("boundary", deep)]
}

fn bench_compute_frame(c: &mut Criterion) {
    let size = FrameSize::new(320, 240);
    let sequential = SequentialBackend;
    let parallel = BulkParallelBackend::with_settings(&ComputeSettings::default());
    let backends: [(&str, &dyn ComputeBackend); 2] =
        [("sequential", &sequential), ("bulk_parallel", &parallel)];

    let mut group = c.benchmark_group("compute_frame");
    group.throughput(Throughput::Elements(size.pixel_count() as u64));
    group.sample_size(20);

    for (view_name, viewport) in views() {
        for (backend_name, backend) in backends {
            group.bench_with_input(
                BenchmarkId::new(backend_name, view_name),
                &viewport,
                |b, &viewport| b.iter(|| backend.compute_frame(black_box(viewport), size)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_compute_frame);
criterion_main!(benches);
