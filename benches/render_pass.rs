use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fractal_tree::{tree::line_count, FractalRenderer, Segments};

fn bench_render_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");

    for order in [8u32, 12, 15] {
        let renderer = FractalRenderer::new(order);
        let mut segments = Segments::with_capacity(line_count(order) as usize);

        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, _| {
            b.iter(|| {
                segments.clear();
                renderer.render_pass(&mut segments);
                black_box(segments.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_pass);
criterion_main!(benches);
