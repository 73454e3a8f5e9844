use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use julia_animator::{
    FrameParams, PhaseCycleGradient, SurfaceSize, ViewState, render_frame_rayon,
    render_frame_serial,
};

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let view = ViewState::default();

    for (width, height) in [(320, 240), (800, 600)] {
        let Ok(surface) = SurfaceSize::new(width, height) else {
            continue;
        };
        let params = FrameParams::from_view(&view, surface);
        let colour_map = PhaseCycleGradient::new(params.time_phase);
        let label = format!("{width}x{height}");

        group.bench_with_input(BenchmarkId::new("serial", &label), &params, |b, params| {
            b.iter(|| render_frame_serial(black_box(params), &colour_map));
        });

        group.bench_with_input(BenchmarkId::new("rayon", &label), &params, |b, params| {
            b.iter(|| render_frame_rayon(black_box(params), &colour_map));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_frame);
criterion_main!(benches);
