use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_pixels::core::{FillState, MosaicState, ScrambleState};
use tui_pixels::term::{Canvas, FillView, FontFace, MosaicView, TextView};
use tui_pixels::types::Rgba;

fn demo_source(width: u32, height: u32) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    for y in 0..height {
        for x in 0..width {
            canvas.put(x, y, Rgba::opaque((x % 256) as u8, (y % 256) as u8, 128));
        }
    }
    canvas
}

fn bench_fill_frame(c: &mut Criterion) {
    let mut state = FillState::new();
    let view = FillView;
    let mut canvas = Canvas::new(320, 240);

    c.bench_function("fill_update_and_render", |b| {
        b.iter(|| {
            state.advance();
            view.render(&state, black_box(&mut canvas));
        })
    });
}

fn bench_scramble_second(c: &mut Criterion) {
    let mut state = ScrambleState::new(12345);

    c.bench_function("scramble_60_ticks", |b| {
        b.iter(|| {
            for _ in 0..60 {
                state.step();
            }
            black_box(state.text().len())
        })
    });
}

fn bench_text_render(c: &mut Criterion) {
    let face = FontFace::load("assets/fonts/pixel5x7.json").unwrap();
    let view = TextView::new(&face);
    let mut state = ScrambleState::new(12345);
    state.step();
    let mut canvas = Canvas::new(640, 480);

    c.bench_function("text_render_640x480", |b| {
        b.iter(|| {
            view.render(&state, black_box(60.0), &mut canvas);
        })
    });
}

fn bench_mosaic_render(c: &mut Criterion) {
    let mut view = MosaicView::new(demo_source(320, 240));
    let state = MosaicState::new();
    let mut canvas = Canvas::new(320, 240);

    c.bench_function("mosaic_render_ratio_16", |b| {
        b.iter(|| {
            view.render(&state, black_box(&mut canvas));
        })
    });
}

fn bench_shrink(c: &mut Criterion) {
    let source = demo_source(320, 240);

    c.bench_function("shrink_nearest_ratio_4", |b| {
        b.iter(|| black_box(source.shrink_nearest(4)))
    });
}

criterion_group!(
    benches,
    bench_fill_frame,
    bench_scramble_second,
    bench_text_render,
    bench_mosaic_render,
    bench_shrink
);
criterion_main!(benches);
