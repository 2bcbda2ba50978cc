// benches/annotate.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use board_speaker::core::{
    annotate::{build_overlays, parse_drawing},
    board::Orientation,
    demo,
    extract::extract_pieces,
    group,
};

fn bench_extract(c: &mut Criterion) {
    let board = demo::sample_host_board(Orientation::WhitePov, 480.0);

    c.bench_function("extract_pieces", |b| {
        b.iter(|| {
            let pieces = extract_pieces(black_box(&board), Orientation::WhitePov);
            black_box(pieces.len())
        })
    });

    c.bench_function("full_report", |b| {
        b.iter(|| {
            let pieces = extract_pieces(black_box(&board), Orientation::WhitePov);
            let msgs = group::full_report(pieces, Orientation::WhitePov);
            black_box(msgs.len())
        })
    });
}

fn bench_drawing(c: &mut Criterion) {
    // A heavy annotation: circles and arrows across the whole board.
    let input = "-a1,b2,c3,d4,e5,f6,g7,h8,a1h8,h1a8,e2e4,g8f6,b1c3,d7d5";

    c.bench_function("parse_drawing", |b| {
        b.iter(|| {
            let cmd = parse_drawing(black_box(input)).unwrap();
            black_box(cmd.circles.len() + cmd.arrows.len())
        })
    });

    c.bench_function("build_overlays", |b| {
        let cmd = parse_drawing(input).unwrap();
        b.iter(|| {
            let shapes = build_overlays(black_box(&cmd), 480.0, Orientation::WhitePov);
            black_box(shapes.len())
        })
    });
}

criterion_group!(benches, bench_extract, bench_drawing);
criterion_main!(benches);
