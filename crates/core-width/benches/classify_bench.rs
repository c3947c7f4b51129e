//! Classification throughput over mixed-script text.

use core_width::{FixedOverride, WidthEngine};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const MIXED_LINE: &str = "drop table users; 漢字カタカナ한글 e\u{0301}\u{0302} , quick brown 狐 jumps";

fn bench_width_of(c: &mut Criterion) {
    let engine = WidthEngine::with_source(FixedOverride::absent());
    let samples: Vec<u32> = MIXED_LINE.chars().map(|ch| ch as u32).collect();
    c.bench_function("width_of_latest_mixed", |b| {
        b.iter(|| {
            let mut acc = 0i32;
            for &cp in &samples {
                acc += i32::from(engine.width_of(black_box(cp), "latest").unwrap());
            }
            acc
        })
    });
}

fn bench_string_width(c: &mut Criterion) {
    let engine = WidthEngine::with_source(FixedOverride::absent());
    let paragraph = MIXED_LINE.repeat(32);
    c.bench_function("string_width_paragraph", |b| {
        b.iter(|| {
            engine
                .string_width(black_box(paragraph.as_str()), None, "latest")
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_width_of, bench_string_width);
criterion_main!(benches);
