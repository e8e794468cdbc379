// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation.
//!
//! Measures the pure index arithmetic and a full navigation step including
//! event dispatch and shortcut re-registration.

use criterion::{criterion_group, criterion_main, Criterion};
use gallery_lens::application::navigation::{next_index, previous_index};
use gallery_lens::application::{Gallery, GalleryOptions, GalleryOutput};
use gallery_lens::domain::gallery::{Action, Image};
use gallery_lens::infrastructure::{InMemoryShortcuts, RecordingDownloads};
use std::hint::black_box;

const IMAGE_COUNT: usize = 500;

fn sample_images() -> Vec<Image> {
    (0..IMAGE_COUNT)
        .map(|n| Image::new(format!("bench/img{n}.jpg")).with_description(format!("Image {n}")))
        .collect()
}

/// Benchmark the wraparound index computation.
fn bench_index_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("next_index_full_cycle", |b| {
        b.iter(|| {
            let mut current = 0;
            for _ in 0..IMAGE_COUNT {
                if let Some(step) = next_index(black_box(current), IMAGE_COUNT) {
                    current = step.index;
                }
            }
            black_box(current);
        });
    });

    group.bench_function("previous_index_full_cycle", |b| {
        b.iter(|| {
            let mut current = 0;
            for _ in 0..IMAGE_COUNT {
                if let Some(step) = previous_index(black_box(current), IMAGE_COUNT) {
                    current = step.index;
                }
            }
            black_box(current);
        });
    });

    group.finish();
}

/// Benchmark navigation through an open gallery with listeners attached.
fn bench_gallery_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let mut gallery = Gallery::new(
        InMemoryShortcuts::default(),
        RecordingDownloads::default(),
        GalleryOptions::default(),
    )
    .with_source(sample_images());
    gallery.subscribe(GalleryOutput::Show, |event| {
        black_box(event);
    });
    gallery.init();
    if gallery.open_at(0).is_err() {
        return;
    }

    group.bench_function("advance", |b| {
        b.iter(|| black_box(gallery.advance(Action::Keyboard)));
    });

    group.bench_function("retreat_with_caption", |b| {
        b.iter(|| {
            gallery.retreat(Action::Click);
            black_box(gallery.compute_description());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_index_math, bench_gallery_steps);
criterion_main!(benches);
