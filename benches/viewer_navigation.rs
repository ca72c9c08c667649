// SPDX-License-Identifier: MPL-2.0
//! Hot paths of the gallery modal: cyclic navigation, swipe resolution,
//! image removal, date formatting and decoding a downloaded image.

use criterion::{criterion_group, criterion_main, Criterion};
use gallery_admin::domain::{Gallery, Image};
use gallery_admin::media::decode_image;
use gallery_admin::i18n::fluent::I18n;
use gallery_admin::ui::format::{format_date, parse_date};
use gallery_admin::ui::viewer::{self, GalleryModal, ImageViewerState};
use std::hint::black_box;
use std::io::Cursor;

fn large_gallery(count: usize) -> Gallery {
    let images = (0..count)
        .map(|i| Image::new(format!("https://cdn.test/{i}.jpg")).with_public_id(format!("img-{i}")))
        .collect();
    Gallery::new("bench", "Bench", images)
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_navigation");
    let gallery = large_gallery(500);

    group.bench_function("next_full_cycle", |b| {
        let mut modal = GalleryModal::new();
        modal.open(gallery.clone());
        b.iter(|| {
            for _ in 0..gallery.image_count() {
                black_box(modal.handle(viewer::Message::Next));
            }
        });
    });

    group.bench_function("swipe_left_cycle", |b| {
        let mut state = ImageViewerState::new();
        state.open(gallery.image_count());
        b.iter(|| {
            state.record_touch_start(300.0);
            state.record_touch_move(180.0);
            black_box(state.resolve_touch_end());
        });
    });

    group.bench_function("without_image_middle", |b| {
        b.iter(|| black_box(gallery.without_image(250)));
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_decode");

    let mut png = Vec::new();
    image_rs::RgbaImage::from_pixel(256, 256, image_rs::Rgba([40, 90, 160, 255]))
        .write_to(&mut Cursor::new(&mut png), image_rs::ImageFormat::Png)
        .expect("encode bench image");

    group.bench_function("decode_png_256", |b| {
        b.iter(|| black_box(decode_image(&png)));
    });

    group.finish();
}

fn bench_dates(c: &mut Criterion) {
    let mut group = c.benchmark_group("date_format");
    let i18n = I18n::default();

    group.bench_function("parse_rfc3339", |b| {
        b.iter(|| black_box(parse_date(black_box("2024-01-15T10:00:00.000Z"))));
    });

    group.bench_function("format_mixed", |b| {
        let inputs = [Some("2024-01-15"), Some("yesterday"), None];
        b.iter(|| {
            for raw in inputs {
                black_box(format_date(raw, &i18n));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_navigation, bench_dates, bench_decode);
criterion_main!(benches);
