// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for position group reflow planning.
//!
//! Measures the performance of:
//! - Making room for an incoming banner
//! - Closing the gap left by a departing banner

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_banners::banner::BannerState;
use iced_banners::coordinator::group::{close_gap, make_room, StackEntry};
use iced_banners::domain::banner::BannerId;
use std::hint::black_box;

const GAP: f32 = 10.0;

/// Builds a group of `len` visible banners with varying heights.
fn group_of(len: usize) -> Vec<StackEntry> {
    (0..len)
        .map(|index| StackEntry {
            id: BannerId::next(),
            height: 60.0 + (index % 4) as f32 * 10.0,
            state: BannerState::Visible,
        })
        .collect()
}

fn bench_make_room(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_reflow");

    for len in [4, 16, 64] {
        let order = group_of(len);
        group.bench_with_input(BenchmarkId::new("make_room", len), &order, |b, order| {
            b.iter(|| black_box(make_room(black_box(order), 80.0, GAP)));
        });
    }

    group.finish();
}

/// The departing banner sits at the newest end, the worst case for the lookup.
fn bench_close_gap(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_reflow");

    for len in [4, 16, 64] {
        let order = group_of(len);
        let departing = order[len - 1].id;
        group.bench_with_input(BenchmarkId::new("close_gap", len), &order, |b, order| {
            b.iter(|| black_box(close_gap(black_box(order), departing, GAP)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_make_room, bench_close_gap);
criterion_main!(benches);
