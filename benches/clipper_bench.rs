// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pspge::core::ge::{
    Binner, ClipCoords, Clipper, Projector, Provoking, RenderState, ScreenCoords, VertexData,
    Viewport,
};
use std::hint::black_box;

/// Binner that only counts, so the benchmark measures the clipper alone
#[derive(Default)]
struct CountingBinner {
    emitted: usize,
}

impl Binner for CountingBinner {
    fn add_point(&mut self, v0: &VertexData) {
        black_box(v0);
        self.emitted += 1;
    }

    fn add_line(&mut self, v0: &VertexData, v1: &VertexData) {
        black_box((v0, v1));
        self.emitted += 1;
    }

    fn add_triangle(&mut self, v0: &VertexData, v1: &VertexData, v2: &VertexData) {
        black_box((v0, v1, v2));
        self.emitted += 1;
    }

    fn add_clear_rect(&mut self, v0: &VertexData, v1: &VertexData) {
        black_box((v0, v1));
        self.emitted += 1;
    }
}

fn vertex(viewport: &Viewport, x: f32, y: f32, z: f32, w: f32) -> VertexData {
    let clip_pos = ClipCoords::new(x, y, z, w);
    VertexData {
        clip_pos,
        screen_pos: viewport.clip_to_screen(&clip_pos),
        ..Default::default()
    }
}

fn triangle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangle");
    let viewport = Viewport::default();
    let state = RenderState {
        depth_clamp: true,
        ..Default::default()
    };
    let clipper = Clipper::new(&state, &viewport);

    // Number of vertices behind the near plane
    for outside in [0usize, 1, 2] {
        let z = |i: usize| if i < outside { -2.0 } else { 0.0 };
        let v0 = vertex(&viewport, 0.0, 0.0, z(0), 1.0);
        let v1 = vertex(&viewport, 0.5, 0.0, z(1), 1.0);
        let v2 = vertex(&viewport, 0.0, 0.5, z(2), 1.0);

        group.bench_with_input(BenchmarkId::new("outside", outside), &outside, |b, _| {
            let mut binner = CountingBinner::default();
            b.iter(|| {
                clipper.process_triangle(
                    black_box(&v0),
                    black_box(&v1),
                    black_box(&v2),
                    &Provoking::V2,
                    &mut binner,
                );
            });
            black_box(binner.emitted);
        });
    }

    group.finish();
}

fn line_benchmark(c: &mut Criterion) {
    let viewport = Viewport::default();
    let state = RenderState {
        depth_clamp: true,
        ..Default::default()
    };
    let clipper = Clipper::new(&state, &viewport);
    let v0 = vertex(&viewport, 0.0, 0.0, -2.0, 1.0);
    let v1 = vertex(&viewport, 0.5, 0.5, 0.0, 1.0);

    c.bench_function("line_clip", |b| {
        let mut binner = CountingBinner::default();
        b.iter(|| clipper.process_line(black_box(&v0), black_box(&v1), &mut binner));
    });
}

fn rect_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rectangle");
    let viewport = Viewport::default();

    let perspective = RenderState::default();
    let v0 = vertex(&viewport, -0.5, -0.5, 0.0, 1.0);
    let v1 = vertex(&viewport, 0.5, 0.5, 0.0, 1.0);
    group.bench_function("perspective", |b| {
        let clipper = Clipper::new(&perspective, &viewport);
        let mut binner = CountingBinner::default();
        b.iter(|| clipper.process_rect(black_box(&v0), black_box(&v1), &mut binner));
    });

    let through = RenderState {
        through_mode: true,
        ..Default::default()
    };
    let s0 = VertexData::at_screen(ScreenCoords::new(16.0, 16.0, 0.0));
    let s1 = VertexData::at_screen(ScreenCoords::new(64.0, 48.0, 0.0));
    group.bench_function("through", |b| {
        let clipper = Clipper::new(&through, &viewport);
        let mut binner = CountingBinner::default();
        b.iter(|| clipper.process_rect(black_box(&s0), black_box(&s1), &mut binner));
    });

    group.finish();
}

criterion_group!(benches, triangle_benchmark, line_benchmark, rect_benchmark);
criterion_main!(benches);
