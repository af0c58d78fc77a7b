use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::{EulerRot, Mat4, Quat, Vec3};
use sceneplay::{AnimationTrack, Frame, Trs};

fn keyframe(i: usize) -> Frame {
    let f = i as f32;
    Frame::new(
        Vec3::new(0.1 * f, 0.2, 0.5),
        Mat4::from_scale_rotation_translation(
            Vec3::splat(1.0 + 0.1 * f),
            Quat::from_euler(EulerRot::XYZ, 0.3 * f, 0.7 * f, 0.1),
            Vec3::new(f, -f, 2.0 * f),
        ),
        Mat4::from_rotation_y(0.2 * f),
        f,
    )
}

fn trs_round_trip_benchmark(c: &mut Criterion) {
    let m = keyframe(3).view_transform;
    c.bench_function("trs_round_trip", |b| {
        b.iter(|| black_box(Trs::decompose(black_box(m)).compose()))
    });
}

fn playback_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("play");

    for count in [2usize, 8, 32] {
        let mut track = AnimationTrack::new();
        for i in 0..count {
            track.store_frame(keyframe(i));
        }

        group.bench_function(format!("{count}_keyframes"), |b| {
            b.iter(|| black_box(track.play(black_box(0.5))))
        });
    }
    group.finish();
}

criterion_group!(benches, trs_round_trip_benchmark, playback_benchmark);
criterion_main!(benches);
