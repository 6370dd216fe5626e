use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vantage::player::camera::PlayerLook;
use vantage::settings::{DisplayPatch, DisplaySettings, QualityLevel};

const MAX_PITCH_DEG: f32 = 85.0;

/// Test out small camera movement deltas
fn bench_camera_look_clamp(c: &mut Criterion) {
    c.bench_function("camera_look_clamp", |b| {
        b.iter(|| {
            let mut look = PlayerLook::default();
            // simulate many small mouse moves
            for i in 0..1_000usize {
                let dx = ((i * 13) % 17) as f32 * 0.1;
                let dy = ((i * 7) % 23) as f32 * 0.2 - 5.0;
                look.apply_delta(black_box(bevy::math::Vec2::new(dx, dy)), MAX_PITCH_DEG);
            }
            black_box((look.yaw, look.pitch));
        })
    });
}

/// Test out large/extreme camera movement deltas
fn bench_camera_look_extreme(c: &mut Criterion) {
    c.bench_function("camera_look_extreme", |b| {
        b.iter(|| {
            let mut look = PlayerLook::default();
            // alternate very large movements to exercise clamp and wrap
            for i in 0..1_000usize {
                let d = if (i & 1) == 0 { 1000.0 } else { -1000.0 };
                look.apply_delta(black_box(bevy::math::Vec2::new(d, -d)), MAX_PITCH_DEG);
            }
            black_box((look.yaw, look.pitch));
        })
    });
}

/// Randomized camera movement deltas (deterministic LCG) to approximate variable input
fn bench_camera_look_random(c: &mut Criterion) {
    c.bench_function("camera_look_random", |b| {
        b.iter(|| {
            let mut look = PlayerLook::default();
            let mut state: u32 = 0x12345678;
            for _ in 0..1_000usize {
                state = state.wrapping_mul(1664525).wrapping_add(1013904223);
                let dx = (((state >> 16) & 0x7fff) as f32 / 32767.0) * 200.0 - 100.0;
                state = state.wrapping_mul(1664525).wrapping_add(1013904223);
                let dy = (((state >> 16) & 0x7fff) as f32 / 32767.0) * 200.0 - 100.0;
                look.apply_delta(black_box(bevy::math::Vec2::new(dx, dy)), MAX_PITCH_DEG);
            }
            black_box((look.yaw, look.pitch));
        })
    });
}

/// Merge a stream of sparse patches into a settings record
fn bench_patch_merge(c: &mut Criterion) {
    let patches = [
        DisplayPatch::vsync(false),
        DisplayPatch::resolution("1440p"),
        DisplayPatch::quality(QualityLevel::Low),
        DisplayPatch::default(),
        DisplayPatch::antialias("msaa8x"),
        DisplayPatch::refresh_rate("144hz"),
        DisplayPatch::all_defaults(),
    ];

    c.bench_function("patch_merge", |b| {
        b.iter(|| {
            let mut settings = DisplaySettings::default();
            for _ in 0..1_000usize {
                for patch in &patches {
                    settings.merge(black_box(patch));
                }
            }
            black_box(settings);
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(200);
    targets =
        bench_camera_look_clamp,
        bench_camera_look_extreme,
        bench_camera_look_random,
        bench_patch_merge
}
criterion_main!(benches);
