use criterion::{Criterion, black_box, criterion_group, criterion_main};

use lumen_core::camera::{CameraEvent, CameraInput, OrbitCamera, Projection};
use lumen_core::math::Vec2;
use lumen_core::mesh::generators::generate_sphere_strip;
use lumen_core::scene::SphereGrid;

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

fn new_camera() -> OrbitCamera {
    let mut camera = OrbitCamera::new(Projection::default().matrix(1280, 720));
    camera.set_viewport_size(1280, 720);
    camera
}

fn bench_update_idle(c: &mut Criterion) {
    let mut camera = new_camera();
    let input = CameraInput::at(Vec2::new(640.0, 360.0));
    c.bench_function("orbit_update_idle", |b| {
        b.iter(|| camera.update(black_box(0.016), black_box(&input)));
    });
}

fn bench_update_rotate(c: &mut Criterion) {
    let mut camera = new_camera();
    let mut x = 0.0f32;
    c.bench_function("orbit_update_rotate", |b| {
        b.iter(|| {
            x += 1.0;
            let input = CameraInput::at(Vec2::new(x, 360.0)).with_rotate();
            camera.update(black_box(0.016), &input);
        });
    });
}

fn bench_update_pan(c: &mut Criterion) {
    let mut camera = new_camera();
    let mut y = 0.0f32;
    c.bench_function("orbit_update_pan", |b| {
        b.iter(|| {
            y += 1.0;
            let input = CameraInput::at(Vec2::new(640.0, y)).with_pan();
            camera.update(black_box(0.016), &input);
        });
    });
}

fn bench_scroll(c: &mut Criterion) {
    let mut camera = new_camera();
    let mut sign = 1.0f32;
    c.bench_function("orbit_scroll", |b| {
        b.iter(|| {
            sign = -sign;
            camera.handle_event(black_box(&CameraEvent::Scroll {
                x_offset: 0.0,
                y_offset: sign,
            }));
        });
    });
}

// ---------------------------------------------------------------------------
// Scene data
// ---------------------------------------------------------------------------

fn bench_generate_sphere_strip(c: &mut Criterion) {
    c.bench_function("generate_sphere_strip_64x64", |b| {
        b.iter(|| generate_sphere_strip(black_box(64), black_box(64)));
    });
}

fn bench_grid_instances(c: &mut Criterion) {
    let grid = SphereGrid::default();
    c.bench_function("sphere_grid_instances_7x7", |b| {
        b.iter(|| black_box(&grid).instances());
    });
}

criterion_group!(
    camera_benches,
    bench_update_idle,
    bench_update_rotate,
    bench_update_pan,
    bench_scroll,
);
criterion_group!(scene_benches, bench_generate_sphere_strip, bench_grid_instances);
criterion_main!(camera_benches, scene_benches);
