use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trirast::math::vec2::Vec2;
use trirast::math::vec4::Vec4;
use trirast::render::{FrameBuffer, ScanlineRasterizer, Triangle, FAR_DEPTH};
use trirast::{Engine, EngineConfig, Mesh, RenderMode, Texture};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn create_buffers() -> (Vec<u32>, Vec<f32>) {
    let size = (BUFFER_WIDTH * BUFFER_HEIGHT) as usize;
    (vec![0u32; size], vec![FAR_DEPTH; size])
}

fn triangle(points: [(f32, f32); 3]) -> Triangle {
    Triangle::new(
        points.map(|(x, y)| Vec4::new(x, y, 0.5, 4.0)),
        [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)],
        0xFFFF0000,
        0,
    )
}

fn small_triangle() -> Triangle {
    triangle([(100.0, 100.0), (120.0, 100.0), (110.0, 120.0)])
}

fn medium_triangle() -> Triangle {
    triangle([(100.0, 100.0), (300.0, 100.0), (200.0, 300.0)])
}

fn large_triangle() -> Triangle {
    triangle([(50.0, 50.0), (750.0, 100.0), (400.0, 550.0)])
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let scanline = ScanlineRasterizer::new();
    let texture = Texture::checkerboard(256, 256, 16, 0xFFFFFFFF, 0xFF000000);

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("flat", name), &triangle, |b, tri| {
            let (mut color, mut depth) = create_buffers();
            b.iter(|| {
                depth.fill(FAR_DEPTH);
                let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
                scanline.fill_triangle(black_box(tri), &mut fb, tri.color);
            });
        });

        group.bench_with_input(BenchmarkId::new("textured", name), &triangle, |b, tri| {
            let (mut color, mut depth) = create_buffers();
            b.iter(|| {
                depth.fill(FAR_DEPTH);
                let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
                scanline.fill_textured_triangle(black_box(tri), &mut fb, &texture);
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let scanline = ScanlineRasterizer::new();

    // Generate a grid of small triangles
    let triangles: Vec<Triangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                triangle([(x, y), (x + 35.0, y), (x + 17.5, y + 25.0)])
            })
        })
        .collect();

    group.bench_function("flat_400_triangles", |b| {
        let (mut color, mut depth) = create_buffers();
        b.iter(|| {
            depth.fill(FAR_DEPTH);
            let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
            for tri in &triangles {
                scanline.fill_triangle(black_box(tri), &mut fb, tri.color);
            }
        });
    });

    group.finish();
}

fn benchmark_frame(c: &mut Criterion) {
    let mut engine = Engine::new(EngineConfig {
        render_mode: RenderMode::TexturedWireframe,
        ..EngineConfig::default()
    });
    let mut cube = Mesh::cube().with_texture(Texture::checkerboard(64, 64, 8, 0xFFFFFFFF, 0xFF3060C0));
    cube.transform_mut()
        .set_translation(0.0, 0.0, 4.0)
        .set_rotation(0.4, 0.6, 0.0);
    engine.add_mesh(cube);

    c.bench_function("cube_frame", |b| {
        b.iter(|| {
            engine.update();
            engine.render();
            black_box(engine.color_buffer());
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_many_triangles,
    benchmark_frame
);
criterion_main!(benches);
