use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trirast::config::{CliArgs, CullMode, EngineConfig, RenderMode};
use trirast::window::{FrameLimiter, Key, Window, WindowEvent};
use trirast::{Engine, Mesh, Texture};

const MOVE_SPEED: f32 = 5.0;
const PITCH_SPEED: f32 = 3.0;
const YAW_SPEED: f32 = 1.0;

fn build_scene(engine: &mut Engine, args: &CliArgs) -> anyhow::Result<()> {
    let mut mesh = match &args.obj {
        Some(path) => Mesh::from_obj(path)
            .with_context(|| format!("Failed to load mesh {}", path.display()))?,
        None => Mesh::cube(),
    };

    let texture = match &args.texture {
        Some(path) => Texture::from_file(path)
            .with_context(|| format!("Failed to load texture {}", path.display()))?,
        None => Texture::checkerboard(64, 64, 8, 0xFFFFFFFF, 0xFF3060C0),
    };
    mesh.set_texture(texture);
    mesh.transform_mut().set_translation(0.0, 0.0, 5.0);

    engine.add_mesh(mesh);
    Ok(())
}

fn handle_key(engine: &mut Engine, key: Key, delta_time: f32) {
    match key {
        Key::Num1 => engine.set_render_mode(RenderMode::WireframeVertices),
        Key::Num2 => engine.set_render_mode(RenderMode::Wireframe),
        Key::Num3 => engine.set_render_mode(RenderMode::Filled),
        Key::Num4 => engine.set_render_mode(RenderMode::FilledWireframe),
        Key::Num5 => engine.set_render_mode(RenderMode::Textured),
        Key::Num6 => engine.set_render_mode(RenderMode::TexturedWireframe),
        Key::C => engine.set_cull_mode(CullMode::Backface),
        Key::X => engine.set_cull_mode(CullMode::None),
        Key::G => {
            let draw_grid = !engine.config().draw_grid;
            engine.set_draw_grid(draw_grid);
        }
        Key::Up => engine.camera_mut().move_forward(MOVE_SPEED * delta_time),
        Key::Down => engine.camera_mut().move_backward(MOVE_SPEED * delta_time),
        Key::W => engine.camera_mut().rotate_pitch(PITCH_SPEED * delta_time),
        Key::S => engine.camera_mut().rotate_pitch(-PITCH_SPEED * delta_time),
        Key::Right => engine.camera_mut().rotate_yaw(YAW_SPEED * delta_time),
        Key::Left => engine.camera_mut().rotate_yaw(-YAW_SPEED * delta_time),
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Init tracing
    let filter = if args.verbose {
        EnvFilter::new("trirast=debug")
    } else {
        EnvFilter::new("trirast=info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = EngineConfig::from(&args);
    let mut window = Window::new("trirast", config.width, config.height)
        .context("Failed to create window")?;
    let mut engine = Engine::new(config);
    build_scene(&mut engine, &args)?;

    let mut frame_limiter = FrameLimiter::new(&window);
    let mut delta_time = 0.0;

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Resize(w, h) => {
                    window.resize(w, h).context("Failed to resize window")?;
                    engine.resize(w, h);
                }
                WindowEvent::KeyDown(key) => handle_key(&mut engine, key, delta_time),
            }
        }

        delta_time = frame_limiter.wait_and_get_delta(&window);

        engine.update();
        engine.render();
        window
            .present(engine.frame_buffer())
            .context("Failed to present frame")?;
    }

    info!("Shutting down");
    Ok(())
}
