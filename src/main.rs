use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod physics;
mod rendering;
mod simulation;

use rendering::{RenderError, Renderer};
use simulation::Scene;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Black Hole")
        .with_inner_size(winit::dpi::PhysicalSize::new(1280, 720))
        .build(&event_loop)?;
    let window = std::sync::Arc::new(window);

    let size = window.inner_size();
    let mut scene = Scene::new(size.width.max(1) as f32 / size.height.max(1) as f32);
    let mut renderer = pollster::block_on(Renderer::new(&window, &scene.black_hole))?;

    log::info!(
        "black hole: {:.1} solar masses, r_s = {:.2} km",
        scene.black_hole.mass / physics::constants::SOLAR_MASS,
        scene.black_hole.r_s / 1000.0
    );
    log::info!("controls: drag = orbit, WASD/Space/Shift = move (free-fly), O = mode, Esc = quit");

    let win_id = window.id();
    let win_clone = window.clone();
    event_loop.run(move |event, target| match event {
        Event::WindowEvent { event, window_id } if window_id == win_id => match event {
            WindowEvent::CloseRequested => target.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => target.exit(),
            WindowEvent::Resized(size) => {
                renderer.resize(size);
                scene.resize(size);
            }
            WindowEvent::RedrawRequested => {
                scene.update();
                match renderer.render(&scene.camera) {
                    Ok(()) => {}
                    Err(RenderError::Surface(
                        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated,
                    )) => renderer.reconfigure(),
                    Err(RenderError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                        log::error!("out of GPU memory");
                        target.exit();
                    }
                    Err(e) => log::warn!("render error: {e}"),
                }
            }
            other => scene.handle_window_event(&other),
        },
        Event::AboutToWait => win_clone.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
