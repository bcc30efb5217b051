mod board;
mod clock;
mod config;
mod controller;
mod graphics;
mod input;
mod input_mapping;
mod rules;
mod simulation;

use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
};

use crate::clock::FrameClock;
use crate::config::Config;
use crate::graphics::GraphicsRenderer;
use crate::input::RawInput;
use crate::input_mapping::InputMapper;
use crate::simulation::Simulation;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pause and speed changes are reported at info
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    if let Err(err) = config.validate() {
        log::error!("Invalid configuration: {}", err);
        return Err(err.into());
    }

    let event_loop = EventLoop::new();
    let window = graphics::create_window(&event_loop, &config).map_err(|err| {
        log::error!("{}", err);
        err
    })?;
    let mut graphics = GraphicsRenderer::new(&window, &config).map_err(|err| {
        log::error!("{}", err);
        err
    })?;

    let mut simulation = Simulation::new(&config);
    let input_mapper = InputMapper::new();
    let mut frame_clock = FrameClock::new();

    log::info!(
        "{}x{} board, {}ms per generation, paused: {}",
        config.cols,
        config.rows,
        simulation.clock().tick_interval_ms(),
        simulation.clock().is_paused()
    );

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => simulation.handle_input(RawInput::Quit),
                WindowEvent::Resized(size) => graphics.resize_surface(size.width, size.height),
                WindowEvent::KeyboardInput { input, .. } => {
                    if let Some(raw) = input_mapper.map_keyboard_input(&input) {
                        simulation.handle_input(raw);
                    }
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if let Some(raw) = input_mapper.map_mouse_input(button, state) {
                        simulation.handle_input(raw);
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let pixel = graphics.window_pos_to_pixel((position.x as f32, position.y as f32));
                    simulation.handle_input(input_mapper.map_cursor_moved(pixel));
                }
                _ => {}
            },
            // All pending window events have been handled for this iteration
            Event::MainEventsCleared => {
                if simulation.quit_requested() {
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                simulation.frame(frame_clock.elapsed_ms());

                graphics.render(simulation.board());
                if let Err(err) = graphics.present() {
                    log::error!("Render error: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            Event::LoopDestroyed => {
                log::info!("Shutting down, final population {}", simulation.board().population());
            }
            _ => {}
        }
    });
}
