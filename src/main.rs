mod state;

use crate::state::State;
use grid_life::{Grid, Preset, DEFAULT_COLS, DEFAULT_ROWS};

use std::error::Error;
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

// Constants
const WINDOW_WIDTH: f64 = 640.0;
const WINDOW_HEIGHT: f64 = 640.0;

async fn run(event_loop: EventLoop<()>, window: Arc<Window>) -> Result<(), Box<dyn Error>> {
    let mut state = State::new(window, Grid::new(DEFAULT_ROWS, DEFAULT_COLS)).await?;
    state.controller.embed(&Preset::Glider.pattern());

    event_loop.run(move |event, window_target| {
        window_target.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { window_id, ref event } if window_id == state.window.id() => {
                // Pass window-specific events to egui_winit FIRST
                let response = state.egui_winit_state.on_window_event(&state.window, event);

                if response.repaint {
                    state.window.request_redraw();
                }

                // Pointer input is handled inside the egui frame; resizes always reach us.
                let consumed_by_egui =
                    response.consumed && !matches!(event, WindowEvent::Resized(_));
                if consumed_by_egui {
                    return;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        state.resize(*new_size);
                    }
                    WindowEvent::RedrawRequested => match state.render() {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of GPU memory, exiting.");
                            window_target.exit();
                        }
                        Err(err) => {
                            log::warn!("Skipping frame due to surface {:?}", err);
                            state.window.request_redraw();
                        }
                    },
                    _ => (),
                }
            }
            Event::AboutToWait => {
                state.window.request_redraw();
            }
            _ => (),
        }
    })?;

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let event_loop = EventLoop::new()?;

    let initial_size = winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT);

    let window = Arc::new(
        winit::window::WindowBuilder::new()
            .with_title("Grid Life")
            .with_inner_size(initial_size)
            .build(&event_loop)?,
    );

    pollster::block_on(run(event_loop, window))
}
