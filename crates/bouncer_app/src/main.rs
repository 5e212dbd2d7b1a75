//! bouncer -- a textured quad that bounces around a window.
//!
//! winit drives the event loop via `ApplicationHandler`; everything else runs
//! inside `RedrawRequested`, strictly in sequence each frame:
//!
//!   1. latch quit if Escape is down
//!   2. `Simulation::step` -- map input (when the quad is fully inside the
//!      playfield), then advance-and-bounce unless paused
//!   3. upload the `transform` uniform, issue the one draw call, present
//!   4. clear edge-triggered input; exit if quit was latched this frame
//!
//! The quit check happens before the render so the final frame still reaches
//! the screen before the loop exits.

mod sim;

use std::sync::Arc;

use wgpu::util::DeviceExt;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use bouncer_core::input::{InputState, Key};
use bouncer_core::time::FrameClock;
use bouncer_platform::window::PlatformConfig;
use bouncer_render::{GpuContext, QuadMesh, QuadPipeline, Texture, TransformUniform};
use sim::Simulation;

const TEXTURE_PATH: &str = "textures/wall.jpg";
const OBJECT_SIZE: f32 = 0.2;
const INITIAL_VELOCITY: glam::Vec2 = glam::Vec2::new(0.00015, 0.00010);
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.2,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};
// Frames between FPS diagnostics at debug level.
const FPS_LOG_INTERVAL: u64 = 600;

struct AppState {
    window: Arc<Window>,
    gpu: GpuContext,
    pipeline: QuadPipeline,
    mesh: QuadMesh,
    transform_buffer: wgpu::Buffer,
    transform_bind_group: wgpu::BindGroup,
    texture_bind_group: wgpu::BindGroup,
    clock: FrameClock,
    input: InputState,
    sim: Simulation,
    quit_requested: bool,
}

impl AppState {
    fn new(window: Arc<Window>) -> Self {
        let gpu = match GpuContext::new(window.clone()) {
            Ok(gpu) => gpu,
            Err(err) => {
                log::error!("GPU setup failed: {err:#}");
                std::process::exit(1);
            }
        };

        let pipeline = QuadPipeline::new(&gpu.device, gpu.surface_format);
        let mesh = QuadMesh::new(&gpu.device, OBJECT_SIZE);

        let texture = Texture::from_path(&gpu.device, &gpu.queue, TEXTURE_PATH);
        let texture_bind_group = pipeline.create_texture_bind_group(&gpu.device, &texture);

        let transform_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Transform Uniform Buffer"),
                contents: bytemuck::bytes_of(&TransformUniform::identity()),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let transform_bind_group =
            pipeline.create_transform_bind_group(&gpu.device, &transform_buffer);

        Self {
            window,
            gpu,
            pipeline,
            mesh,
            transform_buffer,
            transform_bind_group,
            texture_bind_group,
            clock: FrameClock::new(),
            input: InputState::new(),
            sim: Simulation::new(OBJECT_SIZE, INITIAL_VELOCITY),
            quit_requested: false,
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        self.clock.begin_frame();
        if self.clock.frame_count % FPS_LOG_INTERVAL == 0 {
            log::debug!(
                "{:.0} fps (frame {})",
                self.clock.smoothed_fps,
                self.clock.frame_count
            );
        }

        // Quit latches here; the current frame still renders before exit.
        if self.input.is_held(Key::Escape) {
            self.quit_requested = true;
        }

        self.sim.step(&self.input);

        let uniform = TransformUniform::from_mat4(self.sim.motion.transform());
        self.gpu
            .queue
            .write_buffer(&self.transform_buffer, 0, bytemuck::bytes_of(&uniform));

        if let Some((output, view)) = self.gpu.begin_frame() {
            let mut encoder =
                self.gpu
                    .device
                    .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                        label: Some("Render Encoder"),
                    });

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Quad Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                render_pass.set_pipeline(&self.pipeline.render_pipeline);
                render_pass.set_bind_group(0, &self.transform_bind_group, &[]);
                render_pass.set_bind_group(1, &self.texture_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.mesh.vertex_buffer.slice(..));
                render_pass
                    .set_index_buffer(self.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..self.mesh.index_count, 0, 0..1);
            }

            self.gpu.queue.submit(std::iter::once(encoder.finish()));
            output.present();
        }

        self.input.end_frame();

        if self.quit_requested {
            log::info!("Quit requested, exiting.");
            event_loop.exit();
        }
    }
}

struct App {
    config: PlatformConfig,
    state: Option<AppState>,
}

impl App {
    fn new() -> Self {
        Self {
            config: PlatformConfig::default(),
            state: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window = bouncer_platform::window::create_window(event_loop, &self.config);
        self.state = Some(AppState::new(window));
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                let w = physical_size.width;
                let h = physical_size.height;
                if w > 0 && h > 0 {
                    state.gpu.resize(w, h);
                    log::info!("Resized to {}x{}", w, h);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(key) = map_key(key_code) {
                        match event.state {
                            ElementState::Pressed => state.input.key_down(key),
                            ElementState::Released => state.input.key_up(key),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if state.gpu.size.0 == 0 || state.gpu.size.1 == 0 {
                    return;
                }
                state.frame(event_loop);
            }

            _ => {}
        }
    }
}

fn map_key(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::ArrowLeft => Some(Key::Left),
        KeyCode::ArrowRight => Some(Key::Right),
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::Space => Some(Key::Space),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("bouncer starting...");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
