use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use fps_camera::cli::Cli;
use fps_camera::{CameraPose, CameraSettings, FirstPersonCamera, WinitController};

struct App {
    cli: Cli,
    window: Option<Window>,
    camera: FirstPersonCamera,
    pose: CameraPose,
    controller: WinitController,
    frame: u64,
}

impl App {
    fn new(cli: Cli, camera: FirstPersonCamera) -> Self {
        Self {
            cli,
            window: None,
            camera,
            pose: CameraPose::default(),
            controller: WinitController::new(),
            frame: 0,
        }
    }

    fn apply_cursor_request(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        if !self.controller.take_cursor_request() {
            return;
        }

        window.set_cursor_visible(false);
        if let Err(e) = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        {
            warn!("Could not grab cursor: {}", e);
        }
    }

    fn redraw(&mut self) {
        self.camera.update(&mut self.pose, &self.controller);
        self.controller.reset_deltas();
        self.frame += 1;

        if self.cli.log_every > 0 && self.frame % self.cli.log_every == 0 {
            info!(
                "frame {}: position={:?} target={:?} forward={:?}",
                self.frame,
                self.pose.position,
                self.pose.target,
                self.pose.forward()
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("fps-camera")
            .with_inner_size(LogicalSize::new(self.cli.width, self.cli.height));
        match event_loop.create_window(attributes) {
            Ok(window) => self.window = Some(window),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        }

        self.camera.init(&mut self.pose, &mut self.controller);
        self.apply_cursor_request();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(),
            other => self.controller.process_event(&other),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.controller.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => CameraSettings::from_json_file(path)?,
        None => CameraSettings::default(),
    };
    info!("Camera settings: {:?}", settings);
    let camera = FirstPersonCamera::try_new(settings)?;

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(cli, camera);

    info!("Controls: mouse to look, WASD to walk, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
