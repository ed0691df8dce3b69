use cottage_common::AppConfig;
use cottage_input::{Action, InputState, PointerTracker};
use cottage_render::{Camera, FramePlan, PointLight, Projection, aspect_ratio};
use cottage_scene::Scene;
use glam::DVec2;

/// Scroll units per pixel for touchpads that report pixel deltas.
const PIXELS_PER_SCROLL_LINE: f64 = 40.0;

/// Everything the frame loop mutates between frames, minus the GPU.
pub struct AppContext {
    pub scene: Scene,
    pub camera: Camera,
    pub projection: Projection,
    pub light: PointLight,
    pub input: InputState,
    pointer: PointerTracker,
    /// Sum of raw pointer deltas, fed to the tracker as an absolute position.
    cursor: DVec2,
    pub show_lamp: bool,
    pub lamp_scale: f32,
    pub show_hud: bool,
    aspect: f32,
    last_delta: f32,
    quit_requested: bool,
}

impl AppContext {
    pub fn new(config: &AppConfig, scene: Scene) -> Self {
        Self {
            scene,
            camera: Camera::from_config(&config.camera),
            projection: Projection::from_config(&config.projection),
            light: PointLight::from_config(&config.light),
            input: InputState::new(),
            pointer: PointerTracker::new(),
            cursor: DVec2::ZERO,
            show_lamp: config.light.show_lamp,
            lamp_scale: config.light.lamp_scale,
            show_hud: false,
            aspect: aspect_ratio(config.window.width, config.window.height),
            last_delta: 0.0,
            quit_requested: false,
        }
    }

    pub fn key(&mut self, action: Action, pressed: bool) {
        if pressed {
            self.input.press(action);
        } else {
            self.input.release(action);
        }
    }

    /// Raw pointer motion. The first sample after start or focus change only
    /// sets the baseline.
    pub fn pointer_motion(&mut self, dx: f64, dy: f64) {
        self.cursor += DVec2::new(dx, dy);
        let offset = self.pointer.sample(self.cursor.x, self.cursor.y);
        self.camera.process_mouse_move(offset.x, offset.y);
    }

    /// Window focus changed: forget held keys and the pointer baseline.
    pub fn focus_changed(&mut self, focused: bool) {
        tracing::debug!("focus changed: {focused}");
        self.input.clear();
        self.pointer.reset();
    }

    pub fn scroll_lines(&mut self, lines: f32) {
        self.camera.process_mouse_scroll(lines);
    }

    pub fn scroll_pixels(&mut self, pixels: f64) {
        self.scroll_lines((pixels / PIXELS_PER_SCROLL_LINE) as f32);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
        tracing::debug!("resized to {width}x{height}, aspect {:.3}", self.aspect);
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Seconds covered by the last [`AppContext::advance`].
    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Apply toggles fired since the last frame, then move the camera for
    /// every held direction.
    pub fn advance(&mut self, delta_time: f32) {
        self.last_delta = delta_time;
        for action in self.input.take_triggered() {
            match action {
                Action::ToggleProjection => {
                    self.projection.mode.toggle();
                    tracing::info!("projection: {}", self.projection.mode.label());
                }
                Action::ToggleLamp => {
                    self.show_lamp = !self.show_lamp;
                    tracing::info!("lamp marker: {}", on_off(self.show_lamp));
                }
                Action::ToggleHud => {
                    self.show_hud = !self.show_hud;
                }
                Action::Quit => {
                    tracing::info!("quit requested");
                    self.quit_requested = true;
                }
                Action::Move(_) => {}
            }
        }
        let moves: Vec<_> = self.input.held_moves().collect();
        for dir in moves {
            self.camera.process_keyboard_move(dir, delta_time);
        }
    }

    pub fn frame_plan(&self) -> FramePlan {
        let plan = FramePlan::build(
            &self.camera,
            &self.projection,
            self.aspect,
            self.light,
            &self.scene,
        );
        if self.show_lamp {
            plan.with_lamp(self.lamp_scale)
        } else {
            plan
        }
    }

    pub fn draw_hud(&self, ctx: &egui::Context) {
        if !self.show_hud {
            return;
        }
        let p = self.camera.position;
        egui::SidePanel::left("hud")
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Cottage");
                ui.separator();
                ui.label(format!("Position: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z));
                ui.label(format!(
                    "Yaw: {:.1}  Pitch: {:.1}",
                    self.camera.yaw(),
                    self.camera.pitch()
                ));
                ui.label(format!("Zoom: {:.1}", self.camera.zoom()));
                ui.label(format!("Projection: {}", self.projection.mode.label()));
                ui.label(format!("Lamp: {}", on_off(self.show_lamp)));
                ui.label(format!(
                    "Frame: {:.1} ms",
                    self.last_delta * 1000.0
                ));
                ui.separator();
                ui.small(crate::bindings::HELP);
            });
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}
