//! Orbit controls: left-drag turns the camera around its target, wheel zooms.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

const DRAG_SENSITIVITY: f32 = 0.008;
const ZOOM_SENSITIVITY: f32 = 0.5;
const MIN_RADIUS: f32 = 1.0;
const MAX_RADIUS: f32 = 50.0;
const PITCH_LIMIT: f32 = 1.5;

/// Turntable camera state around `target`.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct OrbitController {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
}

impl OrbitController {
    /// Controller whose current eye position is `eye`.
    pub fn from_position(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(MIN_RADIUS);
        Self {
            target,
            yaw: offset.z.atan2(offset.x),
            pitch: (offset.y / radius).clamp(-1.0, 1.0).asin(),
            radius,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let horizontal = self.radius * self.pitch.cos();
        self.target
            + Vec3::new(
                horizontal * self.yaw.cos(),
                self.radius * self.pitch.sin(),
                horizontal * self.yaw.sin(),
            )
    }

    pub fn drag(&mut self, delta: Vec2) {
        self.yaw += delta.x * DRAG_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * DRAG_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn zoom(&mut self, scroll: f32) {
        self.radius = (self.radius - scroll * ZOOM_SENSITIVITY).clamp(MIN_RADIUS, MAX_RADIUS);
    }
}

pub fn orbit_camera_plugin(app: &mut App) {
    app.add_systems(Update, orbit_camera_system);
}

fn orbit_camera_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut cameras: Query<(&mut OrbitController, &mut Transform)>,
) {
    let over_ui = contexts.ctx_mut().is_pointer_over_area();

    let mut drag = Vec2::ZERO;
    for ev in mouse_motion.read() {
        drag += ev.delta;
    }
    let zoom: f32 = scroll.read().map(|ev| ev.y).sum();

    if over_ui {
        return;
    }
    let dragging = buttons.pressed(MouseButton::Left) && drag != Vec2::ZERO;
    if !dragging && zoom == 0.0 {
        return;
    }

    for (mut orbit, mut transform) in &mut cameras {
        if dragging {
            orbit.drag(drag);
        }
        orbit.zoom(zoom);
        transform.translation = orbit.eye();
        transform.look_at(orbit.target, Vec3::Y);
    }
}
