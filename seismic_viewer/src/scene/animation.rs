//! Bounded oscillation of the in-line slice, plus the scene spin it drives.

use bevy::prelude::*;

use crate::config::ViewerSettings;
use crate::scene::graph::{SceneGraph, SceneRoot};
use crate::scene::primitive::{PrimitiveId, SeismicPrimitive};

/// Back-and-forth travel along z within `[-half_length, half_length]`.
///
/// Direction survives a pause, so pausing and resuming continues the way the
/// slice was already moving.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SliceOscillator {
    position: f32,
    direction: f32,
    step: f32,
    half_length: f32,
    rotation_gain: f32,
    paused: bool,
}

impl SliceOscillator {
    pub fn new(step: f32, half_length: f32, rotation_gain: f32) -> Self {
        Self {
            position: 0.0,
            direction: 1.0,
            step: step.abs(),
            half_length,
            rotation_gain,
            paused: false,
        }
    }

    pub fn from_settings(settings: &ViewerSettings) -> Self {
        let mut oscillator = Self::new(
            settings.animation.step,
            settings.half_length(),
            settings.animation.rotation_gain,
        );
        oscillator.position = settings.animation.start_position;
        oscillator
    }

    /// Signed distance moved per tick; zero while paused.
    pub fn velocity(&self) -> f32 {
        if self.paused {
            0.0
        } else {
            self.direction * self.step
        }
    }

    /// Current offset of the slice along z.
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle(&mut self) {
        self.paused = !self.paused;
    }

    /// Advances one frame and returns the scene yaw for that frame.
    ///
    /// The position may overshoot a limit by at most one step before the
    /// direction reverses. A paused slice past a limit turns around but stays
    /// put until resumed.
    pub fn tick(&mut self) -> f32 {
        let velocity = self.velocity();
        self.position += velocity;
        if self.position > self.half_length {
            self.direction = -1.0;
        } else if self.position < -self.half_length {
            self.direction = 1.0;
        }
        velocity.abs() * self.rotation_gain
    }
}

/// Moves the in-line slice along its z axis and spins the scene root about Y.
/// The slice transform is updated in place; change detection carries it to
/// the renderer.
pub fn oscillate_slice_system(
    mut oscillator: ResMut<SliceOscillator>,
    graph: Option<Res<SceneGraph>>,
    mut primitives: Query<&mut Transform, (With<SeismicPrimitive>, Without<SceneRoot>)>,
    mut roots: Query<&mut Transform, With<SceneRoot>>,
) {
    let yaw = oscillator.tick();

    for mut root in &mut roots {
        root.rotate_y(yaw);
    }

    let Some(entity) = graph.and_then(|graph| graph.entity(PrimitiveId::Inline)) else {
        return;
    };
    if let Ok(mut transform) = primitives.get_mut(entity) {
        transform.translation.z = oscillator.position();
    }
}
