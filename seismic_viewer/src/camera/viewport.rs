//! Canvas size tracking and camera aspect on window resize.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

/// Logical size of the primary window, used to normalize click positions.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasSize(pub Vec2);

impl CanvasSize {
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.0.x > 0.0 && self.0.y > 0.0).then(|| self.0.x / self.0.y)
    }
}

pub fn resize_viewport_system(
    mut resized: EventReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut canvas: ResMut<CanvasSize>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
) {
    let primary = primary.get_single().ok();
    let Some(latest) = resized
        .read()
        .filter(|ev| primary.is_none_or(|window| ev.window == window))
        .last()
    else {
        return;
    };

    canvas.0 = Vec2::new(latest.width, latest.height);
    let Some(aspect_ratio) = canvas.aspect_ratio() else {
        return;
    };
    for mut projection in &mut projections {
        if let Projection::Perspective(ref mut perspective) = *projection {
            perspective.aspect_ratio = aspect_ratio;
        }
    }
    debug!("canvas resized to {}x{}", latest.width, latest.height);
}
