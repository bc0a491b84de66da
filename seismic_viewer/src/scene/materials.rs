//! Shared material helpers for slice and cube surfaces.

use bevy::prelude::*;
use bevy::render::render_resource::Face;

/// Unlit, double-sided, back-face culling off: the image reads the same from
/// either side of the surface.
pub fn seismic_surface_material(
    materials: &mut Assets<StandardMaterial>,
    texture: Handle<Image>,
) -> Handle<StandardMaterial> {
    materials.add(surface_material(texture))
}

fn surface_material(texture: Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(texture),
        unlit: true,
        double_sided: true,
        cull_mode: None::<Face>,
        ..default()
    }
}
