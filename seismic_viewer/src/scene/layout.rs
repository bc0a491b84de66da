//! Startup assembly: camera, scene root, volume cube and the three slices.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::assets::{SeismicImage, SeismicTextures};
use crate::camera::OrbitController;
use crate::config::ViewerSettings;
use crate::scene::graph::SceneGraph;
use crate::scene::primitive::{CubePrimitive, Placement, PrimitiveId, SlicePrimitive};

/// Cube face images in face order: cross-line on right/left, top on
/// top/bottom, then front and in-line.
pub const CUBE_FACE_IMAGES: [SeismicImage; 6] = [
    SeismicImage::CrossLine,
    SeismicImage::CrossLine,
    SeismicImage::Top,
    SeismicImage::Top,
    SeismicImage::Front,
    SeismicImage::InLine,
];

/// Marker for the viewer's camera.
#[derive(Component)]
pub struct SeismicCamera;

pub fn spawn_camera(mut commands: Commands, settings: Res<ViewerSettings>) {
    let camera = &settings.camera;
    commands.spawn((
        SeismicCamera,
        Camera3d::default(),
        Projection::Perspective(settings.perspective(1.0)),
        Transform::from_translation(camera.position).looking_at(camera.look_at, Vec3::Y),
        OrbitController::from_position(camera.position, camera.look_at),
    ));
}

/// Builds the fixed layout: the cube at `-S` on x, the slices sharing an
/// anchor at `+S`, each slice turned to its own cutting plane.
pub fn assemble_scene(
    mut commands: Commands,
    settings: Res<ViewerSettings>,
    textures: Res<SeismicTextures>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let volume = &settings.volume;
    let mut graph = SceneGraph::spawn(&mut commands);

    let cube = match CubePrimitive::new(
        volume.width,
        volume.height,
        volume.length,
        &CUBE_FACE_IMAGES,
    ) {
        Ok(cube) => cube,
        Err(err) => {
            if err.is_asset_load() {
                warn!("cannot build seismic cube: {err}");
            } else {
                error!("cannot build seismic cube: {err}");
            }
            commands.insert_resource(graph);
            return;
        }
    };
    graph.add_to_scene(
        &mut commands,
        &mut meshes,
        &mut materials,
        &textures,
        &cube,
        Placement::new(Vec3::new(-volume.width, 0.0, 0.0), Vec3::ZERO),
    );

    let anchor = Vec3::new(volume.width, 0.0, 0.0);
    let slices = [
        (
            PrimitiveId::Inline,
            volume.width,
            volume.height,
            SeismicImage::InLine,
            Vec3::ZERO,
        ),
        (
            PrimitiveId::Crossline,
            volume.length,
            volume.height,
            SeismicImage::CrossLine,
            Vec3::new(0.0, FRAC_PI_2, 0.0),
        ),
        (
            PrimitiveId::Zplane,
            volume.width,
            volume.length,
            SeismicImage::ZPlane,
            Vec3::new(FRAC_PI_2, 0.0, 0.0),
        ),
    ];
    for (id, width, height, image, rotation) in slices {
        match SlicePrimitive::new(id, width, height, image) {
            Ok(slice) => {
                graph.add_to_scene(
                    &mut commands,
                    &mut meshes,
                    &mut materials,
                    &textures,
                    &slice,
                    Placement::new(anchor, rotation),
                );
            }
            Err(err) => error!("cannot build {} slice: {err}", id.name()),
        }
    }

    info!("seismic scene assembled with {} primitives", graph.len());
    commands.insert_resource(graph);
}
