#![allow(dead_code)]

use bevy::hierarchy::HierarchyPlugin;
use bevy::prelude::*;
use bevy::render::camera::CameraProjection;
use bevy::transform::TransformPlugin;
use seismic_viewer::assets::{SeismicImage, SeismicTextures};
use seismic_viewer::camera::CanvasSize;
use seismic_viewer::scene::{PrimitiveId, SceneGraph, SeismicCamera};
use seismic_viewer::{RunMode, ViewerPlugin, ViewerSettings};

pub const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

/// Headless app with in-memory textures, the viewer plugin and one frame run.
pub fn headless_app(run_mode: RunMode) -> App {
    let mut app = bare_app();
    app.add_plugins(ViewerPlugin {
        settings: ViewerSettings::default(),
        run_mode,
    })
    .insert_resource(CanvasSize(CANVAS));
    app.update();
    app
}

/// Asset and transform plumbing plus blank textures, without the viewer.
pub fn bare_app() -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        AssetPlugin::default(),
        TransformPlugin,
        HierarchyPlugin,
    ))
    .init_asset::<Mesh>()
    .init_asset::<StandardMaterial>()
    .init_asset::<Image>();

    let textures = {
        let mut images = app.world_mut().resource_mut::<Assets<Image>>();
        SeismicTextures::from_handles(
            SeismicImage::ALL.map(|image| (image, images.add(Image::default()))),
        )
    };
    app.insert_resource(textures);
    app
}

pub fn primitive_entity(app: &App, id: PrimitiveId) -> Entity {
    app.world()
        .resource::<SceneGraph>()
        .entity(id)
        .expect("primitive should be in the scene")
}

pub fn global_transform(app: &App, entity: Entity) -> GlobalTransform {
    *app.world()
        .get::<GlobalTransform>(entity)
        .expect("entity should have a global transform")
}

/// Window position whose pick ray passes through `local` on primitive `id`.
pub fn click_position_on(app: &mut App, id: PrimitiveId, local: Vec3) -> Vec2 {
    let target = global_transform(app, primitive_entity(app, id)).transform_point(local);

    let world = app.world_mut();
    let (projection, camera) = world
        .query_filtered::<(&Projection, &GlobalTransform), With<SeismicCamera>>()
        .single(world);
    let clip_from_world = projection.get_clip_from_view() * camera.compute_matrix().inverse();
    let ndc = clip_from_world.project_point3(target);

    Vec2::new(
        (ndc.x + 1.0) * 0.5 * CANVAS.x,
        (1.0 - ndc.y) * 0.5 * CANVAS.y,
    )
}
