mod common;

use std::f32::consts::FRAC_PI_2;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use common::{bare_app, headless_app, primitive_entity};
use seismic_viewer::assets::{SeismicImage, SeismicTextures};
use seismic_viewer::scene::{
    ClearScene, CubeFaceQuad, Placement, PrimitiveId, SceneGraph, SceneRoot, SeismicPrimitive,
    SliceOscillator, SlicePrimitive,
};
use seismic_viewer::{host_plugin, RunMode, ViewerPlugin};

#[test]
fn startup_assembles_cube_and_three_slices() {
    let mut app = headless_app(RunMode::Render);

    let graph = app.world().resource::<SceneGraph>();
    assert_eq!(graph.len(), 4);
    for id in [
        PrimitiveId::Cube,
        PrimitiveId::Inline,
        PrimitiveId::Crossline,
        PrimitiveId::Zplane,
    ] {
        assert!(graph.contains(id), "{id:?} missing");
    }

    let world = app.world_mut();
    assert_eq!(world.query::<&SeismicPrimitive>().iter(world).count(), 4);
    assert_eq!(world.query::<&CubeFaceQuad>().iter(world).count(), 6);
    assert_eq!(world.query::<&Camera3d>().iter(world).count(), 1);
}

#[test]
fn layout_places_cube_and_slices_side_by_side() {
    let app = headless_app(RunMode::Render);
    let transform = |id| *app.world().get::<Transform>(primitive_entity(&app, id)).unwrap();

    assert_eq!(transform(PrimitiveId::Cube).translation, Vec3::new(-2.0, 0.0, 0.0));
    for id in [PrimitiveId::Inline, PrimitiveId::Crossline, PrimitiveId::Zplane] {
        assert_eq!(transform(id).translation, Vec3::new(2.0, 0.0, 0.0));
    }

    let normal = |id: PrimitiveId| transform(id).rotation * Vec3::Z;
    assert!((normal(PrimitiveId::Inline) - Vec3::Z).length() < 1e-5);
    assert!((normal(PrimitiveId::Crossline) - Vec3::X).length() < 1e-5);
    assert!(normal(PrimitiveId::Zplane).dot(Vec3::Y).abs() > 1.0 - 1e-5);

    let crossline = transform(PrimitiveId::Crossline).rotation;
    assert!(crossline.angle_between(Quat::from_rotation_y(FRAC_PI_2)) < 1e-5);
}

#[test]
fn primitives_hang_under_the_scene_root() {
    let mut app = headless_app(RunMode::Render);
    let root = app.world().resource::<SceneGraph>().root();
    assert!(app.world().get::<SceneRoot>(root).is_some());

    let world = app.world_mut();
    let parents: Vec<Entity> = world
        .query_filtered::<&Parent, With<SeismicPrimitive>>()
        .iter(world)
        .map(|parent| parent.get())
        .collect();
    assert_eq!(parents.len(), 4);
    assert!(parents.iter().all(|&parent| parent == root));
}

fn add_slice_twice(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    textures: Res<SeismicTextures>,
) {
    let mut graph = SceneGraph::spawn(&mut commands);
    let slice =
        SlicePrimitive::new(PrimitiveId::Zplane, 2.0, 2.0, SeismicImage::ZPlane).unwrap();
    let first = graph.add_to_scene(
        &mut commands,
        &mut meshes,
        &mut materials,
        &textures,
        &slice,
        Placement::new(Vec3::X, Vec3::ZERO),
    );
    let second = graph.add_to_scene(
        &mut commands,
        &mut meshes,
        &mut materials,
        &textures,
        &slice,
        Placement::new(Vec3::Y, Vec3::ZERO),
    );
    assert_eq!(first, second);
    commands.insert_resource(graph);
}

#[test]
fn adding_a_present_primitive_only_moves_it() {
    let mut app = bare_app();
    app.add_systems(Startup, add_slice_twice);
    app.update();

    assert_eq!(app.world().resource::<SceneGraph>().len(), 1);
    let world = app.world_mut();
    let transforms: Vec<Transform> = world
        .query_filtered::<&Transform, With<SeismicPrimitive>>()
        .iter(world)
        .copied()
        .collect();
    assert_eq!(transforms.len(), 1);
    assert_eq!(transforms[0].translation, Vec3::Y);
}

#[test]
fn clear_scene_removes_every_primitive_but_keeps_the_root() {
    let mut app = headless_app(RunMode::Animate);

    app.world_mut().send_event(ClearScene);
    app.update();

    let graph = app.world().resource::<SceneGraph>();
    assert!(graph.is_empty());
    let root = graph.root();
    assert!(app.world().get::<SceneRoot>(root).is_some());

    let world = app.world_mut();
    assert_eq!(world.query::<&SeismicPrimitive>().iter(world).count(), 0);
    assert_eq!(world.query::<&CubeFaceQuad>().iter(world).count(), 0);

    // The oscillator keeps running without an in-line slice to move.
    app.update();
}

fn remove_inline(mut commands: Commands, mut graph: ResMut<SceneGraph>) -> bool {
    graph.remove(&mut commands, PrimitiveId::Inline)
}

fn add_inline(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    textures: Res<SeismicTextures>,
    mut graph: ResMut<SceneGraph>,
) -> Entity {
    let slice =
        SlicePrimitive::new(PrimitiveId::Inline, 2.0, 2.0, SeismicImage::InLine).unwrap();
    graph.add_to_scene(
        &mut commands,
        &mut meshes,
        &mut materials,
        &textures,
        &slice,
        Placement::new(Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO),
    )
}

#[test]
fn removed_slice_can_be_added_back_and_animated() {
    let mut app = headless_app(RunMode::Animate);
    let original = primitive_entity(&app, PrimitiveId::Inline);

    assert!(app.world_mut().run_system_once(remove_inline).unwrap());
    assert!(!app.world_mut().run_system_once(remove_inline).unwrap());

    let graph = app.world().resource::<SceneGraph>();
    assert_eq!(graph.len(), 3);
    assert!(!graph.contains(PrimitiveId::Inline));
    assert!(!app.world().entities().contains(original));

    let readded = app.world_mut().run_system_once(add_inline).unwrap();
    assert_ne!(readded, original);
    assert_eq!(app.world().resource::<SceneGraph>().len(), 4);
    assert_eq!(primitive_entity(&app, PrimitiveId::Inline), readded);

    let world = app.world_mut();
    let inline_count = world
        .query::<&SeismicPrimitive>()
        .iter(world)
        .filter(|primitive| primitive.id == PrimitiveId::Inline)
        .count();
    assert_eq!(inline_count, 1);

    app.update();

    let position = app.world().resource::<SliceOscillator>().position();
    assert_ne!(position, 0.0);
    let transform = app.world().get::<Transform>(readded).unwrap();
    assert_eq!(transform.translation.z, position);
}

fn windowless_host_app() -> App {
    let mut app = bare_app();
    app.add_plugins(ViewerPlugin::default()).add_plugins(host_plugin);
    app
}

#[test]
fn scene_is_not_assembled_without_a_window() {
    let mut app = windowless_host_app();
    app.update();

    assert!(app.world().get_resource::<SceneGraph>().is_none());
    let world = app.world_mut();
    assert_eq!(world.query::<&SeismicPrimitive>().iter(world).count(), 0);

    let exits = app.world().resource::<Events<AppExit>>();
    let mut reader = exits.get_cursor();
    assert!(reader.read(exits).any(AppExit::is_error));
}

#[test]
fn scene_is_assembled_with_a_primary_window() {
    let mut app = windowless_host_app();
    app.world_mut().spawn((Window::default(), PrimaryWindow));
    app.update();

    assert_eq!(app.world().resource::<SceneGraph>().len(), 4);
    assert!(app.world().resource::<Events<AppExit>>().is_empty());
}
