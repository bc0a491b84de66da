//! Viewer orchestration: resources, startup order, and the per-frame schedule.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::assets::{load_seismic_textures, report_failed_textures, ReportedFailures};
use crate::camera::{resize_viewport_system, CanvasSize};
use crate::config::ViewerSettings;
use crate::error::ViewerError;
use crate::scene::{
    assemble_scene, clear_scene_system, oscillate_slice_system, spawn_camera, ClearScene,
    SliceOscillator,
};
use crate::ui::{handle_pointer_clicks, InspectionPanel, PointerClicked, Selection};

/// Which per-frame loop drives the viewer.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Advance the slice animation, then draw.
    #[default]
    Animate,
    /// Draw only; scene state never changes on its own.
    Render,
}

/// Startup set that builds the scene graph. Windowed builds gate it on a
/// primary window.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneAssembly;

/// Scene, picking, selection and animation. Needs no window, so it also runs
/// headless; window input, orbit controls and the panel are added by the
/// builder.
#[derive(Default)]
pub struct ViewerPlugin {
    pub settings: ViewerSettings,
    pub run_mode: RunMode,
}

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone())
            .insert_resource(self.run_mode)
            .insert_resource(SliceOscillator::from_settings(&self.settings))
            .init_resource::<Selection>()
            .init_resource::<InspectionPanel>()
            .init_resource::<CanvasSize>()
            .init_resource::<ReportedFailures>()
            .add_event::<PointerClicked>()
            .add_event::<ClearScene>()
            .add_event::<WindowResized>()
            .add_systems(
                Startup,
                (
                    load_seismic_textures,
                    spawn_camera,
                    assemble_scene.in_set(SceneAssembly),
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    resize_viewport_system,
                    handle_pointer_clicks,
                    clear_scene_system,
                    report_failed_textures,
                )
                    .chain(),
            );

        if self.run_mode == RunMode::Animate {
            app.add_systems(
                Update,
                oscillate_slice_system.after(handle_pointer_clicks),
            );
        }
    }
}

/// Requires a render target: checks for the primary window after textures
/// start loading and skips scene assembly without one.
pub fn host_plugin(app: &mut App) {
    app.configure_sets(
        Startup,
        SceneAssembly.run_if(any_with_component::<PrimaryWindow>),
    )
    .add_systems(
        Startup,
        verify_host
            .after(load_seismic_textures)
            .before(SceneAssembly),
    );
}

/// Fatal check at startup: without a primary window there is nothing to draw
/// into. Seeds `CanvasSize` from the window otherwise.
pub fn verify_host(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut canvas: ResMut<CanvasSize>,
    mut exit: EventWriter<AppExit>,
) {
    match windows.get_single() {
        Ok(window) => {
            canvas.0 = Vec2::new(window.width(), window.height());
            info!("canvas {}x{}", window.width(), window.height());
        }
        Err(_) => {
            error!("{}", ViewerError::MissingHostElement("primary window"));
            exit.send(AppExit::error());
        }
    }
}
