//! Builder for composing the seismic viewer app.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::camera::orbit_camera_plugin;
use crate::config::ViewerSettings;
use crate::ui::{emit_pointer_clicks, handle_pointer_clicks, inspector_plugin};
use crate::viewer::{host_plugin, RunMode, ViewerPlugin};

/// Builder for constructing the viewer with customizable plugins.
pub struct SeismicViewerBuilder {
    settings: ViewerSettings,
    run_mode: RunMode,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_orbit_controls: bool,
    enable_inspector: bool,
}

impl Default for SeismicViewerBuilder {
    fn default() -> Self {
        Self {
            settings: ViewerSettings::default(),
            run_mode: RunMode::Animate,
            window_title: "Seismic Visualizer".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb(0.05, 0.05, 0.08),
            enable_orbit_controls: true,
            enable_inspector: true,
        }
    }
}

impl SeismicViewerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(mut self, settings: ViewerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Draw-only mode: no slice animation, no scene spin.
    pub fn render_only(mut self) -> Self {
        self.run_mode = RunMode::Render;
        self
    }

    pub fn run_mode(mut self, run_mode: RunMode) -> Self {
        self.run_mode = run_mode;
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_orbit_controls(mut self) -> Self {
        self.enable_orbit_controls = false;
        self
    }

    pub fn disable_inspector(mut self) -> Self {
        self.enable_inspector = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .insert_resource(ClearColor(self.clear_color))
        .add_plugins(ViewerPlugin {
            settings: self.settings,
            run_mode: self.run_mode,
        })
        .add_plugins(host_plugin)
        .add_systems(Update, emit_pointer_clicks.before(handle_pointer_clicks));

        if self.enable_orbit_controls {
            app.add_plugins(orbit_camera_plugin);
        }
        if self.enable_inspector {
            app.add_plugins(inspector_plugin);
        }

        app
    }
}
