//! Seismic viewer — a volume cube and three orthogonal slices rendered with Bevy.
//!
//! Library root: scene composition, picking, slice animation, and the app builder.

pub mod camera;
pub mod assets;
pub mod config;
pub mod error;
pub mod scene;
pub mod ui;
pub mod viewer;

pub mod prelude;
pub mod sdk;

pub use config::ViewerSettings;
pub use error::ViewerError;
pub use viewer::{host_plugin, RunMode, SceneAssembly, ViewerPlugin};
