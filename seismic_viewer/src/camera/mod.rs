mod orbit;
mod viewport;

pub use orbit::{orbit_camera_plugin, OrbitController};
pub use viewport::{resize_viewport_system, CanvasSize};
