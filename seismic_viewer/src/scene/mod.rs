pub(crate) mod animation;
pub(crate) mod graph;
pub(crate) mod layout;
pub(crate) mod materials;
pub mod picking;
pub(crate) mod primitive;

pub use animation::{oscillate_slice_system, SliceOscillator};
pub use graph::{clear_scene_system, ClearScene, SceneGraph, SceneRoot};
pub use layout::{assemble_scene, spawn_camera, SeismicCamera, CUBE_FACE_IMAGES};
pub use picking::PickShape;
pub use primitive::{
    CubeFace, CubeFaceQuad, CubePrimitive, Placement, PrimitiveId, SeismicPrimitive,
    SlicePrimitive, VisualPrimitive,
};
