//! Minimal prelude for viewer consumers.

pub use crate::assets::SeismicImage;
pub use crate::config::ViewerSettings;
pub use crate::error::ViewerError;
pub use crate::scene::{PrimitiveId, SceneGraph, SliceOscillator};
pub use crate::sdk::SeismicViewerBuilder;
pub use crate::ui::{InspectionPanel, Selection};
pub use crate::viewer::RunMode;
