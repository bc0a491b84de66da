//! Viewer error type.

use bevy::math::Vec3;
use thiserror::Error;

use crate::assets::SeismicImage;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ViewerError {
    #[error("failed to load {image:?} image: {reason}")]
    AssetLoad { image: SeismicImage, reason: String },

    #[error("a seismic cube needs at least one face image")]
    NoCubeImages,

    #[error("host element missing: {0}")]
    MissingHostElement(&'static str),

    /// Slices report a depth of zero.
    #[error("primitive dimensions must be positive, got {0}")]
    InvalidDimensions(Vec3),
}

impl ViewerError {
    /// Whether the error stems from texture sources rather than the host or geometry.
    pub fn is_asset_load(&self) -> bool {
        matches!(self, Self::AssetLoad { .. } | Self::NoCubeImages)
    }
}
