//! Survey images: logical names, fire-and-forget loading, failure reporting.

use std::collections::HashSet;

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::config::ViewerSettings;
use crate::error::ViewerError;

/// Every image the viewer knows by name. `Cube` is only shown in the inspection
/// panel; it is not one of the volume's face textures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeismicImage {
    CrossLine,
    Top,
    Front,
    InLine,
    ZPlane,
    Cube,
}

impl SeismicImage {
    pub const ALL: [SeismicImage; 6] = [
        SeismicImage::CrossLine,
        SeismicImage::Top,
        SeismicImage::Front,
        SeismicImage::InLine,
        SeismicImage::ZPlane,
        SeismicImage::Cube,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            SeismicImage::CrossLine => "CrossLine.png",
            SeismicImage::Top => "Top.png",
            SeismicImage::Front => "Front.png",
            SeismicImage::InLine => "InLine.png",
            SeismicImage::ZPlane => "ZPlane.png",
            SeismicImage::Cube => "Cube.png",
        }
    }

    pub fn asset_path(self, image_dir: &str) -> String {
        if image_dir.is_empty() {
            self.file_name().to_string()
        } else {
            format!("{}/{}", image_dir.trim_end_matches('/'), self.file_name())
        }
    }
}

/// One handle per logical image. Handles resolve asynchronously; surfaces
/// render blank until their image arrives.
#[derive(Resource, Clone, Default)]
pub struct SeismicTextures {
    handles: Vec<(SeismicImage, Handle<Image>)>,
}

impl SeismicTextures {
    pub fn from_handles(handles: impl IntoIterator<Item = (SeismicImage, Handle<Image>)>) -> Self {
        Self {
            handles: handles.into_iter().collect(),
        }
    }

    /// Missing entries fall back to the default handle, which draws untextured.
    pub fn get(&self, image: SeismicImage) -> Handle<Image> {
        self.handles
            .iter()
            .find(|(name, _)| *name == image)
            .map(|(_, handle)| handle.clone())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(SeismicImage, Handle<Image>)> {
        self.handles.iter()
    }
}

/// Images whose load failure has already been logged.
#[derive(Resource, Default)]
pub struct ReportedFailures(HashSet<SeismicImage>);

impl ReportedFailures {
    pub fn contains(&self, image: SeismicImage) -> bool {
        self.0.contains(&image)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Starts loading every image unless the host already supplied textures.
pub fn load_seismic_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<ViewerSettings>,
    supplied: Option<Res<SeismicTextures>>,
) {
    if supplied.is_some() {
        return;
    }
    let textures = SeismicTextures::from_handles(SeismicImage::ALL.map(|image| {
        let path = image.asset_path(&settings.image_dir);
        debug!("loading {path}");
        (image, asset_server.load(path))
    }));
    commands.insert_resource(textures);
}

/// Logs each failed image once. The affected surfaces stay untextured; nothing
/// else changes.
pub fn report_failed_textures(
    asset_server: Res<AssetServer>,
    textures: Option<Res<SeismicTextures>>,
    mut reported: ResMut<ReportedFailures>,
) {
    let Some(textures) = textures else {
        return;
    };
    for (image, handle) in textures.iter() {
        if reported.0.contains(image) {
            continue;
        }
        if let Some(LoadState::Failed(reason)) = asset_server.get_load_state(handle.id()) {
            let err = ViewerError::AssetLoad {
                image: *image,
                reason: reason.to_string(),
            };
            warn!("{err}");
            reported.0.insert(*image);
        }
    }
}
