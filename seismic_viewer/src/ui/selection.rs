//! Click → pick → selection. Each click also pauses or resumes the slice.

use bevy::prelude::*;
use bevy::render::camera::CameraProjection;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::assets::SeismicImage;
use crate::camera::CanvasSize;
use crate::scene::picking::{normalize_pointer, pick_nearest, ray_from_ndc};
use crate::scene::{PrimitiveId, SeismicCamera, SeismicPrimitive, SliceOscillator};

/// Outcome of the most recent click. Rebuilt on every click.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(PrimitiveId),
}

impl Selection {
    pub fn from_pick(hit: Option<PrimitiveId>) -> Self {
        hit.map_or(Selection::NoSelection, Selection::Selected)
    }

    pub fn primitive(&self) -> Option<PrimitiveId> {
        match *self {
            Selection::Selected(id) => Some(id),
            Selection::NoSelection => None,
        }
    }
}

/// The image shown beside the 3D view.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InspectionPanel {
    pub image: Option<SeismicImage>,
}

impl InspectionPanel {
    pub fn show(&mut self, selection: Selection) {
        self.image = selection.primitive().map(PrimitiveId::inspection_image);
    }
}

/// A click on the canvas, in window coordinates (origin top-left).
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct PointerClicked {
    pub position: Vec2,
}

/// Turns left presses on the 3D view into `PointerClicked` events. Presses
/// over egui panels belong to the UI.
pub fn emit_pointer_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut contexts: EguiContexts,
    mut clicks: EventWriter<PointerClicked>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    if contexts.ctx_mut().is_pointer_over_area() {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(position) = window.cursor_position() else {
        return;
    };
    clicks.send(PointerClicked { position });
}

/// Picks the nearest primitive under each click, updates the selection and
/// the panel, and toggles the slice animation whether or not anything was hit.
pub fn handle_pointer_clicks(
    mut clicks: EventReader<PointerClicked>,
    canvas: Res<CanvasSize>,
    cameras: Query<(&Projection, &GlobalTransform), With<SeismicCamera>>,
    primitives: Query<(&SeismicPrimitive, &GlobalTransform)>,
    mut selection: ResMut<Selection>,
    mut panel: ResMut<InspectionPanel>,
    mut oscillator: Option<ResMut<SliceOscillator>>,
) {
    for click in clicks.read() {
        let hit = cameras.get_single().ok().and_then(|(projection, camera_transform)| {
            let ndc = normalize_pointer(click.position, canvas.0)?;
            let ray = ray_from_ndc(projection.get_clip_from_view(), camera_transform, ndc)?;
            pick_nearest(
                ray,
                primitives
                    .iter()
                    .map(|(primitive, transform)| (primitive.id, primitive.shape, transform)),
            )
        });

        *selection = Selection::from_pick(hit);
        panel.show(*selection);
        match hit {
            Some(id) => info!("selected {}", id.name()),
            None => debug!("click at {} hit nothing", click.position),
        }

        if let Some(oscillator) = oscillator.as_mut() {
            oscillator.toggle();
            debug!(
                "slice animation {}",
                if oscillator.is_paused() { "paused" } else { "resumed" }
            );
        }
    }
}
