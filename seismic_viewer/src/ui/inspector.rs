//! Inspection panel: the image of the last clicked primitive, beside the 3D view.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::assets::SeismicTextures;
use crate::ui::InspectionPanel;

const PANEL_WIDTH: f32 = 320.0;

pub fn inspector_plugin(app: &mut App) {
    app.add_systems(Update, inspector_panel_system);
}

fn inspector_panel_system(
    mut contexts: EguiContexts,
    panel: Res<InspectionPanel>,
    textures: Option<Res<SeismicTextures>>,
) {
    let Some(image) = panel.image else {
        return;
    };
    let Some(textures) = textures else {
        return;
    };
    let texture_id = contexts.add_image(textures.get(image).clone_weak());

    egui::SidePanel::right("inspector")
        .default_width(PANEL_WIDTH)
        .resizable(false)
        .frame(inspector_frame())
        .show(contexts.ctx_mut(), |ui| {
            let side = ui.available_width();
            ui.add(egui::Image::new(egui::load::SizedTexture::new(
                texture_id,
                egui::vec2(side, side),
            )));
        });
}

fn inspector_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 220))
        .inner_margin(egui::Margin::same(8))
}
