//! Seismic — survey volume viewer. Runs the seismic_viewer app.

use bevy::prelude::*;
use seismic_viewer::sdk::SeismicViewerBuilder;

fn main() -> AppExit {
    SeismicViewerBuilder::new().build().run()
}
