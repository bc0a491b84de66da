mod inspector;
mod selection;

pub use inspector::inspector_plugin;
pub use selection::{
    emit_pointer_clicks, handle_pointer_clicks, InspectionPanel, PointerClicked, Selection,
};
