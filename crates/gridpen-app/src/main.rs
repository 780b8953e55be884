//! Gridpen desktop application using egui/eframe.
//!
//! This is the presentation adapter for the editor core: it renders the
//! board, the selection, and the tool panel, and forwards cell taps and
//! tool-button taps into [`gridpen_editor::Editor`]. All layout, sizing, and
//! color concerns live here; the core never sees them.

use eframe::{
    NativeOptions,
    egui::{self, Vec2},
};

use crate::app::GridpenApp;

mod app;

fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::init();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size(Vec2::new(600.0, 760.0))
            .with_min_inner_size(Vec2::new(360.0, 460.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Gridpen",
        options,
        Box::new(|cc| Ok(Box::new(GridpenApp::new(cc)))),
    )
}
