// SPDX-License-Identifier: MIT

mod error;
mod graphviz;
mod lattice;
mod save;
mod ui;
mod viewer;

use eframe::egui;
use egui_phosphor::Variant;

fn main() -> eframe::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hasse Diagram Viewer",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(ui::HasseApp::default()))
        }),
    )
}
