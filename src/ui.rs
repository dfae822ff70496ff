// SPDX-License-Identifier: MIT

//! Top-level egui application shell: input controls, the diagram viewport,
//! the generated DOT source panel, and save handling.
//!
//! Generation is synchronous: building the DOT text, running Graphviz, and
//! decoding the result all happen on the UI thread before the frame ends.

use eframe::egui;

use crate::graphviz::{self, OutputFormat};
use crate::lattice;
use crate::save::{ensure_extension, suggested_file_name, write_image};
use crate::viewer::{self, DiagramViewer};

/// Stateful egui application for generating and viewing powerset lattices.
pub struct HasseApp {
    /// Raw comma-separated element input.
    vars: String,
    /// Rank and node separation passed to Graphviz.
    spacing: f64,
    /// Encoding selected for the next render.
    format: OutputFormat,
    /// DOT source of the last generation attempt, kept for inspection even
    /// when rendering or decoding failed.
    dot_code: String,
    /// Subset count (2^N) of the last generated lattice.
    subset_count: Option<u64>,
    /// Encoded bytes of the last successful render, saved verbatim.
    image_bytes: Option<Vec<u8>>,
    /// Encoding the stored bytes were rendered with; save dialogs follow
    /// this, not the combo box, so the extension always matches the data.
    image_format: Option<OutputFormat>,
    show_dot: bool,
    viewer: DiagramViewer,
    status: Option<String>,
}

impl Default for HasseApp {
    fn default() -> Self {
        Self {
            vars: "a,b,c,d".to_string(),
            spacing: 0.8,
            format: OutputFormat::Png,
            dot_code: String::new(),
            subset_count: None,
            image_bytes: None,
            image_format: None,
            show_dot: false,
            viewer: DiagramViewer::default(),
            status: None,
        }
    }
}

impl eframe::App for HasseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let generate = egui::TopBottomPanel::top("controls")
            .show(ctx, |ui| {
                ui.add_space(6.0);
                let generate = self.render_controls(ui);
                ui.add_space(4.0);
                generate
            })
            .inner;

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        if self.show_dot {
            egui::SidePanel::right("dot_source")
                .default_width(280.0)
                .show(ctx, |ui| {
                    self.render_dot_source(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewer.ui(ui);
        });

        if generate {
            self.generate(ctx);
        }
    }
}

impl HasseApp {
    /// Render the control strip; returns true when a generation was
    /// requested this frame (button click or Enter in the element field).
    fn render_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let mut generate = false;

        ui.horizontal(|ui| {
            ui.label("Elements");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.vars)
                    .desired_width(200.0)
                    .hint_text("comma-separated, e.g. a,b,c,d"),
            );
            if response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter)) {
                generate = true;
            }

            ui.separator();
            ui.label("Spacing");
            ui.add(egui::DragValue::new(&mut self.spacing).speed(0.05))
                .on_hover_text("Graphviz rank and node separation");

            ui.separator();
            ui.label("Format");
            egui::ComboBox::from_id_salt("output_format")
                .selected_text(self.format.label())
                .show_ui(ui, |ui| {
                    for format in OutputFormat::ALL {
                        ui.selectable_value(&mut self.format, format, format.label());
                    }
                });

            ui.separator();
            if ui
                .button(format!("{} Generate", egui_phosphor::regular::GRAPH))
                .clicked()
            {
                generate = true;
            }

            let save_button = egui::Button::new(format!(
                "{} Save image",
                egui_phosphor::regular::FLOPPY_DISK
            ));
            if ui
                .add_enabled(self.image_bytes.is_some(), save_button)
                .on_disabled_hover_text("Generate a diagram first")
                .clicked()
            {
                self.save_image();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.toggle_value(&mut self.show_dot, "DOT source");
                if let Some(count) = self.subset_count {
                    ui.label(format!("{count} subsets"));
                }
            });
        });

        generate
    }

    /// Read-only view of the generated DOT source.
    fn render_dot_source(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.label("DOT source");
        ui.add_space(4.0);
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut self.dot_code.as_str())
                    .code_editor()
                    .desired_width(f32::INFINITY),
            );
        });
    }

    /// Render the latest status or error message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.status {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(120)));
        }
    }

    /// Run the full generate-render-decode pipeline synchronously.
    fn generate(&mut self, ctx: &egui::Context) {
        let elements = match lattice::parse_elements(&self.vars) {
            Ok(elements) => elements,
            Err(err) => {
                self.status = Some(err.to_string());
                return;
            }
        };

        let diagram = match lattice::build_diagram(&elements, self.spacing) {
            Ok(diagram) => diagram,
            Err(err) => {
                self.status = Some(err.to_string());
                return;
            }
        };

        self.dot_code = diagram.dot.clone();
        self.subset_count = Some(diagram.subset_count);

        let bytes = match graphviz::render(&diagram.dot, self.format) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.status = Some(err.to_string());
                return;
            }
        };

        let viewport = ctx.screen_rect().size();
        let hint = [viewport.x.max(1.0) as u32, viewport.y.max(1.0) as u32];
        match viewer::decode_image(&bytes, self.format, hint) {
            Ok(image) => {
                self.viewer.set_image(ctx, image);
                self.image_bytes = Some(bytes);
                self.image_format = Some(self.format);
                self.status = Some(format!(
                    "Rendered {} subsets as {}.",
                    diagram.subset_count,
                    self.format.label()
                ));
            }
            // The DOT source stays visible so the user can inspect it.
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    /// Open a save dialog and write the rendered bytes verbatim.
    fn save_image(&mut self) {
        let (Some(bytes), Some(format)) = (self.image_bytes.as_deref(), self.image_format) else {
            self.status = Some("No image data generated yet.".to_string());
            return;
        };

        let extension = format.extension();
        let dialog = rfd::FileDialog::new()
            .set_title("Save diagram")
            .add_filter(format.label(), &[extension])
            .set_file_name(suggested_file_name(format));

        let Some(selected) = dialog.save_file() else {
            self.status = Some("Save cancelled.".to_string());
            return;
        };

        let path = ensure_extension(selected, extension);
        match write_image(&path, bytes) {
            Ok(()) => self.status = Some(format!("Saved {}", path.display())),
            // Bytes stay in memory, so the user can simply retry.
            Err(err) => self.status = Some(err.to_string()),
        }
    }
}
