// SPDX-License-Identifier: MIT

//! Decoding of rendered bytes into egui textures, plus the interactive
//! diagram viewport with drag panning and scroll-wheel zoom.

use eframe::egui;
use egui_extras::image::load_svg_bytes_with_size;
use resvg::usvg;

use crate::error::{Error, Result};
use crate::graphviz::OutputFormat;

/// Zoom change per wheel tick.
const ZOOM_STEP: f32 = 0.2;
const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 10.0;

/// Decode encoded image bytes into an egui color image.
///
/// SVG goes through the egui_extras/resvg loader sized to `viewport` so the
/// vector output is rasterized at roughly window resolution; raster formats
/// are decoded with the `image` crate.
pub fn decode_image(
    bytes: &[u8],
    format: OutputFormat,
    viewport: [u32; 2],
) -> Result<egui::ColorImage> {
    if bytes.is_empty() {
        return Err(Error::DecodeFailure(
            "the renderer returned no image data".into(),
        ));
    }

    if format.is_vector() {
        let hint = egui::SizeHint::Size {
            width: viewport[0].max(1),
            height: viewport[1].max(1),
            maintain_aspect_ratio: true,
        };
        return load_svg_bytes_with_size(bytes, hint, &usvg::Options::default())
            .map_err(Error::DecodeFailure);
    }

    let decoded =
        image::load_from_memory(bytes).map_err(|err| Error::DecodeFailure(err.to_string()))?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.into_raw();
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &pixels))
}

/// Apply one wheel tick to a zoom factor, clamped to the usable range.
fn step_zoom(zoom: f32, scroll_y: f32) -> f32 {
    let step = if scroll_y > 0.0 {
        ZOOM_STEP
    } else if scroll_y < 0.0 {
        -ZOOM_STEP
    } else {
        return zoom;
    };
    (zoom + step).clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Interactive image viewport: drag pans, scroll wheel zooms, double-click
/// resets the view.
pub struct DiagramViewer {
    texture: Option<egui::TextureHandle>,
    zoom: f32,
    pan: egui::Vec2,
}

impl Default for DiagramViewer {
    fn default() -> Self {
        Self {
            texture: None,
            zoom: 1.0,
            pan: egui::Vec2::ZERO,
        }
    }
}

impl DiagramViewer {
    /// Replace the displayed image and reset pan/zoom.
    pub fn set_image(&mut self, ctx: &egui::Context, image: egui::ColorImage) {
        self.texture = Some(ctx.load_texture("diagram", image, egui::TextureOptions::default()));
        self.zoom = 1.0;
        self.pan = egui::Vec2::ZERO;
    }

    /// Render the viewport, consuming drag and scroll input when hovered.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let Some(texture) = &self.texture else {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("No diagram yet. Enter elements and press Generate.")
                        .color(egui::Color32::from_gray(150)),
                );
            });
            return;
        };

        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        if response.double_clicked() {
            self.zoom = 1.0;
            self.pan = egui::Vec2::ZERO;
        } else if response.dragged() {
            self.pan += response.drag_delta();
        }
        if response.hovered() {
            let scroll_y = ui.input(|input| input.raw_scroll_delta.y);
            self.zoom = step_zoom(self.zoom, scroll_y);
        }

        let image_rect = egui::Rect::from_center_size(
            rect.center() + self.pan,
            texture.size_vec2() * self.zoom,
        );
        // Clip to the allocated rect so a zoomed image never paints over
        // the surrounding panels.
        ui.painter_at(rect).image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }
}
