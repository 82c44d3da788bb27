use std::time::Duration;

use eframe::egui;
use egui::text::{LayoutJob, TextFormat};
use showcase_core::view::{self, palette, HeaderStyle, RestartControl, Rgb, SnippetCard};

const HEADER_SIZE: f32 = 48.0;
const CODE_SIZE: f32 = 13.0;
const RESTART_SIZE: egui::Vec2 = egui::vec2(168.0, 48.0);

pub fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Header followed by the code block, centered in the available width.
pub fn show_card(ui: &mut egui::Ui, card: &SnippetCard, elapsed: Duration) {
    ui.vertical_centered(|ui| {
        show_header(ui, card, elapsed);
        ui.add_space(24.0);
        show_code_block(ui, card);
    });
}

fn show_header(ui: &mut egui::Ui, card: &SnippetCard, elapsed: Duration) {
    // An empty label collapses; keep the line height while the reveal is empty.
    let text = if card.header.is_empty() { " " } else { card.header };
    match card.header_style {
        HeaderStyle::Plain => {
            ui.label(
                egui::RichText::new(text)
                    .size(HEADER_SIZE)
                    .color(color(palette::HEADER_TEXT)),
            );
        }
        HeaderStyle::Gradient => {
            ui.label(gradient_job(text, HEADER_SIZE, view::gradient_position(elapsed)));
        }
    }
}

/// Lays `text` out with one color per glyph sampled from the header gradient.
pub fn gradient_job(text: &str, size: f32, position: f32) -> LayoutJob {
    let mut job = LayoutJob::default();
    let span = text.chars().count().saturating_sub(1).max(1) as f32;
    for (index, ch) in text.chars().enumerate() {
        job.append(
            ch.encode_utf8(&mut [0; 4]),
            0.0,
            TextFormat {
                font_id: egui::FontId::proportional(size),
                color: color(view::gradient_color(index as f32 / span, position)),
                ..Default::default()
            },
        );
    }
    job
}

fn show_code_block(ui: &mut egui::Ui, card: &SnippetCard) {
    egui::Frame::NONE
        .fill(color(palette::CARD))
        .corner_radius(8.0)
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(220)))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.spacing_mut().item_spacing = egui::vec2(0.0, 0.0);

            egui::Frame::NONE
                .fill(color(palette::CODE_BAR))
                .inner_margin(egui::Margin::symmetric(16, 8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(8.0, 0.0);
                        ui.label(
                            egui::RichText::new("</>")
                                .monospace()
                                .strong()
                                .color(color(palette::CODE_BAR_TEXT)),
                        );
                        ui.label(
                            egui::RichText::new(card.language)
                                .monospace()
                                .size(CODE_SIZE)
                                .color(color(palette::CODE_BAR_TEXT)),
                        );
                    });
                });

            egui::Frame::NONE
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    egui::ScrollArea::horizontal()
                        .id_salt(("snippet", card.language))
                        .show(ui, |ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(card.code)
                                        .monospace()
                                        .size(CODE_SIZE)
                                        .color(color(palette::CODE_TEXT)),
                                )
                                .extend(),
                            );
                        });
                });
        });
}

pub fn restart_button(ui: &mut egui::Ui, control: &RestartControl) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(RESTART_SIZE, egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        painter.add(egui::Shape::mesh(gradient_mesh(rect, control.fill)));
        painter.circle_filled(
            rect.right_bottom() - egui::vec2(rect.width() * 0.25, 0.0),
            rect.height(),
            color(control.orb).gamma_multiply(0.3),
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("🔄 {}", control.label),
            egui::FontId::proportional(18.0),
            egui::Color32::WHITE,
        );
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Left-to-right three-stop gradient filling `rect`.
fn gradient_mesh(rect: egui::Rect, stops: [Rgb; 3]) -> egui::epaint::Mesh {
    let mut mesh = egui::epaint::Mesh::default();
    let xs = [rect.left(), rect.center().x, rect.right()];
    for (x, stop) in xs.into_iter().zip(stops) {
        mesh.colored_vertex(egui::pos2(x, rect.top()), color(stop));
        mesh.colored_vertex(egui::pos2(x, rect.bottom()), color(stop));
    }
    for column in 0..2u32 {
        let top_left = column * 2;
        mesh.add_triangle(top_left, top_left + 1, top_left + 2);
        mesh.add_triangle(top_left + 1, top_left + 3, top_left + 2);
    }
    mesh
}
