// src/ui/helpers.rs
use crate::view_models::GoalCard;
use egui::{Button, Color32, RichText, Ui, Vec2};

/// Botón grande de tamaño fijo.
pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Spinner con texto al lado, para cualquier petición en curso.
pub fn loading_row(ui: &mut Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(RichText::new(text).weak());
    });
}

/// Tarjeta clicable de una meta. Devuelve true si se pulsó.
pub fn goal_card(ui: &mut Ui, card: &GoalCard, width: f32) -> bool {
    let status = card.status_badge();
    let color = if card.status == "completed" {
        Color32::from_rgb(80, 200, 120)
    } else {
        ui.visuals().weak_text_color()
    };

    let response = egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_width(width);
            ui.horizontal(|ui| {
                ui.label(RichText::new(&card.title).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(status).color(color).small());
                });
            });
        })
        .response;

    response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}
