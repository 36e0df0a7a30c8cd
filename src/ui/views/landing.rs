use crate::app::RoadmapApp;
use crate::model::View;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Context, RichText};

pub fn ui_landing(app: &mut RoadmapApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 540.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(RichText::new("🧭 Learning Roadmaps").size(32.0));
            ui.add_space(12.0);
            ui.label("Type any skill and get a step-by-step roadmap with resources and quizzes.");
            ui.add_space(24.0);

            let btn_w = (ui.available_width() * 0.6).clamp(160.0, 320.0);
            if ui
                .add_sized([btn_w, 40.0], Button::new("🚀 Get Started"))
                .clicked()
            {
                app.navigate(View::Auth);
            }
        });
    });
}
