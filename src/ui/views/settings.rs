use crate::app::RoadmapApp;
use crate::model::LearningStyle;
use crate::ui::layout::simple_panel;
use egui::{Color32, Context, RichText};

pub fn ui_settings(app: &mut RoadmapApp, ctx: &Context) {
    simple_panel(ctx, 560.0, |ui| {
        ui.heading("⚙ Settings");
        ui.add_space(12.0);
        ui.label(RichText::new("Learning style").strong());
        ui.label(RichText::new("Decides which resources each module shows first.").weak());
        ui.add_space(8.0);

        let current = app.session.learning_style();
        for style in LearningStyle::ALL {
            let picked = ui.radio(current == style, style.label()).clicked();
            ui.indent(style.as_str(), |ui| {
                ui.small(style.description());
            });
            if picked {
                app.choose_style(style);
            }
            ui.add_space(4.0);
        }

        if app.settings_saved {
            ui.add_space(10.0);
            ui.label(RichText::new("✅ Saved").color(Color32::from_rgb(80, 200, 120)));
        }
    });
}
