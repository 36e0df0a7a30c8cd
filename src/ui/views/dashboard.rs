use crate::app::RoadmapApp;
use crate::model::View;
use crate::ui::helpers::{big_button, goal_card, loading_row};
use crate::ui::layout::simple_panel;
use crate::view_models::recent_goal_cards;
use egui::{Context, RichText, TextEdit};

pub fn ui_dashboard(app: &mut RoadmapApp, ctx: &Context) {
    simple_panel(ctx, 720.0, |ui| {
        let width = ui.available_width();

        ui.heading("What do you want to learn?");
        ui.add_space(10.0);

        let loading = app.is_loading();
        ui.horizontal(|ui| {
            let input_w = (width - 140.0).max(120.0);
            let input = ui.add_enabled(
                !loading,
                TextEdit::singleline(&mut app.skill_input)
                    .hint_text("e.g. Kubernetes, Rust, Music Theory")
                    .desired_width(input_w),
            );
            let enter = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let ready = !loading && !app.skill_input.trim().is_empty();
            if big_button(ui, "✨ Generate", 120.0, 28.0, ready) || (enter && ready) {
                app.generate();
            }
        });

        if loading {
            ui.add_space(6.0);
            loading_row(ui, "Building your roadmap...");
        }

        ui.add_space(24.0);
        ui.horizontal(|ui| {
            ui.heading("Recent Goals");
            if app.is_loading_dashboard() {
                ui.spinner();
            }
        });
        ui.add_space(8.0);

        let cards = recent_goal_cards(&app.goals);
        if cards.is_empty() {
            ui.label(RichText::new("No goals yet. Generate your first roadmap above!").weak());
        }
        for card in &cards {
            if goal_card(ui, card, width) {
                app.open_roadmap(card.id);
            }
            ui.add_space(6.0);
        }

        if app.goals.len() > cards.len() && ui.link("See all goals →").clicked() {
            app.navigate(View::Learning);
        }
    });
}
