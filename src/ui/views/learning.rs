use crate::app::RoadmapApp;
use crate::ui::helpers::{goal_card, loading_row};
use crate::ui::layout::simple_panel;
use crate::view_models::GoalCard;
use egui::{Context, RichText};

pub fn ui_learning(app: &mut RoadmapApp, ctx: &Context) {
    simple_panel(ctx, 720.0, |ui| {
        let width = ui.available_width();
        ui.heading("📚 My Learning");
        ui.add_space(12.0);

        if app.is_loading() {
            loading_row(ui, "Opening roadmap...");
            ui.add_space(6.0);
        }

        if app.goals.is_empty() {
            ui.label(RichText::new("Nothing here yet.").weak());
            return;
        }

        let cards: Vec<GoalCard> = app.goals.iter().map(GoalCard::from_goal).collect();
        for card in &cards {
            if goal_card(ui, card, width) {
                app.open_roadmap(card.id);
            }
            ui.add_space(6.0);
        }
    });
}
