use crate::app::RoadmapApp;
use crate::model::View;
use crate::view_models::StatsCard;
use egui::{Align, Button, CentralPanel, Context, Frame, ProgressBar, RichText, Ui, Visuals};

const SIDEBAR_WIDTH: f32 = 200.0;

/// Estadísticas, navegación y logout para las vistas con sesión.
pub fn sidebar(app: &mut RoadmapApp, ctx: &Context) {
    let card = StatsCard::from_stats(&app.stats);

    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(SIDEBAR_WIDTH)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.heading("🧭 Roadmap");
            ui.add_space(12.0);

            // ----------- ESTADÍSTICAS -----------
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&card.level_label).strong());
                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        ui.label(&card.xp_label);
                    });
                });
                ui.add(ProgressBar::new(card.progress).desired_height(8.0));
                ui.small(&card.progress_label);
            });

            ui.add_space(16.0);

            // ----------- NAVEGACIÓN -----------
            let entries = [
                (View::Dashboard, "🏠 Dashboard"),
                (View::Learning, "📚 My Learning"),
                (View::Settings, "⚙ Settings"),
            ];
            let full = ui.available_width();
            for (view, label) in entries {
                let selected = app.view == view;
                let button = Button::new(label)
                    .selected(selected)
                    .min_size(egui::vec2(full, 32.0));
                if ui.add(button).clicked() && !selected {
                    app.navigate(view);
                }
                ui.add_space(4.0);
            }

            ui.with_layout(egui::Layout::bottom_up(Align::Min), |ui| {
                ui.add_space(12.0);
                if ui
                    .add_sized([full, 32.0], Button::new("🚪 Logout"))
                    .clicked()
                {
                    app.logout();
                }
            });
        });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
            if ui.button("🌙 Dark").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Aviso modal: bloquea la vista de debajo hasta que se pulsa OK.
pub fn alert_window(app: &mut RoadmapApp, ctx: &Context) {
    let Some(message) = app.alert.clone() else {
        return;
    };

    egui::Modal::new(egui::Id::new("alert_modal")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.heading("⚠ Alert");
        ui.add_space(6.0);
        ui.label(message);
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            if ui.button("OK").clicked() {
                app.dismiss_alert();
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con anchura máxima y scroll vertical, para listas largas.
pub fn simple_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                Frame::default()
                    .inner_margin(egui::Margin::symmetric(24, 16))
                    .show(ui, |ui| {
                        ui.set_width(w);
                        inner(ui);
                    });
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::logged_in;
    use crate::model::{Module, Question, ResourceData};
    use crate::roadmap::RoadmapTree;
    use crate::ui::test_support::{click, contains, position_of, run_frame};
    use crate::ui::views::roadmap::ui_roadmap;

    fn quiz_module() -> Module {
        Module {
            id: 5,
            title: "Ownership".into(),
            summary: Some("Every value has one owner.".into()),
            resource_data: ResourceData::default(),
            sub_modules: vec![],
            questions: vec![Question {
                id: 50,
                text: "Who frees the value?".into(),
                options: vec!["The owner".into(), "The GC".into()],
            }],
        }
    }

    fn paint(app: &mut RoadmapApp, ctx: &Context) {
        ui_roadmap(app, ctx);
        alert_window(app, ctx);
    }

    fn quiz_open(app: &RoadmapApp) -> bool {
        app.roadmap.as_ref().is_some_and(|t| t.state.is_quiz_open(5))
    }

    #[test]
    fn alert_blocks_clicks_on_the_view_below() {
        let mut app = logged_in(1);
        let mut tree = RoadmapTree::new(quiz_module());
        tree.state.toggle_expanded(5);
        app.roadmap = Some(tree);

        let ctx = Context::default();
        run_frame(&ctx, vec![], &mut |ctx| paint(&mut app, ctx));
        let painted = run_frame(&ctx, vec![], &mut |ctx| paint(&mut app, ctx));
        let take_quiz = position_of(&painted, "Take Quiz").unwrap();

        // sin aviso, el clic llega al botón
        click(&ctx, take_quiz, &mut |ctx| paint(&mut app, ctx));
        assert!(quiz_open(&app));
        if let Some(tree) = app.roadmap.as_mut() {
            tree.state.toggle_quiz(&quiz_module());
        }
        assert!(!quiz_open(&app));

        app.show_alert("Failed to submit quiz!");
        run_frame(&ctx, vec![], &mut |ctx| paint(&mut app, ctx));
        let painted = run_frame(&ctx, vec![], &mut |ctx| paint(&mut app, ctx));
        assert!(contains(&painted, "Failed to submit quiz!"));

        click(&ctx, take_quiz, &mut |ctx| paint(&mut app, ctx));
        assert!(!quiz_open(&app));
        assert!(app.alert.is_some());

        let ok = position_of(&painted, "OK").unwrap();
        click(&ctx, ok, &mut |ctx| paint(&mut app, ctx));
        assert!(app.alert.is_none());
    }
}
