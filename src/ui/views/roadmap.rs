use crate::app::RoadmapApp;
use crate::model::{Module, ModuleId, UserId, Verdict, View};
use crate::roadmap::{ResourcePanel, RoadmapTree, TreeState, resource_panel, youtube_search_url};
use crate::ui::layout::simple_panel;
use crate::view_models::{ModuleHeader, QuizOutcome};
use egui::{Button, Color32, Context, Frame, RadioButton, RichText, Ui};

const INDENT: f32 = 24.0;
const PASS_COLOR: Color32 = Color32::from_rgb(80, 200, 120);
const REVIEW_COLOR: Color32 = Color32::from_rgb(230, 160, 60);

pub fn ui_roadmap(app: &mut RoadmapApp, ctx: &Context) {
    let Some(user_id) = app.session.user_id() else {
        return;
    };
    let mut back = false;

    simple_panel(ctx, 860.0, |ui| {
        if ui.button("⬅ Back to Dashboard").clicked() {
            back = true;
        }
        ui.add_space(8.0);

        let Some(RoadmapTree { root, state }) = app.roadmap.as_mut() else {
            return;
        };
        ui.heading(&root.title);
        if let Some(summary) = root.summary_text() {
            ui.label(RichText::new(summary).weak());
        }
        ui.add_space(12.0);

        let root: &Module = root;
        module_node(ui, root, root, 0, state, user_id);
    });

    if back {
        app.navigate(View::Dashboard);
    }
}

/// Tarjeta de un módulo. Plegada solo muestra la cabecera; desplegada añade
/// recursos, quiz y submódulos un nivel más adentro.
fn module_node(
    ui: &mut Ui,
    root: &Module,
    module: &Module,
    depth: usize,
    state: &mut TreeState,
    user_id: UserId,
) {
    ui.push_id(module.id, |ui| {
        let expanded = state.is_expanded(module.id);

        ui.horizontal(|ui| {
            ui.add_space(depth as f32 * INDENT);
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical(|ui| {
                    module_header(ui, module, state);
                    if !expanded {
                        return;
                    }

                    resources(ui, module);

                    if module.has_questions() {
                        ui.add_space(6.0);
                        let label = if state.is_quiz_open(module.id) {
                            "✖ Close Quiz"
                        } else {
                            "📝 Take Quiz"
                        };
                        if ui.button(label).clicked() {
                            state.toggle_quiz(module);
                        }
                    }

                    if state.is_quiz_open(module.id) {
                        ui.separator();
                        quiz_panel(ui, root, module.id, state, user_id);
                    }
                });
            });
        });
        ui.add_space(6.0);

        if expanded {
            for sub in &module.sub_modules {
                module_node(ui, root, sub, depth + 1, state, user_id);
            }
        }
    });
}

fn module_header(ui: &mut Ui, module: &Module, state: &mut TreeState) {
    let header = ModuleHeader::from_module(module);
    ui.horizontal(|ui| {
        let arrow = if state.is_expanded(module.id) { "▼" } else { "▶" };
        if ui.small_button(arrow).clicked() {
            state.toggle_expanded(module.id);
        }
        ui.label(RichText::new(&header.title).strong().size(16.0));
        if let Some(count) = &header.sub_modules {
            ui.label(RichText::new(count).weak().small());
        }
        if let Some(badge) = &header.question_badge {
            ui.label(RichText::new(badge).small().color(ui.visuals().hyperlink_color));
        }
    });
}

fn resources(ui: &mut Ui, module: &Module) {
    let Some(panel) = resource_panel(module) else {
        return;
    };
    ui.add_space(4.0);
    match panel {
        ResourcePanel::Video { queries, footnote } => {
            ui.label(RichText::new("🎬 Videos").small().strong());
            for query in queries {
                ui.hyperlink_to(format!("🔎 {query}"), youtube_search_url(query));
            }
            if let Some(note) = footnote {
                ui.small(note);
            }
        }
        ResourcePanel::Docs { links } => {
            ui.label(RichText::new("📄 Documentation").small().strong());
            for link in links {
                ui.hyperlink_to(link, link);
            }
        }
        ResourcePanel::Text { summary } => {
            ui.label(summary);
        }
    }
}

fn quiz_panel(ui: &mut Ui, root: &Module, module_id: ModuleId, state: &mut TreeState, user_id: UserId) {
    let Some(quiz) = state.quiz_mut(module_id) else {
        return;
    };

    // ----------- RESULTADO -----------
    if let Some(outcome) = quiz.result().map(|r| QuizOutcome::new(r, Some(root))) {
        let color = match outcome.verdict {
            Verdict::Pass => PASS_COLOR,
            Verdict::NeedsReview => REVIEW_COLOR,
        };
        ui.horizontal(|ui| {
            ui.label(RichText::new(&outcome.score_label).size(22.0).strong());
            ui.label(RichText::new(outcome.verdict_label).color(color).strong());
        });

        if outcome.no_weak_areas() {
            ui.label("Perfect! No weak areas detected.");
        } else {
            ui.label("Review these modules:");
            for area in &outcome.weak_areas {
                ui.label(format!("• {}", area.label));
            }
        }

        ui.add_space(6.0);
        if ui.button("🔄 Try Again").clicked() {
            quiz.reset();
        }
        return;
    }

    // ----------- PREGUNTAS -----------
    let submitting = quiz.is_submitting();
    let mut picks = Vec::new();
    for (n, question) in quiz.questions().iter().enumerate() {
        ui.add_space(4.0);
        ui.label(RichText::new(format!("{}. {}", n + 1, question.text)).strong());
        let selected = quiz.selected(question.id);
        for (idx, option) in question.options.iter().enumerate() {
            let radio = RadioButton::new(selected == Some(idx), option);
            if ui.add_enabled(!submitting, radio).clicked() {
                picks.push((question.id, idx));
            }
        }
    }
    for (question_id, idx) in picks {
        quiz.select(question_id, idx);
    }

    ui.add_space(8.0);
    let can_submit = quiz.can_submit();
    let mut submit = false;
    ui.horizontal(|ui| {
        submit = ui
            .add_enabled(can_submit, Button::new("Submit Answers"))
            .clicked();
        if submitting {
            ui.spinner();
            ui.label(RichText::new("Grading...").weak());
        }
    });

    if submit {
        state.start_submission(module_id, user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::logged_in;
    use crate::model::{Question, ResourceData};
    use crate::ui::test_support::{Painted, click, contains, position_of, run_frame};

    fn module(id: ModuleId, title: &str, summary: Option<&str>, subs: Vec<Module>, questions: usize) -> Module {
        Module {
            id,
            title: title.into(),
            summary: summary.map(String::from),
            resource_data: ResourceData::default(),
            sub_modules: subs,
            questions: (0..questions as i64)
                .map(|i| Question {
                    id: id * 10 + i,
                    text: "What does a pod wrap?".into(),
                    options: vec!["Containers".into(), "Nodes".into()],
                })
                .collect(),
        }
    }

    //   1 Kubernetes
    //   └── 2 Pods (resumen + 1 pregunta)
    fn app_with_tree() -> RoadmapApp {
        let mut app = logged_in(1);
        let pods = module(2, "Pods", Some("Pods wrap containers."), vec![], 1);
        app.roadmap = Some(RoadmapTree::new(module(1, "Kubernetes", None, vec![pods], 0)));
        app
    }

    fn state(app: &mut RoadmapApp) -> &mut TreeState {
        &mut app.roadmap.as_mut().unwrap().state
    }

    fn render(ctx: &Context, app: &mut RoadmapApp) -> Vec<Painted> {
        run_frame(ctx, vec![], &mut |ctx| ui_roadmap(app, ctx))
    }

    fn arrows(painted: &[Painted], arrow: &str) -> usize {
        painted.iter().filter(|p| p.text == arrow).count()
    }

    #[test]
    fn fresh_tree_shows_only_the_root_header() {
        let mut app = app_with_tree();
        let ctx = Context::default();
        render(&ctx, &mut app);
        let painted = render(&ctx, &mut app);

        assert!(contains(&painted, "Kubernetes"));
        assert!(!contains(&painted, "Pods"));
        assert_eq!(arrows(&painted, "▶"), 1);
    }

    #[test]
    fn collapsed_leaf_hides_resources_and_quiz() {
        let mut app = app_with_tree();
        state(&mut app).toggle_expanded(1);
        let ctx = Context::default();
        render(&ctx, &mut app);
        let painted = render(&ctx, &mut app);

        assert!(contains(&painted, "Pods"));
        assert!(!contains(&painted, "Pods wrap containers."));
        assert!(!contains(&painted, "Take Quiz"));
        // la hoja también tiene su flecha
        assert_eq!(arrows(&painted, "▼"), 1);
        assert_eq!(arrows(&painted, "▶"), 1);
    }

    #[test]
    fn clicking_the_arrow_expands_a_leaf() {
        let mut app = app_with_tree();
        state(&mut app).toggle_expanded(1);
        let ctx = Context::default();
        render(&ctx, &mut app);
        let painted = render(&ctx, &mut app);
        let arrow = painted
            .iter()
            .find(|p| p.text == "▶")
            .map(|p| p.rect.center())
            .unwrap();

        click(&ctx, arrow, &mut |ctx| ui_roadmap(&mut app, ctx));
        assert!(state(&mut app).is_expanded(2));

        let painted = render(&ctx, &mut app);
        assert!(contains(&painted, "Pods wrap containers."));
        assert!(contains(&painted, "Take Quiz"));
    }

    #[test]
    fn collapsing_the_parent_restores_the_subtree_on_reopen() {
        let mut app = app_with_tree();
        state(&mut app).toggle_expanded(1);
        state(&mut app).toggle_expanded(2);
        let ctx = Context::default();
        render(&ctx, &mut app);
        let painted = render(&ctx, &mut app);
        let take_quiz = position_of(&painted, "Take Quiz").unwrap();
        click(&ctx, take_quiz, &mut |ctx| ui_roadmap(&mut app, ctx));
        assert!(state(&mut app).is_quiz_open(2));

        state(&mut app).toggle_expanded(1);
        let painted = render(&ctx, &mut app);
        assert!(!contains(&painted, "Pods"));
        assert!(!contains(&painted, "What does a pod wrap?"));

        state(&mut app).toggle_expanded(1);
        let painted = render(&ctx, &mut app);
        assert!(contains(&painted, "Pods wrap containers."));
        assert!(contains(&painted, "Close Quiz"));
        assert!(contains(&painted, "What does a pod wrap?"));
    }
}
