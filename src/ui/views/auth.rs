use crate::app::{AuthMode, RoadmapApp};
use crate::model::View;
use crate::ui::helpers::{big_button, loading_row};
use crate::ui::layout::centered_panel;
use egui::{Align, Context, RichText, TextEdit};

pub fn ui_auth(app: &mut RoadmapApp, ctx: &Context) {
    let signup = app.auth.mode == AuthMode::Signup;
    let est_height = if signup { 360.0 } else { 300.0 };

    centered_panel(ctx, est_height, 380.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(if signup { "Create Account" } else { "Welcome Back" });
            ui.add_space(16.0);

            let width = ui.available_width();
            let busy = app.is_authenticating();

            ui.add_enabled_ui(!busy, |ui| {
                ui.add(
                    TextEdit::singleline(&mut app.auth.username)
                        .hint_text("Username")
                        .desired_width(width),
                );
                if signup {
                    ui.add_space(6.0);
                    ui.add(
                        TextEdit::singleline(&mut app.auth.email)
                            .hint_text("Email")
                            .desired_width(width),
                    );
                }
                ui.add_space(6.0);
                let password = ui.add(
                    TextEdit::singleline(&mut app.auth.password)
                        .password(true)
                        .hint_text("Password")
                        .desired_width(width),
                );
                let enter = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(12.0);
                let label = if signup { "Sign Up" } else { "Login" };
                if big_button(ui, label, width, 36.0, true) || enter {
                    app.submit_auth();
                }
            });

            if busy {
                ui.add_space(6.0);
                loading_row(ui, "Contacting server...");
            }

            if let Some(notice) = &app.auth.notice {
                ui.add_space(6.0);
                ui.label(RichText::new(notice).color(ui.visuals().warn_fg_color));
            }

            ui.add_space(12.0);
            let switch = if signup {
                "Already have an account? Login"
            } else {
                "Need an account? Sign Up"
            };
            if ui.link(switch).clicked() {
                app.toggle_auth_mode();
            }
            ui.add_space(4.0);
            if ui.small_button("🔙 Back").clicked() {
                app.navigate(View::Landing);
            }
        });
    });
}
