mod helpers;
pub mod layout;
pub mod views;

use crate::app::RoadmapApp;
use crate::model::View;
use eframe::{App, Frame};
use egui::Context;
use layout::{alert_window, bottom_panel, sidebar};
use std::time::Duration;

impl App for RoadmapApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        // Respuestas del backend que llegaron desde el último frame
        self.poll_requests();
        self.tick_settings_notice(ctx.input(|i| i.time));

        // MENÚ LATERAL (solo con sesión)
        if self.view.requires_session() && self.session.is_logged_in() {
            sidebar(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match self.view {
            View::Landing => views::landing::ui_landing(self, ctx),
            View::Auth => views::auth::ui_auth(self, ctx),
            View::Dashboard => views::dashboard::ui_dashboard(self, ctx),
            View::Learning => views::learning::ui_learning(self, ctx),
            View::Settings => views::settings::ui_settings(self, ctx),
            View::Roadmap => views::roadmap::ui_roadmap(self, ctx),
        }

        if self.alert.is_some() {
            alert_window(self, ctx);
        }

        self.dispatch_requests(ctx);

        if self.session.needs_persist() {
            if let Some(storage) = frame.storage_mut() {
                self.session.persist(storage);
            }
        }

        if self.settings_saved {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.session.persist(storage);
    }
}
