use super::*;
use crate::api::{Ack, AuthResponse, GenerateResponse, RequestSlot, SettingsResponse};
use crate::error::ApiError;
use crate::model::{LearningStyle, Module};

/// Backend requests owned by the app, one slot per resource.
#[derive(Default)]
pub struct Requests {
    pub auth: RequestSlot<AuthResponse>,
    pub goals: RequestSlot<Vec<Goal>>,
    pub settings: RequestSlot<SettingsResponse>,
    pub settings_update: RequestSlot<Ack>,
    pub generate: RequestSlot<GenerateResponse>,
    pub roadmap: RequestSlot<Module>,
    /// Style chosen while a previous update was still in flight.
    pub style_resend: Option<LearningStyle>,
}

impl RoadmapApp {
    /// Sends whatever was queued since the last frame.
    pub fn dispatch_requests(&mut self, ctx: &egui::Context) {
        let api = &self.api;
        let requests = &mut self.requests;
        requests.auth.dispatch(api, ctx);
        requests.goals.dispatch(api, ctx);
        requests.settings.dispatch(api, ctx);
        requests.settings_update.dispatch(api, ctx);
        requests.generate.dispatch(api, ctx);
        requests.roadmap.dispatch(api, ctx);

        if let Some(tree) = self.roadmap.as_mut() {
            tree.state.dispatch_submissions(api, ctx);
        }
    }

    /// Applies every reply that arrived since the last frame.
    pub fn poll_requests(&mut self) {
        if let Some(result) = self.requests.auth.poll() {
            self.on_auth(result);
        }
        if let Some(result) = self.requests.goals.poll() {
            self.on_goals(result);
        }
        if let Some(result) = self.requests.settings.poll() {
            self.on_settings(result);
        }
        if let Some(result) = self.requests.settings_update.poll() {
            self.on_settings_saved(result);
        }
        if let Some(result) = self.requests.generate.poll() {
            self.on_generated(result);
        }
        if let Some(result) = self.requests.roadmap.poll() {
            self.on_roadmap(result);
        }

        let failures = match self.roadmap.as_mut() {
            Some(tree) => tree.state.poll_submissions(),
            None => Vec::new(),
        };
        if !failures.is_empty() {
            self.show_alert("Failed to submit quiz!");
        }
    }

    pub fn is_loading(&self) -> bool {
        self.requests.generate.is_busy() || self.requests.roadmap.is_busy()
    }

    pub fn is_loading_dashboard(&self) -> bool {
        self.requests.goals.is_busy()
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("Alert: {message}");
        self.alert = Some(message);
    }

    // ----------- HANDLERS -----------

    pub(crate) fn on_auth(&mut self, result: Result<AuthResponse, ApiError>) {
        match result {
            Ok(AuthResponse { user_id }) => {
                self.session.login(user_id);
                self.auth = AuthForm::default();
                self.navigate(View::Dashboard);
            }
            Err(err) => {
                log::warn!("Authentication failed: {err}");
                self.show_alert(format!("Auth Failed: {}", err.user_message()));
            }
        }
    }

    pub(crate) fn on_goals(&mut self, result: Result<Vec<Goal>, ApiError>) {
        match result {
            Ok(goals) => {
                if let Some(stats) = UserStats::from_goals(&goals) {
                    self.stats = stats;
                }
                self.goals = goals;
            }
            Err(err) => log::error!("Failed to load dashboard: {err}"),
        }
    }

    pub(crate) fn on_settings(&mut self, result: Result<SettingsResponse, ApiError>) {
        match result {
            Ok(settings) => {
                let Some(raw) = settings.learning_style else {
                    return;
                };
                // A choice still being saved wins over the stored one
                if self.requests.settings_update.is_busy() {
                    return;
                }
                match LearningStyle::parse(&raw) {
                    Some(style) => self.session.set_learning_style(style),
                    None => log::warn!("Unknown learning style from server: {raw:?}"),
                }
            }
            Err(err) => log::error!("Failed to load settings: {err}"),
        }
    }

    pub(crate) fn on_settings_saved(&mut self, result: Result<Ack, ApiError>) {
        match result {
            Ok(_) => {
                self.settings_saved = true;
                self.settings_saved_at = None;
            }
            Err(err) => log::error!("Failed to save setting: {err}"),
        }

        if let Some(style) = self.requests.style_resend.take() {
            self.queue_style_update(style);
        }
    }

    pub(crate) fn on_generated(&mut self, result: Result<GenerateResponse, ApiError>) {
        match result {
            Ok(GenerateResponse { root_id }) => {
                log::info!("Roadmap {root_id} ready");
                self.skill_input.clear();
                self.open_roadmap(root_id);
            }
            Err(err) => {
                log::error!("Roadmap generation failed: {err}");
                self.show_alert("Error generating roadmap.");
            }
        }
    }

    pub(crate) fn on_roadmap(&mut self, result: Result<Module, ApiError>) {
        match result {
            Ok(root) => {
                self.roadmap = Some(RoadmapTree::new(root));
                self.navigate(View::Roadmap);
            }
            Err(err) => {
                log::error!("Could not load roadmap: {err}");
                self.show_alert("Could not load roadmap.");
            }
        }
    }
}
