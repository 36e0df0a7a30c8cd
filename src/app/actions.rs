use super::*;
use crate::api::ApiCall;
use crate::model::{LearningStyle, ModuleId};

impl RoadmapApp {
    // ----------- AUTH -----------

    pub fn toggle_auth_mode(&mut self) {
        self.auth.mode = match self.auth.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        self.auth.notice = None;
    }

    /// Validates the form locally, then queues login or signup.
    pub fn submit_auth(&mut self) {
        if self.requests.auth.is_busy() {
            return;
        }

        let form = &self.auth;
        let username = form.username.trim();
        let email = form.email.trim();
        let missing = username.is_empty()
            || form.password.is_empty()
            || (form.mode == AuthMode::Signup && email.is_empty());
        if missing {
            let mode = form.mode;
            self.auth.notice = Some(match mode {
                AuthMode::Login => "⚠ Username and password are required.".into(),
                AuthMode::Signup => "⚠ Username, email and password are required.".into(),
            });
            return;
        }

        let call = match form.mode {
            AuthMode::Login => ApiCall::login(username, &form.password),
            AuthMode::Signup => ApiCall::signup(username, email, &form.password),
        };
        self.auth.notice = None;
        self.requests.auth.queue(call);
    }

    pub fn is_authenticating(&self) -> bool {
        self.requests.auth.is_busy()
    }

    // ----------- ROADMAPS -----------

    /// Asks the backend to build a roadmap for the typed skill.
    pub fn generate(&mut self) {
        let skill = self.skill_input.trim();
        if skill.is_empty() || self.is_loading() {
            return;
        }
        let Some(user_id) = self.session.user_id() else {
            return;
        };
        log::info!("Generating roadmap for {skill:?}");
        let call = ApiCall::generate_roadmap(skill, user_id);
        self.requests.generate.queue(call);
    }

    pub fn open_roadmap(&mut self, root_id: ModuleId) {
        if self.requests.roadmap.queue(ApiCall::roadmap(root_id)) {
            log::debug!("Opening roadmap {root_id}");
        }
    }

    // ----------- SETTINGS -----------

    /// Applies the style locally right away and saves it in the background.
    pub fn choose_style(&mut self, style: LearningStyle) {
        if self.session.learning_style() == style {
            return;
        }
        self.session.set_learning_style(style);
        self.settings_saved = false;
        self.settings_saved_at = None;

        if self.requests.settings_update.is_busy() {
            self.requests.style_resend = Some(style);
        } else {
            self.queue_style_update(style);
        }
    }

    pub(crate) fn queue_style_update(&mut self, style: LearningStyle) {
        let Some(user_id) = self.session.user_id() else {
            return;
        };
        self.requests
            .settings_update
            .queue(ApiCall::update_settings(user_id, style));
    }

    /// Hides the "saved" notice once it has been visible long enough.
    /// `now` is the frame time in seconds.
    pub fn tick_settings_notice(&mut self, now: f64) {
        if !self.settings_saved {
            return;
        }
        match self.settings_saved_at {
            None => self.settings_saved_at = Some(now),
            Some(at) if now - at >= SETTINGS_NOTICE_SECS => {
                self.settings_saved = false;
                self.settings_saved_at = None;
            }
            Some(_) => {}
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
