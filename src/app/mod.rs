use crate::api::{ApiClient, ApiConfig};
use crate::model::{Goal, UserStats, View};
use crate::roadmap::RoadmapTree;
use crate::session::SessionStore;

pub mod actions;
pub mod navigation;
pub mod requests;

pub use requests::Requests;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub username: String,
    pub email: String,
    pub password: String,
    pub notice: Option<String>, // local validation only
}

/// How long the "settings saved" notice stays up, in seconds.
pub const SETTINGS_NOTICE_SECS: f64 = 2.0;

pub struct RoadmapApp {
    pub api: ApiClient,
    pub session: SessionStore,
    pub view: View,
    pub auth: AuthForm,
    pub skill_input: String,
    pub goals: Vec<Goal>,
    pub stats: UserStats,
    pub roadmap: Option<RoadmapTree>,
    pub alert: Option<String>,
    pub settings_saved: bool,
    pub settings_saved_at: Option<f64>,
    pub requests: Requests,
}

impl RoadmapApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let session = match cc.storage {
            Some(storage) => SessionStore::load(storage),
            None => SessionStore::default(),
        };
        Self::with_session(ApiClient::new(ApiConfig::from_environment()), session)
    }

    /// Builds the app around an already loaded session.
    pub fn with_session(api: ApiClient, session: SessionStore) -> Self {
        let mut app = Self {
            api,
            session,
            view: View::Landing,
            auth: AuthForm::default(),
            skill_input: String::new(),
            goals: Vec::new(),
            stats: UserStats::default(),
            roadmap: None,
            alert: None,
            settings_saved: false,
            settings_saved_at: None,
            requests: Requests::default(),
        };

        if app.session.is_logged_in() {
            app.navigate(View::Dashboard);
        }
        app
    }

    /// Clears everything tied to the current user.
    pub(crate) fn clear_user_state(&mut self) {
        self.skill_input.clear();
        self.goals.clear();
        self.stats = UserStats::default();
        self.roadmap = None;
        self.settings_saved = false;
        self.settings_saved_at = None;
        self.requests = Requests::default();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::session::USER_ID_KEY;
    use std::collections::HashMap;

    pub fn api() -> ApiClient {
        ApiClient::new(ApiConfig::new("http://127.0.0.1:5000/api"))
    }

    pub fn logged_out() -> RoadmapApp {
        RoadmapApp::with_session(api(), SessionStore::default())
    }

    pub fn logged_in(user_id: i64) -> RoadmapApp {
        let mut storage = HashMap::new();
        storage.insert(USER_ID_KEY.to_string(), user_id.to_string());
        RoadmapApp::with_session(api(), SessionStore::load(&storage))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use crate::model::View;

    #[test]
    fn fresh_install_starts_on_landing() {
        let app = logged_out();
        assert_eq!(app.view, View::Landing);
        assert!(app.requests.goals.queued_call().is_none());
    }

    #[test]
    fn stored_session_starts_on_dashboard_and_loads_it() {
        let app = logged_in(3);
        assert_eq!(app.view, View::Dashboard);
        assert_eq!(
            app.requests.goals.queued_call().map(|c| c.path.as_str()),
            Some("/my-goals/3")
        );
        assert_eq!(
            app.requests.settings.queued_call().map(|c| c.path.as_str()),
            Some("/user/settings/3")
        );
    }
}
