use super::*;

impl RoadmapApp {
    /// Where a request to show `target` actually lands, given the session.
    pub fn resolve_view(&self, target: View) -> View {
        let logged_in = self.session.is_logged_in();
        match target {
            View::Landing | View::Auth if logged_in => View::Dashboard,
            View::Landing | View::Auth => target,
            View::Dashboard | View::Learning | View::Settings | View::Roadmap if !logged_in => {
                View::Auth
            }
            View::Roadmap if self.roadmap.is_none() => View::Dashboard,
            View::Dashboard | View::Learning | View::Settings | View::Roadmap => target,
        }
    }

    pub fn navigate(&mut self, target: View) {
        let view = self.resolve_view(target);
        if view != target {
            log::debug!("Redirecting {target:?} -> {view:?}");
        }
        self.view = view;

        // Every dashboard visit reloads goals and settings
        if view == View::Dashboard {
            self.refresh_dashboard();
        }
    }

    pub fn refresh_dashboard(&mut self) {
        let Some(user_id) = self.session.user_id() else {
            return;
        };
        self.requests
            .goals
            .queue(crate::api::ApiCall::user_goals(user_id));
        self.requests
            .settings
            .queue(crate::api::ApiCall::user_settings(user_id));
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.clear_user_state();
        self.auth = AuthForm::default();
        self.navigate(View::Auth);
    }
}
