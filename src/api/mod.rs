//! Typed access to the roadmap backend.
//!
//! Every endpoint is described by an [`ApiCall`] (method, path, JSON body);
//! [`ApiClient::send`] hands it to the platform transport and returns a
//! [`Pending`] that the UI polls once per frame.

pub mod config;
pub mod transport;

use crate::error::ApiError;
use crate::model::{AnswerSubmission, LearningStyle, ModuleId, UserId};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

pub use config::ApiConfig;
pub use transport::{Pending, RequestSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiCall {
    fn get(path: String) -> Self {
        Self {
            method: Method::Get,
            path,
            body: None,
        }
    }

    fn post(path: &str, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.to_string(),
            body: Some(body),
        }
    }

    // ----------- AUTH -----------

    pub fn signup(username: &str, email: &str, password: &str) -> Self {
        Self::post(
            "/signup",
            json!({ "username": username, "email": email, "password": password }),
        )
    }

    pub fn login(username: &str, password: &str) -> Self {
        Self::post(
            "/login",
            json!({ "username": username, "password": password }),
        )
    }

    // ----------- SETTINGS -----------

    pub fn user_settings(user_id: UserId) -> Self {
        Self::get(format!("/user/settings/{user_id}"))
    }

    pub fn update_settings(user_id: UserId, style: LearningStyle) -> Self {
        Self::post(
            "/update-settings",
            json!({ "user_id": user_id, "learning_style": style.as_str() }),
        )
    }

    // ----------- ROADMAPS -----------

    pub fn generate_roadmap(skill: &str, user_id: UserId) -> Self {
        Self::post(
            "/generate-roadmap",
            json!({ "skill": skill, "user_id": user_id }),
        )
    }

    pub fn roadmap(id: ModuleId) -> Self {
        Self::get(format!("/roadmap/{id}"))
    }

    pub fn user_goals(user_id: UserId) -> Self {
        Self::get(format!("/my-goals/{user_id}"))
    }

    // ----------- QUIZ -----------

    pub fn submit_quiz(user_id: UserId, answers: &[AnswerSubmission]) -> Self {
        Self::post(
            "/submit-quiz",
            json!({ "user_id": user_id, "answers": answers }),
        )
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub user_id: UserId,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SettingsResponse {
    #[serde(default)]
    pub learning_style: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GenerateResponse {
    pub root_id: ModuleId,
}

/// Body of a successful call whose content the client ignores.
pub type Ack = serde::de::IgnoredAny;

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Turns a raw HTTP reply into the expected payload or an [`ApiError`].
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty());
        return Err(ApiError::Status { status, message });
    }

    let body = if body.trim().is_empty() { "null" } else { body };
    Ok(serde_json::from_str(body)?)
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Starts the request off the UI thread; the reply arrives through `Pending`.
    pub fn send<T>(&self, call: ApiCall, ctx: &egui::Context) -> Pending<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.config.url_for(&call.path);
        log::debug!("{:?} {url}", call.method);
        transport::dispatch(url, call, ctx.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Goal, Module, QuizResult};

    #[test]
    fn quiz_submission_body_matches_backend_contract() {
        let answers = [
            AnswerSubmission { question_id: 11, selected_index: 2 },
            AnswerSubmission { question_id: 12, selected_index: 0 },
        ];
        let call = ApiCall::submit_quiz(7, &answers);
        assert_eq!(call.method, Method::Post);
        assert_eq!(call.path, "/submit-quiz");
        assert_eq!(
            call.body,
            Some(json!({
                "user_id": 7,
                "answers": [
                    { "question_id": 11, "selected_index": 2 },
                    { "question_id": 12, "selected_index": 0 }
                ]
            }))
        );
    }

    #[test]
    fn get_endpoints_embed_ids_in_path() {
        assert_eq!(ApiCall::roadmap(42).path, "/roadmap/42");
        assert_eq!(ApiCall::user_goals(3).path, "/my-goals/3");
        assert_eq!(ApiCall::user_settings(3).path, "/user/settings/3");
        assert_eq!(ApiCall::roadmap(42).body, None);
    }

    #[test]
    fn settings_update_sends_wire_style_name() {
        let call = ApiCall::update_settings(9, LearningStyle::OfficialDocs);
        assert_eq!(
            call.body,
            Some(json!({ "user_id": 9, "learning_style": "official_docs" }))
        );
    }

    #[test]
    fn signup_and_login_bodies() {
        let signup = ApiCall::signup("ada", "ada@example.com", "pw");
        assert_eq!(signup.path, "/signup");
        assert_eq!(
            signup.body,
            Some(json!({ "username": "ada", "email": "ada@example.com", "password": "pw" }))
        );
        let login = ApiCall::login("ada", "pw");
        assert_eq!(login.body, Some(json!({ "username": "ada", "password": "pw" })));
    }

    #[test]
    fn error_status_carries_server_message() {
        let err = decode_response::<AuthResponse>(401, r#"{"error": "Invalid credentials"}"#)
            .unwrap_err();
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message.as_deref(), Some("Invalid credentials"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_status_without_json_body() {
        let err = decode_response::<Module>(404, "<html>Not Found</html>").unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, message: None }));
    }

    #[test]
    fn success_bodies_decode() {
        let auth: AuthResponse =
            decode_response(201, r#"{"message": "User created!", "user_id": 4}"#).unwrap();
        assert_eq!(auth.user_id, 4);

        let goals: Vec<Goal> = decode_response(200, "[]").unwrap();
        assert!(goals.is_empty());

        let result: QuizResult =
            decode_response(200, r#"{"score_percent": 40.0, "failed_module_ids": [7, 12]}"#)
                .unwrap();
        assert_eq!(result.failed_module_ids, vec![7, 12]);

        let _: Ack = decode_response(200, "").unwrap();
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        let err = decode_response::<GenerateResponse>(200, r#"{"message": "ok"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
