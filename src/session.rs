use crate::model::{LearningStyle, UserId};
use std::collections::HashMap;

pub const USER_ID_KEY: &str = "user_id";

/// Minimal key/value view of durable storage.
pub trait SessionStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: String);
}

impl<'a> SessionStorage for dyn eframe::Storage + 'a {
    fn read(&self, key: &str) -> Option<String> {
        self.get_string(key)
    }

    fn write(&mut self, key: &str, value: String) {
        self.set_string(key, value);
        self.flush();
    }
}

impl SessionStorage for HashMap<String, String> {
    fn read(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }
}

/// Who is logged in and how they like to learn.
///
/// Only the user id is persisted; the learning style is owned by the
/// backend and reloaded on every dashboard visit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStore {
    user_id: Option<UserId>,
    learning_style: LearningStyle,
    dirty: bool,
}

impl SessionStore {
    pub fn load<S: SessionStorage + ?Sized>(storage: &S) -> Self {
        let user_id = storage.read(USER_ID_KEY).and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            match raw.parse::<UserId>() {
                Ok(id) => Some(id),
                Err(err) => {
                    log::warn!("Ignoring stored user id {raw:?}: {err}");
                    None
                }
            }
        });

        Self {
            user_id,
            learning_style: LearningStyle::default(),
            dirty: false,
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn learning_style(&self) -> LearningStyle {
        self.learning_style
    }

    pub fn set_learning_style(&mut self, style: LearningStyle) {
        self.learning_style = style;
    }

    pub fn login(&mut self, user_id: UserId) {
        log::info!("User {user_id} logged in");
        self.user_id = Some(user_id);
        self.dirty = true;
    }

    /// Forgets the user and their preferences.
    pub fn logout(&mut self) {
        if let Some(id) = self.user_id.take() {
            log::info!("User {id} logged out");
        }
        self.learning_style = LearningStyle::default();
        self.dirty = true;
    }

    pub fn needs_persist(&self) -> bool {
        self.dirty
    }

    pub fn persist<S: SessionStorage + ?Sized>(&mut self, storage: &mut S) {
        let value = self.user_id.map(|id| id.to_string()).unwrap_or_default();
        storage.write(USER_ID_KEY, value);
        self.dirty = false;
    }
}
