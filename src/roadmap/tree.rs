use crate::api::{ApiCall, ApiClient, RequestSlot};
use crate::error::ApiError;
use crate::model::{Module, ModuleId, QuizResult, UserId};
use crate::quiz::QuizEngine;
use std::collections::{HashMap, HashSet};

struct MountedQuiz {
    engine: QuizEngine,
    submission: RequestSlot<QuizResult>,
}

/// UI state layered over the immutable module tree, keyed by module id.
///
/// It lives outside the render pass, so hiding a subtree (collapsing an
/// ancestor) keeps every descendant's expansion and open quiz untouched.
#[derive(Default)]
pub struct TreeState {
    expanded: HashSet<ModuleId>,
    quizzes: HashMap<ModuleId, MountedQuiz>,
}

impl TreeState {
    pub fn is_expanded(&self, id: ModuleId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn toggle_expanded(&mut self, id: ModuleId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_quiz_open(&self, id: ModuleId) -> bool {
        self.quizzes.contains_key(&id)
    }

    /// Mounts a fresh quiz for the module, or unmounts the open one.
    /// Modules without questions never get a quiz.
    pub fn toggle_quiz(&mut self, module: &Module) {
        if self.quizzes.remove(&module.id).is_some() {
            return;
        }
        if module.has_questions() {
            self.quizzes.insert(
                module.id,
                MountedQuiz {
                    engine: QuizEngine::new(module.id, module.questions.clone()),
                    submission: RequestSlot::Idle,
                },
            );
        }
    }

    pub fn quiz(&self, id: ModuleId) -> Option<&QuizEngine> {
        self.quizzes.get(&id).map(|q| &q.engine)
    }

    pub fn quiz_mut(&mut self, id: ModuleId) -> Option<&mut QuizEngine> {
        self.quizzes.get_mut(&id).map(|q| &mut q.engine)
    }

    /// Moves the quiz to `Submitting` and queues its request.
    pub fn start_submission(&mut self, id: ModuleId, user_id: UserId) -> bool {
        let Some(quiz) = self.quizzes.get_mut(&id) else {
            return false;
        };
        if quiz.submission.is_busy() {
            return false;
        }
        match quiz.engine.begin_submit() {
            Some(answers) => quiz.submission.queue(ApiCall::submit_quiz(user_id, &answers)),
            None => false,
        }
    }

    pub fn dispatch_submissions(&mut self, api: &ApiClient, ctx: &egui::Context) {
        for quiz in self.quizzes.values_mut() {
            quiz.submission.dispatch(api, ctx);
        }
    }

    /// Delivers finished submissions to their quizzes; returns the failures.
    pub fn poll_submissions(&mut self) -> Vec<(ModuleId, ApiError)> {
        let mut failures = Vec::new();
        for (&id, quiz) in self.quizzes.iter_mut() {
            if let Some(outcome) = quiz.submission.poll() {
                if let Err(err) = quiz.engine.finish_submit(outcome) {
                    log::error!("Quiz submission for module {id} failed: {err}");
                    failures.push((id, err));
                }
            }
        }
        failures
    }

    /// Completes a queued submission in place of the network.
    #[cfg(test)]
    pub(crate) fn reply_to(&mut self, id: ModuleId, outcome: Result<QuizResult, ApiError>) {
        let quiz = self.quizzes.get_mut(&id).unwrap();
        assert!(quiz.submission.queued_call().is_some());
        quiz.submission = RequestSlot::InFlight(crate::api::Pending::ready(outcome));
    }
}

pub struct RoadmapTree {
    pub root: Module,
    pub state: TreeState,
}

impl RoadmapTree {
    pub fn new(root: Module) -> Self {
        Self {
            root,
            state: TreeState::default(),
        }
    }

    pub fn find(&self, id: ModuleId) -> Option<&Module> {
        self.root.walk().find(|m| m.id == id)
    }
}
