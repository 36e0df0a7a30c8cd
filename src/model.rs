use serde::{Deserialize, Deserializer, Serialize};

pub type ModuleId = i64;
pub type QuestionId = i64;
pub type UserId = i64;

/// The backend sends `null` for empty JSON columns; treat it like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ResourceData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub video_queries: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ref_links: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<String>,
}

/// One roadmap node. The whole tree arrives in a single response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Module {
    pub id: ModuleId,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_data: ResourceData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_modules: Vec<Module>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub questions: Vec<Question>,
}

impl Module {
    pub fn has_sub_modules(&self) -> bool {
        !self.sub_modules.is_empty()
    }

    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }

    /// Summary text, if present and non-empty. Whitespace counts as text.
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }

    /// Depth-first iterator over this module and all its descendants.
    pub fn walk(&self) -> impl Iterator<Item = &Module> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.sub_modules.iter().rev());
            Some(next)
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: ModuleId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub xp: u32,
}

fn default_level() -> u32 {
    1
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub level: u32,
    pub xp: u32,
}

impl Default for UserStats {
    fn default() -> Self {
        Self { level: 1, xp: 0 }
    }
}

impl UserStats {
    /// Stats travel on every goal; the first one is authoritative.
    pub fn from_goals(goals: &[Goal]) -> Option<Self> {
        goals.first().map(|g| Self {
            level: g.level,
            xp: g.xp,
        })
    }

    /// Progress toward the next level, assuming 100 XP per level.
    pub fn level_progress(&self) -> f32 {
        (self.xp % 100) as f32 / 100.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    #[default]
    Text,
    Video,
    OfficialDocs,
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 3] = [
        LearningStyle::Text,
        LearningStyle::Video,
        LearningStyle::OfficialDocs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LearningStyle::Text => "text",
            LearningStyle::Video => "video",
            LearningStyle::OfficialDocs => "official_docs",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            LearningStyle::Text => "📄 Text Summaries",
            LearningStyle::Video => "🎬 Video Tutorials",
            LearningStyle::OfficialDocs => "📚 Official Docs",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LearningStyle::Text => "Concise written explanations for each topic",
            LearningStyle::Video => "Curated YouTube searches for visual learning",
            LearningStyle::OfficialDocs => "Links to official documentation and references",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizResult {
    pub score_percent: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub failed_module_ids: Vec<ModuleId>,
}

pub const PASS_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    NeedsReview,
}

impl QuizResult {
    pub fn verdict(&self) -> Verdict {
        if self.score_percent >= PASS_THRESHOLD {
            Verdict::Pass
        } else {
            Verdict::NeedsReview
        }
    }

    pub fn has_weak_areas(&self) -> bool {
        !self.failed_module_ids.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerSubmission {
    pub question_id: QuestionId,
    pub selected_index: usize,
}

/// Screens of the app. Every `match` over it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Auth,
    Dashboard,
    Learning,
    Settings,
    Roadmap,
}

impl View {
    pub fn requires_session(self) -> bool {
        match self {
            View::Landing | View::Auth => false,
            View::Dashboard | View::Learning | View::Settings | View::Roadmap => true,
        }
    }
}
