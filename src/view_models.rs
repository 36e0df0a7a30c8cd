// src/view_models.rs

use crate::model::{Goal, Module, ModuleId, QuizResult, UserStats, Verdict};

fn plural(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleHeader {
    pub title: String,
    pub sub_modules: Option<String>, // "3 sub-modules"
    pub question_badge: Option<String>,
}

impl ModuleHeader {
    pub fn from_module(module: &Module) -> Self {
        Self {
            title: module.title.clone(),
            sub_modules: module
                .has_sub_modules()
                .then(|| plural(module.sub_modules.len(), "sub-module")),
            question_badge: module
                .has_questions()
                .then(|| format!("❓ {}", plural(module.questions.len(), "Question"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalCard {
    pub id: ModuleId,
    pub title: String,
    pub status: String,
}

impl GoalCard {
    pub fn from_goal(goal: &Goal) -> Self {
        Self {
            id: goal.id,
            title: goal.title.clone(),
            status: goal.status.clone(),
        }
    }

    pub fn status_badge(&self) -> String {
        match self.status.as_str() {
            "completed" => "✅ completed".to_string(),
            "" => "started".to_string(),
            other => other.to_string(),
        }
    }
}

/// Dashboard cards: only the first three goals.
pub fn recent_goal_cards(goals: &[Goal]) -> Vec<GoalCard> {
    goals.iter().take(3).map(GoalCard::from_goal).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatsCard {
    pub level_label: String,
    pub xp_label: String,
    pub progress: f32,
    pub progress_label: String,
}

impl StatsCard {
    pub fn from_stats(stats: &UserStats) -> Self {
        Self {
            level_label: format!("Level {}", stats.level),
            xp_label: format!("{} XP", stats.xp),
            progress: stats.level_progress(),
            progress_label: format!("{}/100 XP to next level", stats.xp % 100),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeakArea {
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizOutcome {
    pub verdict: Verdict,
    pub score_label: String,
    pub verdict_label: &'static str,
    pub weak_areas: Vec<WeakArea>,
}

impl QuizOutcome {
    /// `root` resolves weak module ids to titles when the tree is at hand.
    pub fn new(result: &QuizResult, root: Option<&Module>) -> Self {
        let verdict = result.verdict();
        let weak_areas = result
            .failed_module_ids
            .iter()
            .map(|&id| {
                let found = root.and_then(|r| r.walk().find(|m| m.id == id));
                let label = match found {
                    Some(module) => format!("Module {id}: {}", module.title),
                    None => format!("Module {id}"),
                };
                WeakArea { label }
            })
            .collect();

        Self {
            verdict,
            score_label: format!("{:.0}%", result.score_percent),
            verdict_label: match verdict {
                Verdict::Pass => "Great Job!",
                Verdict::NeedsReview => "Needs Review",
            },
            weak_areas,
        }
    }

    pub fn no_weak_areas(&self) -> bool {
        self.weak_areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, ResourceData};

    fn leaf(id: ModuleId, title: &str) -> Module {
        Module {
            id,
            title: title.into(),
            summary: None,
            resource_data: ResourceData::default(),
            sub_modules: vec![],
            questions: vec![],
        }
    }

    #[test]
    fn header_pluralizes_counts() {
        let mut m = leaf(1, "Python");
        assert_eq!(ModuleHeader::from_module(&m).sub_modules, None);
        assert_eq!(ModuleHeader::from_module(&m).question_badge, None);

        m.sub_modules.push(leaf(2, "Syntax"));
        m.questions.push(Question {
            id: 1,
            text: "?".into(),
            options: vec![],
        });
        let header = ModuleHeader::from_module(&m);
        assert_eq!(header.sub_modules.as_deref(), Some("1 sub-module"));
        assert_eq!(header.question_badge.as_deref(), Some("❓ 1 Question"));

        m.sub_modules.push(leaf(3, "Typing"));
        assert_eq!(
            ModuleHeader::from_module(&m).sub_modules.as_deref(),
            Some("2 sub-modules")
        );
    }

    #[test]
    fn passing_outcome_has_no_weak_areas() {
        let outcome = QuizOutcome::new(
            &QuizResult {
                score_percent: 85.0,
                failed_module_ids: vec![],
            },
            None,
        );
        assert_eq!(outcome.verdict, Verdict::Pass);
        assert_eq!(outcome.score_label, "85%");
        assert_eq!(outcome.verdict_label, "Great Job!");
        assert!(outcome.no_weak_areas());
    }

    #[test]
    fn review_outcome_lists_flagged_modules() {
        let mut root = leaf(1, "Rust");
        root.sub_modules.push(leaf(7, "Lifetimes"));

        let outcome = QuizOutcome::new(
            &QuizResult {
                score_percent: 40.0,
                failed_module_ids: vec![7, 12],
            },
            Some(&root),
        );
        assert_eq!(outcome.verdict, Verdict::NeedsReview);
        assert_eq!(outcome.verdict_label, "Needs Review");
        let labels: Vec<&str> = outcome.weak_areas.iter().map(|w| w.label.as_str()).collect();
        assert_eq!(labels, vec!["Module 7: Lifetimes", "Module 12"]);
    }

    #[test]
    fn stats_card_uses_hundred_xp_levels() {
        let card = StatsCard::from_stats(&UserStats { level: 4, xp: 345 });
        assert_eq!(card.level_label, "Level 4");
        assert_eq!(card.progress_label, "45/100 XP to next level");
        assert!((card.progress - 0.45).abs() < 1e-6);
    }

    #[test]
    fn dashboard_shows_three_most_recent_goals() {
        let goals: Vec<Goal> = (1..=5)
            .map(|id| Goal {
                id,
                title: format!("Goal {id}"),
                status: "started".into(),
                level: 1,
                xp: 0,
            })
            .collect();
        let cards = recent_goal_cards(&goals);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2].id, 3);
        assert_eq!(cards[0].status_badge(), "started");
    }
}
