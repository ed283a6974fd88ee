//! In-memory record store standing in for the persistence collaborator.
//!
//! One `RwLock` guards all records, so every update applies atomically and
//! writes land in submission order.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use expound_core::{
    CardSchedule, Category, Difficulty, Score, SessionStats, StreakState, UserPreferences,
};

/// A registered question. Prompt content and grading live with external
/// collaborators; the store keeps what scheduling and selection need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub category: Category,
    pub difficulty: Difficulty,
}

#[derive(Default)]
struct Records {
    questions: HashMap<String, Question>,
    schedules: HashMap<String, CardSchedule>,
    preferences: UserPreferences,
    streak: StreakState,
    session: SessionStats,
}

/// Single-process record store.
#[derive(Default)]
pub struct Store {
    records: RwLock<Records>,
}

impl Store {
    /// Register a question and create its fresh schedule. Mints the id.
    pub async fn insert_question(
        &self,
        prompt: String,
        category: Category,
        difficulty: Difficulty,
        now: DateTime<Utc>,
    ) -> Question {
        let question = Question {
            id: Uuid::new_v4().to_string(),
            prompt,
            category,
            difficulty,
        };
        let mut records = self.records.write().await;
        records
            .schedules
            .insert(question.id.clone(), CardSchedule::new(&question.id, now));
        records
            .questions
            .insert(question.id.clone(), question.clone());
        question
    }

    pub async fn get_question(&self, id: &str) -> Option<Question> {
        self.records.read().await.questions.get(id).cloned()
    }

    /// All registered questions, in a stable id order.
    pub async fn list_questions(&self) -> Vec<Question> {
        let mut questions: Vec<Question> = self
            .records
            .read()
            .await
            .questions
            .values()
            .cloned()
            .collect();
        questions.sort_by(|a, b| a.id.cmp(&b.id));
        questions
    }

    pub async fn get_schedule(&self, question_id: &str) -> Option<CardSchedule> {
        self.records.read().await.schedules.get(question_id).cloned()
    }

    pub async fn put_schedule(&self, schedule: CardSchedule) {
        self.records
            .write()
            .await
            .schedules
            .insert(schedule.question_id.clone(), schedule);
    }

    pub async fn all_schedules(&self) -> Vec<CardSchedule> {
        self.records
            .read()
            .await
            .schedules
            .values()
            .cloned()
            .collect()
    }

    /// Question id to category lookup for the due-card selector.
    pub async fn category_index(&self) -> HashMap<String, Category> {
        self.records
            .read()
            .await
            .questions
            .values()
            .map(|question| (question.id.clone(), question.category))
            .collect()
    }

    pub async fn get_preferences(&self) -> UserPreferences {
        self.records.read().await.preferences.clone()
    }

    pub async fn put_preferences(&self, preferences: UserPreferences) {
        self.records.write().await.preferences = preferences;
    }

    pub async fn get_streak(&self) -> StreakState {
        self.records.read().await.streak.clone()
    }

    pub async fn put_streak(&self, streak: StreakState) {
        self.records.write().await.streak = streak;
    }

    /// Count a graded review into the running session tally.
    pub async fn record_session_review(&self, score: Score) {
        self.records.write().await.session.record(score);
    }

    /// Take the current session tally, leaving a fresh one behind.
    pub async fn take_session(&self) -> SessionStats {
        std::mem::take(&mut self.records.write().await.session)
    }

    /// Reinitialize every schedule to defaults and clear streak and session
    /// state. Questions stay registered. Returns how many schedules reset.
    pub async fn reset_progress(&self, now: DateTime<Utc>) -> usize {
        let mut records = self.records.write().await;
        for schedule in records.schedules.values_mut() {
            let question_id = schedule.question_id.clone();
            *schedule = CardSchedule::new(question_id, now);
        }
        records.streak = StreakState::default();
        records.session = SessionStats::default();
        records.schedules.len()
    }
}
