//! API request and response types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use expound_core::{Category, Difficulty, StreakState};

use crate::store::Question;

/// POST /api/questions request body.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub prompt: String,
    pub category: Category,
    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<Question>,
}

/// GET /api/study/queue response.
#[derive(Debug, Serialize)]
pub struct StudyQueueResponse {
    pub due_count: usize,
    pub total_cards: usize,
    pub cards: Vec<DueCard>,
}

/// One due card joined with its question for presentation.
#[derive(Debug, Serialize)]
pub struct DueCard {
    pub question_id: String,
    pub prompt: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub next_review: DateTime<Utc>,
    pub interval_days: u32,
    pub repetitions: u32,
}

/// POST /api/study/review request body.
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub question_id: String,
    /// Grade from the external grading service, 1-5. Validated, never clamped.
    pub score: u8,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub question_id: String,
    pub interval_before: u32,
    pub interval_after: u32,
    pub ease_before: f64,
    pub ease_after: f64,
    pub repetitions: u32,
    pub next_review: DateTime<Utc>,
}

/// POST /api/study/session-end request body. Send `{}` to use today's date.
#[derive(Debug, Default, Deserialize)]
pub struct SessionEndRequest {
    #[serde(default)]
    pub session_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct SessionEndResponse {
    pub streak: StreakState,
    pub cards_reviewed: u32,
    pub average_score: f64,
}

/// POST /api/progress/reset response.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub schedules_reset: usize,
}
