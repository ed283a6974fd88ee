//! Study endpoints

use axum::{extract::State, Json};
use chrono::Utc;

use crate::error::{ApiError, Result};
use crate::models::{DueCard, ReviewRequest, ReviewResponse, StudyQueueResponse};
use crate::AppState;
use expound_core::{due_queue, ReviewEvent, Score};

/// GET /api/study/queue
pub async fn queue(State(state): State<AppState>) -> Result<Json<StudyQueueResponse>> {
    let now = Utc::now();
    let schedules = state.store.all_schedules().await;
    let categories = state.store.category_index().await;
    let preferences = state.store.get_preferences().await;

    let due = due_queue(&schedules, &categories, &preferences, now);

    let mut cards = Vec::with_capacity(due.len());
    for schedule in due {
        // A schedule without a surviving question is skipped, not an error.
        if let Some(question) = state.store.get_question(&schedule.question_id).await {
            cards.push(DueCard {
                question_id: question.id,
                prompt: question.prompt,
                category: question.category,
                difficulty: question.difficulty,
                next_review: schedule.next_review,
                interval_days: schedule.interval_days,
                repetitions: schedule.repetitions,
            });
        }
    }

    Ok(Json(StudyQueueResponse {
        due_count: cards.len(),
        total_cards: schedules.len(),
        cards,
    }))
}

/// POST /api/study/review
///
/// The score arrives already graded by the external grading service; this
/// handler only validates it, advances the schedule, and records the review
/// into the running session tally.
pub async fn review(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>> {
    let score = Score::new(request.score)?;

    let current = state
        .store
        .get_schedule(&request.question_id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("question {}", request.question_id)))?;

    let event = ReviewEvent {
        question_id: request.question_id,
        score,
        timestamp: Utc::now(),
    };
    let next = state.scheduler.apply(&current, &event);

    state.store.put_schedule(next.clone()).await;
    state.store.record_session_review(score).await;

    Ok(Json(ReviewResponse {
        question_id: next.question_id.clone(),
        interval_before: current.interval_days,
        interval_after: next.interval_days,
        ease_before: current.ease_factor,
        ease_after: next.ease_factor,
        repetitions: next.repetitions,
        next_review: next.next_review,
    }))
}
