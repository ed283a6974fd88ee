//! SM-2 variant interval scheduler.
//!
//! Differences from canonical SM-2, preserved deliberately:
//! - the ease factor is left untouched on a lapse (score < 3)
//! - the second successful interval is 3 days rather than 6
//! - intervals are capped at 365 days

use chrono::{DateTime, Duration, Utc};

use crate::types::{CardSchedule, ReviewEvent, Score};

/// SM-2 variant with configurable parameters.
#[derive(Debug, Clone)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    pub first_interval: u32,
    pub second_interval: u32,
    pub max_interval: u32,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
            first_interval: 1,
            second_interval: 3,
            max_interval: 365,
        }
    }
}

impl Sm2 {
    /// Schedule for a question that has never been reviewed: due immediately.
    pub fn initial_schedule(
        &self,
        question_id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> CardSchedule {
        CardSchedule {
            question_id: question_id.into(),
            next_review: now,
            ease_factor: self.initial_ease,
            interval_days: 0,
            repetitions: 0,
        }
    }

    /// Apply a completed review event to its current schedule.
    pub fn apply(&self, current: &CardSchedule, event: &ReviewEvent) -> CardSchedule {
        self.schedule(current, event.score, event.timestamp)
    }

    /// Compute the next schedule after a review.
    ///
    /// Pure and total: every `Score` value produces a schedule satisfying
    /// `ease_factor >= minimum_ease` and `interval_days <= max_interval`.
    pub fn schedule(&self, current: &CardSchedule, score: Score, now: DateTime<Utc>) -> CardSchedule {
        let (repetitions, interval, ease_factor) = if score.is_lapse() {
            // Lapse: progress resets, review again tomorrow. Ease is left alone.
            (0, self.first_interval, current.ease_factor)
        } else {
            let repetitions = current.repetitions + 1;
            // The ease multiplication uses the pre-update ease factor.
            let interval = match repetitions {
                1 => self.first_interval,
                2 => self.second_interval,
                _ => (current.interval_days as f64 * current.ease_factor).round() as u32,
            };
            (repetitions, interval, self.next_ease(current.ease_factor, score))
        };

        let interval = interval.min(self.max_interval);

        CardSchedule {
            question_id: current.question_id.clone(),
            next_review: now + Duration::days(i64::from(interval)),
            ease_factor,
            interval_days: interval,
            repetitions,
        }
    }

    /// EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)), floored at the minimum.
    fn next_ease(&self, ease: f64, score: Score) -> f64 {
        let q = f64::from(score.value());
        let adjusted = ease + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02));
        adjusted.max(self.minimum_ease)
    }
}
