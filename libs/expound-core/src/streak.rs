//! Practice-day streak and session accounting.
//!
//! All comparisons work on calendar dates, not instants, so a session that
//! ends at 23:59 and another at 00:01 the next day count as two practice
//! days.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::Score;

/// Consecutive practice-day tracking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_practice_date: Option<NaiveDate>,
}

/// Rolling tally for the practice session in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub cards_reviewed: u32,
    pub score_total: u32,
}

impl SessionStats {
    /// Count one graded review into the session.
    pub fn record(&mut self, score: Score) {
        self.cards_reviewed += 1;
        self.score_total += u32::from(score.value());
    }

    /// Mean score over the session, 0.0 when nothing was reviewed.
    pub fn average_score(&self) -> f64 {
        if self.cards_reviewed == 0 {
            0.0
        } else {
            f64::from(self.score_total) / f64::from(self.cards_reviewed)
        }
    }
}

/// Fold a finished session into the streak state.
///
/// Same calendar day as the last session: no change (already counted).
/// The day after: the streak grows. Anything else, including the first
/// session ever, starts a fresh streak of 1. `longest_streak` tracks the
/// historical maximum in lockstep.
pub fn record_session_end(state: &StreakState, session_date: NaiveDate) -> StreakState {
    let current_streak = match state.last_practice_date {
        Some(last) if session_date == last => return state.clone(),
        Some(last) if session_date == last + Duration::days(1) => state.current_streak + 1,
        _ => 1,
    };

    StreakState {
        current_streak,
        longest_streak: state.longest_streak.max(current_streak),
        last_practice_date: Some(session_date),
    }
}
