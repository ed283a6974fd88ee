//! Core scheduling library for the expound practice system.
//!
//! Provides:
//! - SM-2 variant scheduler computing the next review of a card
//! - Due-card selection with category-preference ordering
//! - Practice-day streak and session accounting
//! - Shared types (CardSchedule, Score, Category, etc.)
//!
//! Everything here is pure and synchronous: time enters as an explicit
//! `now` or date argument, state goes in and comes back out as values, and
//! persistence belongs to the caller.

pub mod error;
pub mod queue;
pub mod scheduler;
pub mod streak;
pub mod types;

pub use error::{CoreError, Result};
pub use queue::due_queue;
pub use scheduler::Sm2;
pub use streak::{record_session_end, SessionStats, StreakState};
pub use types::{CardSchedule, Category, Difficulty, ReviewEvent, Score, UserPreferences};
