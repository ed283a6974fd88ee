//! Due-card selection with category-preference ordering.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::types::{CardSchedule, Category, UserPreferences};

/// Cards ranked by a preferred category sort before the rest; `usize::MAX`
/// marks the non-preferred bucket so the tuple key orders in one pass.
fn sort_key(
    schedule: &CardSchedule,
    categories: &HashMap<String, Category>,
    preferences: &UserPreferences,
) -> (usize, DateTime<Utc>) {
    let rank = preference_rank(schedule, categories, preferences).unwrap_or(usize::MAX);
    (rank, schedule.next_review)
}

/// Position of the card's category in the preference list, if any.
///
/// A question missing from the category lookup counts as `Other`, and
/// `Other` never ranks as preferred even when listed.
fn preference_rank(
    schedule: &CardSchedule,
    categories: &HashMap<String, Category>,
    preferences: &UserPreferences,
) -> Option<usize> {
    let category = categories
        .get(&schedule.question_id)
        .copied()
        .unwrap_or(Category::Other);
    if category == Category::Other {
        return None;
    }
    preferences
        .preferred_categories
        .iter()
        .position(|&preferred| preferred == category)
}

/// Select and order the cards eligible for review at `now`.
///
/// Due cards in preferred categories come first, ordered by preference-list
/// position and then due date; the rest follow in due-date order. The result
/// is a total order: identical inputs always produce identical output.
pub fn due_queue(
    schedules: &[CardSchedule],
    categories: &HashMap<String, Category>,
    preferences: &UserPreferences,
    now: DateTime<Utc>,
) -> Vec<CardSchedule> {
    let mut due: Vec<CardSchedule> = schedules
        .iter()
        .filter(|schedule| schedule.is_due(now))
        .cloned()
        .collect();
    due.sort_by_key(|schedule| sort_key(schedule, categories, preferences));
    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        "2026-01-10T12:00:00Z".parse().unwrap()
    }

    fn schedule(question_id: &str, due_offset_hours: i64) -> CardSchedule {
        CardSchedule {
            question_id: question_id.to_string(),
            next_review: now() + Duration::hours(due_offset_hours),
            ease_factor: 2.5,
            interval_days: 1,
            repetitions: 1,
        }
    }

    fn ids(queue: &[CardSchedule]) -> Vec<&str> {
        queue.iter().map(|s| s.question_id.as_str()).collect()
    }

    fn categories(pairs: &[(&str, Category)]) -> HashMap<String, Category> {
        pairs
            .iter()
            .map(|(id, category)| (id.to_string(), *category))
            .collect()
    }

    fn prefer(categories: &[Category]) -> UserPreferences {
        UserPreferences {
            preferred_categories: categories.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn filters_out_cards_not_yet_due() {
        let schedules = vec![schedule("due", -1), schedule("future", 1)];
        let queue = due_queue(&schedules, &HashMap::new(), &UserPreferences::default(), now());
        assert_eq!(ids(&queue), vec!["due"]);
        assert!(queue.iter().all(|s| s.next_review <= now()));
    }

    #[test]
    fn card_due_exactly_now_is_included() {
        let schedules = vec![schedule("edge", 0)];
        let queue = due_queue(&schedules, &HashMap::new(), &UserPreferences::default(), now());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn preferred_categories_sort_first() {
        let schedules = vec![schedule("other", -10), schedule("preferred", -1)];
        let categories = categories(&[
            ("other", Category::Databases),
            ("preferred", Category::Networking),
        ]);
        let preferences = prefer(&[Category::Networking]);
        let queue = due_queue(&schedules, &categories, &preferences, now());
        assert_eq!(ids(&queue), vec!["preferred", "other"]);
    }

    #[test]
    fn preference_list_order_breaks_category_ties() {
        let schedules = vec![
            schedule("net", -1),
            schedule("algo", -1),
            schedule("db-old", -20),
            schedule("db-new", -2),
        ];
        let categories = categories(&[
            ("net", Category::Networking),
            ("algo", Category::Algorithms),
            ("db-old", Category::Databases),
            ("db-new", Category::Databases),
        ]);
        let preferences = prefer(&[Category::Algorithms, Category::Databases, Category::Networking]);
        let queue = due_queue(&schedules, &categories, &preferences, now());
        // within the same category, the longer-overdue card first
        assert_eq!(ids(&queue), vec!["algo", "db-old", "db-new", "net"]);
    }

    #[test]
    fn non_preferred_cards_order_by_due_date_only() {
        let schedules = vec![schedule("b", -1), schedule("a", -5), schedule("c", -3)];
        let queue = due_queue(&schedules, &HashMap::new(), &UserPreferences::default(), now());
        assert_eq!(ids(&queue), vec!["a", "c", "b"]);
    }

    #[test]
    fn missing_category_lookup_treated_as_other() {
        let schedules = vec![schedule("unmapped", -10), schedule("preferred", -1)];
        let categories = categories(&[("preferred", Category::Security)]);
        let preferences = prefer(&[Category::Security]);
        let queue = due_queue(&schedules, &categories, &preferences, now());
        assert_eq!(ids(&queue), vec!["preferred", "unmapped"]);
    }

    #[test]
    fn other_is_never_a_preferred_category() {
        let schedules = vec![schedule("unmapped", -10), schedule("net", -1)];
        let categories = categories(&[("net", Category::Networking)]);
        let preferences = prefer(&[Category::Other, Category::Networking]);
        let queue = due_queue(&schedules, &categories, &preferences, now());
        assert_eq!(ids(&queue), vec!["net", "unmapped"]);
    }

    #[test]
    fn empty_preference_list_degenerates_to_due_date_order() {
        let schedules = vec![schedule("late", -1), schedule("early", -8)];
        let categories = categories(&[
            ("late", Category::Algorithms),
            ("early", Category::Databases),
        ]);
        let queue = due_queue(&schedules, &categories, &UserPreferences::default(), now());
        assert_eq!(ids(&queue), vec!["early", "late"]);
    }

    #[test]
    fn selection_is_deterministic() {
        let schedules = vec![
            schedule("a", -4),
            schedule("b", -2),
            schedule("c", -6),
            schedule("d", -1),
        ];
        let categories = categories(&[
            ("a", Category::Concurrency),
            ("b", Category::Algorithms),
            ("c", Category::Concurrency),
        ]);
        let preferences = prefer(&[Category::Concurrency, Category::Algorithms]);
        let first = due_queue(&schedules, &categories, &preferences, now());
        let second = due_queue(&schedules, &categories, &preferences, now());
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn empty_input_yields_empty_queue() {
        let queue = due_queue(&[], &HashMap::new(), &UserPreferences::default(), now());
        assert!(queue.is_empty());
    }
}
