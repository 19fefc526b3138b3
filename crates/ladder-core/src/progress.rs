//! Derived per-user progress: reduce the append-only log to latest-level-per
//! -item, then aggregate against the catalog for display.

use crate::catalog::{self, Category};
use crate::level::Level;
use crate::record::ProgressRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// `item_id → latest level` for one user. Recomputed from scratch on every
/// read; never stored.
pub type UserProgress = BTreeMap<String, Level>;

// ---------------------------------------------------------------------------
// Reducer
// ---------------------------------------------------------------------------

/// Fold the full log down to the user's current level per item.
///
/// Last write wins by `updated_at`; the stable sort breaks timestamp ties by
/// log order. An empty log or an unknown user yields an empty map.
pub fn reduce(log: &[ProgressRecord], user: &str) -> UserProgress {
    let mut rows: Vec<&ProgressRecord> = log.iter().filter(|r| r.nurse_name == user).collect();
    rows.sort_by_key(|r| r.updated_at);

    let mut progress = UserProgress::new();
    for row in rows {
        progress.insert(row.item_id.clone(), row.level);
    }
    progress
}

/// Current level for an item; missing items default to `NotPerformed`.
pub fn level_for(progress: &UserProgress, item_id: &str) -> Level {
    progress.get(item_id).copied().unwrap_or_default()
}

/// A submission reaching the cleared threshold for the first time.
pub fn is_milestone(prior: Level, new: Level) -> bool {
    new.is_cleared() && !prior.is_cleared()
}

// ---------------------------------------------------------------------------
// Aggregator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CategoryPending {
    pub name: &'static str,
    /// Items in this category still below the cleared threshold.
    pub pending: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub total_items: usize,
    pub cleared_count: usize,
    pub remaining: usize,
    /// Cleared ratio in [0, 1]; 0 for an empty catalog.
    pub rate: f64,
    pub categories: Vec<CategoryPending>,
}

/// Aggregate a user's progress against the built-in catalog.
pub fn report(progress: &UserProgress) -> ProgressReport {
    report_for(catalog::categories(), progress)
}

/// Aggregate against an explicit catalog. Only catalog items are counted, so
/// `cleared_count` can never exceed `total_items` even if the log holds rows
/// for retired item ids.
pub fn report_for(categories: &'static [Category], progress: &UserProgress) -> ProgressReport {
    let total_items: usize = categories.iter().map(|c| c.items.len()).sum();

    let mut cleared_count = 0;
    let mut pending_by_category = Vec::with_capacity(categories.len());
    for category in categories {
        let pending = category
            .items
            .iter()
            .filter(|i| !level_for(progress, i.id).is_cleared())
            .count();
        cleared_count += category.items.len() - pending;
        pending_by_category.push(CategoryPending {
            name: category.name,
            pending,
        });
    }

    let rate = if total_items > 0 {
        cleared_count as f64 / total_items as f64
    } else {
        0.0
    };

    ProgressReport {
        total_items,
        cleared_count,
        remaining: total_items - cleared_count,
        rate,
        categories: pending_by_category,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;

    fn row(user: &str, item_id: &str, level: u8, ts: &str) -> ProgressRecord {
        ProgressRecord {
            nurse_name: user.into(),
            category: "II. 技術".into(),
            item_id: item_id.into(),
            item_title: item_id.into(),
            level: Level::try_from(level).unwrap(),
            comment: String::new(),
            updated_at: NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).unwrap(),
        }
    }

    #[test]
    fn empty_log_yields_empty_progress() {
        let progress = reduce(&[], "新人A");
        assert!(progress.is_empty());

        let summary = report(&progress);
        assert_eq!(summary.cleared_count, 0);
        assert_eq!(summary.rate, 0.0);
        assert_eq!(summary.remaining, summary.total_items);
    }

    #[test]
    fn later_timestamp_wins_regardless_of_row_order() {
        let earlier = row("新人A", "tech_1", 2, "2026-08-01 09:00:00");
        let later = row("新人A", "tech_1", 3, "2026-08-02 09:00:00");

        let in_order = reduce(&[earlier.clone(), later.clone()], "新人A");
        assert_eq!(level_for(&in_order, "tech_1"), Level::Independent);

        let reversed = reduce(&[later, earlier], "新人A");
        assert_eq!(level_for(&reversed, "tech_1"), Level::Independent);
    }

    #[test]
    fn timestamp_ties_break_by_log_order() {
        let first = row("新人A", "tech_1", 1, "2026-08-01 09:00:00");
        let second = row("新人A", "tech_1", 4, "2026-08-01 09:00:00");
        let progress = reduce(&[first, second], "新人A");
        assert_eq!(level_for(&progress, "tech_1"), Level::Instructs);
    }

    #[test]
    fn other_users_rows_are_ignored() {
        let log = vec![
            row("新人A", "tech_1", 3, "2026-08-01 09:00:00"),
            row("新人B", "tech_1", 1, "2026-08-01 10:00:00"),
        ];
        let progress = reduce(&log, "新人B");
        assert_eq!(level_for(&progress, "tech_1"), Level::Observed);
        assert_eq!(progress.len(), 1);
    }

    #[test]
    fn missing_items_default_to_zero() {
        let progress = reduce(&[], "新人A");
        assert_eq!(level_for(&progress, "tech_5"), Level::NotPerformed);
    }

    #[test]
    fn cleared_count_matches_threshold() {
        let log = vec![
            row("新人A", "tech_1", 3, "2026-08-01 09:00:00"),
            row("新人A", "tech_2", 4, "2026-08-01 09:01:00"),
            row("新人A", "tech_3", 2, "2026-08-01 09:02:00"),
        ];
        let summary = report(&reduce(&log, "新人A"));
        assert_eq!(summary.cleared_count, 2);
        assert_eq!(summary.remaining, summary.total_items - 2);
        assert!(summary.rate > 0.0 && summary.rate <= 1.0);
    }

    #[test]
    fn retired_item_ids_never_inflate_cleared_count() {
        // A row for an id no longer in the catalog must not count.
        let log = vec![row("新人A", "retired_99", 4, "2026-08-01 09:00:00")];
        let summary = report(&reduce(&log, "新人A"));
        assert_eq!(summary.cleared_count, 0);
        assert!(summary.cleared_count <= summary.total_items);
    }

    #[test]
    fn empty_catalog_rate_is_zero() {
        let summary = report_for(&[], &UserProgress::new());
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.rate, 0.0);
    }

    #[test]
    fn category_pending_counts() {
        // tech_1 cleared; the other four 技術 items pending.
        let log = vec![row("新人A", "tech_1", 3, "2026-08-01 09:00:00")];
        let summary = report(&reduce(&log, "新人A"));
        let tech = summary
            .categories
            .iter()
            .find(|c| c.name == "II. 技術")
            .unwrap();
        assert_eq!(tech.pending, 4);
        let attitude = summary
            .categories
            .iter()
            .find(|c| c.name == "I. 態度")
            .unwrap();
        assert_eq!(attitude.pending, 3);
    }

    #[test]
    fn milestone_only_on_first_transition() {
        assert!(is_milestone(Level::Assisted, Level::Independent));
        assert!(is_milestone(Level::NotPerformed, Level::Instructs));
        assert!(!is_milestone(Level::Independent, Level::Instructs));
        assert!(!is_milestone(Level::Instructs, Level::Independent));
        assert!(!is_milestone(Level::NotPerformed, Level::Assisted));
    }
}
