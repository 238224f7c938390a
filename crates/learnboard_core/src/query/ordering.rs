//! Activity ordering comparators.
//!
//! # Responsibility
//! - Order filtered activities by due date, title or status urgency.
//!
//! # Invariants
//! - Sorting is stable: equal keys keep their input order.
//! - Activities without a due date always sort after dated ones.
//! - The input slice is never reordered; a new vector is returned.

use crate::model::activity::Activity;
use crate::query::criteria::SortKey;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Returns `activities` ordered by `sort_by`.
pub fn sort_activities<'a>(activities: &[&'a Activity], sort_by: SortKey) -> Vec<&'a Activity> {
    let mut sorted = activities.to_vec();
    // `sort_by` is a stable merge sort.
    sorted.sort_by(|left, right| compare_activities(left, right, sort_by));
    sorted
}

/// Compares two activities under one sort key.
pub fn compare_activities(left: &Activity, right: &Activity, sort_by: SortKey) -> Ordering {
    match sort_by {
        SortKey::DueDate => match (left.due_date, right.due_date) {
            (Some(left_due), Some(right_due)) => left_due.cmp(&right_due),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Title => compare_titles(&left.title, &right.title),
        SortKey::Status => left
            .status
            .sort_priority()
            .cmp(&right.status.sort_priority()),
    }
}

/// Locale-style title comparison.
///
/// Levels, each consulted only when the previous one ties:
/// 1. base letters, ignoring accents and case (`Éclair` < `Zoo`);
/// 2. accents, unaccented first (`resume` < `résumé`);
/// 3. case over the whole title, lowercase first (`quiz` < `Quiz`);
/// 4. code points, so only identical titles compare equal.
pub fn compare_titles(left: &str, right: &str) -> Ordering {
    base_letters(left)
        .cmp(base_letters(right))
        .then_with(|| accented_letters(left).cmp(accented_letters(right)))
        .then_with(|| case_pattern(left).cmp(case_pattern(right)))
        .then_with(|| left.cmp(right))
}

fn base_letters(title: &str) -> impl Iterator<Item = char> + '_ {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(title: &str) -> impl Iterator<Item = char> + '_ {
    title.nfd().flat_map(char::to_lowercase)
}

fn case_pattern(title: &str) -> impl Iterator<Item = bool> + '_ {
    title.chars().map(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::compare_titles;
    use std::cmp::Ordering;

    #[test]
    fn titles_compare_case_insensitively_first() {
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_titles("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(compare_titles("Quiz 10", "quiz 2"), Ordering::Less);
    }

    #[test]
    fn lowercase_wins_case_only_ties() {
        assert_eq!(compare_titles("quiz", "Quiz"), Ordering::Less);
        assert_eq!(compare_titles("Quiz", "quiz"), Ordering::Greater);
        assert_eq!(compare_titles("Quiz", "Quiz"), Ordering::Equal);
    }

    #[test]
    fn accents_break_ties_after_base_letters() {
        assert_eq!(compare_titles("Économie", "Finance"), Ordering::Less);
        assert_eq!(compare_titles("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_titles("résumé", "Resume"), Ordering::Greater);
        assert_eq!(compare_titles("Résumé", "résumé"), Ordering::Greater);
    }

    #[test]
    fn title_order_is_transitive_across_case_variants() {
        let titles = ["ǅa", "ǆA", "ǅA", "dža", "DŽA", "Dža", "ǆa"];
        for a in titles {
            assert_eq!(compare_titles(a, a), Ordering::Equal);
            for b in titles {
                let forward = compare_titles(a, b);
                assert_eq!(forward, compare_titles(b, a).reverse(), "{a} vs {b}");
                if a != b {
                    assert_ne!(forward, Ordering::Equal, "{a} vs {b}");
                }
                for c in titles {
                    if forward != Ordering::Greater
                        && compare_titles(b, c) != Ordering::Greater
                    {
                        assert_ne!(compare_titles(a, c), Ordering::Greater, "{a} {b} {c}");
                    }
                }
            }
        }
    }
}
