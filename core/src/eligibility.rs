//! Registration eligibility evaluator.
//!
//! Enforces the quota invariants: at most one flagship event, and at most
//! two technical/non-technical events combined, per user. Both checks are
//! pure predicates over the user's current registration set and the static
//! catalog; persistence and UI gating are the caller's responsibility.

use crate::catalog::{Catalog, Category, EventId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Maximum flagship registrations per user.
pub const FLAGSHIP_CAP: usize = 1;

/// Maximum technical + non-technical registrations combined per user.
pub const COMBINED_CAP: usize = 2;

/// Per-category registration counts for a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    /// Held flagship registrations.
    pub flagship: usize,
    /// Held technical registrations.
    pub technical: usize,
    /// Held non-technical registrations.
    pub non_technical: usize,
}

impl CategoryCounts {
    /// Partition the user's current registrations by category.
    ///
    /// Identifiers absent from the catalog are silently excluded from all
    /// counts, as if not registered.
    #[must_use]
    pub fn tally(current: &BTreeSet<EventId>, catalog: &Catalog) -> Self {
        let mut counts = Self::default();
        for &id in current {
            match catalog.category_of(id) {
                Some(Category::Flagship) => counts.flagship += 1,
                Some(Category::Technical) => counts.technical += 1,
                Some(Category::NonTechnical) => counts.non_technical += 1,
                None => {},
            }
        }
        counts
    }

    /// Technical + non-technical registrations combined.
    #[must_use]
    pub const fn combined(&self) -> usize {
        self.technical + self.non_technical
    }

    /// All registrations across every category.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.flagship + self.technical + self.non_technical
    }
}

/// Why a registration was denied.
///
/// A quota denial is an expected, named outcome - not an error. The UI
/// disables the register action and shows the message instead of attempting
/// the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotaDenial {
    /// The user already holds a flagship registration.
    FlagshipLimit,
    /// The combined technical/non-technical cap is reached.
    CombinedLimit,
}

impl QuotaDenial {
    /// The fixed explanatory message shown to the user.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::FlagshipLimit => "You can register for only one flagship event.",
            Self::CombinedLimit => {
                "You can register for at most two technical or non-technical events."
            },
        }
    }
}

impl fmt::Display for QuotaDenial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Whether a user may add an event of the given category.
///
/// - Flagship: permitted iff no flagship is held and fewer than two
///   technical/non-technical events are held.
/// - Technical / non-technical: permitted iff fewer than two events are held
///   in total (flagship included).
///
/// Pure predicate, no side effects. Membership of the candidate event itself
/// is deliberately not checked here; callers that want idempotent
/// registration check membership first.
#[must_use]
pub fn can_register(
    current: &BTreeSet<EventId>,
    catalog: &Catalog,
    candidate: Category,
) -> bool {
    let counts = CategoryCounts::tally(current, catalog);
    match candidate {
        Category::Flagship => {
            counts.flagship < FLAGSHIP_CAP && counts.combined() < COMBINED_CAP
        },
        Category::Technical | Category::NonTechnical => counts.total() < COMBINED_CAP,
    }
}

/// Why the candidate registration would be denied, if it would be.
///
/// Returns `None` exactly when [`can_register`] returns `true`. When the
/// candidate is flagship and the flagship cap is the cause, the flagship
/// message takes priority even if the combined cap would also block it.
#[must_use]
pub fn denial_reason(
    current: &BTreeSet<EventId>,
    catalog: &Catalog,
    candidate: Category,
) -> Option<QuotaDenial> {
    let counts = CategoryCounts::tally(current, catalog);
    match candidate {
        Category::Flagship => {
            if counts.flagship >= FLAGSHIP_CAP {
                Some(QuotaDenial::FlagshipLimit)
            } else if counts.combined() >= COMBINED_CAP {
                Some(QuotaDenial::CombinedLimit)
            } else {
                None
            }
        },
        Category::Technical | Category::NonTechnical => {
            (counts.total() >= COMBINED_CAP).then_some(QuotaDenial::CombinedLimit)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::symposium_2025;

    fn ids(raw: &[u32]) -> BTreeSet<EventId> {
        raw.iter().copied().map(EventId).collect()
    }

    #[test]
    fn test_empty_set_permits_everything() {
        let catalog = symposium_2025();
        let current = BTreeSet::new();
        assert!(can_register(&current, &catalog, Category::Flagship));
        assert!(can_register(&current, &catalog, Category::Technical));
        assert!(can_register(&current, &catalog, Category::NonTechnical));
    }

    #[test]
    fn test_second_flagship_denied_with_flagship_message() {
        let catalog = symposium_2025();
        let current = ids(&[1]);
        assert!(!can_register(&current, &catalog, Category::Flagship));
        assert_eq!(
            denial_reason(&current, &catalog, Category::Flagship),
            Some(QuotaDenial::FlagshipLimit)
        );
    }

    #[test]
    fn test_combined_cap_denies_third_event() {
        let catalog = symposium_2025();
        // One technical + one non-technical held
        let current = ids(&[3, 7]);
        assert!(!can_register(&current, &catalog, Category::Technical));
        assert_eq!(
            denial_reason(&current, &catalog, Category::Technical),
            Some(QuotaDenial::CombinedLimit)
        );
        // The combined cap also blocks a flagship candidate
        assert!(!can_register(&current, &catalog, Category::Flagship));
        assert_eq!(
            denial_reason(&current, &catalog, Category::Flagship),
            Some(QuotaDenial::CombinedLimit)
        );
    }

    #[test]
    fn test_flagship_counts_toward_combined_candidates() {
        let catalog = symposium_2025();
        // Flagship + technical: two total, so tech/non-tech candidates blocked
        let current = ids(&[1, 3]);
        assert!(!can_register(&current, &catalog, Category::NonTechnical));
        assert_eq!(
            denial_reason(&current, &catalog, Category::NonTechnical),
            Some(QuotaDenial::CombinedLimit)
        );
    }

    #[test]
    fn test_flagship_permitted_alongside_one_other() {
        let catalog = symposium_2025();
        let current = ids(&[3]);
        assert!(can_register(&current, &catalog, Category::Flagship));
        assert_eq!(denial_reason(&current, &catalog, Category::Flagship), None);
    }

    #[test]
    fn test_flagship_priority_over_combined() {
        let catalog = symposium_2025();
        // Flagship held and combined cap reached: flagship message wins
        let current = ids(&[1, 3, 7]);
        assert_eq!(
            denial_reason(&current, &catalog, Category::Flagship),
            Some(QuotaDenial::FlagshipLimit)
        );
    }

    #[test]
    fn test_unknown_ids_excluded_from_counts() {
        let catalog = symposium_2025();
        let current = ids(&[97, 98, 99]);
        let counts = CategoryCounts::tally(&current, &catalog);
        assert_eq!(counts, CategoryCounts::default());
        assert!(can_register(&current, &catalog, Category::Flagship));
        assert!(can_register(&current, &catalog, Category::Technical));
    }

    #[test]
    fn test_denial_messages_are_fixed() {
        assert_eq!(
            QuotaDenial::FlagshipLimit.to_string(),
            "You can register for only one flagship event."
        );
        assert_eq!(
            QuotaDenial::CombinedLimit.to_string(),
            "You can register for at most two technical or non-technical events."
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arbitrary_held_ids() -> impl Strategy<Value = BTreeSet<EventId>> {
            // Ids 1-11 exist in the bundled catalog; 12-15 are unknown
            proptest::collection::btree_set((1u32..=15).prop_map(EventId), 0..6)
        }

        proptest! {
            #[test]
            fn denial_reason_agrees_with_predicate(
                current in arbitrary_held_ids(),
                candidate in prop_oneof![
                    Just(Category::Flagship),
                    Just(Category::Technical),
                    Just(Category::NonTechnical),
                ],
            ) {
                let catalog = symposium_2025();
                let permitted = can_register(&current, &catalog, candidate);
                let reason = denial_reason(&current, &catalog, candidate);
                prop_assert_eq!(permitted, reason.is_none());
            }

            #[test]
            fn flagship_rule_matches_counts(current in arbitrary_held_ids()) {
                let catalog = symposium_2025();
                let counts = CategoryCounts::tally(&current, &catalog);
                let expected = counts.flagship == 0 && counts.combined() < COMBINED_CAP;
                prop_assert_eq!(
                    can_register(&current, &catalog, Category::Flagship),
                    expected
                );
            }

            #[test]
            fn combined_rule_matches_counts(current in arbitrary_held_ids()) {
                let catalog = symposium_2025();
                let counts = CategoryCounts::tally(&current, &catalog);
                let expected = counts.total() < COMBINED_CAP;
                prop_assert_eq!(
                    can_register(&current, &catalog, Category::Technical),
                    expected
                );
                prop_assert_eq!(
                    can_register(&current, &catalog, Category::NonTechnical),
                    expected
                );
            }
        }
    }
}
