//! Tiered fee calculator.
//!
//! Pricing has two tiers: a flat per-day rate for regular events, and a
//! workshop tier that replaces (never adds to) the per-day charges when the
//! workshop event is held.

use crate::catalog::{DayLabel, Event, EventId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Pricing constants for a symposium edition.
///
/// Amounts are integral currency units (rupees); no fractional unit exists
/// in the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Charge per distinct event day when the workshop is not held.
    pub day_rate: u64,

    /// Flat charge when the workshop is held on a single day.
    pub workshop_single_day: u64,

    /// Flat charge when the workshop is held and registrations span both
    /// designated days.
    pub workshop_both_days: u64,

    /// The reserved workshop event identifier.
    pub workshop_event_id: EventId,

    /// First designated symposium day.
    pub day_one: DayLabel,

    /// Second designated symposium day.
    pub day_two: DayLabel,
}

impl FeeSchedule {
    /// Set the per-day rate.
    #[must_use]
    pub const fn with_day_rate(mut self, rate: u64) -> Self {
        self.day_rate = rate;
        self
    }

    /// Set the workshop tier amounts.
    #[must_use]
    pub const fn with_workshop_rates(mut self, single_day: u64, both_days: u64) -> Self {
        self.workshop_single_day = single_day;
        self.workshop_both_days = both_days;
        self
    }

    /// Set the reserved workshop event id.
    #[must_use]
    pub const fn with_workshop_event(mut self, id: EventId) -> Self {
        self.workshop_event_id = id;
        self
    }

    /// Set the two designated symposium days.
    #[must_use]
    pub fn with_days(mut self, day_one: DayLabel, day_two: DayLabel) -> Self {
        self.day_one = day_one;
        self.day_two = day_two;
        self
    }

    /// Total amount payable for the given registered events.
    ///
    /// If the workshop event is held, the workshop tier applies exclusively:
    /// `workshop_both_days` when the distinct day labels among all registered
    /// events (the workshop's own included) cover both designated days,
    /// otherwise `workshop_single_day`. Without the workshop, the total is
    /// `day_rate` times the number of distinct day labels. An empty set owes
    /// nothing.
    #[must_use]
    pub fn total_due<'a>(&self, registered: impl IntoIterator<Item = &'a Event>) -> u64 {
        let mut holds_workshop = false;
        let mut days: BTreeSet<&DayLabel> = BTreeSet::new();

        for event in registered {
            if event.id == self.workshop_event_id {
                holds_workshop = true;
            }
            days.insert(&event.day);
        }

        if holds_workshop {
            let spans_both = days.contains(&self.day_one) && days.contains(&self.day_two);
            if spans_both {
                self.workshop_both_days
            } else {
                self.workshop_single_day
            }
        } else {
            self.day_rate * days.len() as u64
        }
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            day_rate: 300,
            workshop_single_day: 300,
            workshop_both_days: 600,
            workshop_event_id: EventId(10),
            day_one: DayLabel::new("March 19, 2025"),
            day_two: DayLabel::new("March 20, 2025"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, symposium_2025};

    fn events<'a>(catalog: &'a Catalog, raw: &[u32]) -> Vec<&'a Event> {
        raw.iter()
            .filter_map(|&id| catalog.get(EventId(id)))
            .collect()
    }

    #[test]
    fn test_empty_set_owes_nothing() {
        let schedule = FeeSchedule::default();
        assert_eq!(schedule.total_due([]), 0);
    }

    #[test]
    fn test_single_day_rate() {
        let catalog = symposium_2025();
        let schedule = FeeSchedule::default();
        // Events 3 and 7 both run on day one
        assert_eq!(schedule.total_due(events(&catalog, &[3, 7])), 300);
    }

    #[test]
    fn test_two_distinct_days() {
        let catalog = symposium_2025();
        let schedule = FeeSchedule::default();
        // Event 3 on day one, event 5 on day two
        assert_eq!(schedule.total_due(events(&catalog, &[3, 5])), 600);
    }

    #[test]
    fn test_workshop_single_day() {
        let catalog = symposium_2025();
        let schedule = FeeSchedule::default();
        // Workshop alone (day one)
        assert_eq!(schedule.total_due(events(&catalog, &[10])), 300);
        // Workshop plus another day-one event: still one day
        assert_eq!(schedule.total_due(events(&catalog, &[10, 3])), 300);
    }

    #[test]
    fn test_workshop_both_days() {
        let catalog = symposium_2025();
        let schedule = FeeSchedule::default();
        // Workshop (day one) plus a day-two event spans both days
        assert_eq!(schedule.total_due(events(&catalog, &[10, 5])), 600);
    }

    #[test]
    fn test_workshop_tier_replaces_day_charges() {
        let catalog = symposium_2025();
        let schedule = FeeSchedule::default();
        // Three events over two days with the workshop held: the workshop
        // tier applies alone, no per-day charge is added on top
        assert_eq!(schedule.total_due(events(&catalog, &[10, 3, 5])), 600);
    }

    #[test]
    fn test_builder_overrides() {
        let schedule = FeeSchedule::default()
            .with_day_rate(500)
            .with_workshop_rates(400, 800)
            .with_workshop_event(EventId(42));

        assert_eq!(schedule.day_rate, 500);
        assert_eq!(schedule.workshop_single_day, 400);
        assert_eq!(schedule.workshop_both_days, 800);
        assert_eq!(schedule.workshop_event_id, EventId(42));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn total_is_bounded_and_day_monotonic(
                raw in proptest::collection::btree_set(1u32..=11, 0..6)
            ) {
                let catalog = symposium_2025();
                let schedule = FeeSchedule::default();
                let ids: Vec<u32> = raw.iter().copied().collect();
                let held = events(&catalog, &ids);
                let total = schedule.total_due(held.iter().copied());

                // Two designated days bound every outcome
                prop_assert!(total <= 600);
                if held.is_empty() {
                    prop_assert_eq!(total, 0);
                } else {
                    prop_assert!(total >= 300);
                }
            }
        }
    }
}
