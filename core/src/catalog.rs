//! Event catalog types.
//!
//! The catalog is a static, read-only list of events loaded once at
//! application startup. The decision logic only ever reads it; nothing in
//! this crate mutates it at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a catalog event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub u32);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Event category.
///
/// Categories drive the registration quota: at most one [`Category::Flagship`]
/// event, and at most two [`Category::Technical`] / [`Category::NonTechnical`]
/// events combined, per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Highest-tier event, capped at one registration per user.
    Flagship,
    /// Technical event; shares the combined cap with non-technical events.
    Technical,
    /// Non-technical event; shares the combined cap with technical events.
    NonTechnical,
}

impl Category {
    /// Get the category name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flagship => "flagship",
            Self::Technical => "technical",
            Self::NonTechnical => "non-technical",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event category: {0}")]
pub struct CategoryParseError(String);

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flagship" => Ok(Self::Flagship),
            "technical" => Ok(Self::Technical),
            "non-technical" => Ok(Self::NonTechnical),
            other => Err(CategoryParseError(other.to_string())),
        }
    }
}

/// Calendar day label identifying the day an event runs on.
///
/// Day labels are opaque strings (e.g. `"March 19, 2025"`); the fee
/// calculator only compares them for equality, it never parses them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayLabel(String);

impl DayLabel {
    /// Create a day label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog entry.
///
/// `title` is display-only; the decision logic reads `id`, `category`, and
/// `day` exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,

    /// Event category (drives the quota rules).
    pub category: Category,

    /// Day the event runs on (drives the fee rules).
    pub day: DayLabel,

    /// Display title.
    pub title: String,
}

/// The static event catalog.
///
/// Resolves event identifiers to their catalog entries. Identifiers absent
/// from the catalog resolve to `None` and are excluded from every count the
/// eligibility evaluator produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// Build a catalog from an event list.
    #[must_use]
    pub const fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Look up an event by id.
    #[must_use]
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Resolve an event id to its category, if the id is known.
    #[must_use]
    pub fn category_of(&self, id: EventId) -> Option<Category> {
        self.get(id).map(|event| event.category)
    }

    /// Whether the catalog contains the given id.
    #[must_use]
    pub fn contains(&self, id: EventId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate over all events.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Number of events in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// The bundled 2025 symposium catalog.
///
/// Eleven events across the two symposium days. Event 10 is the hands-on
/// workshop referenced by the default [`crate::fees::FeeSchedule`].
#[must_use]
pub fn symposium_2025() -> Catalog {
    let day_one = DayLabel::new("March 19, 2025");
    let day_two = DayLabel::new("March 20, 2025");

    let event = |id: u32, category: Category, day: &DayLabel, title: &str| Event {
        id: EventId(id),
        category,
        day: day.clone(),
        title: title.to_string(),
    };

    Catalog::new(vec![
        event(1, Category::Flagship, &day_one, "Hackathon"),
        event(2, Category::Flagship, &day_two, "Startup Pitch Arena"),
        event(3, Category::Technical, &day_one, "Code Sprint"),
        event(4, Category::Technical, &day_one, "Capture the Flag"),
        event(5, Category::Technical, &day_two, "Paper Presentation"),
        event(6, Category::Technical, &day_two, "Circuit Debugging"),
        event(7, Category::NonTechnical, &day_one, "Treasure Hunt"),
        event(8, Category::NonTechnical, &day_one, "Quiz League"),
        event(9, Category::NonTechnical, &day_two, "Photography Contest"),
        event(10, Category::NonTechnical, &day_one, "AI/ML Workshop"),
        event(11, Category::NonTechnical, &day_two, "Gaming Tournament"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in [Category::Flagship, Category::Technical, Category::NonTechnical] {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_category_parse_unknown() {
        assert!("workshop".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = symposium_2025();
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.category_of(EventId(1)), Some(Category::Flagship));
        assert_eq!(catalog.category_of(EventId(10)), Some(Category::NonTechnical));
        assert_eq!(catalog.category_of(EventId(99)), None);
        assert!(!catalog.contains(EventId(0)));
    }

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = symposium_2025();
        let mut ids: Vec<_> = catalog.iter().map(|event| event.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_catalog_spans_two_days() {
        let catalog = symposium_2025();
        let days: std::collections::BTreeSet<_> =
            catalog.iter().map(|event| event.day.clone()).collect();
        assert_eq!(days.len(), 2);
    }
}
