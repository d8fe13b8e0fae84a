//! # Symposium Testing
//!
//! Testing utilities and helpers for the symposium registration system.
//!
//! This crate provides:
//! - A fluent Given-When-Then harness for reducer tests
//! - An effect driver that executes effect trees and collects the actions
//!   they produce
//! - A deterministic test clock
//!
//! ## Example
//!
//! ```ignore
//! use symposium_testing::ReducerTest;
//!
//! ReducerTest::new(RegistrationReducer::new())
//!     .with_env(test_environment())
//!     .given_state(RegistrationState::default())
//!     .when_action(RegistrationAction::Register { event_id: EventId(3) })
//!     .then_state(|state| {
//!         assert!(state.registration.is_registered(EventId(3)));
//!     })
//!     .run();
//! ```

#![deny(missing_docs)]

pub mod reducer_test;

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use symposium_core::effect::Effect;
use symposium_core::environment::FixedClock;

pub use reducer_test::{ReducerTest, assertions};

/// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC).
///
/// # Panics
///
/// This function will panic if the hardcoded timestamp fails to parse,
/// which should never happen in practice.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_clock() -> FixedClock {
    FixedClock::new(
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .expect("hardcoded timestamp should always parse")
            .with_timezone(&Utc),
    )
}

/// Execute an effect tree, collecting the actions it produces.
///
/// Awaits every [`Effect::Future`] in order (parallel groups are executed
/// sequentially here; tests care about the produced actions, not timing)
/// and returns the actions that resolved to `Some`.
pub fn drive_effects<A: Send + 'static>(
    effects: impl IntoIterator<Item = Effect<A>>,
) -> BoxFuture<'static, Vec<A>> {
    let effects: Vec<_> = effects.into_iter().collect();
    Box::pin(async move {
        let mut actions = Vec::new();
        for effect in effects {
            match effect {
                Effect::None => {},
                Effect::Parallel(inner) | Effect::Sequential(inner) => {
                    actions.extend(drive_effects(inner).await);
                },
                Effect::Future(future) => {
                    if let Some(action) = future.await {
                        actions.push(action);
                    }
                },
            }
        }
        actions
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use symposium_core::environment::Clock;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[tokio::test]
    async fn test_drive_effects_collects_actions() {
        let effects: Vec<Effect<u32>> = vec![
            Effect::None,
            Effect::Future(Box::pin(async { Some(1) })),
            Effect::Sequential(vec![
                Effect::Future(Box::pin(async { None })),
                Effect::Future(Box::pin(async { Some(2) })),
            ]),
        ];
        assert_eq!(drive_effects(effects).await, vec![1, 2]);
    }
}
