//! # Symposium Core
//!
//! Decision rules for the symposium registration system: the event catalog,
//! the registration-eligibility evaluator, the tiered fee calculator, and the
//! payment-status state machine, together with the reducer abstractions that
//! the feature crates build on.
//!
//! ## Core Concepts
//!
//! - **State**: owned, `Clone`-able domain state (e.g. a registration set)
//! - **Action**: all possible inputs to a reducer (commands and events)
//! - **Reducer**: pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: side effect descriptions (not execution)
//! - **Environment**: injected collaborators via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Explicit effects (no hidden I/O)
//! - Collaborators behind traits, injected via the environment
//!
//! The decision functions themselves ([`eligibility`], [`fees`],
//! [`payment`]) are plain pure functions over in-memory inputs; nothing in
//! this crate performs I/O.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

pub mod catalog;
pub mod effect;
pub mod eligibility;
pub mod environment;
pub mod fees;
pub mod payment;
pub mod reducer;
pub mod registration;

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use smallvec::{SmallVec, smallvec};

pub use catalog::{Catalog, Category, DayLabel, Event, EventId};
pub use eligibility::{CategoryCounts, QuotaDenial, can_register, denial_reason};
pub use fees::FeeSchedule;
pub use payment::{PaymentStatus, TransitionError};
pub use registration::{RegistrationSet, RegistrationStatus};
