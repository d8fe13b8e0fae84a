//! # Symposium Registration
//!
//! The feature crate of the symposium registration system: session handling,
//! event registration under the quota rules, and the manual payment-proof
//! submission flow.
//!
//! ## Architecture
//!
//! Everything is implemented as reducers and effects:
//!
//! ```text
//! Action → Reducer → (State, Effects) → Effect Execution → More Actions
//! ```
//!
//! The reducers are pure; every collaborator (identity, registration store,
//! proof storage) sits behind a trait in [`providers`] and is injected via
//! [`RegistrationEnvironment`]. Quota denials are named outcomes, not
//! errors: the reducer records the denial and its fixed message so the UI
//! can disable the action and explain why.
//!
//! ## Example: registering for an event
//!
//! ```rust,ignore
//! use symposium_registration::*;
//!
//! let effects = reducer.reduce(
//!     &mut state,
//!     RegistrationAction::Register { event_id: EventId(3) },
//!     &env,
//! );
//! // Execute effects (persist the new id set), feed resulting
//! // actions back into the reducer.
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

// Public modules
pub mod actions;
pub mod config;
pub mod constants;
pub mod environment;
pub mod error;
pub mod providers;
pub mod reducers;
pub mod state;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

// Re-export main types for convenience
pub use actions::RegistrationAction;
pub use config::RegistrationConfig;
pub use environment::RegistrationEnvironment;
pub use error::{RegistrationError, Result};
pub use reducers::RegistrationReducer;
pub use state::{RegistrationState, Session, UserId};
