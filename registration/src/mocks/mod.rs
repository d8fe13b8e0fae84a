//! Mock collaborator implementations for testing.
//!
//! All mocks use in-memory storage and are deterministic. Each carries a
//! failure switch so tests can exercise collaborator-failure paths without
//! a real service.

pub mod identity;
pub mod proof;
pub mod store;

pub use identity::MockIdentityProvider;
pub use proof::MockProofStorage;
pub use store::MockRegistrationStore;
