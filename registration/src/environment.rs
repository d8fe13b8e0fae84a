//! Registration environment.
//!
//! This module defines the environment type for dependency injection in the
//! registration reducers.

use crate::config::RegistrationConfig;
use crate::providers::{IdentityProvider, ProofStorage, RegistrationStore};
use std::sync::Arc;
use symposium_core::catalog::Catalog;
use symposium_core::environment::Clock;
use symposium_core::fees::FeeSchedule;
use symposium_core::registration::RegistrationSet;

/// Registration environment.
///
/// Contains all external dependencies needed by the registration reducers,
/// plus the static catalog and the fee schedule.
///
/// # Type Parameters
///
/// - `I`: identity collaborator
/// - `S`: registration store collaborator
/// - `P`: proof storage collaborator
#[derive(Clone)]
pub struct RegistrationEnvironment<I, S, P>
where
    I: IdentityProvider + Clone,
    S: RegistrationStore + Clone,
    P: ProofStorage + Clone,
{
    /// Identity collaborator (hosted authentication).
    pub identity: I,

    /// Registration store collaborator (hosted data store).
    pub store: S,

    /// Proof storage collaborator (hosted blob store).
    pub proofs: P,

    /// The static event catalog, loaded once at startup.
    pub catalog: Arc<Catalog>,

    /// Pricing constants for this symposium edition.
    pub fees: FeeSchedule,

    /// Validation limits.
    pub config: RegistrationConfig,

    /// Clock for timestamps.
    pub clock: Arc<dyn Clock>,
}

impl<I, S, P> RegistrationEnvironment<I, S, P>
where
    I: IdentityProvider + Clone,
    S: RegistrationStore + Clone,
    P: ProofStorage + Clone,
{
    /// Create a new registration environment.
    #[must_use]
    pub fn new(
        identity: I,
        store: S,
        proofs: P,
        catalog: Arc<Catalog>,
        fees: FeeSchedule,
        config: RegistrationConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            identity,
            store,
            proofs,
            catalog,
            fees,
            config,
            clock,
        }
    }

    /// Total amount payable for a registration set, resolving held ids
    /// through the catalog. Unknown ids contribute nothing.
    #[must_use]
    pub fn total_due(&self, registration: &RegistrationSet) -> u64 {
        let events = registration
            .event_ids
            .iter()
            .filter_map(|&id| self.catalog.get(id));
        self.fees.total_due(events)
    }
}
