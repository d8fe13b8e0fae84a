//! Registration reducers.
//!
//! This module contains pure reducer functions for the registration feature.
//!
//! Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.

pub mod events;
pub mod payment;
pub mod session;

use crate::actions::RegistrationAction;
use crate::environment::RegistrationEnvironment;
use crate::providers::{IdentityProvider, ProofStorage, RegistrationStore};
use crate::state::RegistrationState;
use symposium_core::SmallVec;
use symposium_core::effect::Effect;
use symposium_core::reducer::Reducer;

// Re-export
pub use events::EventSelectionReducer;
pub use payment::PaymentReducer;
pub use session::SessionReducer;

/// Unified registration reducer.
///
/// Combines the session, event selection, and payment flows into a single
/// reducer. Routes actions to the appropriate sub-reducer based on action
/// type.
#[derive(Debug, Clone)]
pub struct RegistrationReducer<I, S, P>
where
    I: IdentityProvider + Clone + 'static,
    S: RegistrationStore + Clone + 'static,
    P: ProofStorage + Clone + 'static,
{
    session: SessionReducer<I, S, P>,
    events: EventSelectionReducer<I, S, P>,
    payment: PaymentReducer<I, S, P>,
}

impl<I, S, P> RegistrationReducer<I, S, P>
where
    I: IdentityProvider + Clone + 'static,
    S: RegistrationStore + Clone + 'static,
    P: ProofStorage + Clone + 'static,
{
    /// Create a new unified registration reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            session: SessionReducer::new(),
            events: EventSelectionReducer::new(),
            payment: PaymentReducer::new(),
        }
    }
}

impl<I, S, P> Default for RegistrationReducer<I, S, P>
where
    I: IdentityProvider + Clone + 'static,
    S: RegistrationStore + Clone + 'static,
    P: ProofStorage + Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, S, P> Reducer for RegistrationReducer<I, S, P>
where
    I: IdentityProvider + Clone + 'static,
    S: RegistrationStore + Clone + 'static,
    P: ProofStorage + Clone + 'static,
{
    type State = RegistrationState;
    type Action = RegistrationAction;
    type Environment = RegistrationEnvironment<I, S, P>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // Session actions
            RegistrationAction::SignUp { .. }
            | RegistrationAction::SignIn { .. }
            | RegistrationAction::SignOut
            | RegistrationAction::RestoreSession
            | RegistrationAction::UpdatePassword { .. }
            | RegistrationAction::SessionEstablished { .. }
            | RegistrationAction::SessionCleared
            | RegistrationAction::PasswordUpdated
            | RegistrationAction::AuthFailed { .. } => {
                self.session.reduce(state, action, env)
            },

            // Event selection actions
            RegistrationAction::LoadRegistration
            | RegistrationAction::Register { .. }
            | RegistrationAction::Unregister { .. }
            | RegistrationAction::RegistrationLoaded { .. }
            | RegistrationAction::RegistrationAccepted { .. }
            | RegistrationAction::RegistrationDenied { .. }
            | RegistrationAction::Unregistered { .. }
            | RegistrationAction::RegistrationStoreFailed { .. } => {
                self.events.reduce(state, action, env)
            },

            // Payment actions
            RegistrationAction::SubmitPaymentProof { .. }
            | RegistrationAction::ProofStored { .. }
            | RegistrationAction::PaymentRecorded { .. }
            | RegistrationAction::PaymentRejected { .. }
            | RegistrationAction::PaymentVerified
            | RegistrationAction::PaymentFailed { .. } => {
                self.payment.reduce(state, action, env)
            },
        }
    }
}
