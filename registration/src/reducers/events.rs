//! Event selection reducer.
//!
//! Handles registering for and unregistering from events. Registration is
//! gated by the eligibility evaluator; unregistration is unconditional and
//! idempotent. Both apply the mutation locally first and persist it through
//! the store collaborator, rolling back on write failure.

use crate::actions::RegistrationAction;
use crate::environment::RegistrationEnvironment;
use crate::error::RegistrationError;
use crate::providers::{IdentityProvider, ProofStorage, RegistrationStore};
use crate::state::RegistrationState;
use symposium_core::effect::Effect;
use symposium_core::eligibility;
use symposium_core::reducer::Reducer;
use symposium_core::registration::RegistrationSet;
use symposium_core::{SmallVec, smallvec};

/// Event selection reducer.
///
/// Handles the register/unregister slice of the registration feature.
#[derive(Debug, Clone)]
pub struct EventSelectionReducer<I, S, P> {
    _phantom: std::marker::PhantomData<(I, S, P)>,
}

impl<I, S, P> EventSelectionReducer<I, S, P> {
    /// Create a new event selection reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<I, S, P> Default for EventSelectionReducer<I, S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, S, P> Reducer for EventSelectionReducer<I, S, P>
where
    I: IdentityProvider + Clone + 'static,
    S: RegistrationStore + Clone + 'static,
    P: ProofStorage + Clone + 'static,
{
    type State = RegistrationState;
    type Action = RegistrationAction;
    type Environment = RegistrationEnvironment<I, S, P>;

    #[allow(clippy::too_many_lines)]
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════════
            // LoadRegistration: fetch the user's row from the store
            // ═══════════════════════════════════════════════════════════════
            RegistrationAction::LoadRegistration => {
                let Some(user_id) = state.user_id() else {
                    state.last_error = Some(RegistrationError::NotAuthenticated);
                    return smallvec![Effect::None];
                };

                let store = env.store.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match store.get(user_id).await {
                        Ok(Some(row)) => Some(RegistrationAction::RegistrationLoaded {
                            registration: RegistrationSet::from_parts(
                                row.event_ids,
                                row.payment_status,
                            ),
                            payment_details: row.payment_details,
                        }),
                        Ok(None) => Some(RegistrationAction::RegistrationLoaded {
                            registration: RegistrationSet::new(),
                            payment_details: None,
                        }),
                        Err(error) => Some(RegistrationAction::RegistrationStoreFailed {
                            context: "load registration".to_string(),
                            reason: error.to_string(),
                            restore: None,
                        }),
                    }
                }))]
            },

            RegistrationAction::RegistrationLoaded {
                registration,
                payment_details,
            } => {
                state.registration = registration;
                state.payment_details = payment_details;
                state.last_error = None;
                smallvec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // Register: evaluate eligibility, mutate locally, persist
            // ═══════════════════════════════════════════════════════════════
            RegistrationAction::Register { event_id } => {
                let Some(user_id) = state.user_id() else {
                    state.last_error = Some(RegistrationError::NotAuthenticated);
                    return smallvec![Effect::None];
                };

                let Some(category) = env.catalog.category_of(event_id) else {
                    state.last_error = Some(RegistrationError::UnknownEvent(event_id));
                    return smallvec![Effect::None];
                };

                // Already held: success without a store call
                if state.registration.is_registered(event_id) {
                    state.last_denial = None;
                    return smallvec![Effect::None];
                }

                if let Some(reason) = eligibility::denial_reason(
                    &state.registration.event_ids,
                    &env.catalog,
                    category,
                ) {
                    tracing::info!(
                        event_id = %event_id,
                        denial = %reason,
                        "registration denied"
                    );
                    state.last_denial = Some(reason);
                    return smallvec![Effect::None];
                }

                let previous = state.registration.clone();
                state.registration.insert(event_id);
                state.last_denial = None;
                state.last_error = None;

                let event_ids = state.registration.event_ids.clone();
                let status = state.registration.status();
                let store = env.store.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    let written = async {
                        store.set_event_ids(user_id, &event_ids).await?;
                        store.set_registration_status(user_id, status).await
                    }
                    .await;
                    match written {
                        Ok(()) => Some(RegistrationAction::RegistrationAccepted { event_id }),
                        Err(error) => Some(RegistrationAction::RegistrationStoreFailed {
                            context: "register".to_string(),
                            reason: error.to_string(),
                            restore: Some(previous),
                        }),
                    }
                }))]
            },

            RegistrationAction::RegistrationAccepted { event_id } => {
                tracing::info!(event_id = %event_id, "registration persisted");
                smallvec![Effect::None]
            },

            RegistrationAction::RegistrationDenied { event_id, reason } => {
                tracing::info!(event_id = %event_id, denial = %reason, "registration denied");
                state.last_denial = Some(reason);
                smallvec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // Unregister: unconditional, idempotent, persisted
            // ═══════════════════════════════════════════════════════════════
            RegistrationAction::Unregister { event_id } => {
                let Some(user_id) = state.user_id() else {
                    state.last_error = Some(RegistrationError::NotAuthenticated);
                    return smallvec![Effect::None];
                };

                // Not held: nothing to do
                if !state.registration.is_registered(event_id) {
                    return smallvec![Effect::None];
                }

                let previous = state.registration.clone();
                state.registration.remove(event_id);
                state.last_denial = None;
                state.last_error = None;

                let event_ids = state.registration.event_ids.clone();
                let status = state.registration.status();
                let store = env.store.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    let written = async {
                        store.set_event_ids(user_id, &event_ids).await?;
                        store.set_registration_status(user_id, status).await
                    }
                    .await;
                    match written {
                        Ok(()) => Some(RegistrationAction::Unregistered { event_id, status }),
                        Err(error) => Some(RegistrationAction::RegistrationStoreFailed {
                            context: "unregister".to_string(),
                            reason: error.to_string(),
                            restore: Some(previous),
                        }),
                    }
                }))]
            },

            RegistrationAction::Unregistered { event_id, status } => {
                tracing::info!(
                    event_id = %event_id,
                    status = status.as_str(),
                    "unregistration persisted"
                );
                smallvec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // RegistrationStoreFailed: roll back to the pre-attempt set
            // ═══════════════════════════════════════════════════════════════
            RegistrationAction::RegistrationStoreFailed {
                context,
                reason,
                restore,
            } => {
                tracing::error!(%context, %reason, "registration store failure");
                if let Some(previous) = restore {
                    state.registration = previous;
                }
                state.last_error = Some(RegistrationError::StoreFailed(reason));
                smallvec![Effect::None]
            },

            // Not an event selection action; the routing reducer should not
            // send these
            _ => smallvec![Effect::None],
        }
    }
}
