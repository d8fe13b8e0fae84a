//! Session reducer.
//!
//! Handles account creation, sign-in, sign-out, and password changes by
//! delegating credentials handling to the identity collaborator. Inputs are
//! validated locally first (email shape, password length); only valid input
//! reaches the collaborator.
//!
//! On [`RegistrationAction::SessionEstablished`] the reducer chains a load
//! of the user's registration row so the UI starts from persisted state.

use crate::actions::RegistrationAction;
use crate::environment::RegistrationEnvironment;
use crate::error::RegistrationError;
use crate::providers::{IdentityProvider, ProofStorage, RegistrationStore};
use crate::state::RegistrationState;
use crate::utils::is_valid_email;
use symposium_core::effect::Effect;
use symposium_core::reducer::Reducer;
use symposium_core::registration::RegistrationSet;
use symposium_core::{SmallVec, smallvec};

/// Session reducer.
///
/// Handles the authentication slice of the registration feature.
#[derive(Debug, Clone)]
pub struct SessionReducer<I, S, P> {
    _phantom: std::marker::PhantomData<(I, S, P)>,
}

impl<I, S, P> SessionReducer<I, S, P> {
    /// Create a new session reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<I, S, P> Default for SessionReducer<I, S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, S, P> Reducer for SessionReducer<I, S, P>
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
            // ═══════════════════════════════════════════════════════════════
            // SignUp: validate locally, then create the account
            // ═══════════════════════════════════════════════════════════════
            RegistrationAction::SignUp { email, password } => {
                if !is_valid_email(&email) {
                    state.last_error = Some(RegistrationError::InvalidEmail);
                    return smallvec![Effect::None];
                }
                if let Err(error) = env.config.validate_password(&password) {
                    state.last_error = Some(error);
                    return smallvec![Effect::None];
                }
                state.last_error = None;

                let identity = env.identity.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match identity.sign_up(&email, &password).await {
                        Ok(session) => {
                            Some(RegistrationAction::SessionEstablished { session })
                        },
                        Err(error) => Some(RegistrationAction::AuthFailed {
                            reason: error.to_string(),
                        }),
                    }
                }))]
            },

            // ═══════════════════════════════════════════════════════════════
            // SignIn: validate shape only; the collaborator judges credentials
            // ═══════════════════════════════════════════════════════════════
            RegistrationAction::SignIn { email, password } => {
                if !is_valid_email(&email) {
                    state.last_error = Some(RegistrationError::InvalidEmail);
                    return smallvec![Effect::None];
                }
                if password.is_empty() {
                    state.last_error =
                        Some(RegistrationError::MissingField { name: "password" });
                    return smallvec![Effect::None];
                }
                state.last_error = None;

                let identity = env.identity.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match identity.sign_in(&email, &password).await {
                        Ok(session) => {
                            Some(RegistrationAction::SessionEstablished { session })
                        },
                        Err(error) => Some(RegistrationAction::AuthFailed {
                            reason: error.to_string(),
                        }),
                    }
                }))]
            },

            // ═══════════════════════════════════════════════════════════════
            // SignOut: terminate the session, then clear local state
            // ═══════════════════════════════════════════════════════════════
            RegistrationAction::SignOut => {
                let Some(user_id) = state.user_id() else {
                    return smallvec![Effect::None];
                };

                let identity = env.identity.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match identity.sign_out(user_id).await {
                        Ok(()) => Some(RegistrationAction::SessionCleared),
                        Err(error) => Some(RegistrationAction::AuthFailed {
                            reason: error.to_string(),
                        }),
                    }
                }))]
            },

            // ═══════════════════════════════════════════════════════════════
            // RestoreSession: pick up an existing session, e.g. after reload
            // ═══════════════════════════════════════════════════════════════
            RegistrationAction::RestoreSession => {
                let identity = env.identity.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match identity.current_user().await {
                        Ok(Some(session)) => {
                            Some(RegistrationAction::SessionEstablished { session })
                        },
                        Ok(None) => None,
                        Err(error) => Some(RegistrationAction::AuthFailed {
                            reason: error.to_string(),
                        }),
                    }
                }))]
            },

            // ═══════════════════════════════════════════════════════════════
            // UpdatePassword: requires a session; new password is validated
            // ═══════════════════════════════════════════════════════════════
            RegistrationAction::UpdatePassword {
                current_password,
                new_password,
            } => {
                let Some(user_id) = state.user_id() else {
                    state.last_error = Some(RegistrationError::NotAuthenticated);
                    return smallvec![Effect::None];
                };
                if let Err(error) = env.config.validate_password(&new_password) {
                    state.last_error = Some(error);
                    return smallvec![Effect::None];
                }
                state.last_error = None;

                let identity = env.identity.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match identity
                        .update_password(user_id, &current_password, &new_password)
                        .await
                    {
                        Ok(()) => Some(RegistrationAction::PasswordUpdated),
                        Err(error) => Some(RegistrationAction::AuthFailed {
                            reason: error.to_string(),
                        }),
                    }
                }))]
            },

            // ═══════════════════════════════════════════════════════════════
            // SessionEstablished: store the session, chain a registration load
            // ═══════════════════════════════════════════════════════════════
            RegistrationAction::SessionEstablished { session } => {
                let user_id = session.user_id;
                tracing::info!(email = %session.email, "session established");
                state.session = Some(session);
                state.last_error = None;

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

            // ═══════════════════════════════════════════════════════════════
            // SessionCleared: drop everything tied to the user
            // ═══════════════════════════════════════════════════════════════
            RegistrationAction::SessionCleared => {
                *state = RegistrationState::default();
                smallvec![Effect::None]
            },

            RegistrationAction::PasswordUpdated => {
                state.last_error = None;
                smallvec![Effect::None]
            },

            RegistrationAction::AuthFailed { reason } => {
                tracing::warn!(%reason, "identity collaborator failure");
                state.last_error = Some(RegistrationError::IdentityFailed(reason));
                smallvec![Effect::None]
            },

            // Not a session action; the routing reducer should not send these
            _ => smallvec![Effect::None],
        }
    }
}
