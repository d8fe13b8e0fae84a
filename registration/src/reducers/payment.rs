//! Payment reducer.
//!
//! Handles manual payment-proof submission and the payment status machine:
//! `Unpaid -> Paid -> Verified | Failed`, with `Failed -> Paid` on
//! resubmission. Verification decisions arrive as external events; this
//! reducer never performs verification itself.

use crate::actions::RegistrationAction;
use crate::environment::RegistrationEnvironment;
use crate::error::RegistrationError;
use crate::providers::{
    IdentityProvider, PaymentDetails, ProofStorage, RegistrationStore,
};
use crate::state::RegistrationState;
use symposium_core::effect::Effect;
use symposium_core::reducer::Reducer;
use symposium_core::{SmallVec, smallvec};

/// Payment reducer.
///
/// Handles the payment slice of the registration feature.
#[derive(Debug, Clone)]
pub struct PaymentReducer<I, S, P> {
    _phantom: std::marker::PhantomData<(I, S, P)>,
}

impl<I, S, P> PaymentReducer<I, S, P> {
    /// Create a new payment reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<I, S, P> Default for PaymentReducer<I, S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, S, P> Reducer for PaymentReducer<I, S, P>
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
            // SubmitPaymentProof: validate locally, then upload the file
            // ═══════════════════════════════════════════════════════════════
            RegistrationAction::SubmitPaymentProof {
                method,
                transaction_id,
                proof,
            } => {
                let Some(user_id) = state.user_id() else {
                    state.last_error = Some(RegistrationError::NotAuthenticated);
                    return smallvec![Effect::None];
                };

                let status = state.registration.payment_status;
                if !status.can_submit() {
                    state.last_error =
                        Some(RegistrationError::SubmissionNotAllowed { status });
                    return smallvec![Effect::None];
                }

                if state.registration.is_empty() {
                    state.last_error = Some(RegistrationError::RegistrationMissing);
                    return smallvec![Effect::None];
                }

                if transaction_id.trim().is_empty() {
                    state.last_error =
                        Some(RegistrationError::MissingField { name: "transaction_id" });
                    return smallvec![Effect::None];
                }

                if let Err(error) = env.config.validate_proof(&proof) {
                    state.last_error = Some(error);
                    return smallvec![Effect::None];
                }
                state.last_error = None;

                tracing::info!(
                    method = method.as_str(),
                    total_due = env.total_due(&state.registration),
                    proof_bytes = proof.size_bytes(),
                    "payment proof accepted for upload"
                );

                let proofs = env.proofs.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match proofs.store_proof(user_id, &proof).await {
                        Ok(url) => Some(RegistrationAction::ProofStored {
                            url,
                            method,
                            transaction_id,
                        }),
                        Err(error) => Some(RegistrationAction::PaymentRejected {
                            reason: error.to_string(),
                        }),
                    }
                }))]
            },

            // ═══════════════════════════════════════════════════════════════
            // ProofStored: advance the status machine and persist
            // ═══════════════════════════════════════════════════════════════
            RegistrationAction::ProofStored {
                url,
                method,
                transaction_id,
            } => {
                let Some(user_id) = state.user_id() else {
                    state.last_error = Some(RegistrationError::NotAuthenticated);
                    return smallvec![Effect::None];
                };

                let next = match state.registration.payment_status.accept_submission() {
                    Ok(next) => next,
                    Err(error) => {
                        // Status changed between upload and completion
                        tracing::warn!(%error, "stale proof upload ignored");
                        return smallvec![Effect::None];
                    },
                };

                let previous = state.registration.clone();
                state.registration.payment_status = next;

                let details = PaymentDetails {
                    method,
                    transaction_id,
                    proof_url: url,
                    submitted_at: env.clock.now(),
                };

                let store = env.store.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    let written = async {
                        store.set_payment_details(user_id, &details).await?;
                        store.set_payment_status(user_id, next).await
                    }
                    .await;
                    match written {
                        Ok(()) => Some(RegistrationAction::PaymentRecorded { details }),
                        Err(error) => Some(RegistrationAction::RegistrationStoreFailed {
                            context: "record payment".to_string(),
                            reason: error.to_string(),
                            restore: Some(previous),
                        }),
                    }
                }))]
            },

            RegistrationAction::PaymentRecorded { details } => {
                tracing::info!(
                    method = details.method.as_str(),
                    proof_url = %details.proof_url,
                    "payment submission recorded"
                );
                state.payment_details = Some(details);
                state.last_error = None;
                smallvec![Effect::None]
            },

            RegistrationAction::PaymentRejected { reason } => {
                tracing::warn!(%reason, "payment proof rejected by storage");
                state.last_error = Some(RegistrationError::StorageFailed(reason));
                smallvec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // Administrator decisions, fed in as external events
            // ═══════════════════════════════════════════════════════════════
            RegistrationAction::PaymentVerified => {
                match state.registration.payment_status.verify() {
                    Ok(next) => {
                        tracing::info!("payment verified");
                        state.registration.payment_status = next;
                    },
                    Err(error) => {
                        tracing::warn!(%error, "verification event ignored");
                    },
                }
                smallvec![Effect::None]
            },

            RegistrationAction::PaymentFailed { reason } => {
                match state.registration.payment_status.reject() {
                    Ok(next) => {
                        tracing::info!(%reason, "payment rejected by administrator");
                        state.registration.payment_status = next;
                    },
                    Err(error) => {
                        tracing::warn!(%error, "rejection event ignored");
                    },
                }
                smallvec![Effect::None]
            },

            // Not a payment action; the routing reducer should not send these
            _ => smallvec![Effect::None],
        }
    }
}
