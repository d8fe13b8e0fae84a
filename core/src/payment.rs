//! Payment status state machine.
//!
//! States: `Unpaid → Paid → {Verified, Failed}`, with `Failed` looping back
//! to `Paid` on resubmission. `Verified` is terminal. The core only performs
//! the submission-accepted transition itself; verification and rejection are
//! administrative decisions fed in from outside.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Payment lifecycle state for a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// No accepted payment submission yet. Initial state.
    #[default]
    Unpaid,
    /// A payment submission was accepted and awaits manual review.
    Paid,
    /// An administrator verified the payment. Terminal.
    Verified,
    /// An administrator rejected the payment; a new submission may follow.
    Failed,
}

/// Invalid payment-status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {attempted} while payment status is {from}")]
pub struct TransitionError {
    /// The state the transition was attempted from.
    pub from: PaymentStatus,
    /// Human-readable name of the attempted transition.
    pub attempted: &'static str,
}

impl PaymentStatus {
    /// Get the status as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Paid => "paid",
            Self::Verified => "verified",
            Self::Failed => "failed",
        }
    }

    /// Whether a new payment submission is currently allowed.
    ///
    /// Drives UI gating: `Unpaid` and `Failed` may submit; `Paid` is awaiting
    /// review and `Verified` is settled.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        matches!(self, Self::Unpaid | Self::Failed)
    }

    /// Whether no further transition is defined from this state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Verified)
    }

    /// Accept a payment submission: `Unpaid | Failed → Paid`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] from `Paid` (submission already under
    /// review) or `Verified` (settled).
    pub const fn accept_submission(self) -> Result<Self, TransitionError> {
        match self {
            Self::Unpaid | Self::Failed => Ok(Self::Paid),
            Self::Paid | Self::Verified => Err(TransitionError {
                from: self,
                attempted: "accept a payment submission",
            }),
        }
    }

    /// Record an administrative verification: `Paid → Verified`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] unless the current state is `Paid`.
    pub const fn verify(self) -> Result<Self, TransitionError> {
        match self {
            Self::Paid => Ok(Self::Verified),
            _ => Err(TransitionError {
                from: self,
                attempted: "verify a payment",
            }),
        }
    }

    /// Record an administrative rejection: `Paid → Failed`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] unless the current state is `Paid`.
    pub const fn reject(self) -> Result<Self, TransitionError> {
        match self {
            Self::Paid => Ok(Self::Failed),
            _ => Err(TransitionError {
                from: self,
                attempted: "reject a payment",
            }),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_unpaid() {
        assert_eq!(PaymentStatus::default(), PaymentStatus::Unpaid);
        assert!(PaymentStatus::Unpaid.can_submit());
    }

    #[test]
    fn test_happy_path() {
        let status = PaymentStatus::Unpaid;
        let status = status.accept_submission();
        assert_eq!(status, Ok(PaymentStatus::Paid));
        assert_eq!(PaymentStatus::Paid.verify(), Ok(PaymentStatus::Verified));
        assert!(PaymentStatus::Verified.is_terminal());
    }

    #[test]
    fn test_failed_loops_back_through_resubmission() {
        assert_eq!(PaymentStatus::Paid.reject(), Ok(PaymentStatus::Failed));
        assert!(PaymentStatus::Failed.can_submit());
        assert_eq!(
            PaymentStatus::Failed.accept_submission(),
            Ok(PaymentStatus::Paid)
        );
    }

    #[test]
    fn test_invalid_submissions_rejected() {
        assert!(PaymentStatus::Paid.accept_submission().is_err());
        assert!(PaymentStatus::Verified.accept_submission().is_err());
        assert!(!PaymentStatus::Paid.can_submit());
        assert!(!PaymentStatus::Verified.can_submit());
    }

    #[test]
    fn test_admin_transitions_only_from_paid() {
        assert!(PaymentStatus::Unpaid.verify().is_err());
        assert!(PaymentStatus::Failed.verify().is_err());
        assert!(PaymentStatus::Verified.verify().is_err());
        assert!(PaymentStatus::Unpaid.reject().is_err());
    }

    #[test]
    fn test_transition_error_display() {
        let err = PaymentStatus::Verified.accept_submission();
        assert_eq!(
            err.map_err(|e| e.to_string()),
            Err("cannot accept a payment submission while payment status is verified".to_string())
        );
    }
}
