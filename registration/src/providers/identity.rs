//! Identity collaborator trait.

use crate::error::Result;
use crate::state::{Session, UserId};
use std::future::Future;

/// Identity collaborator.
///
/// Abstracts over the hosted authentication service. The core treats "no
/// authenticated user" as a precondition failure for registration actions;
/// it never implements credentials handling itself.
pub trait IdentityProvider: Send + Sync {
    /// Create an account and establish a session.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The email is already registered
    /// - The identity service rejects the request
    fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Session>> + Send;

    /// Sign in with existing credentials.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The credentials are invalid
    /// - The identity service rejects the request
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Session>> + Send;

    /// Terminate the user's session.
    ///
    /// # Errors
    ///
    /// Returns error if the identity service rejects the request.
    fn sign_out(&self, user_id: UserId) -> impl Future<Output = Result<()>> + Send;

    /// Change the user's password.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The current password is wrong
    /// - The identity service rejects the request
    fn update_password(
        &self,
        user_id: UserId,
        current_password: &str,
        new_password: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    /// The currently authenticated user, if any.
    ///
    /// # Errors
    ///
    /// Returns error if the identity service cannot be reached.
    fn current_user(&self) -> impl Future<Output = Result<Option<Session>>> + Send;
}
