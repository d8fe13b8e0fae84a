//! Mock identity provider for testing.

use crate::error::{RegistrationError, Result};
use crate::providers::IdentityProvider;
use crate::state::{Session, UserId};
use chrono::Utc;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Mock identity provider.
///
/// Uses in-memory storage for testing. Passwords are kept in plain text;
/// this type never leaves test builds.
#[derive(Debug, Clone)]
pub struct MockIdentityProvider {
    accounts: Arc<Mutex<HashMap<String, (String, UserId)>>>,
    current: Arc<Mutex<Option<Session>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockIdentityProvider {
    /// Create a new mock identity provider.
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(Mutex::new(HashMap::new())),
            current: Arc::new(Mutex::new(None)),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Make every subsequent call fail with the given reason, or clear the
    /// failure with `None`.
    pub fn set_failure(&self, reason: Option<&str>) {
        if let Ok(mut guard) = self.failure.lock() {
            *guard = reason.map(ToString::to_string);
        }
    }

    fn check_failure(failure: &Mutex<Option<String>>) -> Result<()> {
        match failure.lock() {
            Ok(guard) => match guard.as_ref() {
                Some(reason) => Err(RegistrationError::IdentityFailed(reason.clone())),
                None => Ok(()),
            },
            Err(_) => Err(RegistrationError::InternalError),
        }
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for MockIdentityProvider {
    fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Session>> + Send {
        let accounts = Arc::clone(&self.accounts);
        let current = Arc::clone(&self.current);
        let failure = Arc::clone(&self.failure);
        let email = email.to_string();
        let password = password.to_string();

        async move {
            Self::check_failure(&failure)?;

            let mut accounts_guard =
                accounts.lock().map_err(|_| RegistrationError::InternalError)?;
            if accounts_guard.contains_key(&email) {
                return Err(RegistrationError::IdentityFailed(
                    "email already registered".to_string(),
                ));
            }

            let user_id = UserId::new();
            accounts_guard.insert(email.clone(), (password, user_id));

            let session = Session {
                user_id,
                email,
                created_at: Utc::now(),
            };
            *current.lock().map_err(|_| RegistrationError::InternalError)? =
                Some(session.clone());
            Ok(session)
        }
    }

    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Session>> + Send {
        let accounts = Arc::clone(&self.accounts);
        let current = Arc::clone(&self.current);
        let failure = Arc::clone(&self.failure);
        let email = email.to_string();
        let password = password.to_string();

        async move {
            Self::check_failure(&failure)?;

            let accounts_guard =
                accounts.lock().map_err(|_| RegistrationError::InternalError)?;
            let user_id = match accounts_guard.get(&email) {
                Some((stored, user_id)) if *stored == password => *user_id,
                _ => {
                    return Err(RegistrationError::IdentityFailed(
                        "invalid credentials".to_string(),
                    ));
                },
            };
            drop(accounts_guard);

            let session = Session {
                user_id,
                email,
                created_at: Utc::now(),
            };
            *current.lock().map_err(|_| RegistrationError::InternalError)? =
                Some(session.clone());
            Ok(session)
        }
    }

    fn sign_out(&self, _user_id: UserId) -> impl Future<Output = Result<()>> + Send {
        let current = Arc::clone(&self.current);
        let failure = Arc::clone(&self.failure);

        async move {
            Self::check_failure(&failure)?;
            *current.lock().map_err(|_| RegistrationError::InternalError)? = None;
            Ok(())
        }
    }

    fn update_password(
        &self,
        user_id: UserId,
        current_password: &str,
        new_password: &str,
    ) -> impl Future<Output = Result<()>> + Send {
        let accounts = Arc::clone(&self.accounts);
        let failure = Arc::clone(&self.failure);
        let current_password = current_password.to_string();
        let new_password = new_password.to_string();

        async move {
            Self::check_failure(&failure)?;

            let mut accounts_guard =
                accounts.lock().map_err(|_| RegistrationError::InternalError)?;
            let entry = accounts_guard
                .values_mut()
                .find(|(_, id)| *id == user_id)
                .ok_or_else(|| {
                    RegistrationError::IdentityFailed("unknown user".to_string())
                })?;
            if entry.0 != current_password {
                return Err(RegistrationError::IdentityFailed(
                    "wrong current password".to_string(),
                ));
            }
            entry.0 = new_password;
            Ok(())
        }
    }

    fn current_user(&self) -> impl Future<Output = Result<Option<Session>>> + Send {
        let current = Arc::clone(&self.current);
        let failure = Arc::clone(&self.failure);

        async move {
            Self::check_failure(&failure)?;
            Ok(current
                .lock()
                .map_err(|_| RegistrationError::InternalError)?
                .clone())
        }
    }
}
