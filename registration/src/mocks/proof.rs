//! Mock proof storage for testing.

use crate::error::{RegistrationError, Result};
use crate::providers::{ProofStorage, ProofUpload, ProofUrl};
use crate::state::UserId;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock proof storage.
///
/// Uses in-memory storage for testing. One file per user; a second upload
/// replaces the first, as the real blob store does.
#[derive(Debug, Clone)]
pub struct MockProofStorage {
    files: Arc<Mutex<HashMap<UserId, ProofUpload>>>,
    calls: Arc<AtomicUsize>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockProofStorage {
    /// Create a new mock proof storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(AtomicUsize::new(0)),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Make every subsequent upload fail with the given reason, or clear
    /// the failure with `None`.
    pub fn set_failure(&self, reason: Option<&str>) {
        if let Ok(mut guard) = self.failure.lock() {
            *guard = reason.map(ToString::to_string);
        }
    }

    /// How many times `store_proof` was called, including failed calls.
    ///
    /// Lets tests assert that locally rejected uploads never reach storage.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The stored file for a user, for test assertions.
    #[must_use]
    pub fn stored_file(&self, user_id: UserId) -> Option<ProofUpload> {
        self.files
            .lock()
            .ok()
            .and_then(|files| files.get(&user_id).cloned())
    }
}

impl Default for MockProofStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProofStorage for MockProofStorage {
    fn store_proof(
        &self,
        user_id: UserId,
        upload: &ProofUpload,
    ) -> impl Future<Output = Result<ProofUrl>> + Send {
        let files = Arc::clone(&self.files);
        let calls = Arc::clone(&self.calls);
        let failure = Arc::clone(&self.failure);
        let upload = upload.clone();

        async move {
            calls.fetch_add(1, Ordering::SeqCst);

            if let Some(reason) = failure
                .lock()
                .map_err(|_| RegistrationError::InternalError)?
                .as_ref()
            {
                return Err(RegistrationError::StorageFailed(reason.clone()));
            }

            let url = ProofUrl(format!("mock://proofs/{}/{}", user_id.0, upload.file_name));
            files
                .lock()
                .map_err(|_| RegistrationError::InternalError)?
                .insert(user_id, upload);
            Ok(url)
        }
    }
}
