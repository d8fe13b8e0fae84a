//! Proof storage collaborator trait.

use crate::error::Result;
use crate::providers::{ProofUpload, ProofUrl};
use crate::state::UserId;
use std::future::Future;

/// Payment-proof storage collaborator.
///
/// Abstracts over the hosted blob store. Uploads are validated locally
/// (size and MIME type) before this trait is called; the collaborator may
/// still reject a file, and that failure is surfaced to the user verbatim.
pub trait ProofStorage: Send + Sync {
    /// Store a proof file for a user, replacing any previously stored file,
    /// and return a retrievable URL.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The storage service rejects the file (size, type)
    /// - The upload fails
    fn store_proof(
        &self,
        user_id: UserId,
        upload: &ProofUpload,
    ) -> impl Future<Output = Result<ProofUrl>> + Send;
}
