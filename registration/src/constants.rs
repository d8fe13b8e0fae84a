//! Fixed limits for the registration feature.

/// Maximum accepted payment-proof size in bytes (5 MB).
pub const MAX_PROOF_BYTES: u64 = 5 * 1024 * 1024;

/// Minimum password length enforced locally before any identity call.
pub const MIN_PASSWORD_LEN: usize = 8;

/// MIME types accepted for payment-proof uploads.
pub const ALLOWED_PROOF_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "application/pdf",
];
