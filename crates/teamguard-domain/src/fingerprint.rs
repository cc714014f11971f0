use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a policy violation.
///
/// Identity fields:
/// - violation code
/// - account email
/// - matched rule pattern (if any)
pub fn fingerprint_for_violation(code: &str, email: &str, pattern: Option<&str>) -> String {
    let mut parts = vec![code, email];
    if let Some(p) = pattern {
        parts.push(p);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
