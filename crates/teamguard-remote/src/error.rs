use thiserror::Error;

/// Error taxonomy for remote membership operations.
///
/// Fatal errors abort the whole invocation; the rest are recorded per-item
/// and never stop processing of the remaining batch.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Invalid or expired token, or insufficient scope.
    #[error("authentication failed (HTTP {status}): check the token")]
    Auth { status: u16 },

    /// The enterprise flag does not match the supplied identifier, or the
    /// target does not exist at all.
    #[error("configuration error: {0}")]
    Config(String),

    /// The email has no corresponding membership record.
    #[error("{email} is not a member")]
    NotFound { email: String },

    /// Network or rate-limit failure that survived the retry budget.
    #[error("transient failure after {attempts} attempts: {reason}")]
    Transient { attempts: u32, reason: String },

    /// Duplicate email across roster pages. The roster cannot be trusted,
    /// so it is never silently deduplicated.
    #[error("inconsistent roster: duplicate email {email} across pages")]
    InconsistentRoster { email: String },

    /// Response body the client could not turn into accounts.
    #[error("malformed API payload: {0}")]
    Payload(String),

    /// Any other unexpected API response.
    #[error("unexpected API response (HTTP {status}): {body}")]
    Api { status: u16, body: String },
}

impl RemoteError {
    /// Fatal errors halt the entire invocation with no partial output.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RemoteError::Auth { .. }
                | RemoteError::Config(_)
                | RemoteError::InconsistentRoster { .. }
                | RemoteError::Payload(_)
        )
    }
}
