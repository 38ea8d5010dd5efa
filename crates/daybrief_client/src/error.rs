use thiserror::Error;

/// Failure of a single connect cycle. The `Display` text is exactly what the
/// popup shows in place of the content region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// The host identity capability itself reported an error.
    #[error("{0}")]
    IdentityUnavailable(String),
    /// The identity capability answered, but no account is signed in.
    #[error("No user signed in")]
    NoUserSignedIn,
    /// The configured endpoint does not parse as a URL.
    #[error("invalid endpoint: {0}")]
    InvalidUrl(String),
    /// Non-success HTTP status; `message` is the server's `detail` field or a
    /// generic fallback.
    #[error("{message}")]
    Remote { message: String },
    /// A success response whose body did not parse as the expected model.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// Transport-level failure (connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),
}
