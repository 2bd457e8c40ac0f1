//! Role service error types.
//!
//! Errors surfaced by the platform adapter when talking to the chat service:
//! role mutations, message edits, and reaction management.

/// Role service error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ServiceErrorKind {
    /// Generic platform API error (HTTP error, gateway error, rate limit).
    #[display("Platform API error: {_0}")]
    Api(String),

    /// Member could not be resolved in the guild.
    #[display("Member fetch failed: {_0}")]
    MemberFetchFailed(String),

    /// Adding or removing a member role failed.
    #[display("Role mutation failed: {_0}")]
    RoleMutationFailed(String),

    /// Controller message failed to send or edit.
    #[display("Message send failed: {_0}")]
    MessageSendFailed(String),

    /// Adding, clearing, or removing a reaction failed.
    #[display("Reaction update failed: {_0}")]
    ReactionFailed(String),

    /// Connection to the platform gateway failed.
    #[display("Connection failed: {_0}")]
    ConnectionFailed(String),

    /// Bot token is invalid or expired.
    #[display("Invalid or expired bot token")]
    InvalidToken,
}

/// Role service error with source location tracking.
///
/// Captures the error kind along with the file and line where the error
/// occurred.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Service Error: {} at line {} in {}", kind, line, file)]
pub struct ServiceError {
    /// The kind of error that occurred
    pub kind: ServiceErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ServiceError {
    /// Create a new service error with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use rolecall_error::{ServiceError, ServiceErrorKind};
    ///
    /// let err = ServiceError::new(ServiceErrorKind::InvalidToken);
    /// ```
    #[track_caller]
    pub fn new(kind: ServiceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
