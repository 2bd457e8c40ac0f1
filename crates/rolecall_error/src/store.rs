//! Persistent store error types.

/// Kinds of store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// Failed to read the backing file
    #[display("Failed to read store file: {}", _0)]
    ReadFailed(String),
    /// Failed to write the backing file
    #[display("Failed to write store file: {}", _0)]
    WriteFailed(String),
    /// Backing file holds invalid JSON
    #[display("Failed to parse store contents: {}", _0)]
    ParseFailed(String),
    /// A path segment addressed a leaf as if it were a branch
    #[display("Invalid store path: {}", _0)]
    InvalidPath(String),
}

/// Store error with location tracking.
///
/// # Examples
///
/// ```
/// use rolecall_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::InvalidPath("a..b".to_string()));
/// assert!(format!("{}", err).contains("Invalid store path"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
