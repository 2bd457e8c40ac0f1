//! Top-level error wrapper types.

use crate::{ConfigError, ServiceError, StoreError};

/// This is the foundation error enum. Every fallible operation in the
/// workspace converges on one of these variants.
///
/// # Examples
///
/// ```
/// use rolecall_error::{RolecallError, ServiceError, ServiceErrorKind};
///
/// let svc_err = ServiceError::new(ServiceErrorKind::Api("503".to_string()));
/// let err: RolecallError = svc_err.into();
/// assert!(format!("{}", err).contains("Service Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum RolecallErrorKind {
    /// Persistent store error
    #[from(StoreError)]
    Store(StoreError),
    /// Role service (platform) error
    #[from(ServiceError)]
    Service(ServiceError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Rolecall error with kind discrimination.
///
/// # Examples
///
/// ```
/// use rolecall_error::{RolecallResult, ConfigError};
///
/// fn might_fail() -> RolecallResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Rolecall Error: {}", _0)]
pub struct RolecallError(Box<RolecallErrorKind>);

impl RolecallError {
    /// Create a new error from a kind.
    pub fn new(kind: RolecallErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RolecallErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to RolecallErrorKind
impl<T> From<T> for RolecallError
where
    T: Into<RolecallErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Rolecall operations.
///
/// # Examples
///
/// ```
/// use rolecall_error::{RolecallResult, StoreError, StoreErrorKind};
///
/// fn read_entry() -> RolecallResult<String> {
///     Err(StoreError::new(StoreErrorKind::ReadFailed("io".to_string())))?
/// }
/// ```
pub type RolecallResult<T> = std::result::Result<T, RolecallError>;
