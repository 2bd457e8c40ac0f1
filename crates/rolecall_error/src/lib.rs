//! Error types for the Rolecall reaction-role bot.
//!
//! This crate provides the foundation error types used throughout the Rolecall
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use rolecall_error::{RolecallResult, ConfigError};
//!
//! fn load_settings() -> RolecallResult<String> {
//!     Err(ConfigError::new("Missing bot token"))?
//! }
//!
//! match load_settings() {
//!     Ok(settings) => println!("Got: {}", settings),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod service;
mod store;

pub use config::ConfigError;
pub use error::{RolecallError, RolecallErrorKind, RolecallResult};
pub use service::{ServiceError, ServiceErrorKind};
pub use store::{StoreError, StoreErrorKind};
