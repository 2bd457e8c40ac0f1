//! Discord gateway adapter for the Rolecall reaction-role bot.
//!
//! This crate is the composition root: it loads configuration, implements
//! the [`rolecall::RoleService`] contract over the Discord HTTP API, and
//! normalizes gateway events into the core event types consumed by the
//! controller manager. Everything below this crate is platform-neutral.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod commands;
mod config;
mod conversions;
mod handler;
mod service;

pub use config::BotConfig;
pub use handler::RolecallHandler;
pub use service::SerenityRoleService;
