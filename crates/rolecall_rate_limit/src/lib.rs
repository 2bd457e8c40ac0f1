//! Per-button cooldown gate for the Rolecall reaction-role bot.
//!
//! Controllers permit one successful role change per user per message within
//! a fixed window (ten minutes by default). State is process-local and not
//! persisted: a restart resets all cooldowns. That is a documented
//! limitation of the design, not a defect.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cooldown;

pub use cooldown::{CooldownGate, DEFAULT_WINDOW};
