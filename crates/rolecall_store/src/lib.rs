//! Durable controller mapping storage for the Rolecall reaction-role bot.
//!
//! Controllers are persisted as a three-level hierarchy of string keys,
//! `guild_id.channel_id.message_id -> category`, so the in-memory registry
//! can always be rebuilt from the store after a restart.
//!
//! The [`ControllerStore`] trait is the contract the manager consumes;
//! [`JsonFileStore`] is the production backend (one JSON document, atomic
//! writes) and [`MemoryStore`] backs tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod json_file;
mod memory;
mod store;
mod tree;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::ControllerStore;
