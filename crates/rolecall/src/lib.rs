//! Rolecall: self-assigned, mutually exclusive roles via reaction buttons.
//!
//! This facade re-exports the public API of the Rolecall workspace crates:
//!
//! - [`rolecall_error`] — error types
//! - [`rolecall_core`] — IDs, categories, events, the emoji catalog
//! - [`rolecall_rate_limit`] — the per-button cooldown gate
//! - [`rolecall_store`] — durable controller mapping storage
//! - [`rolecall_controller`] — controllers, the manager, the role service
//!   contract
//!
//! # Example
//!
//! ```rust,ignore
//! use rolecall::{ControllerManager, JsonFileStore};
//! use std::sync::Arc;
//!
//! let store = Arc::new(JsonFileStore::new("role_controllers.json"));
//! let manager = ControllerManager::new(service, store);
//! manager.init().await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use rolecall_controller::{
    CATEGORY_EMPTIED_TEXT, Controller, ControllerContent, ControllerManager, MAX_BUTTONS,
    RoleService, category_emptied, controller_path, role_listing,
};
pub use rolecall_core::{
    CANCEL_GLYPH, Category, ChannelId, EmojiCatalog, GuildId, Member, MessageDeleted, MessageId,
    NUMBER_GLYPHS, ReactionAdded, ReactionEmoji, Role, RoleChanged, RoleId, UserId,
};
pub use rolecall_error::{
    ConfigError, RolecallError, RolecallErrorKind, RolecallResult, ServiceError, ServiceErrorKind,
    StoreError, StoreErrorKind,
};
pub use rolecall_rate_limit::{CooldownGate, DEFAULT_WINDOW};
pub use rolecall_store::{ControllerStore, JsonFileStore, MemoryStore};
