//! Core data types for the Rolecall reaction-role bot.
//!
//! This crate provides the platform-neutral vocabulary shared across the
//! workspace: snowflake ID newtypes, the category prefix grammar, the emoji
//! button catalog, and the normalized inbound events produced by the gateway
//! adapter.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod emoji;
mod event;
mod id;
mod role;

pub use category::Category;
pub use emoji::{CANCEL_GLYPH, EmojiCatalog, NUMBER_GLYPHS, ReactionEmoji};
pub use event::{MessageDeleted, ReactionAdded, RoleChanged};
pub use id::{ChannelId, GuildId, MessageId, RoleId, UserId};
pub use role::{Member, Role};
