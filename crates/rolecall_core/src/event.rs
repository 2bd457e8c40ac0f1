//! Normalized inbound events.
//!
//! The gateway adapter decodes raw platform payloads into these types and
//! hands them to the controller manager; tests construct them directly, so
//! the core never depends on the platform library.

use crate::{ChannelId, GuildId, MessageId, ReactionEmoji, UserId};

/// A reaction was added to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionAdded {
    /// Channel holding the message.
    pub channel_id: ChannelId,
    /// Message that was reacted on.
    pub message_id: MessageId,
    /// The reacting user.
    pub user_id: UserId,
    /// The emoji that was pressed.
    pub emoji: ReactionEmoji,
    /// Whether the reacting account is a bot. Bot reactions are stripped but
    /// never acted on.
    pub actor_is_bot: bool,
}

/// A guild role was created, renamed, or deleted.
///
/// Create carries only `new_name`, delete only `old_name`, rename both. The
/// gateway may not know the old name of a deleted role; the manager drops
/// such events with a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleChanged {
    /// Guild the role belongs to.
    pub guild_id: GuildId,
    /// Role name before the change, when known.
    pub old_name: Option<String>,
    /// Role name after the change, when the role still exists.
    pub new_name: Option<String>,
}

/// A message was deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDeleted {
    /// Guild the message belonged to.
    pub guild_id: GuildId,
    /// Channel that held the message.
    pub channel_id: ChannelId,
    /// The deleted message.
    pub message_id: MessageId,
}
