//! Conversions between core types and serenity model types.

use rolecall::{ChannelId, GuildId, MessageId, ReactionEmoji, Role, RoleId, UserId};
use serenity::model::channel::ReactionType;
use serenity::model::id as discord;

pub(crate) fn to_guild(id: GuildId) -> discord::GuildId {
    discord::GuildId::new(id.get())
}

pub(crate) fn to_channel(id: ChannelId) -> discord::ChannelId {
    discord::ChannelId::new(id.get())
}

pub(crate) fn to_message(id: MessageId) -> discord::MessageId {
    discord::MessageId::new(id.get())
}

pub(crate) fn to_user(id: UserId) -> discord::UserId {
    discord::UserId::new(id.get())
}

pub(crate) fn from_role(role: serenity::model::guild::Role) -> Role {
    Role::new(RoleId::new(role.id.get()), role.name)
}

pub(crate) fn to_reaction(emoji: &ReactionEmoji) -> ReactionType {
    match emoji.id {
        Some(id) => ReactionType::Custom {
            animated: false,
            id: discord::EmojiId::new(id),
            name: Some(emoji.name.clone()),
        },
        None => ReactionType::Unicode(emoji.name.clone()),
    }
}

pub(crate) fn from_reaction(reaction: &ReactionType) -> ReactionEmoji {
    match reaction {
        ReactionType::Unicode(name) => ReactionEmoji::unicode(name.clone()),
        ReactionType::Custom { id, name, .. } => {
            ReactionEmoji::custom(name.clone().unwrap_or_default(), id.get())
        }
        other => ReactionEmoji::unicode(other.to_string()),
    }
}
