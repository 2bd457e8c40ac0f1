//! Gateway event handler.
//!
//! Decodes serenity gateway events into the normalized core event types and
//! forwards them to the controller manager. Events the manager does not care
//! about are dropped here.

use crate::{commands, conversions};
use rolecall::{
    ChannelId, ControllerManager, GuildId, MessageDeleted, MessageId, ReactionAdded, RoleChanged,
    UserId,
};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::channel::{Message, Reaction};
use serenity::model::gateway::Ready;
use serenity::model::guild::Role;
use serenity::model::id as discord;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Serenity [`EventHandler`] wiring the gateway to the controller manager.
pub struct RolecallHandler {
    manager: Arc<ControllerManager>,
    prefix: String,
}

impl RolecallHandler {
    /// Create a handler around a shared manager.
    pub fn new(manager: Arc<ControllerManager>, prefix: impl Into<String>) -> Self {
        Self {
            manager,
            prefix: prefix.into(),
        }
    }
}

#[async_trait]
impl EventHandler for RolecallHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "Connected to gateway");
        if let Err(e) = self.manager.init().await {
            error!(error = %e, "Failed to rebuild controller registry");
        }
    }

    async fn reaction_add(&self, _ctx: Context, reaction: Reaction) {
        // Reactions fetched over REST carry no user id; nothing to attribute.
        let Some(user_id) = reaction.user_id else {
            return;
        };

        let event = ReactionAdded {
            channel_id: ChannelId::new(reaction.channel_id.get()),
            message_id: MessageId::new(reaction.message_id.get()),
            user_id: UserId::new(user_id.get()),
            emoji: conversions::from_reaction(&reaction.emoji),
            actor_is_bot: reaction.member.as_ref().is_some_and(|m| m.user.bot),
        };
        self.manager.dispatch_reaction(&event).await;
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if let Err(e) = commands::handle_message(&ctx, &self.manager, &self.prefix, &msg).await {
            warn!(error = %e, "Command handling failed");
        }
    }

    async fn guild_role_create(&self, _ctx: Context, new: Role) {
        let event = RoleChanged {
            guild_id: GuildId::new(new.guild_id.get()),
            old_name: None,
            new_name: Some(new.name),
        };
        if let Err(e) = self.manager.handle_role_change(&event).await {
            warn!(error = %e, "Failed to reconcile role creation");
        }
    }

    async fn guild_role_update(&self, _ctx: Context, old: Option<Role>, new: Role) {
        let event = RoleChanged {
            guild_id: GuildId::new(new.guild_id.get()),
            old_name: old.map(|r| r.name),
            new_name: Some(new.name),
        };
        if let Err(e) = self.manager.handle_role_change(&event).await {
            warn!(error = %e, "Failed to reconcile role update");
        }
    }

    async fn guild_role_delete(
        &self,
        _ctx: Context,
        guild_id: discord::GuildId,
        removed_role_id: discord::RoleId,
        removed: Option<Role>,
    ) {
        let Some(role) = removed else {
            warn!(role = %removed_role_id, "Deleted role data unavailable, skipping sync");
            return;
        };
        let event = RoleChanged {
            guild_id: GuildId::new(guild_id.get()),
            old_name: Some(role.name),
            new_name: None,
        };
        if let Err(e) = self.manager.handle_role_change(&event).await {
            warn!(error = %e, "Failed to reconcile role deletion");
        }
    }

    async fn message_delete(
        &self,
        _ctx: Context,
        channel_id: discord::ChannelId,
        message_id: discord::MessageId,
        guild_id: Option<discord::GuildId>,
    ) {
        let Some(guild_id) = guild_id else {
            return;
        };
        let event = MessageDeleted {
            guild_id: GuildId::new(guild_id.get()),
            channel_id: ChannelId::new(channel_id.get()),
            message_id: MessageId::new(message_id.get()),
        };
        if let Err(e) = self.manager.handle_message_delete(&event).await {
            warn!(error = %e, "Failed to unregister deleted controller");
        }
    }
}
