//! The per-press state machine.

use crate::RoleService;
use derive_getters::Getters;
use rolecall_core::{Category, ChannelId, GuildId, MessageId, ReactionAdded, Role, RoleId, UserId};
use rolecall_error::RolecallResult;
use rolecall_rate_limit::CooldownGate;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

/// One controller: the message + reaction set bound to a single category.
///
/// Handles button presses for its message. Every press path except the bot's
/// own reactions ends by stripping the actor's reaction, so the buttons stay
/// visually armed.
///
/// The postcondition of a successful press is eventual, not transactional: a
/// press that must swap roles issues a removal and an addition as separate
/// service calls, and a failure between them leaves the member with zero
/// category roles until their next successful press.
#[derive(Debug, Getters)]
pub struct Controller {
    /// Guild owning the category roles.
    guild_id: GuildId,
    /// Channel holding the controller message.
    channel_id: ChannelId,
    /// The controller message.
    message_id: MessageId,
    /// Category this controller assigns roles for.
    category: Category,
    /// Per-(message, user) cooldown gate.
    #[getter(skip)]
    cooldown: Mutex<CooldownGate<(MessageId, UserId)>>,
}

impl Controller {
    /// Create a controller with the default ten-minute cooldown window.
    pub fn new(
        guild_id: GuildId,
        channel_id: ChannelId,
        message_id: MessageId,
        category: Category,
    ) -> Self {
        Self {
            guild_id,
            channel_id,
            message_id,
            category,
            cooldown: Mutex::new(CooldownGate::default()),
        }
    }

    /// Handle a button press on this controller's message.
    #[instrument(
        skip(self, service, event),
        fields(
            message_id = %self.message_id,
            category = %self.category,
            user_id = %event.user_id,
            emoji = %event.emoji.name,
        )
    )]
    pub async fn handle(
        &self,
        event: &ReactionAdded,
        service: &dyn RoleService,
    ) -> RolecallResult<()> {
        // The bot's own reactions are the buttons themselves
        if event.user_id == service.current_user().await? {
            return Ok(());
        }

        // Other automated accounts get their reaction stripped but are never
        // acted on
        if event.actor_is_bot {
            debug!("stripping reaction from bot account");
            return self.strip(event, service).await;
        }

        let member = service.member(self.guild_id, event.user_id).await?;
        let category_roles = self.category_roles(service).await?;
        let held: Vec<RoleId> = category_roles
            .iter()
            .filter(|role| member.holds(role.id))
            .map(|role| role.id)
            .collect();

        // Cancel clears every category role, bypassing the cooldown
        if event.emoji.is_cancel() && !held.is_empty() {
            for role in &held {
                service
                    .remove_member_role(self.guild_id, event.user_id, *role)
                    .await?;
            }
            info!(cleared = held.len(), "cleared category roles");
            return self.strip(event, service).await;
        }

        let Some(index) = event.emoji.position().filter(|i| (1..=9).contains(i)) else {
            return self.strip(event, service).await;
        };

        let Some(target) = category_roles.get(index - 1).map(|role| role.id) else {
            return self.strip(event, service).await;
        };

        if member.holds(target) {
            return self.strip(event, service).await;
        }

        if !self
            .cooldown
            .lock()
            .await
            .allow((event.message_id, event.user_id))
        {
            debug!("role change denied by cooldown");
            return self.strip(event, service).await;
        }

        for role in &held {
            service
                .remove_member_role(self.guild_id, event.user_id, *role)
                .await?;
        }
        service
            .add_member_role(self.guild_id, event.user_id, target)
            .await?;
        info!(role_id = %target, "assigned category role");

        self.strip(event, service).await
    }

    /// All guild roles belonging to this controller's category, in guild
    /// order.
    pub(crate) async fn category_roles(
        &self,
        service: &dyn RoleService,
    ) -> RolecallResult<Vec<Role>> {
        Ok(service
            .guild_roles(self.guild_id)
            .await?
            .into_iter()
            .filter(|role| self.category.matches(&role.name))
            .collect())
    }

    async fn strip(&self, event: &ReactionAdded, service: &dyn RoleService) -> RolecallResult<()> {
        service
            .remove_user_reaction(self.channel_id, self.message_id, event.user_id, &event.emoji)
            .await
    }
}
