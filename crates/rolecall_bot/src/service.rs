//! Discord-backed implementation of the role service contract.

use crate::conversions;
use rolecall::{
    ChannelId, ControllerContent, GuildId, Member, MessageId, ReactionEmoji, Role, RoleId,
    RoleService, RolecallResult, ServiceError, ServiceErrorKind, UserId,
};
use serenity::builder::{CreateEmbed, CreateMessage, EditMessage};
use serenity::http::Http;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, instrument};

/// [`RoleService`] backed by the Discord HTTP API.
///
/// Holds an [`Http`] client and nothing else; all state lives server-side.
/// The bot's own user id is fetched once and cached for the lifetime of the
/// process.
pub struct SerenityRoleService {
    http: Arc<Http>,
    bot_user: OnceCell<UserId>,
}

impl SerenityRoleService {
    /// Wrap an existing HTTP client.
    pub fn new(http: Arc<Http>) -> Self {
        Self {
            http,
            bot_user: OnceCell::new(),
        }
    }

    fn embed(content: &ControllerContent) -> CreateEmbed {
        CreateEmbed::new()
            .title(content.title())
            .description(content.description())
    }
}

#[async_trait::async_trait]
impl RoleService for SerenityRoleService {
    async fn current_user(&self) -> RolecallResult<UserId> {
        let id = self
            .bot_user
            .get_or_try_init(|| async {
                let user = self.http.get_current_user().await.map_err(|e| {
                    ServiceError::new(ServiceErrorKind::Api(format!(
                        "Failed to fetch current user: {e}"
                    )))
                })?;
                Ok::<_, ServiceError>(UserId::new(user.id.get()))
            })
            .await?;
        Ok(*id)
    }

    #[instrument(skip(self), fields(guild = %guild))]
    async fn guild_roles(&self, guild: GuildId) -> RolecallResult<Vec<Role>> {
        let mut roles = self
            .http
            .get_guild_roles(conversions::to_guild(guild))
            .await
            .map_err(|e| {
                ServiceError::new(ServiceErrorKind::Api(format!(
                    "Failed to fetch guild roles: {e}"
                )))
            })?;
        // Discord returns roles unordered; Role's Ord is by guild position.
        roles.sort();
        debug!(count = roles.len(), "Fetched guild roles");
        Ok(roles.into_iter().map(conversions::from_role).collect())
    }

    #[instrument(skip(self), fields(guild = %guild, user = %user))]
    async fn member(&self, guild: GuildId, user: UserId) -> RolecallResult<Member> {
        let member = self
            .http
            .get_member(conversions::to_guild(guild), conversions::to_user(user))
            .await
            .map_err(|e| {
                ServiceError::new(ServiceErrorKind::MemberFetchFailed(e.to_string()))
            })?;
        let role_ids = member.roles.iter().map(|r| RoleId::new(r.get())).collect();
        Ok(Member::new(user, role_ids))
    }

    #[instrument(skip(self), fields(guild = %guild, user = %user, role = %role))]
    async fn add_member_role(
        &self,
        guild: GuildId,
        user: UserId,
        role: RoleId,
    ) -> RolecallResult<()> {
        self.http
            .add_member_role(
                conversions::to_guild(guild),
                conversions::to_user(user),
                serenity::model::id::RoleId::new(role.get()),
                None,
            )
            .await
            .map_err(|e| {
                ServiceError::new(ServiceErrorKind::RoleMutationFailed(e.to_string())).into()
            })
    }

    #[instrument(skip(self), fields(guild = %guild, user = %user, role = %role))]
    async fn remove_member_role(
        &self,
        guild: GuildId,
        user: UserId,
        role: RoleId,
    ) -> RolecallResult<()> {
        self.http
            .remove_member_role(
                conversions::to_guild(guild),
                conversions::to_user(user),
                serenity::model::id::RoleId::new(role.get()),
                None,
            )
            .await
            .map_err(|e| {
                ServiceError::new(ServiceErrorKind::RoleMutationFailed(e.to_string())).into()
            })
    }

    async fn message_exists(
        &self,
        channel: ChannelId,
        message: MessageId,
    ) -> RolecallResult<bool> {
        // Any fetch failure counts as gone; init purges the entry either way.
        Ok(self
            .http
            .get_message(conversions::to_channel(channel), conversions::to_message(message))
            .await
            .is_ok())
    }

    #[instrument(skip(self, content), fields(channel = %channel))]
    async fn send_controller(
        &self,
        channel: ChannelId,
        content: &ControllerContent,
    ) -> RolecallResult<MessageId> {
        let message = conversions::to_channel(channel)
            .send_message(
                self.http.as_ref(),
                CreateMessage::new().embed(Self::embed(content)),
            )
            .await
            .map_err(|e| {
                ServiceError::new(ServiceErrorKind::MessageSendFailed(e.to_string()))
            })?;
        Ok(MessageId::new(message.id.get()))
    }

    #[instrument(skip(self, content), fields(channel = %channel, message = %message))]
    async fn edit_controller(
        &self,
        channel: ChannelId,
        message: MessageId,
        content: &ControllerContent,
    ) -> RolecallResult<()> {
        conversions::to_channel(channel)
            .edit_message(
                self.http.as_ref(),
                conversions::to_message(message),
                EditMessage::new().embed(Self::embed(content)),
            )
            .await
            .map_err(|e| {
                ServiceError::new(ServiceErrorKind::MessageSendFailed(e.to_string())).into()
            })
            .map(|_| ())
    }

    async fn add_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        emoji: &ReactionEmoji,
    ) -> RolecallResult<()> {
        self.http
            .create_reaction(
                conversions::to_channel(channel),
                conversions::to_message(message),
                &conversions::to_reaction(emoji),
            )
            .await
            .map_err(|e| {
                ServiceError::new(ServiceErrorKind::ReactionFailed(e.to_string())).into()
            })
    }

    async fn clear_reactions(&self, channel: ChannelId, message: MessageId) -> RolecallResult<()> {
        self.http
            .delete_message_reactions(
                conversions::to_channel(channel),
                conversions::to_message(message),
            )
            .await
            .map_err(|e| {
                ServiceError::new(ServiceErrorKind::ReactionFailed(e.to_string())).into()
            })
    }

    async fn remove_user_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        user: UserId,
        emoji: &ReactionEmoji,
    ) -> RolecallResult<()> {
        self.http
            .delete_reaction(
                conversions::to_channel(channel),
                conversions::to_message(message),
                conversions::to_user(user),
                &conversions::to_reaction(emoji),
            )
            .await
            .map_err(|e| {
                ServiceError::new(ServiceErrorKind::ReactionFailed(e.to_string())).into()
            })
    }

    async fn delete_message(&self, channel: ChannelId, message: MessageId) -> RolecallResult<()> {
        self.http
            .delete_message(
                conversions::to_channel(channel),
                conversions::to_message(message),
                None,
            )
            .await
            .map_err(|e| ServiceError::new(ServiceErrorKind::Api(e.to_string())).into())
    }
}
