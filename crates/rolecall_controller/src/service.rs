//! Role service trait definition.

use crate::ControllerContent;
use rolecall_core::{ChannelId, GuildId, Member, MessageId, ReactionEmoji, Role, RoleId, UserId};
use rolecall_error::RolecallResult;

/// The platform contract consumed by controllers and the manager.
///
/// Implementations talk to the chat service; the production backend drives
/// the Discord HTTP API, and tests substitute an in-memory double. Calls may
/// block or fail; nothing here retries.
#[async_trait::async_trait]
pub trait RoleService: Send + Sync {
    /// The bot's own user id, so its button reactions can be told apart from
    /// member presses.
    async fn current_user(&self) -> RolecallResult<UserId>;

    /// All roles of a guild, in the guild's role ordering.
    async fn guild_roles(&self, guild: GuildId) -> RolecallResult<Vec<Role>>;

    /// Resolve a member and their current role set.
    async fn member(&self, guild: GuildId, user: UserId) -> RolecallResult<Member>;

    /// Grant a role to a member.
    async fn add_member_role(
        &self,
        guild: GuildId,
        user: UserId,
        role: RoleId,
    ) -> RolecallResult<()>;

    /// Revoke a role from a member.
    async fn remove_member_role(
        &self,
        guild: GuildId,
        user: UserId,
        role: RoleId,
    ) -> RolecallResult<()>;

    /// Whether a message is still reachable. Used when rebuilding the
    /// registry to detect controllers whose message was deleted while the
    /// bot was offline.
    async fn message_exists(
        &self,
        channel: ChannelId,
        message: MessageId,
    ) -> RolecallResult<bool>;

    /// Post a rendered controller message, returning its id.
    async fn send_controller(
        &self,
        channel: ChannelId,
        content: &ControllerContent,
    ) -> RolecallResult<MessageId>;

    /// Replace the rendered content of an existing controller message.
    async fn edit_controller(
        &self,
        channel: ChannelId,
        message: MessageId,
        content: &ControllerContent,
    ) -> RolecallResult<()>;

    /// Attach one of the bot's button reactions to a message.
    async fn add_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        emoji: &ReactionEmoji,
    ) -> RolecallResult<()>;

    /// Remove every reaction from a message.
    async fn clear_reactions(&self, channel: ChannelId, message: MessageId) -> RolecallResult<()>;

    /// Remove a single user's reaction from a message.
    async fn remove_user_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        user: UserId,
        emoji: &ReactionEmoji,
    ) -> RolecallResult<()>;

    /// Delete a message. Used by the admin commands to clean up their own
    /// invocations and notices.
    async fn delete_message(&self, channel: ChannelId, message: MessageId) -> RolecallResult<()>;
}
