//! Shared test double for the role service.

// Not every test binary exercises every helper
#![allow(dead_code)]

use rolecall_controller::{ControllerContent, RoleService};
use rolecall_core::{
    ChannelId, GuildId, Member, MessageId, ReactionAdded, ReactionEmoji, Role, RoleId, UserId,
};
use rolecall_error::{RolecallResult, ServiceError, ServiceErrorKind};
use std::collections::HashMap;
use std::sync::Mutex;

/// The bot's own account in every test.
pub const BOT_USER: UserId = UserId::new(1);

/// Default guild and channel used by the tests.
pub const GUILD: GuildId = GuildId::new(100);
pub const CHANNEL: ChannelId = ChannelId::new(200);

#[derive(Default)]
struct MockState {
    roles: Vec<Role>,
    members: HashMap<UserId, Vec<RoleId>>,
    messages: HashMap<(ChannelId, MessageId), ControllerContent>,
    bot_reactions: HashMap<(ChannelId, MessageId), Vec<ReactionEmoji>>,
    stripped: Vec<(MessageId, UserId, ReactionEmoji)>,
    posted: usize,
    next_message: u64,
}

/// In-memory role service double that records every call the controllers
/// make against it.
#[derive(Default)]
pub struct MockRoleService {
    state: Mutex<MockState>,
}

impl MockRoleService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the guild role list (already in guild order).
    pub fn set_roles(&self, roles: Vec<Role>) {
        self.state.lock().unwrap().roles = roles;
    }

    /// Seed a member's role set.
    pub fn set_member_roles(&self, user: UserId, roles: Vec<RoleId>) {
        self.state.lock().unwrap().members.insert(user, roles);
    }

    /// A member's current roles.
    pub fn member_roles(&self, user: UserId) -> Vec<RoleId> {
        self.state
            .lock()
            .unwrap()
            .members
            .get(&user)
            .cloned()
            .unwrap_or_default()
    }

    /// How many controller messages have been posted.
    pub fn posted_count(&self) -> usize {
        self.state.lock().unwrap().posted
    }

    /// The bot-side reactions currently on a message, in attach order.
    pub fn reactions_on(&self, channel: ChannelId, message: MessageId) -> Vec<ReactionEmoji> {
        self.state
            .lock()
            .unwrap()
            .bot_reactions
            .get(&(channel, message))
            .cloned()
            .unwrap_or_default()
    }

    /// The rendered content of a message, if it exists.
    pub fn content_of(&self, channel: ChannelId, message: MessageId) -> Option<ControllerContent> {
        self.state
            .lock()
            .unwrap()
            .messages
            .get(&(channel, message))
            .cloned()
    }

    /// Reactions stripped from users so far.
    pub fn stripped(&self) -> Vec<(MessageId, UserId, ReactionEmoji)> {
        self.state.lock().unwrap().stripped.clone()
    }

    /// Make a message id resolvable without posting through the service.
    pub fn seed_message(&self, channel: ChannelId, message: MessageId) {
        self.state
            .lock()
            .unwrap()
            .messages
            .insert((channel, message), ControllerContent::new("seeded", ""));
    }

    /// Drop a message, as if deleted externally.
    pub fn drop_message(&self, channel: ChannelId, message: MessageId) {
        let mut state = self.state.lock().unwrap();
        state.messages.remove(&(channel, message));
        state.bot_reactions.remove(&(channel, message));
    }
}

#[async_trait::async_trait]
impl RoleService for MockRoleService {
    async fn current_user(&self) -> RolecallResult<UserId> {
        Ok(BOT_USER)
    }

    async fn guild_roles(&self, _guild: GuildId) -> RolecallResult<Vec<Role>> {
        Ok(self.state.lock().unwrap().roles.clone())
    }

    async fn member(&self, _guild: GuildId, user: UserId) -> RolecallResult<Member> {
        let roles = self
            .state
            .lock()
            .unwrap()
            .members
            .get(&user)
            .cloned()
            .unwrap_or_default();
        Ok(Member::new(user, roles))
    }

    async fn add_member_role(
        &self,
        _guild: GuildId,
        user: UserId,
        role: RoleId,
    ) -> RolecallResult<()> {
        let mut state = self.state.lock().unwrap();
        let roles = state.members.entry(user).or_default();
        if !roles.contains(&role) {
            roles.push(role);
        }
        Ok(())
    }

    async fn remove_member_role(
        &self,
        _guild: GuildId,
        user: UserId,
        role: RoleId,
    ) -> RolecallResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(roles) = state.members.get_mut(&user) {
            roles.retain(|held| *held != role);
        }
        Ok(())
    }

    async fn message_exists(
        &self,
        channel: ChannelId,
        message: MessageId,
    ) -> RolecallResult<bool> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .messages
            .contains_key(&(channel, message)))
    }

    async fn send_controller(
        &self,
        channel: ChannelId,
        content: &ControllerContent,
    ) -> RolecallResult<MessageId> {
        let mut state = self.state.lock().unwrap();
        state.next_message += 1;
        let message = MessageId::new(1000 + state.next_message);
        state.messages.insert((channel, message), content.clone());
        state.posted += 1;
        Ok(message)
    }

    async fn edit_controller(
        &self,
        channel: ChannelId,
        message: MessageId,
        content: &ControllerContent,
    ) -> RolecallResult<()> {
        let mut state = self.state.lock().unwrap();
        match state.messages.get_mut(&(channel, message)) {
            Some(existing) => {
                *existing = content.clone();
                Ok(())
            }
            None => Err(ServiceError::new(ServiceErrorKind::MessageSendFailed(
                format!("no message {message}"),
            ))
            .into()),
        }
    }

    async fn add_reaction(
        &self,
        channel: ChannelId,
        message: MessageId,
        emoji: &ReactionEmoji,
    ) -> RolecallResult<()> {
        self.state
            .lock()
            .unwrap()
            .bot_reactions
            .entry((channel, message))
            .or_default()
            .push(emoji.clone());
        Ok(())
    }

    async fn clear_reactions(&self, channel: ChannelId, message: MessageId) -> RolecallResult<()> {
        self.state
            .lock()
            .unwrap()
            .bot_reactions
            .remove(&(channel, message));
        Ok(())
    }

    async fn remove_user_reaction(
        &self,
        _channel: ChannelId,
        message: MessageId,
        user: UserId,
        emoji: &ReactionEmoji,
    ) -> RolecallResult<()> {
        self.state
            .lock()
            .unwrap()
            .stripped
            .push((message, user, emoji.clone()));
        Ok(())
    }

    async fn delete_message(&self, channel: ChannelId, message: MessageId) -> RolecallResult<()> {
        self.drop_message(channel, message);
        Ok(())
    }
}

/// A reaction-added event from a regular member.
pub fn press(
    channel: ChannelId,
    message: MessageId,
    user: UserId,
    emoji: ReactionEmoji,
) -> ReactionAdded {
    ReactionAdded {
        channel_id: channel,
        message_id: message,
        user_id: user,
        emoji,
        actor_is_bot: false,
    }
}
