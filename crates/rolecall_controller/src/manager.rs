//! Controller registry, creation, sync, and reconciliation.

use crate::{Controller, RoleService, render};
use rolecall_core::{
    Category, ChannelId, GuildId, MessageDeleted, MessageId, ReactionAdded, ReactionEmoji, Role,
    RoleChanged,
};
use rolecall_error::RolecallResult;
use rolecall_store::ControllerStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

/// A controller carries at most nine role buttons; roles beyond the ninth
/// are silently excluded. Capacity limit of the glyph catalog, not an error.
pub const MAX_BUTTONS: usize = 9;

/// The store path for one controller entry.
pub fn controller_path(guild: GuildId, channel: ChannelId, message: MessageId) -> String {
    format!("{guild}.{channel}.{message}")
}

/// Owns every live controller and keeps the registry, the store, and the
/// platform consistent.
///
/// Constructed once at process start and held by the composition root; the
/// gateway adapter feeds it normalized events. The registry is keyed by the
/// composite `(channel, message)` pair and is always derivable from the
/// persisted store.
pub struct ControllerManager {
    service: Arc<dyn RoleService>,
    store: Arc<dyn ControllerStore>,
    controllers: RwLock<HashMap<(ChannelId, MessageId), Arc<Controller>>>,
}

impl ControllerManager {
    /// Create a manager over the given service and store.
    pub fn new(service: Arc<dyn RoleService>, store: Arc<dyn ControllerStore>) -> Self {
        Self {
            service,
            store,
            controllers: RwLock::new(HashMap::new()),
        }
    }

    /// Initialize the store and rebuild the registry from it.
    ///
    /// Each persisted entry is probed against the live platform; an entry
    /// whose message is gone is purged from the store and skipped. Failure
    /// is per-entry and never aborts the rest of the load.
    #[instrument(skip(self))]
    pub async fn init(&self) -> RolecallResult<()> {
        self.store.init().await?;

        let mut loaded = 0usize;
        for guild_key in self.store.keys("").await? {
            for channel_key in self.store.keys(&guild_key).await? {
                let channel_path = format!("{guild_key}.{channel_key}");
                for message_key in self.store.keys(&channel_path).await? {
                    let path = format!("{channel_path}.{message_key}");
                    let Some(category) = self.store.get(&path).await? else {
                        continue;
                    };

                    let ids = parse_ids(&guild_key, &channel_key, &message_key);
                    let Some((guild, channel, message)) = ids else {
                        warn!(path, "purging malformed controller entry");
                        self.store.remove(&path).await?;
                        continue;
                    };

                    let reachable = self
                        .service
                        .message_exists(channel, message)
                        .await
                        .unwrap_or(false);
                    if !reachable {
                        info!(path, "controller message gone, purging entry");
                        self.store.remove(&path).await?;
                        continue;
                    }

                    let controller = Arc::new(Controller::new(
                        guild,
                        channel,
                        message,
                        Category::new(category),
                    ));
                    self.controllers
                        .write()
                        .await
                        .insert((channel, message), controller);
                    loaded += 1;
                }
            }
        }

        info!(controllers = loaded, "Initialized.");
        Ok(())
    }

    /// Create a controller for a category in the given channel.
    ///
    /// Idempotent per (guild, category): if one already exists anywhere in
    /// the guild it is returned unchanged and nothing is posted. A category
    /// with zero matching roles yields `Ok(None)` and posts nothing; the
    /// caller decides the user-facing messaging.
    #[instrument(skip(self), fields(guild = %guild, channel = %channel, category = %category))]
    pub async fn create(
        &self,
        guild: GuildId,
        channel: ChannelId,
        category: Category,
    ) -> RolecallResult<Option<Arc<Controller>>> {
        if let Some(existing) = self.controller_for(guild, &category).await {
            debug!("controller already exists for category");
            return Ok(Some(existing));
        }

        let roles = self.category_roles(guild, &category).await?;
        if roles.is_empty() {
            debug!("category has no roles, nothing to create");
            return Ok(None);
        }

        let content = render::role_listing(&category, &roles);
        let message = self.service.send_controller(channel, &content).await?;

        self.attach_buttons(channel, message, roles.len()).await?;

        self.store
            .set(&controller_path(guild, channel, message), category.as_str())
            .await?;

        let controller = Arc::new(Controller::new(guild, channel, message, category));
        self.controllers
            .write()
            .await
            .insert((channel, message), controller.clone());

        info!(message_id = %message, "created controller");
        Ok(Some(controller))
    }

    /// Re-render a controller against the current live role set.
    ///
    /// Clears every reaction, edits the embed, and re-attaches one button
    /// per current role plus cancel. A category left with zero roles gets
    /// the emptied body and a cancel button only. Reactions arriving while
    /// the resync is in flight may target a button that no longer exists and
    /// are silently dropped.
    #[instrument(skip(self, controller), fields(message_id = %controller.message_id(), category = %controller.category()))]
    pub async fn sync(&self, controller: &Controller) -> RolecallResult<()> {
        let channel = *controller.channel_id();
        let message = *controller.message_id();
        let roles = self
            .category_roles(*controller.guild_id(), controller.category())
            .await?;

        self.service.clear_reactions(channel, message).await?;

        let content = if roles.is_empty() {
            render::category_emptied(controller.category())
        } else {
            render::role_listing(controller.category(), &roles)
        };
        self.service
            .edit_controller(channel, message, &content)
            .await?;

        self.attach_buttons(channel, message, roles.len()).await?;

        info!(roles = roles.len(), "synced controller");
        Ok(())
    }

    /// The live controller for a category in a guild, if any.
    ///
    /// Linear scan over the registry; acceptable at the expected scale of
    /// tens of controllers per guild.
    pub async fn controller_for(
        &self,
        guild: GuildId,
        category: &Category,
    ) -> Option<Arc<Controller>> {
        self.controllers
            .read()
            .await
            .values()
            .find(|controller| {
                *controller.guild_id() == guild && controller.category() == category
            })
            .cloned()
    }

    /// Whether a live controller exists for a category in a guild.
    pub async fn controller_exists(&self, guild: GuildId, category: &Category) -> bool {
        self.controller_for(guild, category).await.is_some()
    }

    /// Dispatch a reaction event to the controller owning its message.
    ///
    /// Events that match no controller are dropped silently — reactions on
    /// unrelated messages are expected, not an error. A failure inside the
    /// press handler is logged here so one bad press cannot block unrelated
    /// events.
    #[instrument(skip(self, event), fields(channel = %event.channel_id, message = %event.message_id))]
    pub async fn dispatch_reaction(&self, event: &ReactionAdded) {
        let controller = {
            let registry = self.controllers.read().await;
            registry.get(&(event.channel_id, event.message_id)).cloned()
        };

        let Some(controller) = controller else {
            debug!("reaction matches no controller, dropping");
            return;
        };

        if let Err(e) = controller.handle(event, self.service.as_ref()).await {
            warn!(error = %e, "press handling failed");
        }
    }

    /// Reconcile controllers after a role create, rename, or delete.
    ///
    /// Categories are derived from the old and/or new role name via the
    /// `"<category>:"` prefix grammar. A rename that does not change the
    /// prefix is not reconciled; a rename that moves a role between two
    /// categories resyncs both when both have live controllers.
    #[instrument(skip(self, event), fields(guild = %event.guild_id))]
    pub async fn handle_role_change(&self, event: &RoleChanged) -> RolecallResult<()> {
        let old_category = event.old_name.as_deref().and_then(Category::from_role_name);
        let new_category = event.new_name.as_deref().and_then(Category::from_role_name);

        // Rename that leaves the prefix unchanged needs no reconciliation
        if event.old_name.is_some() && event.new_name.is_some() && old_category == new_category {
            return Ok(());
        }

        let mut affected: Vec<Category> = Vec::new();
        for category in [old_category, new_category].into_iter().flatten() {
            if !affected.contains(&category) {
                affected.push(category);
            }
        }

        for category in affected {
            if let Some(controller) = self.controller_for(event.guild_id, &category).await {
                debug!(category = %category, "role change touches live controller");
                self.sync(&controller).await?;
            }
        }
        Ok(())
    }

    /// Reconcile after a message deletion.
    ///
    /// If the message backed a controller, its store entry and registry
    /// entry are removed; later reactions against the message id become
    /// unmatched events and are dropped by dispatch.
    #[instrument(skip(self, event), fields(channel = %event.channel_id, message = %event.message_id))]
    pub async fn handle_message_delete(&self, event: &MessageDeleted) -> RolecallResult<()> {
        let path = controller_path(event.guild_id, event.channel_id, event.message_id);
        if !self.store.exists(&path).await? {
            return Ok(());
        }

        self.store.remove(&path).await?;
        self.controllers
            .write()
            .await
            .remove(&(event.channel_id, event.message_id));

        info!("controller message deleted, registry entry purged");
        Ok(())
    }

    /// Attach one numbered button per role position, then cancel.
    async fn attach_buttons(
        &self,
        channel: ChannelId,
        message: MessageId,
        count: usize,
    ) -> RolecallResult<()> {
        for position in 1..=count.min(MAX_BUTTONS) {
            if let Some(emoji) = ReactionEmoji::number(position) {
                self.service.add_reaction(channel, message, &emoji).await?;
            }
        }
        self.service
            .add_reaction(channel, message, &ReactionEmoji::cancel())
            .await
    }

    /// The first `MAX_BUTTONS` roles of a category, in guild order.
    async fn category_roles(
        &self,
        guild: GuildId,
        category: &Category,
    ) -> RolecallResult<Vec<Role>> {
        let mut roles: Vec<Role> = self
            .service
            .guild_roles(guild)
            .await?
            .into_iter()
            .filter(|role| category.matches(&role.name))
            .collect();
        roles.truncate(MAX_BUTTONS);
        Ok(roles)
    }
}

fn parse_ids(guild: &str, channel: &str, message: &str) -> Option<(GuildId, ChannelId, MessageId)> {
    Some((
        GuildId::new(guild.parse().ok()?),
        ChannelId::new(channel.parse().ok()?),
        MessageId::new(message.parse().ok()?),
    ))
}
