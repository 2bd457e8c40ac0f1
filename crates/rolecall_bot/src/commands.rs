//! Prefix commands for managing controllers.
//!
//! Two commands exist, both restricted to guild administrators:
//!
//! - `<prefix>new <category>` posts a controller for a category
//! - `<prefix>sync <category>` re-renders an existing controller
//!
//! The invoking message is deleted, and any feedback notice removes itself
//! after a short delay so controller channels stay clean.

use rolecall::{Category, ChannelId, ControllerManager, GuildId, RolecallResult};
use serenity::client::Context;
use serenity::model::channel::Message;
use serenity::model::id as discord;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const NOTICE_TTL: Duration = Duration::from_secs(10);

/// Handle an inbound message, running it as a command when it carries the
/// prefix. Non-command messages are ignored.
pub(crate) async fn handle_message(
    ctx: &Context,
    manager: &Arc<ControllerManager>,
    prefix: &str,
    msg: &Message,
) -> RolecallResult<()> {
    if msg.author.bot {
        return Ok(());
    }
    let Some(body) = msg.content.strip_prefix(prefix) else {
        return Ok(());
    };
    let Some(guild_id) = msg.guild_id else {
        return Ok(());
    };

    let (command, argument) = match body.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (body, ""),
    };
    if !matches!(command, "new" | "sync") {
        return Ok(());
    }

    if !is_admin(ctx, guild_id, msg).await? {
        debug!(user = %msg.author.id, command, "Non-administrator command attempt");
        return Ok(());
    }

    // The invocation itself is clutter in a controller channel.
    if let Err(e) = ctx.http.delete_message(msg.channel_id, msg.id, None).await {
        debug!(error = %e, "Failed to delete command invocation");
    }

    if argument.is_empty() {
        notice(ctx, msg.channel_id, format!("Usage: {prefix}{command} <category>")).await;
        return Ok(());
    }

    let guild = GuildId::new(guild_id.get());
    let channel = ChannelId::new(msg.channel_id.get());
    let category = Category::new(argument);

    match command {
        "new" => {
            if manager.controller_exists(guild, &category).await {
                notice(
                    ctx,
                    msg.channel_id,
                    format!("A controller for `{category}` already exists."),
                )
                .await;
                return Ok(());
            }
            match manager.create(guild, channel, category.clone()).await? {
                Some(_) => info!(%guild, %category, "Controller created"),
                None => {
                    notice(
                        ctx,
                        msg.channel_id,
                        format!("No roles found with the `{}` prefix.", category.prefix()),
                    )
                    .await;
                }
            }
        }
        "sync" => match manager.controller_for(guild, &category).await {
            Some(controller) => {
                manager.sync(&controller).await?;
                info!(%guild, %category, "Controller synchronized");
            }
            None => {
                notice(
                    ctx,
                    msg.channel_id,
                    format!("No controller exists for `{category}`."),
                )
                .await;
            }
        },
        _ => unreachable!(),
    }
    Ok(())
}

/// Whether the author owns the guild or holds a role with the administrator
/// permission.
async fn is_admin(
    ctx: &Context,
    guild_id: discord::GuildId,
    msg: &Message,
) -> RolecallResult<bool> {
    use rolecall::{ServiceError, ServiceErrorKind};

    let guild = guild_id.to_partial_guild(&ctx.http).await.map_err(|e| {
        ServiceError::new(ServiceErrorKind::Api(format!("Failed to fetch guild: {e}")))
    })?;
    if guild.owner_id == msg.author.id {
        return Ok(true);
    }

    let member = ctx
        .http
        .get_member(guild_id, msg.author.id)
        .await
        .map_err(|e| ServiceError::new(ServiceErrorKind::MemberFetchFailed(e.to_string())))?;
    Ok(member.roles.iter().any(|role_id| {
        guild
            .roles
            .get(role_id)
            .is_some_and(|role| role.permissions.administrator())
    }))
}

/// Post a short-lived feedback message.
async fn notice(ctx: &Context, channel: discord::ChannelId, text: String) {
    match channel.say(&ctx.http, text).await {
        Ok(message) => {
            let http = ctx.http.clone();
            tokio::spawn(async move {
                tokio::time::sleep(NOTICE_TTL).await;
                if let Err(e) = http.delete_message(channel, message.id, None).await {
                    debug!(error = %e, "Failed to delete notice");
                }
            });
        }
        Err(e) => warn!(error = %e, "Failed to send notice"),
    }
}
