//! Tests for the controller registry, creation, sync, and reconciliation.

mod common;

use common::{CHANNEL, GUILD, MockRoleService, press};
use rolecall_controller::{
    CATEGORY_EMPTIED_TEXT, ControllerManager, MAX_BUTTONS, controller_path,
};
use rolecall_core::{
    CANCEL_GLYPH, Category, ChannelId, MessageDeleted, MessageId, ReactionEmoji, Role, RoleChanged,
    RoleId, UserId,
};
use rolecall_store::{ControllerStore, MemoryStore};
use std::sync::Arc;

const ALICE: UserId = UserId::new(10);

fn manager_with(service: Arc<MockRoleService>) -> (ControllerManager, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (
        ControllerManager::new(service, store.clone()),
        store,
    )
}

fn color_roles() -> Vec<Role> {
    vec![
        Role::new(RoleId::new(71), "color:Red"),
        Role::new(RoleId::new(72), "color:Blue"),
        Role::new(RoleId::new(99), "moderator"),
    ]
}

#[tokio::test]
async fn test_create_posts_message_with_numbered_buttons_and_cancel() {
    let service = Arc::new(MockRoleService::new());
    service.set_roles(color_roles());
    let (manager, store) = manager_with(service.clone());

    let controller = manager
        .create(GUILD, CHANNEL, Category::new("color"))
        .await
        .unwrap()
        .expect("category has roles");

    let message = *controller.message_id();
    assert_eq!(
        service.reactions_on(CHANNEL, message),
        vec![
            ReactionEmoji::unicode("1\u{20e3}"),
            ReactionEmoji::unicode("2\u{20e3}"),
            ReactionEmoji::cancel(),
        ]
    );

    let content = service.content_of(CHANNEL, message).unwrap();
    assert_eq!(content.title(), "Category: color");
    assert!(content.description().contains("1: Red"));
    assert!(content.description().contains("2: Blue"));

    // Mapping persisted for restart recovery
    let path = controller_path(GUILD, CHANNEL, message);
    assert_eq!(store.get(&path).await.unwrap(), Some("color".to_string()));
}

#[tokio::test]
async fn test_create_is_idempotent_per_guild_and_category() {
    let service = Arc::new(MockRoleService::new());
    service.set_roles(color_roles());
    let (manager, _store) = manager_with(service.clone());

    let first = manager
        .create(GUILD, CHANNEL, Category::new("color"))
        .await
        .unwrap()
        .unwrap();
    // Second create, even aimed at another channel, returns the original
    let second = manager
        .create(GUILD, ChannelId::new(201), Category::new("color"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(first.message_id(), second.message_id());
    assert_eq!(service.posted_count(), 1);
}

#[tokio::test]
async fn test_create_with_no_matching_roles_posts_nothing() {
    let service = Arc::new(MockRoleService::new());
    service.set_roles(vec![Role::new(RoleId::new(99), "moderator")]);
    let (manager, _store) = manager_with(service.clone());

    let result = manager
        .create(GUILD, CHANNEL, Category::new("color"))
        .await
        .unwrap();

    assert!(result.is_none());
    assert_eq!(service.posted_count(), 0);
}

#[tokio::test]
async fn test_create_caps_buttons_at_nine_roles() {
    let service = Arc::new(MockRoleService::new());
    let roles: Vec<Role> = (0..12)
        .map(|i| Role::new(RoleId::new(70 + i), format!("color:Shade{i}")))
        .collect();
    service.set_roles(roles);
    let (manager, _store) = manager_with(service.clone());

    let controller = manager
        .create(GUILD, CHANNEL, Category::new("color"))
        .await
        .unwrap()
        .unwrap();

    let reactions = service.reactions_on(CHANNEL, *controller.message_id());
    // Nine digit buttons plus cancel
    assert_eq!(reactions.len(), MAX_BUTTONS + 1);
    assert_eq!(reactions.last().unwrap().name, CANCEL_GLYPH);

    let content = service
        .content_of(CHANNEL, *controller.message_id())
        .unwrap();
    assert!(content.description().contains("9: Shade8"));
    assert!(!content.description().contains("10:"));
}

#[tokio::test]
async fn test_sync_on_emptied_category_leaves_cancel_only() {
    let service = Arc::new(MockRoleService::new());
    service.set_roles(color_roles());
    let (manager, _store) = manager_with(service.clone());

    let controller = manager
        .create(GUILD, CHANNEL, Category::new("color"))
        .await
        .unwrap()
        .unwrap();

    // All category roles disappear externally
    service.set_roles(vec![Role::new(RoleId::new(99), "moderator")]);
    manager.sync(&controller).await.unwrap();

    let message = *controller.message_id();
    assert_eq!(
        service.content_of(CHANNEL, message).unwrap().description(),
        CATEGORY_EMPTIED_TEXT
    );
    assert_eq!(
        service.reactions_on(CHANNEL, message),
        vec![ReactionEmoji::cancel()]
    );
}

#[tokio::test]
async fn test_init_purges_entries_whose_message_is_gone() {
    let service = Arc::new(MockRoleService::new());
    service.set_roles(color_roles());
    let store = Arc::new(MemoryStore::new());

    // Two persisted controllers; only one message still resolves
    let live = MessageId::new(501);
    let gone = MessageId::new(502);
    service.seed_message(CHANNEL, live);
    store
        .set(&controller_path(GUILD, CHANNEL, live), "color")
        .await
        .unwrap();
    store
        .set(&controller_path(GUILD, CHANNEL, gone), "region")
        .await
        .unwrap();

    let manager = ControllerManager::new(service.clone(), store.clone());
    manager.init().await.unwrap();

    assert!(manager.controller_exists(GUILD, &Category::new("color")).await);
    assert!(!manager.controller_exists(GUILD, &Category::new("region")).await);
    assert!(
        !store
            .exists(&controller_path(GUILD, CHANNEL, gone))
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_dispatch_routes_presses_to_the_owning_controller() {
    let service = Arc::new(MockRoleService::new());
    service.set_roles(color_roles());
    let (manager, _store) = manager_with(service.clone());

    let controller = manager
        .create(GUILD, CHANNEL, Category::new("color"))
        .await
        .unwrap()
        .unwrap();
    let message = *controller.message_id();

    // Spec worked example: a fresh member presses glyph 2
    let event = press(CHANNEL, message, ALICE, ReactionEmoji::unicode("2\u{20e3}"));
    manager.dispatch_reaction(&event).await;

    assert_eq!(service.member_roles(ALICE), vec![RoleId::new(72)]);
    assert_eq!(service.stripped().len(), 1);
}

#[tokio::test]
async fn test_unmatched_reaction_is_dropped_silently() {
    let service = Arc::new(MockRoleService::new());
    service.set_roles(color_roles());
    let (manager, _store) = manager_with(service.clone());

    let event = press(
        CHANNEL,
        MessageId::new(9999),
        ALICE,
        ReactionEmoji::unicode("1\u{20e3}"),
    );
    manager.dispatch_reaction(&event).await;

    assert!(service.member_roles(ALICE).is_empty());
    assert!(service.stripped().is_empty());
}

#[tokio::test]
async fn test_deleting_backing_message_unregisters_the_controller() {
    let service = Arc::new(MockRoleService::new());
    service.set_roles(color_roles());
    let (manager, store) = manager_with(service.clone());

    let controller = manager
        .create(GUILD, CHANNEL, Category::new("color"))
        .await
        .unwrap()
        .unwrap();
    let message = *controller.message_id();

    service.drop_message(CHANNEL, message);
    manager
        .handle_message_delete(&MessageDeleted {
            guild_id: GUILD,
            channel_id: CHANNEL,
            message_id: message,
        })
        .await
        .unwrap();

    assert!(!manager.controller_exists(GUILD, &Category::new("color")).await);
    assert!(
        !store
            .exists(&controller_path(GUILD, CHANNEL, message))
            .await
            .unwrap()
    );

    // A later reaction on the dead message mutates nothing
    let event = press(CHANNEL, message, ALICE, ReactionEmoji::unicode("1\u{20e3}"));
    manager.dispatch_reaction(&event).await;
    assert!(service.member_roles(ALICE).is_empty());
}

#[tokio::test]
async fn test_role_create_resyncs_the_affected_controller() {
    let service = Arc::new(MockRoleService::new());
    service.set_roles(color_roles());
    let (manager, _store) = manager_with(service.clone());

    let controller = manager
        .create(GUILD, CHANNEL, Category::new("color"))
        .await
        .unwrap()
        .unwrap();

    let mut roles = color_roles();
    roles.insert(2, Role::new(RoleId::new(73), "color:Green"));
    service.set_roles(roles);

    manager
        .handle_role_change(&RoleChanged {
            guild_id: GUILD,
            old_name: None,
            new_name: Some("color:Green".to_string()),
        })
        .await
        .unwrap();

    let content = service
        .content_of(CHANNEL, *controller.message_id())
        .unwrap();
    assert!(content.description().contains("3: Green"));
}

#[tokio::test]
async fn test_rename_within_category_is_not_reconciled() {
    let service = Arc::new(MockRoleService::new());
    service.set_roles(color_roles());
    let (manager, _store) = manager_with(service.clone());

    let controller = manager
        .create(GUILD, CHANNEL, Category::new("color"))
        .await
        .unwrap()
        .unwrap();
    let before = service
        .content_of(CHANNEL, *controller.message_id())
        .unwrap();

    service.set_roles(vec![
        Role::new(RoleId::new(71), "color:Crimson"),
        Role::new(RoleId::new(72), "color:Blue"),
    ]);
    manager
        .handle_role_change(&RoleChanged {
            guild_id: GUILD,
            old_name: Some("color:Red".to_string()),
            new_name: Some("color:Crimson".to_string()),
        })
        .await
        .unwrap();

    // Prefix unchanged: the controller keeps its stale listing until a sync
    let after = service
        .content_of(CHANNEL, *controller.message_id())
        .unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_rename_across_categories_resyncs_both_controllers() {
    let service = Arc::new(MockRoleService::new());
    service.set_roles(vec![
        Role::new(RoleId::new(71), "color:Red"),
        Role::new(RoleId::new(72), "color:Blue"),
        Role::new(RoleId::new(81), "region:EU"),
    ]);
    let (manager, _store) = manager_with(service.clone());

    let color = manager
        .create(GUILD, CHANNEL, Category::new("color"))
        .await
        .unwrap()
        .unwrap();
    let region = manager
        .create(GUILD, CHANNEL, Category::new("region"))
        .await
        .unwrap()
        .unwrap();

    // color:Red becomes region:Red
    service.set_roles(vec![
        Role::new(RoleId::new(72), "color:Blue"),
        Role::new(RoleId::new(81), "region:EU"),
        Role::new(RoleId::new(71), "region:Red"),
    ]);
    manager
        .handle_role_change(&RoleChanged {
            guild_id: GUILD,
            old_name: Some("color:Red".to_string()),
            new_name: Some("region:Red".to_string()),
        })
        .await
        .unwrap();

    let color_content = service.content_of(CHANNEL, *color.message_id()).unwrap();
    assert!(color_content.description().contains("1: Blue"));
    assert!(!color_content.description().contains("Red"));

    let region_content = service.content_of(CHANNEL, *region.message_id()).unwrap();
    assert!(region_content.description().contains("2: Red"));
}

#[tokio::test]
async fn test_role_delete_resyncs_and_unprefixed_roles_are_ignored() {
    let service = Arc::new(MockRoleService::new());
    service.set_roles(color_roles());
    let (manager, _store) = manager_with(service.clone());

    let controller = manager
        .create(GUILD, CHANNEL, Category::new("color"))
        .await
        .unwrap()
        .unwrap();

    // Deleting an unprefixed role changes nothing
    manager
        .handle_role_change(&RoleChanged {
            guild_id: GUILD,
            old_name: Some("moderator".to_string()),
            new_name: None,
        })
        .await
        .unwrap();

    service.set_roles(vec![
        Role::new(RoleId::new(72), "color:Blue"),
        Role::new(RoleId::new(99), "moderator"),
    ]);
    manager
        .handle_role_change(&RoleChanged {
            guild_id: GUILD,
            old_name: Some("color:Red".to_string()),
            new_name: None,
        })
        .await
        .unwrap();

    let content = service
        .content_of(CHANNEL, *controller.message_id())
        .unwrap();
    assert!(content.description().contains("1: Blue"));
    assert!(!content.description().contains("Red"));
}
