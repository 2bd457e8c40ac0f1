//! Controller lifecycle and reaction dispatch for the Rolecall bot.
//!
//! A controller is a bot-managed message whose numbered reaction buttons let
//! guild members self-assign mutually exclusive roles within a category.
//! This crate is the core subsystem: the [`Controller`] press state machine,
//! the [`ControllerManager`] registry with creation, sync, and
//! reconciliation, and the [`RoleService`] contract they consume.
//!
//! # Architecture
//!
//! The manager owns all controllers and is constructed once at process start
//! by the composition root. The gateway adapter normalizes platform events
//! and calls the manager's `dispatch_reaction` / `handle_role_change` /
//! `handle_message_delete` hooks directly; tests inject synthetic events the
//! same way, with no platform dependency.
//!
//! # Concurrency
//!
//! No per-controller mutual exclusion is enforced. Two reaction events
//! against the same controller, or a reaction interleaved with an in-flight
//! sync, may run concurrently if the host runtime parallelizes event
//! handling; the cooldown gate narrows but does not close that window.
//! Calls into the role service and the store are not retried here — a caller
//! that needs resilience wraps the service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod controller;
mod manager;
mod render;
mod service;

pub use controller::Controller;
pub use manager::{ControllerManager, MAX_BUTTONS, controller_path};
pub use render::{CATEGORY_EMPTIED_TEXT, ControllerContent, category_emptied, role_listing};
pub use service::RoleService;
