//! Controller message rendering.
//!
//! A controller's visual representation is an embed: a category title and a
//! numbered role listing. Rendering is pure; the service decides how the
//! content maps onto the platform's embed type.

use derive_getters::Getters;
use rolecall_core::{Category, Role};

/// Body text shown when a category has lost all of its roles.
pub const CATEGORY_EMPTIED_TEXT: &str = "This category has had all of its roles removed.";

/// Rendered controller content: embed title and description.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ControllerContent {
    /// Embed title.
    title: String,
    /// Embed description.
    description: String,
}

impl ControllerContent {
    /// Create rendered content.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Render the numbered role listing for a category.
///
/// Positions are 1-based and follow the order of `roles`; the caller has
/// already applied guild ordering and the button capacity limit.
pub fn role_listing(category: &Category, roles: &[Role]) -> ControllerContent {
    let mut description = String::from(
        "Choose a role number to be assigned that role.\n\n\
         You may only choose one role from this category at a time \
         and may only change roles once every 10 minutes.\n\n```ldif\n",
    );

    for (index, role) in roles.iter().enumerate() {
        description.push_str(&format!(
            "{}: {}\n",
            index + 1,
            category.strip_prefix(&role.name)
        ));
    }

    description.push_str("\n```");
    ControllerContent::new(format!("Category: {}", category), description)
}

/// Render the replacement body for a category with no remaining roles.
pub fn category_emptied(category: &Category) -> ControllerContent {
    ControllerContent::new(format!("Category: {}", category), CATEGORY_EMPTIED_TEXT)
}
