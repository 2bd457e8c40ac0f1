//! Role category names and the `"<category>:"` prefix grammar.

use serde::{Deserialize, Serialize};

/// A named grouping of roles sharing the `"<category>:"` name prefix.
///
/// Membership is a pure string predicate on the role name; no pattern
/// matching engine is involved.
///
/// # Examples
///
/// ```
/// use rolecall_core::Category;
///
/// let color = Category::new("color");
/// assert!(color.matches("color:Red"));
/// assert!(!color.matches("colorful"));
/// assert_eq!(color.strip_prefix("color:Red"), "Red");
/// assert_eq!(Category::from_role_name("color:Red"), Some(color));
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}", _0)]
pub struct Category(String);

impl Category {
    /// Create a category from its bare name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The bare category name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The required role-name prefix, `"<category>:"`.
    pub fn prefix(&self) -> String {
        format!("{}:", self.0)
    }

    /// Whether a role name belongs to this category.
    pub fn matches(&self, role_name: &str) -> bool {
        role_name
            .strip_prefix(self.0.as_str())
            .is_some_and(|rest| rest.starts_with(':'))
    }

    /// The role's display name with the category prefix removed.
    ///
    /// Returns the name unchanged when it does not carry the prefix.
    pub fn strip_prefix<'a>(&self, role_name: &'a str) -> &'a str {
        role_name
            .strip_prefix(self.0.as_str())
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(role_name)
    }

    /// Derive the category implied by a role name, if any.
    ///
    /// The grammar is everything before the first `':'`; a name without a
    /// colon, or with an empty head, implies no category.
    pub fn from_role_name(role_name: &str) -> Option<Self> {
        match role_name.split_once(':') {
            Some((head, _)) if !head.is_empty() => Some(Self::new(head)),
            _ => None,
        }
    }
}
