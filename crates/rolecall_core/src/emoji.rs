//! The controller button glyph catalog.
//!
//! Buttons are unicode keycap digits. Position *i* (1-9) corresponds to the
//! *i*-th role of a category in guild order; position 0 exists in the catalog
//! but is never attached to a controller. The cancel glyph is a separate,
//! dedicated button that clears all of a member's category roles.

use serde::{Deserialize, Serialize};

/// All valid number glyphs for controller buttons, in positional order.
pub const NUMBER_GLYPHS: [&str; 10] = [
    "0\u{20e3}",
    "1\u{20e3}",
    "2\u{20e3}",
    "3\u{20e3}",
    "4\u{20e3}",
    "5\u{20e3}",
    "6\u{20e3}",
    "7\u{20e3}",
    "8\u{20e3}",
    "9\u{20e3}",
];

/// The dedicated cancel button glyph.
pub const CANCEL_GLYPH: &str = "\u{274c}";

/// Static ordered catalog mapping button position to numeric glyph and back.
///
/// Pure lookup table; no side effects.
///
/// # Examples
///
/// ```
/// use rolecall_core::EmojiCatalog;
///
/// assert_eq!(EmojiCatalog::glyph(1), Some("1\u{20e3}"));
/// assert_eq!(EmojiCatalog::position("9\u{20e3}"), Some(9));
/// assert_eq!(EmojiCatalog::position("thumbsup"), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmojiCatalog;

impl EmojiCatalog {
    /// The glyph at the given position, if within the catalog.
    pub fn glyph(position: usize) -> Option<&'static str> {
        NUMBER_GLYPHS.get(position).copied()
    }

    /// The position of a glyph within the catalog, if it is a number glyph.
    pub fn position(name: &str) -> Option<usize> {
        NUMBER_GLYPHS.iter().position(|glyph| *glyph == name)
    }

    /// Whether the glyph is the cancel button.
    pub fn is_cancel(name: &str) -> bool {
        name == CANCEL_GLYPH
    }
}

/// An emoji as carried by a reaction event: a unicode name, plus an id for
/// guild-custom emoji. Custom emoji never match the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReactionEmoji {
    /// Emoji name; for unicode emoji this is the glyph itself.
    pub name: String,
    /// Custom emoji id, absent for unicode emoji.
    pub id: Option<u64>,
}

impl ReactionEmoji {
    /// A unicode emoji.
    pub fn unicode(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
        }
    }

    /// A guild-custom emoji.
    pub fn custom(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            id: Some(id),
        }
    }

    /// The cancel button emoji.
    pub fn cancel() -> Self {
        Self::unicode(CANCEL_GLYPH)
    }

    /// The number glyph for a button position, if within the catalog.
    pub fn number(position: usize) -> Option<Self> {
        EmojiCatalog::glyph(position).map(Self::unicode)
    }

    /// Whether this is the cancel button.
    pub fn is_cancel(&self) -> bool {
        self.id.is_none() && EmojiCatalog::is_cancel(&self.name)
    }

    /// Catalog position of this emoji, if it is a unicode number glyph.
    pub fn position(&self) -> Option<usize> {
        if self.id.is_some() {
            return None;
        }
        EmojiCatalog::position(&self.name)
    }
}
