//! Snowflake identifier newtypes.
//!
//! Discord snowflakes are 64-bit integers; each entity gets its own newtype
//! so guild, channel, message, user, and role IDs cannot be confused at call
//! sites.

use serde::{Deserialize, Serialize};

macro_rules! snowflake {
    ($(#[$doc:meta] $name:ident),* $(,)?) => {
        $(
            #[$doc]
            #[derive(
                Debug,
                Clone,
                Copy,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                Serialize,
                Deserialize,
                derive_more::Display,
            )]
            #[display("{}", _0)]
            pub struct $name(u64);

            impl $name {
                /// Wrap a raw snowflake value.
                pub const fn new(value: u64) -> Self {
                    Self(value)
                }

                /// Get the raw snowflake value.
                pub const fn get(self) -> u64 {
                    self.0
                }
            }
        )*
    };
}

snowflake! {
    /// Guild (server) identifier.
    GuildId,
    /// Text channel identifier.
    ChannelId,
    /// Message identifier.
    MessageId,
    /// User identifier.
    UserId,
    /// Role identifier.
    RoleId,
}
