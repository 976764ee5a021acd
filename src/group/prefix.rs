/// Wire prefixes for encoded group identifiers.
///
/// Membership is decided by string-prefix matching alone; nothing here
/// decodes the payload.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Field separator between the prefix and the hex payload, and between the
/// fields of an open-group inbox composite.
pub const SEPARATOR: char = '!';

/// Legacy closed group identifier prefix.
pub const LEGACY_CLOSED_GROUP_PREFIX: &str = "__textsecure_group__!";

/// Open group (community) identifier prefix.
pub const OPEN_GROUP_PREFIX: &str = "__loki_public_chat_group__!";

/// Open-group inbox (community direct message) identifier prefix.
pub const OPEN_GROUP_INBOX_PREFIX: &str = "__open_group_inbox__!";

// ---------------------------------------------------------------------------
// GroupKind
// ---------------------------------------------------------------------------

/// The category an encoded identifier belongs to, as read from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GroupKind {
    LegacyClosedGroup,
    OpenGroup,
    OpenGroupInbox,
}

impl GroupKind {
    pub const ALL: [GroupKind; 3] = [
        GroupKind::LegacyClosedGroup,
        GroupKind::OpenGroup,
        GroupKind::OpenGroupInbox,
    ];

    /// Literal prefix, separator included.
    pub fn prefix(&self) -> &'static str {
        match self {
            GroupKind::LegacyClosedGroup => LEGACY_CLOSED_GROUP_PREFIX,
            GroupKind::OpenGroup => OPEN_GROUP_PREFIX,
            GroupKind::OpenGroupInbox => OPEN_GROUP_INBOX_PREFIX,
        }
    }

    /// Classify an encoded identifier. `None` for unprefixed input.
    pub fn from_encoded(group_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| group_id.starts_with(kind.prefix()))
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroupKind::LegacyClosedGroup => "legacy_closed_group",
            GroupKind::OpenGroup => "open_group",
            GroupKind::OpenGroupInbox => "open_group_inbox",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// True for any of the known prefixes.
pub fn is_encoded_group(group_id: &str) -> bool {
    GroupKind::from_encoded(group_id).is_some()
}

pub fn is_open_group(group_id: &str) -> bool {
    group_id.starts_with(OPEN_GROUP_PREFIX)
}

pub fn is_open_group_inbox(group_id: &str) -> bool {
    group_id.starts_with(OPEN_GROUP_INBOX_PREFIX)
}

pub fn is_legacy_closed_group(group_id: &str) -> bool {
    group_id.starts_with(LEGACY_CLOSED_GROUP_PREFIX)
}
