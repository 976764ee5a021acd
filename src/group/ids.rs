/// Typed group identifiers.
///
/// - `EncodedGroupId`: an encoded identifier known to carry one of the three prefixes
/// - `GroupType`: the group type carried on an incoming group context
/// - `OpenGroupInbox`: the `server!public_key!session_id` inbox triple

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::group::codec::{
    decode_to_bytes, decode_to_string, encode_legacy_closed_group_id, encode_open_group_id,
    encode_open_group_inbox_id, preview, GroupIdError, Result,
};
use crate::group::prefix::{GroupKind, SEPARATOR};

// ---------------------------------------------------------------------------
// GroupType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupType {
    /// Legacy closed group.
    #[default]
    Signal,
    /// Open group (community).
    PublicChat,
}

impl GroupType {
    pub fn from_string(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "PUBLIC_CHAT" => GroupType::PublicChat,
            _ => GroupType::Signal,
        }
    }

    pub fn to_string(&self) -> String {
        match self {
            GroupType::Signal => "SIGNAL".to_string(),
            GroupType::PublicChat => "PUBLIC_CHAT".to_string(),
        }
    }
}

/// Encode a group ID according to its group type. Anything that is not a
/// public chat is a legacy closed group.
pub fn encode_group_id(group_type: GroupType, group_id: &[u8]) -> String {
    match group_type {
        GroupType::PublicChat => encode_open_group_id(group_id),
        GroupType::Signal => encode_legacy_closed_group_id(group_id),
    }
}

// ---------------------------------------------------------------------------
// EncodedGroupId
// ---------------------------------------------------------------------------

/// An encoded group identifier with a recognised prefix.
///
/// Serializes as its plain string form. Parsing rejects unprefixed strings;
/// use the free decode functions for legacy input without a prefix.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct EncodedGroupId {
    kind: GroupKind,
    value: String,
}

impl EncodedGroupId {
    pub fn legacy_closed_group(group_id: &[u8]) -> Self {
        EncodedGroupId {
            kind: GroupKind::LegacyClosedGroup,
            value: encode_legacy_closed_group_id(group_id),
        }
    }

    pub fn open_group(group_id: &[u8]) -> Self {
        EncodedGroupId {
            kind: GroupKind::OpenGroup,
            value: encode_open_group_id(group_id),
        }
    }

    pub fn open_group_inbox(inbox: &OpenGroupInbox) -> Self {
        EncodedGroupId {
            kind: GroupKind::OpenGroupInbox,
            value: inbox.encode(),
        }
    }

    pub fn from_group_type(group_type: GroupType, group_id: &[u8]) -> Self {
        match group_type {
            GroupType::PublicChat => Self::open_group(group_id),
            GroupType::Signal => Self::legacy_closed_group(group_id),
        }
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }

    /// Hex payload, prefix stripped.
    pub fn payload_hex(&self) -> &str {
        &self.value[self.kind.prefix().len()..]
    }

    pub fn decode_bytes(&self) -> Result<Vec<u8>> {
        decode_to_bytes(&self.value)
    }

    pub fn decode_string(&self) -> Result<String> {
        decode_to_string(&self.value)
    }
}

impl FromStr for EncodedGroupId {
    type Err = GroupIdError;

    fn from_str(s: &str) -> Result<Self> {
        match GroupKind::from_encoded(s) {
            Some(kind) => Ok(EncodedGroupId {
                kind,
                value: s.to_string(),
            }),
            None => Err(GroupIdError::UnknownPrefix(preview(s).to_string())),
        }
    }
}

impl TryFrom<String> for EncodedGroupId {
    type Error = GroupIdError;

    fn try_from(value: String) -> Result<Self> {
        match GroupKind::from_encoded(&value) {
            Some(kind) => Ok(EncodedGroupId { kind, value }),
            None => Err(GroupIdError::UnknownPrefix(preview(&value).to_string())),
        }
    }
}

impl From<EncodedGroupId> for String {
    fn from(id: EncodedGroupId) -> Self {
        id.value
    }
}

impl AsRef<str> for EncodedGroupId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for EncodedGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedGroupId({}, {}..)", self.kind, preview(self.payload_hex()))
    }
}

impl fmt::Display for EncodedGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

// ---------------------------------------------------------------------------
// OpenGroupInbox
// ---------------------------------------------------------------------------

/// Address of a direct-message inbox on an open group server.
///
/// Fields are joined with `!` and not escaped, so `server` and `public_key`
/// must not contain `!` for `decode` to give back the same triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpenGroupInbox {
    pub server: String,
    pub public_key: String,
    /// Hex session ID of the recipient.
    pub session_id: String,
}

impl OpenGroupInbox {
    pub fn new(
        server: impl Into<String>,
        public_key: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Self {
        OpenGroupInbox {
            server: server.into(),
            public_key: public_key.into(),
            session_id: session_id.into(),
        }
    }

    pub fn encode(&self) -> String {
        encode_open_group_inbox_id(&self.server, &self.public_key, &self.session_id)
    }

    /// Parse an encoded inbox identifier into its three fields.
    pub fn decode(group_id: &str) -> Result<Self> {
        let composite = decode_to_string(group_id)?;
        let fields: Vec<&str> = composite.splitn(3, SEPARATOR).collect();
        match fields.as_slice() {
            [server, public_key, session_id] => {
                Ok(OpenGroupInbox::new(*server, *public_key, *session_id))
            }
            _ => Err(GroupIdError::InboxFieldsMissing(fields.len())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
