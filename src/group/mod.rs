/// Group identifier system — prefixed, hex-encoded string tokens.
///
/// An encoded group identifier is `<prefix><hex(payload)>`, where each prefix
/// ends in the `!` separator. Decoding splits on the first `!` only and treats
/// an unseparated string as a bare hex payload, so identifiers stored before
/// the prefix scheme existed still decode.
///
/// # Module structure
/// - `prefix` — wire prefixes, `GroupKind`, prefix predicates
/// - `codec` — encode/decode, double-encoding, inbox session lookup, errors
/// - `ids` — `EncodedGroupId`, `GroupType`, `OpenGroupInbox`
/// - `members` — config member map (admins first, never downgraded)
pub mod codec;
pub mod ids;
pub mod members;
pub mod prefix;

// Re-export core types for convenience
pub use codec::{
    decode_open_group_inbox_session_id, decode_to_bytes, decode_to_string,
    double_decode_closed_group_id, double_decode_closed_group_id_hex,
    double_encode_closed_group_id, double_encode_closed_group_id_hex,
    encode_legacy_closed_group_id, encode_open_group_id, encode_open_group_inbox_id,
    encode_open_group_inbox_id_bytes, GroupIdError, Result,
};
pub use ids::{encode_group_id, EncodedGroupId, GroupType, OpenGroupInbox};
#[cfg(feature = "serde")]
pub use members::member_map_to_json;
pub use members::create_config_member_map;
pub use prefix::{
    is_encoded_group, is_legacy_closed_group, is_open_group, is_open_group_inbox, GroupKind,
    LEGACY_CLOSED_GROUP_PREFIX, OPEN_GROUP_INBOX_PREFIX, OPEN_GROUP_PREFIX, SEPARATOR,
};
