/// Group identifier codec — encode raw group IDs into prefixed hex tokens and back.
///
/// All functions are pure. Encoding is total; decoding fails only when the
/// payload is not condensed hex. A missing separator is not an error: the
/// whole input is taken as the payload, which keeps pre-prefix identifiers
/// readable.
///
/// Legacy closed groups are stored double-encoded: the encoded identifier's
/// UTF-8 bytes are encoded a second time as a legacy closed group payload.

use thiserror::Error;

use crate::group::prefix::{
    LEGACY_CLOSED_GROUP_PREFIX, OPEN_GROUP_INBOX_PREFIX, OPEN_GROUP_PREFIX, SEPARATOR,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroupIdError {
    #[error("Malformed hex payload: {0}")]
    MalformedHex(#[from] hex::FromHexError),

    #[error("Unknown group identifier prefix: {0}")]
    UnknownPrefix(String),

    #[error("Inbox composite has {0} field(s), expected 3")]
    InboxFieldsMissing(usize),
}

pub type Result<T> = std::result::Result<T, GroupIdError>;

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

pub fn encode_open_group_id(group_id: &[u8]) -> String {
    with_prefix(OPEN_GROUP_PREFIX, group_id)
}

pub fn encode_legacy_closed_group_id(group_id: &[u8]) -> String {
    with_prefix(LEGACY_CLOSED_GROUP_PREFIX, group_id)
}

/// Encode an open-group inbox address from its parts.
///
/// The composite `server!public_key!session_id` is hex-encoded as the payload.
/// Parts are not validated: a `!` inside `server` or `public_key` shifts the
/// fields, and [`decode_open_group_inbox_session_id`] will return the wrong one.
pub fn encode_open_group_inbox_id(server: &str, public_key: &str, session_id: &str) -> String {
    let composite = format!("{server}{SEPARATOR}{public_key}{SEPARATOR}{session_id}");
    encode_open_group_inbox_id_bytes(composite.as_bytes())
}

/// Encode an already-assembled inbox composite.
pub fn encode_open_group_inbox_id_bytes(inbox_id: &[u8]) -> String {
    with_prefix(OPEN_GROUP_INBOX_PREFIX, inbox_id)
}

fn with_prefix(prefix: &str, payload: &[u8]) -> String {
    let mut encoded = String::with_capacity(prefix.len() + payload.len() * 2);
    encoded.push_str(prefix);
    encoded.push_str(&hex::encode(payload));
    encoded
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Payload portion of an encoded identifier: everything after the first `!`,
/// or the whole input when there is none.
fn split_payload(group_id: &str) -> &str {
    match group_id.split_once(SEPARATOR) {
        Some((_, payload)) => payload,
        None => {
            log::debug!(
                "Group ID {}.. has no separator, decoding as bare hex",
                preview(group_id)
            );
            group_id
        }
    }
}

pub fn decode_to_bytes(group_id: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(split_payload(group_id))?)
}

/// Decode and read the payload as text. Invalid UTF-8 is replaced with U+FFFD.
pub fn decode_to_string(group_id: &str) -> Result<String> {
    let bytes = decode_to_bytes(group_id)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Session ID component of an open-group inbox identifier.
///
/// Falls back to the whole decoded composite when it has fewer than three
/// `!`-separated fields.
pub fn decode_open_group_inbox_session_id(group_id: &str) -> Result<String> {
    let composite = decode_to_string(group_id)?;
    match composite.splitn(3, SEPARATOR).nth(2) {
        Some(session_id) => Ok(session_id.to_string()),
        None => {
            log::warn!(
                "Inbox composite {}.. has no session ID field",
                preview(&composite)
            );
            Ok(composite)
        }
    }
}

// ---------------------------------------------------------------------------
// Double encoding (legacy closed group storage)
// ---------------------------------------------------------------------------

pub fn double_encode_closed_group_id(group_id: &[u8]) -> String {
    let inner = encode_legacy_closed_group_id(group_id);
    encode_legacy_closed_group_id(inner.as_bytes())
}

/// Double-encode a group public key given as condensed hex.
pub fn double_encode_closed_group_id_hex(group_public_key: &str) -> Result<String> {
    let raw = hex::decode(group_public_key)?;
    Ok(double_encode_closed_group_id(&raw))
}

pub fn double_decode_closed_group_id(group_id: &str) -> Result<Vec<u8>> {
    let inner = decode_to_string(group_id)?;
    decode_to_bytes(&inner)
}

/// Double-decode and return the raw ID as condensed hex.
pub fn double_decode_closed_group_id_hex(group_id: &str) -> Result<String> {
    Ok(hex::encode(double_decode_closed_group_id(group_id)?))
}

/// First few characters of an identifier, for log lines.
pub(crate) fn preview(s: &str) -> &str {
    match s.char_indices().nth(16) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const GROUP_KEY: [u8; 33] =
        hex!("05d8f5c1a3e7b9024c6f18e2a7d3b5c9e1f0a2b4c6d8e0f1a3b5c7d9e1f3a5b7c9");

    #[test]
    fn test_encode_open_group_id() {
        assert_eq!(
            encode_open_group_id(&hex!("deadbeef")),
            "__loki_public_chat_group__!deadbeef"
        );
        assert_eq!(encode_open_group_id(&[]), "__loki_public_chat_group__!");
    }

    #[test]
    fn test_encode_legacy_closed_group_id_is_lowercase() {
        let encoded = encode_legacy_closed_group_id(&[0xAB, 0xCD]);
        assert_eq!(encoded, "__textsecure_group__!abcd");
    }

    #[test]
    fn test_decode_roundtrip() {
        let encoded = encode_legacy_closed_group_id(&GROUP_KEY);
        assert_eq!(decode_to_bytes(&encoded).unwrap(), GROUP_KEY.to_vec());

        let encoded = encode_open_group_id(&GROUP_KEY);
        assert_eq!(decode_to_bytes(&encoded).unwrap(), GROUP_KEY.to_vec());
    }

    #[test]
    fn test_decode_without_separator() {
        assert_eq!(
            decode_to_bytes("deadbeef").unwrap(),
            vec![0xDE, 0xAD, 0xBE, 0xEF]
        );
        assert_eq!(decode_to_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_splits_on_first_separator_only() {
        // Anything after the first '!' is payload, so a second '!' is a hex error
        let err = decode_to_bytes("__textsecure_group__!ab!cde").unwrap_err();
        assert_eq!(
            err,
            GroupIdError::MalformedHex(hex::FromHexError::InvalidHexCharacter { c: '!', index: 2 })
        );
    }

    #[test]
    fn test_decode_malformed_hex() {
        let err = decode_to_bytes("__loki_public_chat_group__!zz").unwrap_err();
        assert!(matches!(
            err,
            GroupIdError::MalformedHex(hex::FromHexError::InvalidHexCharacter { c: 'z', .. })
        ));

        let err = decode_to_bytes("__loki_public_chat_group__!abc").unwrap_err();
        assert_eq!(err, GroupIdError::MalformedHex(hex::FromHexError::OddLength));
    }

    #[test]
    fn test_decode_accepts_uppercase() {
        assert_eq!(
            decode_to_bytes("__textsecure_group__!DEADBEEF").unwrap(),
            hex!("deadbeef").to_vec()
        );
    }

    #[test]
    fn test_decode_to_string() {
        let encoded = encode_open_group_id(b"hello");
        assert_eq!(decode_to_string(&encoded).unwrap(), "hello");
    }

    #[test]
    fn test_decode_to_string_lossy() {
        let decoded = decode_to_string("__textsecure_group__!ff61").unwrap();
        assert_eq!(decoded, "\u{FFFD}a");
    }

    #[test]
    fn test_inbox_session_id() {
        let encoded = encode_open_group_inbox_id("s.example.org", "abcd", "ff00");
        assert!(encoded.starts_with(OPEN_GROUP_INBOX_PREFIX));
        assert_eq!(decode_open_group_inbox_session_id(&encoded).unwrap(), "ff00");
        assert_eq!(
            decode_to_string(&encoded).unwrap(),
            "s.example.org!abcd!ff00"
        );
    }

    #[test]
    fn test_inbox_session_id_fallback() {
        let encoded = encode_open_group_inbox_id_bytes(b"s.example.org!abcd");
        assert_eq!(
            decode_open_group_inbox_session_id(&encoded).unwrap(),
            "s.example.org!abcd"
        );
    }

    #[test]
    fn test_inbox_session_id_keeps_trailing_separators() {
        let encoded = encode_open_group_inbox_id_bytes(b"a!b!c!d");
        assert_eq!(decode_open_group_inbox_session_id(&encoded).unwrap(), "c!d");
    }

    #[test]
    fn test_inbox_separator_in_server_misparses() {
        let encoded = encode_open_group_inbox_id("s!x", "abcd", "ff00");
        assert_eq!(
            decode_open_group_inbox_session_id(&encoded).unwrap(),
            "abcd!ff00"
        );
    }

    #[test]
    fn test_double_encode_layers() {
        let once = encode_legacy_closed_group_id(&[0x01]);
        let twice = double_encode_closed_group_id(&[0x01]);
        assert_eq!(twice, encode_legacy_closed_group_id(once.as_bytes()));
        assert_eq!(decode_to_string(&twice).unwrap(), once);
    }

    #[test]
    fn test_double_roundtrip() {
        let encoded = double_encode_closed_group_id(&GROUP_KEY);
        assert_eq!(
            double_decode_closed_group_id(&encoded).unwrap(),
            GROUP_KEY.to_vec()
        );
    }

    #[test]
    fn test_double_hex_variants() {
        let key_hex = hex::encode(GROUP_KEY);
        let encoded = double_encode_closed_group_id_hex(&key_hex).unwrap();
        assert_eq!(encoded, double_encode_closed_group_id(&GROUP_KEY));
        assert_eq!(double_decode_closed_group_id_hex(&encoded).unwrap(), key_hex);
    }

    #[test]
    fn test_double_encode_hex_rejects_invalid() {
        assert!(matches!(
            double_encode_closed_group_id_hex("05zz"),
            Err(GroupIdError::MalformedHex(_))
        ));
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(preview("short"), "short");
        assert_eq!(preview("__textsecure_group__!00").len(), 16);
    }
}
