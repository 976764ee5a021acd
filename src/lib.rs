//! # Shield Group Codec
//!
//! **Stable string identifiers for groups.**
//!
//! Every group the messenger knows about is keyed by an opaque string token:
//! a fixed type prefix, a `!` separator and the condensed hex encoding of the
//! group's raw identifier bytes. This crate owns that wire format.
//!
//! - **Legacy closed groups** (`__textsecure_group__!…`), including the
//!   double-encoded form kept in storage
//! - **Open groups** (`__loki_public_chat_group__!…`)
//! - **Open-group inboxes** (`__open_group_inbox__!…`), whose payload is itself a
//!   `server!publicKey!sessionId` triple
//! - **Config member maps** (admins and members flattened into one ordered map)
//!
//! ## Quick Start
//!
//! ```rust
//! use shield_group_codec::group::{decode_to_bytes, encode_open_group_id, is_open_group};
//!
//! let encoded = encode_open_group_id(b"lobby");
//! assert!(is_open_group(&encoded));
//! assert_eq!(decode_to_bytes(&encoded).unwrap(), b"lobby");
//! ```
//!
//! ## Architecture
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`group::prefix`] | Wire prefixes, group kind classification, prefix predicates |
//! | [`group::codec`] | Encode, decode, double-encode, inbox session lookup |
//! | [`group::ids`] | `EncodedGroupId` newtype, `GroupType` dispatch, typed inbox triple |
//! | [`group::members`] | Admin/member map for group configuration |
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | Yes | Serde impls for identifiers, kinds and member maps (adds `serde_json`) |

#![allow(
    clippy::empty_line_after_doc_comments,
    clippy::doc_lazy_continuation,
    clippy::inherent_to_string
)]

// ── Public modules ──────────────────────────────────────────────────────────

/// Group identifier encoding: prefixes, codec, typed identifiers, member maps.
pub mod group;

// ── Re-exports for convenience ──────────────────────────────────────────────

pub use group::{
    create_config_member_map, decode_open_group_inbox_session_id, decode_to_bytes,
    decode_to_string, double_decode_closed_group_id, double_decode_closed_group_id_hex,
    double_encode_closed_group_id, double_encode_closed_group_id_hex, encode_group_id,
    encode_legacy_closed_group_id, encode_open_group_id, encode_open_group_inbox_id,
    encode_open_group_inbox_id_bytes, is_encoded_group, is_legacy_closed_group, is_open_group,
    is_open_group_inbox, EncodedGroupId, GroupIdError, GroupKind, GroupType, OpenGroupInbox,
};

// ── Library metadata ────────────────────────────────────────────────────────

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version string.
pub fn version() -> &'static str {
    VERSION
}

// ── Tests ───────────────────────────────────────────────────────────────────
