//! ETags for room reads, derived from the store version.

/// Format: `"room-{id}-v{version}"` (quoted, as HTTP requires).
pub fn room_etag(room_id: u64, version: u64) -> String {
    format!(r#""room-{room_id}-v{version}""#)
}

/// Whether an `If-None-Match` header value matches `etag`.
///
/// Handles the `*` wildcard and comma-separated lists.
pub fn if_none_match_hits(header: &str, etag: &str) -> bool {
    header.trim() == "*" || header.split(',').map(str::trim).any(|tag| tag == etag)
}
