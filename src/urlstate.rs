//! Deep-link query parameter codec.
//!
//! One query parameter encodes filter state so a gallery view can be
//! restored without prior navigation:
//!
//! - Folder-scoped views use `?filter=<label>`; an absent or empty
//!   parameter means "no filter".
//! - Tag-scoped views use `?tags=<a,b,c>` (comma-joined). On read, any
//!   token not present in the current tag index is silently discarded —
//!   stale and hand-edited links degrade to a smaller or empty selection,
//!   never to an error.
//!
//! Values are percent-encoded on write. On read, `%XX` sequences and `+`
//! (as space) are decoded; malformed escapes pass through verbatim.
//!
//! Every filter change writes a fresh query string; in the generated
//! static site each change is an ordinary link navigation and therefore
//! its own history entry.

use std::collections::BTreeSet;

/// Parameter name for the folder-scoped filter.
pub const FOLDER_PARAM: &str = "filter";
/// Parameter name for the tag-scoped filter.
pub const TAGS_PARAM: &str = "tags";

/// Split a raw query string into decoded key/value pairs.
///
/// Accepts an optional leading `?`. Pairs without `=` get an empty value.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode_component(k), decode_component(v)),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

/// Read the folder-scoped filter from a query string.
pub fn folder_from_query(query: &str) -> Option<String> {
    raw_param(query, FOLDER_PARAM)
        .map(|v| decode_component(&v))
        .filter(|v| !v.is_empty())
}

/// Serialize the folder-scoped filter to a query string body.
///
/// No filter serializes to the empty string (the parameter is omitted
/// entirely, not written empty).
pub fn folder_to_query(active: Option<&str>) -> String {
    match active {
        Some(label) if !label.is_empty() => {
            format!("{FOLDER_PARAM}={}", encode_component(label))
        }
        _ => String::new(),
    }
}

/// Read the tag-scoped filter from a query string, keeping only tokens
/// present in the tag index.
pub fn tags_from_query(query: &str, index: &[String]) -> BTreeSet<String> {
    let Some(raw) = raw_param(query, TAGS_PARAM) else {
        return BTreeSet::new();
    };
    raw.split(',')
        .map(decode_component)
        .filter(|token| !token.is_empty() && index.iter().any(|t| t == token))
        .collect()
}

/// Serialize the tag-scoped filter to a query string body.
pub fn tags_to_query(active: &BTreeSet<String>) -> String {
    if active.is_empty() {
        return String::new();
    }
    let joined: Vec<String> = active.iter().map(|t| encode_component(t)).collect();
    format!("{TAGS_PARAM}={}", joined.join(","))
}

/// Render a query string body as a root-relative deep link.
pub fn deep_link(query: &str) -> String {
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    }
}

/// The raw (still-encoded) value of a named parameter, if present.
///
/// Kept encoded so comma-joined values can be split before decoding.
fn raw_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        (decode_component(k) == name).then(|| v.to_string())
    })
}

/// Percent-encode a query component. Unreserved characters
/// (`A-Z a-z 0-9 - _ . ~`) pass through; everything else becomes `%XX`.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Percent-decode a query component; `+` decodes to space and malformed
/// `%` escapes pass through verbatim.
pub fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match (hex_val(bytes.get(i + 1)), hex_val(bytes.get(i + 2))) {
                (Some(hi), Some(lo)) => {
                    out.push(hi << 4 | lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(byte: Option<&u8>) -> Option<u8> {
    match byte.copied() {
        Some(b @ b'0'..=b'9') => Some(b - b'0'),
        Some(b @ b'a'..=b'f') => Some(b - b'a' + 10),
        Some(b @ b'A'..=b'F') => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    // =========================================================================
    // Folder parameter
    // =========================================================================

    #[test]
    fn folder_round_trips() {
        let query = folder_to_query(Some("Cherry"));
        assert_eq!(query, "filter=Cherry");
        assert_eq!(folder_from_query(&query).as_deref(), Some("Cherry"));
    }

    #[test]
    fn no_folder_serializes_to_empty_query() {
        assert_eq!(folder_to_query(None), "");
        assert_eq!(folder_from_query(""), None);
    }

    #[test]
    fn empty_folder_value_means_no_filter() {
        assert_eq!(folder_from_query("filter="), None);
    }

    #[test]
    fn folder_value_is_percent_decoded() {
        assert_eq!(
            folder_from_query("filter=Las%20Vegas").as_deref(),
            Some("Las Vegas")
        );
        assert_eq!(
            folder_from_query("filter=Las+Vegas").as_deref(),
            Some("Las Vegas")
        );
    }

    #[test]
    fn folder_label_with_space_is_encoded() {
        assert_eq!(folder_to_query(Some("Las Vegas")), "filter=Las%20Vegas");
    }

    // =========================================================================
    // Tags parameter
    // =========================================================================

    #[test]
    fn tags_round_trip() {
        let idx = index(&["Korea", "Seoul", "Culture"]);
        let active: BTreeSet<String> = ["Korea", "Seoul"].iter().map(|t| t.to_string()).collect();

        let query = tags_to_query(&active);
        assert_eq!(query, "tags=Korea,Seoul");
        assert_eq!(tags_from_query(&query, &idx), active);
    }

    #[test]
    fn unknown_tokens_are_silently_discarded() {
        let idx = index(&["Korea", "Seoul"]);
        let parsed = tags_from_query("tags=Korea,Nonexistent", &idx);
        let expected: BTreeSet<String> = ["Korea"].iter().map(|t| t.to_string()).collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn all_stale_tokens_degrade_to_no_filter() {
        let idx = index(&["Korea"]);
        assert!(tags_from_query("tags=Atlantis,Mu", &idx).is_empty());
    }

    #[test]
    fn absent_tags_param_means_no_filter() {
        let idx = index(&["Korea"]);
        assert!(tags_from_query("filter=Cherry", &idx).is_empty());
        assert!(tags_from_query("", &idx).is_empty());
    }

    #[test]
    fn encoded_tokens_decode_before_validation() {
        let idx = index(&["Las Vegas", "Cherry"]);
        let parsed = tags_from_query("tags=Las%20Vegas,Cherry", &idx);
        assert_eq!(parsed.len(), 2);
        assert!(parsed.contains("Las Vegas"));
    }

    #[test]
    fn empty_selection_serializes_to_empty_query() {
        assert_eq!(tags_to_query(&BTreeSet::new()), "");
    }

    // =========================================================================
    // Generic parsing and encoding
    // =========================================================================

    #[test]
    fn parse_query_accepts_leading_question_mark() {
        let pairs = parse_query("?filter=Cherry&x=1");
        assert_eq!(
            pairs,
            vec![
                ("filter".to_string(), "Cherry".to_string()),
                ("x".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn malformed_escape_passes_through() {
        assert_eq!(decode_component("100%zz"), "100%zz");
        assert_eq!(decode_component("trailing%"), "trailing%");
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("San Diego"), "San%20Diego");
    }

    #[test]
    fn deep_link_formats() {
        assert_eq!(deep_link(""), "/");
        assert_eq!(deep_link("filter=Cherry"), "/?filter=Cherry");
    }
}
