//! # Payload Codec
//!
//! Turns the roster into the string carried across navigation, and back.
//!
//! Two interchangeable strategies:
//!
//! - [`Encoding::Plain`]: names joined with `", "`. One-way; the results
//!   screen shows the joined string as-is.
//! - [`Encoding::Json`]: a JSON array of `{"name": ...}` objects that
//!   round-trips exactly through [`decode`].
//!
//! The decode side treats the payload as untrusted: anything that fails to
//! parse yields an empty list rather than an error. The results screen must
//! always have something to render.

use clap::ValueEnum;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::roster::Entry;

/// Separator for the plain variant.
const PLAIN_SEPARATOR: &str = ", ";

/// Which payload format a deployment uses. Picked once at startup
/// (config file, `ROSTER_ENCODING`, or `--encoding`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Comma-space joined names. Display only, not decodable.
    Plain,
    /// JSON array of name objects. Round-trips through `decode`.
    #[default]
    Json,
}

impl Encoding {
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Plain => "plain",
            Encoding::Json => "json",
        }
    }

    /// Encode the full entry list into a navigation payload.
    /// An empty list encodes to `""` (plain) or `"[]"` (json).
    pub fn encode(&self, entries: &[Entry]) -> String {
        match self {
            Encoding::Plain => entries
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>()
                .join(PLAIN_SEPARATOR),
            Encoding::Json => serde_json::to_string(entries).unwrap_or_else(|e| {
                // Serializing plain strings cannot realistically fail, but the
                // payload contract is "never raise", so degrade to empty.
                warn!("Failed to encode roster payload: {e}");
                String::new()
            }),
        }
    }
}

/// Parse a JSON payload back into an ordered entry list.
///
/// Any parse failure (malformed text, wrong shape, empty string) yields an
/// empty list. This is the only decoder; plain payloads are displayed raw
/// and never pass through here.
pub fn decode(text: &str) -> Vec<Entry> {
    match serde_json::from_str::<Vec<Entry>>(text) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Payload did not parse as an entry list, rendering empty: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<Entry> {
        names.iter().map(|n| Entry::new(*n)).collect()
    }

    #[test]
    fn test_plain_encode_joins_with_comma_space() {
        let list = entries(&["Tanu", "Tina", "Tono"]);
        assert_eq!(Encoding::Plain.encode(&list), "Tanu, Tina, Tono");
    }

    #[test]
    fn test_plain_encode_empty_list_is_empty_string() {
        assert_eq!(Encoding::Plain.encode(&[]), "");
    }

    #[test]
    fn test_json_round_trip() {
        let list = entries(&["Tanu", "Tina", "Tono", "Budi"]);
        let payload = Encoding::Json.encode(&list);
        assert_eq!(decode(&payload), list);
    }

    #[test]
    fn test_json_round_trip_single_entry() {
        let list = entries(&["A"]);
        let payload = Encoding::Json.encode(&list);
        assert_eq!(payload, r#"[{"name":"A"}]"#);
        assert_eq!(decode(&payload), list);
    }

    #[test]
    fn test_json_round_trip_preserves_awkward_names() {
        // Names containing the plain separator and JSON-reserved characters
        // must survive the structured variant unchanged.
        let list = entries(&["a, b", "quo\"te", "  padded  "]);
        let payload = Encoding::Json.encode(&list);
        assert_eq!(decode(&payload), list);
    }

    #[test]
    fn test_decode_malformed_input_yields_empty() {
        assert!(decode("").is_empty());
        assert!(decode("not a valid payload").is_empty());
        assert!(decode("{broken").is_empty());
    }

    #[test]
    fn test_decode_wrong_shape_yields_empty() {
        // Valid JSON, wrong shape.
        assert!(decode("{\"name\":\"A\"}").is_empty());
        assert!(decode("[\"A\",\"B\"]").is_empty());
        assert!(decode("[{\"other\":\"A\"}]").is_empty());
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode("[]").is_empty());
    }

    #[test]
    fn test_encoding_labels() {
        assert_eq!(Encoding::Plain.label(), "plain");
        assert_eq!(Encoding::Json.label(), "json");
        assert_eq!(Encoding::default(), Encoding::Json);
    }
}
