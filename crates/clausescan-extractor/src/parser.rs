//! Parse LLM output into clause entries
//!
//! Models often wrap the JSON they were asked for in prose or code fences.
//! The parser carves out everything from the first `[` to the last `]` and
//! parses that slice. It does not look for a balanced pair: a stray `]` in
//! trailing prose widens the slice and the parse then fails loudly instead of
//! returning something half-right.

use crate::error::ExtractorError;
use crate::types::SchemaMode;
use clausescan_domain::ClauseEntry;
use serde_json::Value;
use tracing::{debug, warn};

/// Keys a well-formed clause object carries
const CLAUSE_FIELDS: [&str; 3] = ["clause", "category", "explanation"];

/// Extract the clause array from a raw model reply
///
/// Elements are returned exactly as parsed, in order, without schema checks.
pub fn extract_clauses(raw: &str) -> Result<Vec<ClauseEntry>, ExtractorError> {
    parse_llm_response(raw, SchemaMode::Permissive)
}

/// Extract the clause array, optionally requiring every element to be a record
pub fn parse_llm_response(raw: &str, mode: SchemaMode) -> Result<Vec<ClauseEntry>, ExtractorError> {
    let json_str = locate_array(raw)?;

    let entries: Vec<ClauseEntry> = serde_json::from_str(json_str).map_err(|e| {
        warn!(error = %e, slice_len = json_str.len(), "Model reply is not valid JSON");
        ExtractorError::InvalidJson(e)
    })?;

    if mode == SchemaMode::Strict {
        check_schema(&entries)?;
    }

    debug!(entries = entries.len(), "Parsed model reply");
    Ok(entries)
}

/// Slice from the first `[` through the last `]`
fn locate_array(raw: &str) -> Result<&str, ExtractorError> {
    match (raw.find('['), raw.rfind(']')) {
        // A last `]` before the first `[` leaves nothing to parse.
        (Some(start), Some(end)) => Ok(raw.get(start..=end).unwrap_or("")),
        _ => {
            warn!(reply_len = raw.len(), "No JSON array found in model reply");
            Err(ExtractorError::NoArrayFound)
        }
    }
}

fn check_schema(entries: &[ClauseEntry]) -> Result<(), ExtractorError> {
    for (index, entry) in entries.iter().enumerate() {
        if let ClauseEntry::Other(value) = entry {
            let reason = describe_mismatch(value);
            warn!(index, reason = %reason, "Element is not a clause record");
            return Err(ExtractorError::SchemaMismatch { index, reason });
        }
    }
    Ok(())
}

fn describe_mismatch(value: &Value) -> String {
    let obj = match value.as_object() {
        Some(obj) => obj,
        None => return format!("expected an object, found {}", json_type(value)),
    };

    for field in CLAUSE_FIELDS {
        match obj.get(field) {
            None => return format!("missing field '{}'", field),
            Some(v) if !v.is_string() => {
                return format!("field '{}' is {}, not a string", field, json_type(v))
            }
            Some(_) => {}
        }
    }

    match obj.keys().find(|key| !CLAUSE_FIELDS.contains(&key.as_str())) {
        Some(extra) => format!("unexpected field '{}'", extra),
        None => "not a clause record".to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: text without an opening bracket never parses
        #[test]
        fn test_no_open_bracket_never_parses(raw in "[^\\[]*") {
            prop_assert!(matches!(extract_clauses(&raw), Err(ExtractorError::NoArrayFound)));
        }

        /// Property: parsing is a pure function of its input
        #[test]
        fn test_extract_clauses_is_idempotent(raw in ".*") {
            let first = extract_clauses(&raw);
            let second = extract_clauses(&raw);
            match (first, second) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
                _ => prop_assert!(false, "results differ"),
            }
        }

        /// Property: surrounding prose without brackets does not change the result
        #[test]
        fn test_prose_wrapping_is_ignored(prefix in "[^\\[\\]]*", suffix in "[^\\[\\]]*") {
            let array = r#"[{"clause":"A","category":"Payment","explanation":"B"}]"#;
            let wrapped = format!("{}{}{}", prefix, array, suffix);
            prop_assert_eq!(extract_clauses(&wrapped).unwrap(), extract_clauses(array).unwrap());
        }
    }
}
