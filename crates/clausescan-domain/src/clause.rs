//! Clause module - the unit of output produced by an analysis

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A critical clause identified in a document
///
/// `clause` is expected to be a verbatim excerpt of the source document,
/// `category` a short label such as "Liability" or "Payment", and
/// `explanation` a plain-language summary. None of this is enforced: the
/// fields hold whatever the model returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClauseRecord {
    /// Verbatim clause text
    pub clause: String,

    /// Short category label
    pub category: String,

    /// Plain-language explanation
    pub explanation: String,
}

impl ClauseRecord {
    /// Create a new clause record
    pub fn new(
        clause: impl Into<String>,
        category: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            clause: clause.into(),
            category: category.into(),
            explanation: explanation.into(),
        }
    }
}

/// One element of a parsed model reply
///
/// Elements that have exactly the three clause fields as strings become
/// [`ClauseEntry::Record`]. Anything else (numbers, objects with missing or
/// extra keys, nested arrays) is kept verbatim as [`ClauseEntry::Other`], so
/// serializing an entry reproduces the element the model sent. Only JSON
/// objects are considered for records; a three-string array stays `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ClauseEntry {
    /// A well-formed clause record
    Record(ClauseRecord),

    /// Any other JSON value, unmodified
    Other(Value),
}

impl<'de> Deserialize<'de> for ClauseEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.is_object() {
            if let Ok(record) = ClauseRecord::deserialize(&value) {
                return Ok(ClauseEntry::Record(record));
            }
        }
        Ok(ClauseEntry::Other(value))
    }
}

impl ClauseEntry {
    /// Borrow the record if this entry is well-formed
    pub fn as_record(&self) -> Option<&ClauseRecord> {
        match self {
            ClauseEntry::Record(record) => Some(record),
            ClauseEntry::Other(_) => None,
        }
    }

    /// Whether this entry is a well-formed clause record
    pub fn is_record(&self) -> bool {
        matches!(self, ClauseEntry::Record(_))
    }
}

impl From<ClauseRecord> for ClauseEntry {
    fn from(record: ClauseRecord) -> Self {
        ClauseEntry::Record(record)
    }
}

/// Result of analyzing one document
///
/// Entries keep the order in which the model returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Parsed clause entries
    pub clauses: Vec<ClauseEntry>,
}

impl AnalysisResult {
    /// Wrap a sequence of entries
    pub fn new(clauses: Vec<ClauseEntry>) -> Self {
        Self { clauses }
    }

    /// Iterate over the well-formed records only
    pub fn records(&self) -> impl Iterator<Item = &ClauseRecord> {
        self.clauses.iter().filter_map(ClauseEntry::as_record)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the model returned no entries
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
