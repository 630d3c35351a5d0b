//! Exportable form of the value table

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ValueTable;
use crate::{Result, types::Score};

/// Whole-table copy of learned scores, keyed by 9-character board key.
///
/// The interchange format is a flat JSON object:
///
/// ```json
/// {"X O      ": 3, "XO  X    ": -2}
/// ```
///
/// Keys are not validated. Entries are kept sorted so exports are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(pub BTreeMap<String, Score>);

impl Snapshot {
    /// Parse a snapshot from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if the text is not a JSON
    /// object mapping strings to integers.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON form, one entry per line
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn get(&self, key: &str) -> Option<Score> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowest and highest score, `None` for an empty snapshot
    pub fn score_range(&self) -> Option<(Score, Score)> {
        let min = self.0.values().copied().min()?;
        let max = self.0.values().copied().max()?;
        Some((min, max))
    }
}

impl From<&ValueTable> for Snapshot {
    fn from(table: &ValueTable) -> Self {
        Snapshot(table.iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

impl From<Snapshot> for ValueTable {
    fn from(snapshot: Snapshot) -> Self {
        snapshot.0.into_iter().collect()
    }
}

impl FromIterator<(String, Score)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, Score)>>(iter: I) -> Self {
        Snapshot(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_is_flat_object() {
        let snapshot: Snapshot = [("X O      ".to_string(), 3), ("XO       ".to_string(), -1)]
            .into_iter()
            .collect();
        assert_eq!(
            snapshot.to_json().unwrap(),
            r#"{"X O      ":3,"XO       ":-1}"#
        );
    }

    #[test]
    fn test_from_json_accepts_unknown_keys() {
        let snapshot = Snapshot::from_json(r#"{"not a board": 7, "         ": 1}"#).unwrap();
        assert_eq!(snapshot.get("not a board"), Some(7));
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(matches!(
            Snapshot::from_json("[1, 2, 3]"),
            Err(crate::Error::Serialization(_))
        ));
        assert!(Snapshot::from_json(r#"{"X        ": "high"}"#).is_err());
    }

    #[test]
    fn test_score_range() {
        assert_eq!(Snapshot::default().score_range(), None);
        let snapshot = Snapshot::from_json(r#"{"a": -4, "b": 9, "c": 0}"#).unwrap();
        assert_eq!(snapshot.score_range(), Some((-4, 9)));
    }
}
