//! Entry model
//!
//! An entry is one line item in the tracked collection: an expense or an
//! income with a display title and a numeric value. The value is stored as a
//! non-negative magnitude; whether it adds to or subtracts from the balance
//! is determined by the kind, not by the stored sign.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::EntryId;
use crate::error::TallyError;

/// The expense/income discriminator used to partition entries for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Expense,
    Income,
}

impl EntryKind {
    /// The lowercase label used in files and CLI arguments
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Expense => "expense",
            EntryKind::Income => "income",
        }
    }

    /// The sign prefix shown next to amounts of this kind
    pub fn sign(&self) -> char {
        match self {
            EntryKind::Expense => '-',
            EntryKind::Income => '+',
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EntryKind {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" => Ok(EntryKind::Expense),
            "income" => Ok(EntryKind::Income),
            other => Err(TallyError::Validation(format!(
                "Unknown entry kind: '{}' (expected 'expense' or 'income')",
                other
            ))),
        }
    }
}

/// One record in the tracked collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, assigned at creation
    pub id: EntryId,

    /// Display label, opaque to the application
    pub title: String,

    /// Expense or income
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Non-negative magnitude; sign semantics come from `kind`
    pub value: f64,
}

impl Entry {
    /// Create a new entry with a fresh id
    pub fn new(title: impl Into<String>, kind: EntryKind, value: f64) -> Self {
        Self {
            id: EntryId::new(),
            title: title.into(),
            kind,
            value,
        }
    }

    /// Copy of this entry with a different value
    pub fn with_value(&self, value: f64) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }

    /// Validate the entry as loaded from an entries file
    ///
    /// Edits made during a session are not re-validated (the edit contract
    /// accepts any parseable number); this only guards the external input.
    pub fn validate(&self) -> Result<(), TallyError> {
        if self.title.trim().is_empty() {
            return Err(TallyError::Validation(format!(
                "Entry {} has an empty title",
                self.id
            )));
        }
        if !self.value.is_finite() {
            return Err(TallyError::Validation(format!(
                "Entry '{}' has a non-finite value",
                self.title
            )));
        }
        if self.value < 0.0 {
            return Err(TallyError::Validation(format!(
                "Entry '{}' has a negative value: {}",
                self.title, self.value
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_label_roundtrip() {
        assert_eq!("expense".parse::<EntryKind>().unwrap(), EntryKind::Expense);
        assert_eq!("income".parse::<EntryKind>().unwrap(), EntryKind::Income);
        assert_eq!(EntryKind::Expense.to_string(), "expense");
        assert_eq!(EntryKind::Income.to_string(), "income");
    }

    #[test]
    fn test_kind_parse_is_lenient() {
        assert_eq!(" Income ".parse::<EntryKind>().unwrap(), EntryKind::Income);
        assert!("salary".parse::<EntryKind>().is_err());
    }

    #[test]
    fn test_kind_sign() {
        assert_eq!(EntryKind::Expense.sign(), '-');
        assert_eq!(EntryKind::Income.sign(), '+');
    }

    #[test]
    fn test_entry_serialization_uses_type_key() {
        let entry = Entry::new("Coffee", EntryKind::Expense, 4.5);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"expense\""));
        assert!(json.contains("\"title\":\"Coffee\""));

        let deserialized: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }

    #[test]
    fn test_with_value_changes_only_value() {
        let entry = Entry::new("Coffee", EntryKind::Expense, 4.5);
        let updated = entry.with_value(5.0);
        assert_eq!(updated.id, entry.id);
        assert_eq!(updated.title, entry.title);
        assert_eq!(updated.kind, entry.kind);
        assert_eq!(updated.value, 5.0);
    }

    #[test]
    fn test_validate() {
        assert!(Entry::new("Coffee", EntryKind::Expense, 4.5).validate().is_ok());
        assert!(Entry::new("Free", EntryKind::Expense, 0.0).validate().is_ok());
        assert!(Entry::new("", EntryKind::Expense, 4.5).validate().is_err());
        assert!(Entry::new("Bad", EntryKind::Expense, -1.0).validate().is_err());
        assert!(Entry::new("Bad", EntryKind::Expense, f64::NAN)
            .validate()
            .is_err());
    }
}
