//! Sort keys for evaluation results.
//!
//! Provides [`SortKey`] and [`compare_records`], the comparator behind
//! result ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::collate;
use crate::record::Record;

/// How results are ordered.
///
/// Parsing never fails: an unknown name becomes [`SortKey::Unrecognized`],
/// which evaluation reports as a configuration error before leaving the
/// filtered records in input order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Collation order of last names.
    #[default]
    LastNameAscending,
    /// Highest topic experience first.
    MaxExperienceDescending,
    /// A name that matches no ordering.
    Unrecognized(String),
}

impl SortKey {
    /// Every supported ordering.
    pub const SUPPORTED: [SortKey; 2] =
        [SortKey::LastNameAscending, SortKey::MaxExperienceDescending];

    /// Returns the wire name of this key.
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::LastNameAscending => "alphabeticalByLastName",
            SortKey::MaxExperienceDescending => "maxYearsExperience",
            SortKey::Unrecognized(raw) => raw,
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &str {
        match self {
            SortKey::LastNameAscending => "Alphabetical (last name)",
            SortKey::MaxExperienceDescending => "Years experience (max)",
            SortKey::Unrecognized(raw) => raw,
        }
    }

    /// Returns `true` unless this is [`SortKey::Unrecognized`].
    pub fn is_recognized(&self) -> bool {
        !matches!(self, SortKey::Unrecognized(_))
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s {
            "alphabeticalByLastName" | "name" => SortKey::LastNameAscending,
            "maxYearsExperience" | "experience" => SortKey::MaxExperienceDescending,
            other => SortKey::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        SortKey::from(s.as_str())
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::from(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compares two records under `key`.
///
/// Returns `None` for [`SortKey::Unrecognized`].
pub fn compare_records(a: &Record, b: &Record, key: &SortKey) -> Option<Ordering> {
    match key {
        SortKey::LastNameAscending => Some(collate::compare(&a.last_name, &b.last_name)),
        SortKey::MaxExperienceDescending => {
            Some(b.max_experience().cmp(&a.max_experience()))
        }
        SortKey::Unrecognized(_) => None,
    }
}
