//! Grouping categories and their coupling rules.
//!
//! The category set is fixed. Some categories have no selector of their own
//! and follow another one; those pairs are declared in [`COUPLED`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// A known grouping category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Nursery,
    Lower,
    Middle,
    Upper,
}

/// `(driver, follower)` pairs: after the driver changes, the follower is set
/// to the driver's value.
pub const COUPLED: &[(Category, Category)] = &[(Category::Lower, Category::Nursery)];

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Nursery,
        Category::Lower,
        Category::Middle,
        Category::Upper,
    ];

    /// Returns the category key as used in record mappings.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Nursery => "nursery",
            Category::Lower => "lower",
            Category::Middle => "middle",
            Category::Upper => "upper",
        }
    }

    /// Returns the human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Nursery => "Nursery",
            Category::Lower => "Lower",
            Category::Middle => "Middle",
            Category::Upper => "Upper",
        }
    }

    /// Categories that follow this one, per [`COUPLED`].
    pub fn followers(self) -> impl Iterator<Item = Category> {
        COUPLED
            .iter()
            .filter(move |(driver, _)| *driver == self)
            .map(|(_, follower)| *follower)
    }

    /// Returns `true` if some other category drives this one.
    pub fn is_follower(self) -> bool {
        COUPLED.iter().any(|(_, follower)| *follower == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| QueryError::UnknownCategory(s.to_string()))
    }
}

/// Inclusive category match.
///
/// For every key in the record's mapping, the key matches when the selection
/// holds the same value. The record matches when any key does. Keys outside
/// the known category set never match.
pub fn matches_any(
    selection: &BTreeMap<Category, bool>,
    record_categories: &BTreeMap<String, bool>,
) -> bool {
    record_categories.iter().any(|(key, applies)| {
        key.parse::<Category>()
            .ok()
            .and_then(|category| selection.get(&category))
            .is_some_and(|selected| selected == applies)
    })
}
