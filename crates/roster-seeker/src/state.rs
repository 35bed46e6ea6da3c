//! Query state snapshots and the events that replace them.
//!
//! A [`QueryState`] is immutable from the outside: every transition takes
//! `&self` and returns a new snapshot, so a reader never observes a
//! half-applied change.
//!
//! ```
//! use roster_seeker::{Category, QueryEvent, QueryState, SortKey};
//!
//! let state = QueryState::new(["CA", "NY"]);
//! let next = state
//!     .apply(&QueryEvent::CategoryToggled(Category::Lower))
//!     .unwrap();
//!
//! assert!(state.category(Category::Nursery));
//! assert!(!next.category(Category::Lower));
//! assert!(!next.category(Category::Nursery));
//! assert_eq!(next.sort_key(), &SortKey::LastNameAscending);
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::Category;
use crate::error::{QueryError, Result};
use crate::ordering::SortKey;

/// A single user-driven change to the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent {
    /// The search text changed.
    TextTermChanged(String),
    /// A different ordering was picked.
    SortKeyChanged(SortKey),
    /// One category selector was flipped.
    CategoryToggled(Category),
    /// One region selector was flipped.
    RegionToggled(String),
}

/// The current query: search text, category and region selections, and
/// ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    text_term: String,
    category_selection: BTreeMap<Category, bool>,
    region_selection: BTreeMap<String, bool>,
    sort_key: SortKey,
}

impl QueryState {
    /// Creates the default state for the given region codes.
    ///
    /// Every category and region starts selected; duplicate codes collapse.
    pub fn new<I, S>(regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QueryState {
            text_term: String::new(),
            category_selection: Category::ALL.into_iter().map(|c| (c, true)).collect(),
            region_selection: regions.into_iter().map(|r| (r.into(), true)).collect(),
            sort_key: SortKey::default(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn text_term(&self) -> &str {
        &self.text_term
    }

    pub fn sort_key(&self) -> &SortKey {
        &self.sort_key
    }

    /// Returns whether `category` is selected.
    pub fn category(&self, category: Category) -> bool {
        self.category_selection
            .get(&category)
            .copied()
            .unwrap_or(false)
    }

    pub fn category_selection(&self) -> &BTreeMap<Category, bool> {
        &self.category_selection
    }

    /// Returns whether `region` is selected, or `None` if it is unknown.
    pub fn region(&self, region: &str) -> Option<bool> {
        self.region_selection.get(region).copied()
    }

    pub fn region_selection(&self) -> &BTreeMap<String, bool> {
        &self.region_selection
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Applies one event, returning the next snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownRegion`] when toggling a region that was
    /// not present at initialization.
    pub fn apply(&self, event: &QueryEvent) -> Result<QueryState> {
        tracing::debug!(?event, "applying query event");
        match event {
            QueryEvent::TextTermChanged(term) => Ok(self.with_text_term(term.clone())),
            QueryEvent::SortKeyChanged(key) => Ok(self.with_sort_key(key.clone())),
            QueryEvent::CategoryToggled(category) => Ok(self.toggle_category(*category)),
            QueryEvent::RegionToggled(region) => self.toggle_region(region),
        }
    }

    /// Returns a copy with a new search text.
    pub fn with_text_term(&self, term: impl Into<String>) -> QueryState {
        QueryState {
            text_term: term.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with a new ordering.
    pub fn with_sort_key(&self, key: SortKey) -> QueryState {
        QueryState {
            sort_key: key,
            ..self.clone()
        }
    }

    /// Returns a copy with `category` flipped, followers updated.
    pub fn toggle_category(&self, category: Category) -> QueryState {
        self.with_category(category, !self.category(category))
    }

    /// Returns a copy with `category` set to `selected`, followers updated.
    pub fn with_category(&self, category: Category, selected: bool) -> QueryState {
        let mut selection = self.category_selection.clone();
        selection.insert(category, selected);
        for follower in category.followers() {
            selection.insert(follower, selected);
        }
        QueryState {
            category_selection: selection,
            ..self.clone()
        }
    }

    /// Returns a copy with `region` flipped.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownRegion`] if `region` is not tracked.
    pub fn toggle_region(&self, region: &str) -> Result<QueryState> {
        let current = self
            .region(region)
            .ok_or_else(|| QueryError::UnknownRegion(region.to_string()))?;
        self.with_region(region, !current)
    }

    /// Returns a copy with `region` set to `selected`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownRegion`] if `region` is not tracked.
    pub fn with_region(&self, region: &str, selected: bool) -> Result<QueryState> {
        let mut selection = self.region_selection.clone();
        match selection.get_mut(region) {
            Some(value) => *value = selected,
            None => return Err(QueryError::UnknownRegion(region.to_string())),
        }
        Ok(QueryState {
            region_selection: selection,
            ..self.clone()
        })
    }
}
