//! Query evaluation.
//!
//! [`QueryEngine`] turns a record set and a [`QueryState`] snapshot into the
//! visible, ordered subset. It keeps no state of its own beyond the
//! [`RegionLookup`] it was built with, so every call recomputes from scratch.

use std::collections::{BTreeMap, BTreeSet};

use crate::category;
use crate::error::QueryError;
use crate::ordering::compare_records;
use crate::record::Record;
use crate::state::QueryState;
use crate::traits::{RegionLookup, Searchable};

/// Evaluates queries against record sets.
///
/// The pipeline is:
///
/// ```text
/// visible = region selected
///         ∧ (some category key agrees with the selection)
///         ∧ (search text occurs in the record or its location)
/// ```
///
/// followed by a stable sort on the state's [`SortKey`](crate::SortKey).
///
/// # Example
///
/// ```
/// use roster_seeker::{Location, PostalDirectory, QueryEngine, Record};
///
/// let lookup = PostalDirectory::new()
///     .with("10001", Location::new("New York", "NY"))
///     .with("94105", Location::new("San Francisco", "CA"));
/// let engine = QueryEngine::new(lookup);
///
/// let records = vec![
///     Record::new("Luis", "Ortiz", "10001").with_category("lower", true),
///     Record::new("Ana", "Alvarez", "94105").with_category("upper", true),
/// ];
///
/// let state = engine.initial_state(&records);
/// let names: Vec<&str> = engine
///     .evaluate(&records, &state)
///     .iter()
///     .map(|r| r.last_name.as_str())
///     .collect();
/// assert_eq!(names, vec!["Alvarez", "Ortiz"]);
///
/// let state = state.toggle_region("CA").unwrap();
/// assert_eq!(engine.evaluate(&records, &state).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct QueryEngine<L> {
    lookup: L,
}

impl<L: RegionLookup> QueryEngine<L> {
    /// Creates an engine resolving postal codes through `lookup`.
    pub fn new(lookup: L) -> Self {
        QueryEngine { lookup }
    }

    /// Returns the lookup collaborator.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Builds the startup state: everything selected, regions taken from the
    /// distinct resolved regions of `records`.
    pub fn initial_state(&self, records: &[Record]) -> QueryState {
        QueryState::new(self.regions(records))
    }

    /// Distinct region codes of `records`. Unresolvable postal codes are
    /// skipped.
    pub fn regions(&self, records: &[Record]) -> BTreeSet<String> {
        records
            .iter()
            .filter_map(|r| self.lookup.region(&r.postal_code))
            .map(str::to_string)
            .collect()
    }

    /// Number of records located in each region.
    pub fn region_counts(&self, records: &[Record]) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for region in records
            .iter()
            .filter_map(|r| self.lookup.region(&r.postal_code))
        {
            *counts.entry(region.to_string()).or_insert(0) += 1;
        }
        counts
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    /// Tests whether a record passes the region, category and text filters.
    pub fn is_visible(&self, record: &Record, state: &QueryState) -> bool {
        self.region_filter(record, state)
            && category::matches_any(state.category_selection(), &record.categories)
            && self.text_filter(record, state)
    }

    fn region_filter(&self, record: &Record, state: &QueryState) -> bool {
        self.lookup
            .region(&record.postal_code)
            .and_then(|region| state.region(region))
            .unwrap_or(false)
    }

    fn text_filter(&self, record: &Record, state: &QueryState) -> bool {
        let term = state.text_term();
        record.matches_text(term)
            || self
                .lookup
                .locate(&record.postal_code)
                .is_some_and(|location| location.matches_text(term))
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Filters and orders `records` for `state`.
    ///
    /// An unrecognized sort key is logged and attached to the result; the
    /// filtered records then keep their input order.
    pub fn evaluate<'a>(&self, records: &'a [Record], state: &QueryState) -> Evaluation<'a> {
        let mut visible: Vec<&'a Record> = records
            .iter()
            .filter(|record| self.is_visible(record, state))
            .collect();

        let key = state.sort_key();
        let error = if key.is_recognized() {
            visible.sort_by(|a, b| {
                compare_records(a, b, key).unwrap_or(std::cmp::Ordering::Equal)
            });
            None
        } else {
            let error = QueryError::UnrecognizedSortKey(key.as_str().to_string());
            tracing::error!(sort_key = %key, "{error}");
            Some(error)
        };

        tracing::debug!(
            total = records.len(),
            visible = visible.len(),
            sort_key = %key,
            "evaluated query"
        );

        Evaluation {
            records: visible,
            error,
        }
    }

    /// Counts the records visible under `state`.
    pub fn count(&self, records: &[Record], state: &QueryState) -> usize {
        records
            .iter()
            .filter(|record| self.is_visible(record, state))
            .count()
    }
}

/// Result of [`QueryEngine::evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<'a> {
    records: Vec<&'a Record>,
    error: Option<QueryError>,
}

impl<'a> Evaluation<'a> {
    /// The visible records, in display order.
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    /// The configuration error reported during evaluation, if any.
    pub fn error(&self) -> Option<&QueryError> {
        self.error.as_ref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    /// Consumes the evaluation, keeping only the ordered records.
    pub fn into_records(self) -> Vec<&'a Record> {
        self.records
    }
}

impl<'a> IntoIterator for Evaluation<'a> {
    type Item = &'a Record;
    type IntoIter = std::vec::IntoIter<&'a Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::ordering::SortKey;
    use crate::record::{Location, PostalDirectory};

    fn lookup() -> PostalDirectory {
        PostalDirectory::new()
            .with("10001", Location::new("New York", "NY"))
            .with("11201", Location::new("Brooklyn", "NY"))
            .with("94105", Location::new("San Francisco", "CA"))
    }

    fn everyone(record: Record) -> Record {
        record
            .with_category("lower", true)
            .with_category("middle", true)
            .with_category("upper", true)
    }

    fn sample_records() -> Vec<Record> {
        vec![
            everyone(Record::new("Luis", "Ortiz", "10001").with_topic("Math", 3)),
            everyone(Record::new("Ana", "Alvarez", "94105").with_topic("Art", 10)),
            everyone(Record::new("Mia", "Chen", "11201").with_topic("Music", 10)),
        ]
    }

    fn last_names<'a>(evaluation: &Evaluation<'a>) -> Vec<&'a str> {
        evaluation.iter().map(|r| r.last_name.as_str()).collect()
    }

    #[test]
    fn initial_state_collects_regions() {
        let engine = QueryEngine::new(lookup());
        let state = engine.initial_state(&sample_records());
        let regions: Vec<&str> = state.region_selection().keys().map(String::as_str).collect();
        assert_eq!(regions, vec!["CA", "NY"]);
    }

    #[test]
    fn region_counts() {
        let engine = QueryEngine::new(lookup());
        let counts = engine.region_counts(&sample_records());
        assert_eq!(counts.get("NY"), Some(&2));
        assert_eq!(counts.get("CA"), Some(&1));
    }

    #[test]
    fn default_sort_is_by_last_name() {
        let engine = QueryEngine::new(lookup());
        let records = sample_records();
        let state = engine.initial_state(&records);
        let result = engine.evaluate(&records, &state);
        assert_eq!(last_names(&result), vec!["Alvarez", "Chen", "Ortiz"]);
        assert!(result.error().is_none());
    }

    #[test]
    fn experience_sort_is_stable() {
        let engine = QueryEngine::new(lookup());
        let records = sample_records();
        let state = engine
            .initial_state(&records)
            .with_sort_key(SortKey::MaxExperienceDescending);
        let result = engine.evaluate(&records, &state);
        assert_eq!(last_names(&result), vec!["Alvarez", "Chen", "Ortiz"]);
    }

    #[test]
    fn region_filter() {
        let engine = QueryEngine::new(lookup());
        let records = sample_records();
        let state = engine
            .initial_state(&records)
            .toggle_region("CA")
            .unwrap();
        let result = engine.evaluate(&records, &state);
        assert_eq!(last_names(&result), vec!["Chen", "Ortiz"]);
    }

    #[test]
    fn unresolvable_postal_code_is_hidden() {
        let engine = QueryEngine::new(lookup());
        let records = vec![everyone(Record::new("X", "Nowhere", "00000"))];
        let state = QueryState::new(["NY"]);
        assert!(!engine.is_visible(&records[0], &state));
    }

    #[test]
    fn text_filter_searches_location() {
        let engine = QueryEngine::new(lookup());
        let records = sample_records();
        let state = engine.initial_state(&records).with_text_term("Brooklyn");
        let result = engine.evaluate(&records, &state);
        assert_eq!(last_names(&result), vec!["Chen"]);
    }

    #[test]
    fn text_filter_is_case_sensitive() {
        let engine = QueryEngine::new(lookup());
        let records = sample_records();
        let state = engine.initial_state(&records).with_text_term("ortiz");
        assert!(engine.evaluate(&records, &state).is_empty());
    }

    #[test]
    fn category_filter_hides_records_with_no_agreeing_key() {
        let engine = QueryEngine::new(lookup());
        let records = vec![Record::new("A", "Solo", "10001").with_category("middle", true)];
        let state = engine
            .initial_state(&records)
            .toggle_category(Category::Middle);
        assert_eq!(engine.count(&records, &state), 0);
    }

    #[test]
    fn unrecognized_sort_keeps_input_order() {
        let engine = QueryEngine::new(lookup());
        let records = sample_records();
        let state = engine
            .initial_state(&records)
            .with_sort_key(SortKey::from("randomized"));
        let result = engine.evaluate(&records, &state);
        assert_eq!(last_names(&result), vec!["Ortiz", "Alvarez", "Chen"]);
        assert_eq!(
            result.error(),
            Some(&QueryError::UnrecognizedSortKey("randomized".into()))
        );
    }

    #[test]
    fn into_records_keeps_order() {
        let engine = QueryEngine::new(lookup());
        let records = sample_records();
        let state = engine.initial_state(&records);
        let ordered = engine.evaluate(&records, &state).into_records();
        assert_eq!(ordered[0].last_name, "Alvarez");
    }
}
