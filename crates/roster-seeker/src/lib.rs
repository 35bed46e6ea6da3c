//! Roster Seeker - filter, search and sort engine for personnel directories.
//!
//! Given a static record set and a [`QueryState`] snapshot, the
//! [`QueryEngine`] computes the visible records in display order. It
//! supports:
//!
//! - Region filtering through a caller-supplied [`RegionLookup`]
//! - Category filtering with inclusive (any key agrees) semantics
//! - Case-sensitive free-text search over the whole record structure
//! - Ordering by collated last name or by maximum topic experience
//!
//! # Quick Start
//!
//! ```rust
//! use roster_seeker::{
//!     Category, Location, PostalDirectory, QueryEngine, QueryEvent, Record, SortKey,
//! };
//!
//! let lookup = PostalDirectory::new()
//!     .with("10001", Location::new("New York", "NY"))
//!     .with("94105", Location::new("San Francisco", "CA"));
//!
//! let records = vec![
//!     Record::new("Luis", "Ortiz", "10001")
//!         .with_category("lower", true)
//!         .with_topic("Algebra", 12),
//!     Record::new("Ana", "Alvarez", "94105")
//!         .with_category("upper", true)
//!         .with_topic("Chemistry", 4),
//! ];
//!
//! let engine = QueryEngine::new(lookup);
//! let state = engine
//!     .initial_state(&records)
//!     .apply(&QueryEvent::SortKeyChanged(SortKey::MaxExperienceDescending))
//!     .unwrap();
//!
//! let results = engine.evaluate(&records, &state);
//! assert_eq!(results.records()[0].last_name, "Ortiz");
//! ```
//!
//! # Filter Semantics
//!
//! ```text
//! visible = regionSelection[region(postal code)]
//!         ∧ ∃ k ∈ record.categories: categorySelection[k] == record.categories[k]
//!         ∧ text term occurs in the record (or its resolved location)
//! ```
//!
//! Category matching is an inclusive OR: a record is visible when it agrees
//! with the selection on any one category.
//!
//! # State Transitions
//!
//! [`QueryState`] is replaced, never mutated. Changing "lower" also sets
//! "nursery" to the same value; the pairing comes from [`COUPLED`].

mod category;
mod engine;
mod error;
mod node;
mod ordering;
mod record;
mod state;
mod traits;

pub mod collate;

// Re-export public API
pub use category::{matches_any, Category, COUPLED};
pub use engine::{Evaluation, QueryEngine};
pub use error::{QueryError, Result};
pub use node::{Node, Scalar};
pub use ordering::{compare_records, SortKey};
pub use record::{Location, PostalDirectory, Record, Topic};
pub use state::{QueryEvent, QueryState};
pub use traits::{RegionLookup, Searchable};
