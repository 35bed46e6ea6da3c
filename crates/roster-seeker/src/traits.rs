//! Collaborator traits.
//!
//! [`Searchable`] exposes a value's structural text representation to the
//! free-text filter. [`RegionLookup`] resolves postal codes to locations; it
//! is supplied by the caller and used both for region filtering and for
//! display.

use crate::node::Node;
use crate::record::Location;

/// Types that can be matched by free-text search.
///
/// # Example
///
/// ```
/// use roster_seeker::{Node, Searchable};
///
/// struct Badge {
///     title: String,
/// }
///
/// impl Searchable for Badge {
///     fn search_node(&self) -> Node<'_> {
///         Node::Mapping(vec![("title", Node::Text(&self.title))])
///     }
/// }
///
/// let badge = Badge { title: "Mentor".into() };
/// assert!(badge.search_node().contains("ent"));
/// ```
pub trait Searchable {
    /// Returns the structural view searched by the text filter.
    fn search_node(&self) -> Node<'_>;

    /// Returns `true` if `term` occurs anywhere in the structural view.
    fn matches_text(&self, term: &str) -> bool {
        self.search_node().contains(term)
    }
}

/// Resolves postal codes to locations.
///
/// Implementations must be deterministic: the same postal code resolves to
/// the same location for the lifetime of the lookup.
pub trait RegionLookup {
    /// Returns the location for `postal_code`, or `None` if it is unknown.
    fn locate(&self, postal_code: &str) -> Option<&Location>;

    /// Returns the region code for `postal_code`.
    fn region(&self, postal_code: &str) -> Option<&str> {
        self.locate(postal_code).map(|loc| loc.region.as_str())
    }
}

impl<L: RegionLookup + ?Sized> RegionLookup for &L {
    fn locate(&self, postal_code: &str) -> Option<&Location> {
        (**self).locate(postal_code)
    }
}
