//! Directory records and locations.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::node::{Node, Scalar};
use crate::traits::{RegionLookup, Searchable};

/// A personnel record. Records are supplied externally and never mutated by
/// the engine.
///
/// # Example
///
/// ```
/// use roster_seeker::Record;
///
/// let record = Record::new("Ana", "Alvarez", "10001")
///     .with_category("lower", true)
///     .with_topic("Algebra", 4)
///     .with_topic("Geometry", 9);
///
/// assert_eq!(record.max_experience(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    #[serde(alias = "zipCode")]
    pub postal_code: String,
    /// Category name to "applies to this record".
    #[serde(default, alias = "gradeLevelsTaught")]
    pub categories: BTreeMap<String, bool>,
    #[serde(default, alias = "subjects")]
    pub topics: Vec<Topic>,
}

impl Record {
    /// Creates a record with no categories and no topics.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Record {
            first_name: first_name.into(),
            last_name: last_name.into(),
            postal_code: postal_code.into(),
            categories: BTreeMap::new(),
            topics: Vec::new(),
        }
    }

    /// Sets one category flag.
    pub fn with_category(mut self, name: impl Into<String>, applies: bool) -> Self {
        self.categories.insert(name.into(), applies);
        self
    }

    /// Appends a topic.
    pub fn with_topic(mut self, label: impl Into<String>, experience_years: u32) -> Self {
        self.topics.push(Topic::new(label, experience_years));
        self
    }

    /// Returns "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Largest experience across all topics, 0 when there are none.
    pub fn max_experience(&self) -> u32 {
        self.topics
            .iter()
            .map(|t| t.experience_years)
            .max()
            .unwrap_or(0)
    }

    /// Topics ordered by experience, most experienced first.
    ///
    /// Topics with equal experience keep their declared order.
    pub fn topics_by_experience(&self) -> Vec<&Topic> {
        let mut topics: Vec<&Topic> = self.topics.iter().collect();
        topics.sort_by(|a, b| b.experience_years.cmp(&a.experience_years));
        topics
    }

    /// Every category name in the record's mapping, whatever its flag.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }
}

impl Searchable for Record {
    fn search_node(&self) -> Node<'_> {
        let categories = self
            .categories
            .iter()
            .map(|(name, applies)| (name.as_str(), Node::Scalar(Scalar::Bool(*applies))))
            .collect();
        let topics = self.topics.iter().map(Searchable::search_node).collect();

        Node::Mapping(vec![
            ("firstName", Node::Text(&self.first_name)),
            ("lastName", Node::Text(&self.last_name)),
            ("postalCode", Node::Text(&self.postal_code)),
            ("categories", Node::Mapping(categories)),
            ("topics", Node::Sequence(topics)),
        ])
    }
}

/// A labelled topic with years of experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub label: String,
    #[serde(alias = "yrsExp")]
    pub experience_years: u32,
}

impl Topic {
    /// Creates a topic.
    pub fn new(label: impl Into<String>, experience_years: u32) -> Self {
        Topic {
            label: label.into(),
            experience_years,
        }
    }
}

impl Searchable for Topic {
    fn search_node(&self) -> Node<'_> {
        Node::Mapping(vec![
            ("label", Node::Text(&self.label)),
            (
                "experienceYears",
                Node::Scalar(Scalar::from(self.experience_years)),
            ),
        ])
    }
}

/// A resolved postal code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    /// Region code, e.g. a state abbreviation.
    pub region: String,
}

impl Location {
    /// Creates a location.
    pub fn new(city: impl Into<String>, region: impl Into<String>) -> Self {
        Location {
            city: city.into(),
            region: region.into(),
        }
    }
}

impl Searchable for Location {
    fn search_node(&self) -> Node<'_> {
        Node::Mapping(vec![
            ("city", Node::Text(&self.city)),
            ("region", Node::Text(&self.region)),
        ])
    }
}

/// In-memory postal code table.
///
/// # Example
///
/// ```
/// use roster_seeker::{Location, PostalDirectory, RegionLookup};
///
/// let directory: PostalDirectory = [
///     ("10001".to_string(), Location::new("New York", "NY")),
///     ("94105".to_string(), Location::new("San Francisco", "CA")),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(directory.region("94105"), Some("CA"));
/// assert_eq!(directory.region("00000"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PostalDirectory {
    entries: HashMap<String, Location>,
}

impl PostalDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        PostalDirectory::default()
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, postal_code: impl Into<String>, location: Location) {
        self.entries.insert(postal_code.into(), location);
    }

    /// Adds an entry, builder style.
    pub fn with(mut self, postal_code: impl Into<String>, location: Location) -> Self {
        self.insert(postal_code, location);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RegionLookup for PostalDirectory {
    fn locate(&self, postal_code: &str) -> Option<&Location> {
        self.entries.get(postal_code)
    }
}

impl FromIterator<(String, Location)> for PostalDirectory {
    fn from_iter<I: IntoIterator<Item = (String, Location)>>(iter: I) -> Self {
        PostalDirectory {
            entries: iter.into_iter().collect(),
        }
    }
}
