//! Structural text representation used by free-text search.
//!
//! A [`Node`] is a borrowed, tree-shaped view of a value. Search walks the
//! tree structurally: mappings match when any value matches, sequences when
//! any element matches, text by substring, and scalars by substring of their
//! canonical JSON form. Mapping keys are never searched.

/// Borrowed structural view of a searchable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    /// Keyed entries, in declaration order.
    Mapping(Vec<(&'a str, Node<'a>)>),
    /// Ordered elements.
    Sequence(Vec<Node<'a>>),
    /// Borrowed string value.
    Text(&'a str),
    /// Non-string leaf value.
    Scalar(Scalar),
}

impl Node<'_> {
    /// Returns `true` if `term` occurs anywhere in this node.
    ///
    /// The comparison is case-sensitive. An empty term matches every node,
    /// including empty mappings and sequences.
    pub fn contains(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.contains_nonempty(term)
    }

    fn contains_nonempty(&self, term: &str) -> bool {
        match self {
            Node::Mapping(entries) => entries
                .iter()
                .any(|(_, value)| value.contains_nonempty(term)),
            Node::Sequence(items) => items.iter().any(|item| item.contains_nonempty(term)),
            Node::Text(s) => s.contains(term),
            Node::Scalar(scalar) => scalar.canonical().contains(term),
        }
    }
}

/// Non-string leaf values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    /// Integer value.
    Integer(i64),
    /// Boolean value.
    Bool(bool),
}

impl Scalar {
    /// Returns the value as a JSON serializer would write it.
    pub fn canonical(self) -> String {
        let value = match self {
            Scalar::Integer(n) => serde_json::Value::from(n),
            Scalar::Bool(b) => serde_json::Value::from(b),
        };
        value.to_string()
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Integer(i64::from(n))
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node<'static> {
        Node::Mapping(vec![
            ("name", Node::Text("Ortiz")),
            (
                "topics",
                Node::Sequence(vec![Node::Mapping(vec![
                    ("label", Node::Text("Algebra")),
                    ("years", Node::Scalar(Scalar::Integer(12))),
                ])]),
            ),
            ("active", Node::Scalar(Scalar::Bool(false))),
        ])
    }

    #[test]
    fn text_substring() {
        assert!(sample().contains("Ort"));
        assert!(sample().contains("rti"));
        assert!(!sample().contains("ortiz"));
    }

    #[test]
    fn nested_sequence_and_mapping() {
        assert!(sample().contains("gebr"));
    }

    #[test]
    fn scalars_use_canonical_form() {
        assert!(sample().contains("12"));
        assert!(sample().contains("1"));
        assert!(sample().contains("fal"));
        assert!(!sample().contains("true"));
    }

    #[test]
    fn keys_are_not_searched() {
        assert!(!sample().contains("topics"));
        assert!(!sample().contains("label"));
    }

    #[test]
    fn empty_term_matches_empty_containers() {
        assert!(Node::Mapping(vec![]).contains(""));
        assert!(Node::Sequence(vec![]).contains(""));
        assert!(!Node::Sequence(vec![]).contains("x"));
    }

    #[test]
    fn canonical_scalars() {
        assert_eq!(Scalar::Integer(-3).canonical(), "-3");
        assert_eq!(Scalar::from(7u32).canonical(), "7");
        assert_eq!(Scalar::Bool(true).canonical(), "true");
    }
}
