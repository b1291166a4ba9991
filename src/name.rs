//! Flag-name encoding.
//!
//! A leaf's flag name is derived entirely from its position in the struct
//! tree. Named segments are hyphenated and lowercased, array positions are
//! zero-padded, and segments are joined with dots:
//!
//! ```text
//! fields[3].another_int  →  fields.03.another-int
//! MyStruct1.String       →  my-struct1.string
//! ```
//!
//! Padding keeps the lexicographic order of generated names identical to the
//! array order, so `fields.02` sorts before `fields.10`.

use std::fmt;

/// One step on the way from the root struct to a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// A struct field, by its declared identifier.
    Named(&'static str),
    /// An element of a fixed-size array of length `len`.
    Index { index: usize, len: usize },
}

impl Segment {
    /// Encode this segment on its own (no separators).
    pub fn encode(&self) -> String {
        match *self {
            Segment::Named(ident) => hyphenate(ident),
            Segment::Index { index, len } => {
                let width = index_width(len);
                format!("{index:0width$}")
            }
        }
    }
}

/// Ordered segments from the root struct to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segments of the struct that contains the last segment.
    pub fn parent(&self) -> &[Segment] {
        match self.segments.split_last() {
            Some((_, parent)) => parent,
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The dotted flag name for this path.
    pub fn encode(&self) -> String {
        self.segments
            .iter()
            .map(Segment::encode)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl FromIterator<Segment> for FieldPath {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Convert a field identifier into its lowercase, hyphen-separated form.
///
/// Word boundaries are underscores, a lowercase letter or digit followed by
/// an uppercase letter, and the last capital of an acronym that is followed
/// by a lowercase letter. Digits stay attached to the preceding word. A raw
/// identifier prefix (`r#`) is dropped.
pub fn hyphenate(ident: &str) -> String {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' {
            push_boundary(&mut out);
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                push_boundary(&mut out);
            }
        }
        out.extend(c.to_lowercase());
    }

    if out.ends_with('-') {
        out.pop();
    }
    out
}

fn push_boundary(out: &mut String) {
    if !out.is_empty() && !out.ends_with('-') {
        out.push('-');
    }
}

/// Digits used for array indices: enough for the largest index, at least two.
pub fn index_width(len: usize) -> usize {
    let largest = len.saturating_sub(1);
    largest.to_string().len().max(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("string", "string")]
    #[case("another_int", "another-int")]
    #[case("my_struct1", "my-struct1")]
    #[case("int64", "int64")]
    #[case("AnotherInt", "another-int")]
    #[case("MyStruct1", "my-struct1")]
    #[case("Int64", "int64")]
    #[case("HTTPServer", "http-server")]
    #[case("ServerURL", "server-url")]
    #[case("Ipv4Addr", "ipv4-addr")]
    #[case("r#type", "type")]
    #[case("_private", "private")]
    #[case("a__b", "a-b")]
    fn hyphenates_identifiers(#[case] ident: &str, #[case] expected: &str) {
        assert_eq!(hyphenate(ident), expected);
    }

    #[rstest]
    #[case(0, 2)]
    #[case(1, 2)]
    #[case(10, 2)]
    #[case(100, 2)]
    #[case(101, 3)]
    #[case(1000, 3)]
    #[case(1001, 4)]
    fn index_width_covers_largest_index(#[case] len: usize, #[case] width: usize) {
        assert_eq!(index_width(len), width);
    }

    #[test]
    fn array_element_name_is_zero_padded() {
        let path: FieldPath = [
            Segment::Named("fields"),
            Segment::Index { index: 3, len: 10 },
            Segment::Named("another_int"),
        ]
        .into_iter()
        .collect();
        assert_eq!(path.encode(), "fields.03.another-int");
    }

    #[test]
    fn padded_names_sort_in_array_order() {
        let mut names: Vec<String> = (0..12)
            .map(|index| Segment::Index { index, len: 12 }.encode())
            .collect();
        let expected = names.clone();
        names.sort();
        assert_eq!(names, expected);
    }

    #[test]
    fn nested_names_join_with_dots() {
        let path: FieldPath = [
            Segment::Named("my_struct1"),
            Segment::Named("my_struct2"),
            Segment::Named("string"),
        ]
        .into_iter()
        .collect();
        assert_eq!(path.to_string(), "my-struct1.my-struct2.string");
    }

    #[test]
    fn parent_drops_last_segment() {
        let mut path = FieldPath::new();
        assert!(path.parent().is_empty());
        path.push(Segment::Named("outer"));
        path.push(Segment::Named("leaf"));
        assert_eq!(path.parent(), &[Segment::Named("outer")]);
        assert_eq!(path.pop(), Some(Segment::Named("leaf")));
        assert_eq!(path.len(), 1);
    }
}
