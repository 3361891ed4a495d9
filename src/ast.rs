//! Data model for dotted paths: segments and their syntactic classification.

/// One selector in a dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// An object key (e.g. `name` in `customer.name`).
    Key(String),
    /// A zero-based array index (e.g. `1` in `orders.1.id`).
    Index(usize),
    /// The `*` selector, valid only in the innermost position, capturing the
    /// entire contents of a scalar array.
    Wildcard,
}

impl Segment {
    /// Classifies a raw path segment. Purely syntactic: a lone `*` is the
    /// wildcard, an all-digit segment is an array index, anything else is an
    /// object key.
    pub fn classify(raw: &str) -> Segment {
        if raw == "*" {
            Segment::Wildcard
        } else if is_digits(raw) {
            // indices too large for usize saturate instead of failing
            Segment::Index(raw.parse().unwrap_or(usize::MAX))
        } else {
            Segment::Key(raw.to_string())
        }
    }
}

/// A parsed path, ordered outermost segment first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub(crate) fn new(segments: Vec<Segment>) -> Self {
        Path { segments }
    }

    /// The segments of this path, outermost first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Does the string consist solely of ASCII digits?
///
/// This is the classification rule for array indices, exposed because callers
/// validating path segments need the same test.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
