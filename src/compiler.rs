//! The recursive descent that turns a [`Path`] into a single extraction regex.
//!
//! At every level the compiler produces two fragments: a keyed one that pins
//! the targeted branch and a non-keyed one that consumes an arbitrary sibling
//! of compatible shape. A skipped sibling may itself nest all the way down to
//! `max_depth`, so non-keyed fragments recurse too and output size grows
//! roughly exponentially with the depth parameter.

use crate::ast::{Path, Segment};
use crate::error::PathError;
use crate::fragments::{array_fragment, object_fragment, scalar_fragment, wildcard_fragment};
use crate::parser::parse_path;

/// The keyed and non-keyed regex fragments produced for one position.
/// Recomputed per level, never persisted.
struct FragmentPair {
    keyed: String,
    nonkeyed: String,
}

/// Compiles a dotted path string into a regex source whose sole capture
/// group extracts the value at that path from a JSON-serialized string.
///
/// `max_depth` must equal the deepest nesting level of the target document.
/// Set lower, sibling skipping collapses to a coarse scalar shape and the
/// regex may fail to match or mismatch; set higher, the regex is correct but
/// needlessly large.
///
/// Fails only when the path string itself does not parse; compilation proper
/// is total, and a structurally wrong path simply never matches anything.
pub fn value_by_path(pathstring: &str, max_depth: usize) -> Result<String, PathError> {
    let path = parse_path(pathstring)?;
    let source = regex_for_path(&path, max_depth);
    log::debug!(
        "compiled path '{}' at max depth {} into {} bytes of regex",
        pathstring,
        max_depth,
        source.len()
    );
    Ok(source)
}

/// Compiles an already-parsed path. Total over any [`Path`] value.
pub fn regex_for_path(path: &Path, max_depth: usize) -> String {
    compile(path.segments(), 0, max_depth, true)
}

/// Computes the fragment pair describing everything nested inside the
/// current segment. `rest` holds the remaining segments, innermost last.
fn inner_fragments(rest: &[Segment], depth: usize, max_depth: usize) -> FragmentPair {
    match rest.first() {
        // Innermost level: the target is a scalar. Siblings keep their real
        // shape while depth remains below the maximum, then collapse to the
        // scalar form.
        None => FragmentPair {
            keyed: scalar_fragment(true),
            nonkeyed: if depth >= max_depth {
                scalar_fragment(false)
            } else {
                compile(rest, depth, max_depth, false)
            },
        },
        Some(Segment::Wildcard) => FragmentPair {
            keyed: wildcard_fragment(),
            nonkeyed: compile(rest, depth, max_depth, false),
        },
        Some(_) => FragmentPair {
            keyed: compile(rest, depth, max_depth, true),
            nonkeyed: compile(rest, depth, max_depth, false),
        },
    }
}

/// One level of the descent over an outermost-first segment slice. `keyed`
/// is false when building the interior of a skipped sibling rather than the
/// targeted branch.
fn compile(segments: &[Segment], depth: usize, max_depth: usize, keyed: bool) -> String {
    let (curr, rest) = match segments.split_first() {
        Some((curr, rest)) => (Some(curr), rest),
        None => (None, segments),
    };
    let inner = inner_fragments(rest, depth + 1, max_depth);
    if keyed {
        match curr {
            Some(Segment::Index(i)) => array_fragment(*i, &inner.keyed, &inner.nonkeyed, true),
            // A lone `*` path is necessarily innermost: capture the array.
            Some(Segment::Wildcard) => wildcard_fragment(),
            Some(Segment::Key(key)) => object_fragment(key, &inner.keyed, &inner.nonkeyed, true),
            None => inner.keyed,
        }
    } else {
        // A skipped sibling's JSON type is unknown: it may be an array, an
        // object, or a bare scalar, and all three must be tolerable matches.
        let arr = array_fragment(0, &inner.keyed, &inner.nonkeyed, false);
        let obj = object_fragment("", &inner.keyed, &inner.nonkeyed, false);
        let value = scalar_fragment(false);
        format!("(?:{arr}|{obj}|{value})")
    }
}
