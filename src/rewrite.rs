//! Textual rewriting of `JSON_PATH` helper calls inside query strings.
//!
//! `JSON_PATH(field, 'a.1.b', 3)` becomes
//! `REGEXP_EXTRACT(field, r'...') AS json_a_1_b`, so a query engine that only
//! offers a regex-extraction primitive can run the result unchanged. The
//! alias swaps `.` for `_` and `*` for `glob`, keeping it a bare identifier
//! acceptable in an `AS` clause.

use crate::compiler::value_by_path;
use crate::error::PathError;
use regex::Regex;
use std::sync::LazyLock;

/// Helper keywords this crate knows how to expand.
pub const HELPER_KEYWORDS: &[&str] = &["JSON_PATH"];

/// The extraction function emitted in place of the helper.
const EXTRACT_FN: &str = "REGEXP_EXTRACT";

static JSON_PATH_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"JSON_PATH\(\s*([^,]+?)\s*,\s*["']([^"']+)["']\s*,\s*(\d+)\s*\)"#)
        .expect("BUG: invalid JSON_PATH_CALL regex literal")
});

/// Is the token one of the helper keywords handled by [`expand_json_path`]?
/// Useful to hosts that tokenize queries and want to treat the helpers as
/// built-in functions.
pub fn is_helper_keyword(token: &str) -> bool {
    HELPER_KEYWORDS.contains(&token)
}

/// Replaces every `JSON_PATH(field, 'path', depth)` call in `query` with a
/// `REGEXP_EXTRACT(field, r'...') AS json_<alias>` expression. Both single
/// and double quotes around the path are accepted. Text outside the helper
/// calls passes through untouched.
pub fn expand_json_path(query: &str) -> Result<String, PathError> {
    let mut out = String::with_capacity(query.len());
    let mut last_end = 0;
    let mut expanded = 0usize;
    // replace_all cannot propagate errors out of its closure, so walk the
    // matches by hand.
    for caps in JSON_PATH_CALL.captures_iter(query) {
        let (Some(whole), Some(field), Some(path), Some(depth)) =
            (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };
        let max_depth: usize = depth.as_str().parse().map_err(|_| PathError::MalformedCall {
            function: "JSON_PATH".to_string(),
            message: format!("depth '{}' is not a usable integer", depth.as_str()),
        })?;
        let source = value_by_path(path.as_str(), max_depth)?;
        let alias = path.as_str().replace('.', "_").replace('*', "glob");
        out.push_str(&query[last_end..whole.start()]);
        out.push_str(EXTRACT_FN);
        out.push('(');
        out.push_str(field.as_str());
        out.push_str(", r'");
        out.push_str(&source);
        out.push_str("') AS json_");
        out.push_str(&alias);
        last_end = whole.end();
        expanded += 1;
    }
    out.push_str(&query[last_end..]);
    log::debug!("expanded {} JSON_PATH call(s) in query", expanded);
    Ok(out)
}
