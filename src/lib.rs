//! Compile dotted JSON path expressions into value-extracting regular
//! expressions.
//!
//! This crate targets environments that offer a regex-extraction primitive
//! but no JSON-aware functions: a path such as `a.1.b`, together with the
//! maximum nesting depth of the document, compiles into a single regex whose
//! sole capture group yields the value at that path. No JSON parser is
//! involved at compile time or match time.
//!
//! The depth parameter must be exact. At every level the compiler emits both
//! a pattern for the targeted branch and a pattern for every sibling shape a
//! document of that depth could hold, so output size grows roughly
//! exponentially with `max_depth`. Set it to the deepest nesting level of the
//! document and no more: lower degrades sibling skipping to a coarse scalar
//! shape and may silently mismatch, higher only bloats the regex.
//!
//! The innermost segment may be `*`, which captures the entire literal
//! contents of an array of scalars (`a.*` over `{"a": [1, 2]}` captures
//! `1, 2`). Arrays holding nested objects or arrays are outside the wildcard
//! contract.

pub mod ast;
pub mod compiler;
pub mod error;
pub mod fragments;
mod parser;
pub mod rewrite;

// --- Public API ---
pub use ast::{Path, Segment, is_digits};
pub use compiler::{regex_for_path, value_by_path};
pub use error::PathError;
pub use parser::parse_path;
pub use rewrite::{HELPER_KEYWORDS, expand_json_path, is_helper_keyword};

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use serde_json::json;

    #[test]
    fn test_compile_and_extract_nested_key() {
        let doc = json!({ "customer": { "name": "ACME" } }).to_string();
        let re = Regex::new(&value_by_path("customer.name", 2).unwrap()).unwrap();
        assert_eq!(&re.captures(&doc).unwrap()[1], "ACME");
    }

    #[test]
    fn test_compile_and_extract_through_array() {
        let doc = json!({ "orders": [ { "id": "A" }, { "id": "B" } ] }).to_string();
        let re = Regex::new(&value_by_path("orders.1.id", 3).unwrap()).unwrap();
        assert_eq!(&re.captures(&doc).unwrap()[1], "B");
    }

    #[test]
    fn test_extraction_is_order_independent() {
        let shuffled = json!({ "z": 1, "customer": { "age": 3, "name": "ACME" }, "a": 2 });
        let re = Regex::new(&value_by_path("customer.name", 2).unwrap()).unwrap();
        assert_eq!(&re.captures(&shuffled.to_string()).unwrap()[1], "ACME");
    }

    #[test]
    fn test_parse_then_compile_matches_value_by_path() {
        let path = parse_path("a.1.b").unwrap();
        assert_eq!(
            regex_for_path(&path, 3),
            value_by_path("a.1.b", 3).unwrap()
        );
    }
}
