//! Regex fragment builders for JSON scalars, objects, and arrays.
//!
//! Every builder has a *keyed* form, which pins the targeted branch (and, at
//! the leaf, carries the sole capture group), and a *non-keyed* form, which
//! consumes an arbitrary sibling of the same shape without capturing. Braces
//! outside character classes are escaped so the output is valid for strict
//! regex engines as well as lenient ones.

/// Matches a terminal scalar: a quoted string body or a bare literal such as
/// a number, boolean, or null. The keyed form captures the value itself,
/// excluding surrounding quotes and whitespace.
pub fn scalar_fragment(keyed: bool) -> String {
    if keyed {
        r#""?([^,{}\[\]"\s][^,{}\[\]"]*)"?"#.to_string()
    } else {
        r#""?[^,{}\[\]"\s][^,{}\[\]"]*"?"#.to_string()
    }
}

/// Matches an object holding `key` with a value matching `inner_keyed`, with
/// any number of non-keyed sibling pairs on either side. Sibling key names
/// are unconstrained; only the targeted key is matched literally. The
/// non-keyed form matches any object of compatible content and ignores `key`
/// and `inner_keyed`.
pub fn object_fragment(key: &str, inner_keyed: &str, inner_nonkeyed: &str, keyed: bool) -> String {
    if keyed {
        format!(
            r#"\{{(?:"\w+":\s?{nk},?\s?)*"{key}":\s?{k},?\s?(?:"\w+":\s?{nk},?\s?)*\}}"#,
            nk = inner_nonkeyed,
            k = inner_keyed,
            key = regex::escape(key),
        )
    } else {
        format!(r#"\{{(?:"\w+":\s?{nk},?\s?)*\}}"#, nk = inner_nonkeyed)
    }
}

/// Matches an array whose element at `index` matches `inner_keyed`, skipping
/// exactly `index` non-keyed elements before it and any number after.
/// Index 0 degenerates to "first element". The non-keyed form matches any
/// array of compatible elements and ignores `index` and `inner_keyed`.
pub fn array_fragment(
    index: usize,
    inner_keyed: &str,
    inner_nonkeyed: &str,
    keyed: bool,
) -> String {
    if keyed {
        format!(
            r"\[(?:{nk},?\s?){{{index}}}{k},?\s?(?:{nk},?\s?)*\]",
            nk = inner_nonkeyed,
            k = inner_keyed,
            index = index,
        )
    } else {
        format!(r"\[(?:{nk},?\s?)*\]", nk = inner_nonkeyed)
    }
}

/// Captures the entire literal contents of an array of scalars, commas and
/// spacing included. Deliberately does not recurse: arrays holding nested
/// objects or arrays are outside the wildcard contract.
pub fn wildcard_fragment() -> String {
    r#"\[((?:"?[^,{}\[\]"]+"?,?\s?)*)\]"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn scalar_inners() -> (String, String) {
        (scalar_fragment(true), scalar_fragment(false))
    }

    #[test]
    fn test_scalar_fragment_captures_string_body() {
        let re = Regex::new(&scalar_fragment(true)).unwrap();
        assert_eq!(&re.captures(r#""str""#).unwrap()[1], "str");
    }

    #[test]
    fn test_scalar_fragment_captures_number() {
        let re = Regex::new(&scalar_fragment(true)).unwrap();
        assert_eq!(&re.captures("1.78").unwrap()[1], "1.78");
    }

    #[test]
    fn test_scalar_fragment_captures_boolean() {
        let re = Regex::new(&scalar_fragment(true)).unwrap();
        assert_eq!(&re.captures("true").unwrap()[1], "true");
    }

    #[test]
    fn test_object_keyed_matches_object_with_key() {
        let (k, nk) = scalar_inners();
        let re = Regex::new(&object_fragment("a", &k, &nk, true)).unwrap();
        assert!(re.is_match(r#"{"a": "b"}"#));
    }

    #[test]
    fn test_object_does_not_match_array_of_similar_content() {
        let (k, nk) = scalar_inners();
        let keyed = Regex::new(&object_fragment("a", &k, &nk, true)).unwrap();
        let nonkeyed = Regex::new(&object_fragment("a", &k, &nk, false)).unwrap();
        assert!(!keyed.is_match(r#"["a", "b"]"#));
        assert!(!nonkeyed.is_match(r#"["a", "b"]"#));
    }

    #[test]
    fn test_object_keyed_rejects_missing_key() {
        let (k, nk) = scalar_inners();
        let re = Regex::new(&object_fragment("a", &k, &nk, true)).unwrap();
        assert!(!re.is_match(r#"{"c": "d"}"#));
    }

    #[test]
    fn test_object_nonkeyed_accepts_any_object() {
        let (k, nk) = scalar_inners();
        let re = Regex::new(&object_fragment("a", &k, &nk, false)).unwrap();
        assert!(re.is_match(r#"{"c": "d"}"#));
    }

    #[test]
    fn test_object_keyed_rejects_deeper_nesting_than_configured() {
        let (k, nk) = scalar_inners();
        let re = Regex::new(&object_fragment("a", &k, &nk, true)).unwrap();
        assert!(!re.is_match(r#"{"a": {"b": "c"}}"#));
    }

    #[test]
    fn test_array_keyed_matches_element_at_index() {
        let (k, nk) = scalar_inners();
        let re = Regex::new(&array_fragment(1, &k, &nk, true)).unwrap();
        let caps = re.captures(r#"["a", "b"]"#).unwrap();
        assert_eq!(&caps[1], "b");
    }

    #[test]
    fn test_array_does_not_match_object_of_similar_content() {
        let (k, nk) = scalar_inners();
        let keyed = Regex::new(&array_fragment(0, &k, &nk, true)).unwrap();
        let nonkeyed = Regex::new(&array_fragment(0, &k, &nk, false)).unwrap();
        assert!(!keyed.is_match(r#"{"a": "b"}"#));
        assert!(!nonkeyed.is_match(r#"{"a": "b"}"#));
    }

    #[test]
    fn test_array_keyed_rejects_index_out_of_range() {
        let (k, nk) = scalar_inners();
        let re = Regex::new(&array_fragment(2, &k, &nk, true)).unwrap();
        assert!(!re.is_match(r#"["a", "b"]"#));
    }

    #[test]
    fn test_array_nonkeyed_accepts_any_index_count() {
        let (k, nk) = scalar_inners();
        let re = Regex::new(&array_fragment(2, &k, &nk, false)).unwrap();
        assert!(re.is_match(r#"["a", "b"]"#));
    }

    #[test]
    fn test_array_index_zero_pins_first_element() {
        let (k, nk) = scalar_inners();
        let re = Regex::new(&array_fragment(0, &k, &nk, true)).unwrap();
        let caps = re.captures(r#"["a", "b"]"#).unwrap();
        assert_eq!(&caps[1], "a");
    }

    #[test]
    fn test_wildcard_fragment_captures_whole_scalar_array() {
        let re = Regex::new(&wildcard_fragment()).unwrap();
        let caps = re.captures("[0, 1, 2, 3]").unwrap();
        assert_eq!(&caps[1], "0, 1, 2, 3");
    }
}
