//! A `nom`-based parser for dotted path strings.
use crate::ast::{Path, Segment};
use crate::error::PathError;
use nom::{
    IResult, Parser, bytes::complete::is_not, character::complete::char, combinator::map,
    multi::separated_list1,
};

// --- Main Public Parser ---

pub fn parse_path(input: &str) -> Result<Path, PathError> {
    match path(input) {
        Ok(("", path)) => validate(input, path),
        Ok((rem, _)) => Err(PathError::Parse(
            input.to_string(),
            format!("Parser did not consume all input. Remainder: '{}'", rem),
        )),
        Err(e) => Err(PathError::Parse(input.to_string(), e.to_string())),
    }
}

// --- Combinators ---

fn path(input: &str) -> IResult<&str, Path> {
    map(separated_list1(char('.'), segment), Path::new).parse(input)
}

fn segment(input: &str) -> IResult<&str, Segment> {
    map(is_not("."), Segment::classify).parse(input)
}

/// The wildcard selects the whole array it lands on, so nothing may be
/// nested past it.
fn validate(input: &str, path: Path) -> Result<Path, PathError> {
    let segments = path.segments();
    let wildcard_at = segments.iter().position(|s| *s == Segment::Wildcard);
    if wildcard_at.is_some_and(|i| i + 1 != segments.len()) {
        return Err(PathError::WildcardPosition(input.to_string()));
    }
    Ok(path)
}
