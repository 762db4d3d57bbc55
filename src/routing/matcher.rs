//! Route matching logic.
//!
//! # Responsibilities
//! - Match a template against the segments of an incoming path
//! - Extract captured values in segment order
//! - Reject definitively: a template either matches or it does not
//!
//! # Design Decisions
//! - Single left-to-right scan, no backtracking
//! - Literal comparison is exact and case-sensitive
//! - No regex to guarantee O(n) matching

use crate::routing::template::{PathTemplate, Segment};

/// Split a request path into segments, dropping the empties produced by
/// leading, trailing, or doubled slashes.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Match a template against path segments, producing captures in order.
///
/// Returns `None` on any mismatch, including unconsumed path segments left
/// after the final template segment — there is no implicit trailing wildcard.
pub fn match_segments(template: &PathTemplate, path: &[&str]) -> Option<Vec<(String, String)>> {
    let mut captures = Vec::new();
    let mut pos = 0;

    for segment in template.segments() {
        match segment {
            Segment::Literal(text) => match path.get(pos) {
                Some(candidate) if *candidate == text.as_str() => pos += 1,
                _ => return None,
            },
            Segment::Named(name) => match path.get(pos) {
                Some(candidate) => {
                    captures.push((name.clone(), (*candidate).to_string()));
                    pos += 1;
                }
                None => return None,
            },
            Segment::OptionalNamed(name) => match path.get(pos) {
                Some(candidate) => {
                    captures.push((name.clone(), (*candidate).to_string()));
                    pos += 1;
                }
                // Absent binds the empty string; there is nothing to advance over.
                None => captures.push((name.clone(), String::new())),
            },
            Segment::OptionalTrailing(prefix) => {
                for (index, candidate) in path[pos..].iter().enumerate() {
                    captures.push((format!("{}{}", prefix, index + 1), (*candidate).to_string()));
                }
                pos = path.len();
            }
        }
    }

    if pos < path.len() {
        return None;
    }
    Some(captures)
}
