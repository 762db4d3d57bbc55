//! Path template parsing.
//!
//! # Responsibilities
//! - Parse declarative route-tree tokens into typed segments
//! - Validate segment ordering at registration time
//! - Expose the segment counts that lookup specificity is ranked by
//!
//! # Design Decisions
//! - Tokens are trimmed but otherwise matched exactly (case-sensitive)
//! - Optional segments may only be followed by other optional segments
//! - No regex; a template is a plain segment sequence

use std::fmt;

use thiserror::Error;

/// One segment of a parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches exactly one path segment with this exact text.
    Literal(String),
    /// Matches exactly one path segment, captured under this name.
    Named(String),
    /// Matches zero or one path segment; when absent the name binds to "".
    OptionalNamed(String),
    /// Matches all remaining path segments, captured as `prefix1..prefixN`.
    OptionalTrailing(String),
}

impl Segment {
    /// Parse a single raw token.
    ///
    /// `:name` is a named capture, `?name` an optional capture, `?name?` an
    /// optional trailing multi-capture; anything else is a literal.
    pub fn from_token(token: &str) -> Segment {
        let token = token.trim();
        if let Some(name) = token.strip_prefix(':') {
            return Segment::Named(name.to_string());
        }
        if let Some(rest) = token.strip_prefix('?') {
            if let Some(prefix) = rest.strip_suffix('?') {
                if !rest.is_empty() {
                    return Segment::OptionalTrailing(prefix.to_string());
                }
            }
            return Segment::OptionalNamed(rest.to_string());
        }
        Segment::Literal(token.to_string())
    }

    fn is_optional(&self) -> bool {
        matches!(
            self,
            Segment::OptionalNamed(_) | Segment::OptionalTrailing(_)
        )
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => write!(f, "{}", text),
            Segment::Named(name) => write!(f, ":{}", name),
            Segment::OptionalNamed(name) => write!(f, "?{}", name),
            Segment::OptionalTrailing(prefix) => write!(f, "?{}?", prefix),
        }
    }
}

/// Errors raised while parsing a route template at registration time.
///
/// These are fatal for the entry being registered: the entry is rejected and
/// a diagnostic surfaced to the caller. They never occur at match time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The token sequence was empty.
    #[error("route template has no segments")]
    EmptyTemplate,

    /// An optional segment was followed by a literal or mandatory capture.
    #[error("optional segment `{segment}` must not be followed by a mandatory segment")]
    OptionalFollowedByMandatory { segment: String },
}

/// A parsed, validated path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parse an ordered sequence of raw tokens into a template.
    ///
    /// Pure: no side effects, no registration. Validation enforces that an
    /// `OptionalNamed` segment is followed only by optional segments and that
    /// `OptionalTrailing` is the last segment.
    pub fn parse<I, S>(tokens: I) -> Result<PathTemplate, RegistrationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments: Vec<Segment> = tokens
            .into_iter()
            .map(|t| Segment::from_token(t.as_ref()))
            .collect();

        if segments.is_empty() {
            return Err(RegistrationError::EmptyTemplate);
        }

        for (index, segment) in segments.iter().enumerate() {
            let last = index + 1 == segments.len();
            if last {
                break;
            }
            match segment {
                Segment::OptionalTrailing(_) => {
                    return Err(RegistrationError::OptionalFollowedByMandatory {
                        segment: segment.to_string(),
                    });
                }
                Segment::OptionalNamed(_) if !segments[index + 1].is_optional() => {
                    return Err(RegistrationError::OptionalFollowedByMandatory {
                        segment: segment.to_string(),
                    });
                }
                _ => {}
            }
        }

        Ok(PathTemplate { segments })
    }

    /// The ordered segments of this template.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of optional segments (used by lookup specificity).
    pub fn optional_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_optional()).count()
    }

    /// Number of literal segments (used by lookup specificity).
    pub fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count()
    }

    /// The identifying first literal segment, if the template starts with one.
    pub fn first_literal(&self) -> Option<&str> {
        match self.segments.first() {
            Some(Segment::Literal(text)) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kinds() {
        assert_eq!(
            Segment::from_token("tasks"),
            Segment::Literal("tasks".into())
        );
        assert_eq!(Segment::from_token(":name"), Segment::Named("name".into()));
        assert_eq!(
            Segment::from_token("?opt"),
            Segment::OptionalNamed("opt".into())
        );
        assert_eq!(
            Segment::from_token("?rest?"),
            Segment::OptionalTrailing("rest".into())
        );
        // Whitespace is trimmed, nothing else is normalized.
        assert_eq!(
            Segment::from_token("  Tasks "),
            Segment::Literal("Tasks".into())
        );
    }

    #[test]
    fn test_empty_template_rejected() {
        let err = PathTemplate::parse(Vec::<&str>::new()).unwrap_err();
        assert_eq!(err, RegistrationError::EmptyTemplate);
    }

    #[test]
    fn test_optional_followed_by_literal_rejected() {
        let err = PathTemplate::parse(["param", "?opt", "set"]).unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::OptionalFollowedByMandatory { .. }
        ));
    }

    #[test]
    fn test_optional_followed_by_named_rejected() {
        let err = PathTemplate::parse(["?opt", ":name"]).unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::OptionalFollowedByMandatory { .. }
        ));
    }

    #[test]
    fn test_trailing_must_be_last() {
        let err = PathTemplate::parse(["?rest?", "tail"]).unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::OptionalFollowedByMandatory { .. }
        ));
    }

    #[test]
    fn test_optional_chain_is_legal() {
        let template = PathTemplate::parse(["report", "?year", "?rest?"]).unwrap();
        assert_eq!(template.optional_count(), 2);
        assert_eq!(template.literal_count(), 1);
        assert_eq!(template.first_literal(), Some("report"));
    }

    #[test]
    fn test_display_round_trip() {
        let template = PathTemplate::parse(["tasks", ":id", "?rest?"]).unwrap();
        assert_eq!(template.to_string(), "tasks/:id/?rest?");
    }
}
