//! The spec string grammar.
//!
//! The first character of a spec selects its resolution mode: `!` literal
//! escape, `#` tag expansion, `$` alias lookup, and anything alphanumeric is
//! a bare name resolved through exact-match-then-convention fallbacks.

use std::fmt;

use crate::error::{ResolveError, ResolveResult};

/// A parsed spec: operator sigil plus payload, or a bare name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpecOp<'a> {
    /// `!name` — use the rest verbatim, no lookups.
    Literal(&'a str),
    /// `#tag` — expand to the tag's ordered member list.
    Tag(&'a str),
    /// `$alias` — follow the alias table.
    Alias(&'a str),
    /// Bare name — exact match first, then convention fallbacks.
    Name,
}

impl<'a> SpecOp<'a> {
    pub(crate) fn parse(spec: &'a str) -> ResolveResult<Self> {
        // Sigils are single ASCII bytes, so byte slicing is safe.
        match spec.chars().next() {
            Some('!') => Ok(Self::Literal(&spec[1..])),
            Some('#') => Ok(Self::Tag(&spec[1..])),
            Some('$') => Ok(Self::Alias(&spec[1..])),
            Some(c) if c.is_alphanumeric() => Ok(Self::Name),
            _ => Err(ResolveError::InvalidSpec {
                spec: spec.to_string(),
            }),
        }
    }
}

/// A field spec argument: one spec string, or an ordered list of spec
/// strings resolved independently and concatenated (duplicates kept).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for FieldSpec {
    fn from(spec: &str) -> Self {
        Self::One(spec.to_string())
    }
}

impl From<String> for FieldSpec {
    fn from(spec: String) -> Self {
        Self::One(spec)
    }
}

impl From<Vec<String>> for FieldSpec {
    fn from(specs: Vec<String>) -> Self {
        Self::Many(specs)
    }
}

impl From<Vec<&str>> for FieldSpec {
    fn from(specs: Vec<&str>) -> Self {
        Self::Many(specs.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for FieldSpec {
    fn from(specs: &[&str]) -> Self {
        Self::Many(specs.iter().map(|s| (*s).to_string()).collect())
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(spec) => f.write_str(spec),
            Self::Many(specs) => f.write_str(&specs.join(", ")),
        }
    }
}
