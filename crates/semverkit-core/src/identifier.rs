//! Identifier validation and correction
//!
//! An identifier is one dot-separated token of the pre-release or build
//! segment. Checks run in the order Empty, Invalid, LeadingZero and the first
//! rule that applies decides the outcome.

use crate::error::ErrorKind;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The segment an identifier belongs to
///
/// Only pre-release identifiers are subject to the leading-zero rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    PreRelease,
    Build,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::PreRelease => write!(f, "pre-release"),
            Segment::Build => write!(f, "build"),
        }
    }
}

/// Outcome of checking a single identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierCheck {
    /// The identifier was already valid
    pub ok: bool,
    /// Replacement for the identifier; `None` removes it from its sequence
    pub corrected: Option<String>,
    /// What was wrong, if anything
    pub error: Option<ErrorKind>,
}

impl IdentifierCheck {
    fn valid(identifier: &str) -> Self {
        Self {
            ok: true,
            corrected: Some(identifier.to_string()),
            error: None,
        }
    }

    fn corrected(corrected: Option<String>, error: ErrorKind) -> Self {
        Self {
            ok: false,
            corrected,
            error: Some(error),
        }
    }
}

/// Whether `c` belongs to the identifier alphabet `[0-9A-Za-z-]`
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Whether the identifier is made of ASCII digits only
pub fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Check an identifier and compute its correction
pub fn check(identifier: &str, segment: Segment) -> IdentifierCheck {
    if identifier.is_empty() {
        return IdentifierCheck::corrected(None, ErrorKind::Empty);
    }

    if !identifier.chars().all(is_identifier_char) {
        let replaced: String = identifier
            .chars()
            .map(|c| if is_identifier_char(c) { c } else { '-' })
            .collect();
        return IdentifierCheck::corrected(Some(replaced), ErrorKind::Invalid);
    }

    if segment == Segment::PreRelease && has_leading_zero(identifier) {
        let stripped = identifier.trim_start_matches('0');
        let stripped = if stripped.is_empty() { "0" } else { stripped };
        return IdentifierCheck::corrected(Some(stripped.to_string()), ErrorKind::LeadingZero);
    }

    IdentifierCheck::valid(identifier)
}

/// Whether the identifier passes every rule for its segment
pub fn is_valid(identifier: &str, segment: Segment) -> bool {
    check(identifier, segment).ok
}

/// Apply every correction that applies to an identifier
///
/// A single [`check`] reports one kind, but an identifier like `0$1` needs the
/// substitution and nothing more, while `007` needs only stripping. Running
/// the check until it settles yields an identifier that is valid or removed.
pub fn sanitize(identifier: &str, segment: Segment) -> Option<String> {
    let mut current = identifier.to_string();
    loop {
        let result = check(&current, segment);
        match result.corrected {
            None => return None,
            Some(next) if result.ok => return Some(next),
            Some(next) => current = next,
        }
    }
}

fn has_leading_zero(identifier: &str) -> bool {
    identifier.len() > 1 && identifier.starts_with('0') && is_numeric(identifier)
}

/// Compare two pre-release identifiers by SemVer precedence
///
/// Numeric identifiers compare numerically and always rank below alphanumeric
/// ones; alphanumeric identifiers compare by ASCII code point.
pub fn compare(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

// Digit strings of any length, no u64 limit. Equal only when identical, which
// keeps Ord in line with Eq and Hash for values that still carry leading zeros.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
