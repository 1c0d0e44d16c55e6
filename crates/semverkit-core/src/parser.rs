//! Version grammar and text parsing
//!
//! The strict grammar is the regular expression suggested by semver.org. The
//! lenient grammar keeps the numeric core but accepts any text after `-` and
//! `+`, so malformed identifiers survive long enough to be corrected.

use crate::error::{Error, Result};
use crate::version::SemVer;
use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::trace;

/// The suggested SemVer 2.0.0 validation pattern
///
/// `\d` is spelled `[0-9]` because the regex crate matches Unicode digits.
pub const SUGGESTED_PATTERN: &str = r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$";

/// Numeric core followed by free-form pre-release and build text
///
/// `(?s)` lets the build group take line breaks like the pre-release group.
pub const LENIENT_PATTERN: &str = r"(?s)^([0-9]+)\.([0-9]+)\.([0-9]+)(?:-([^+]*))?(?:\+(.*))?$";

static SUGGESTED_REGEX: OnceLock<Regex> = OnceLock::new();
static LENIENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn suggested_regex() -> &'static Regex {
    SUGGESTED_REGEX.get_or_init(|| Regex::new(SUGGESTED_PATTERN).expect("suggested pattern compiles"))
}

fn lenient_regex() -> &'static Regex {
    LENIENT_REGEX.get_or_init(|| Regex::new(LENIENT_PATTERN).expect("lenient pattern compiles"))
}

/// Whether `text` is a canonical SemVer string
pub fn is_canonical(text: &str) -> bool {
    suggested_regex().is_match(text)
}

/// Parse text against the strict grammar
pub fn parse_strict(text: &str) -> Result<SemVer> {
    let captures = suggested_regex().captures(text).ok_or_else(|| {
        Error::unparsable(text, "does not match MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]")
    })?;
    from_captures(text, &captures)
}

/// Parse text against the lenient grammar
pub fn parse_lenient(text: &str) -> Result<SemVer> {
    let captures = lenient_regex().captures(text).ok_or_else(|| {
        Error::unparsable(text, "expected a numeric MAJOR.MINOR.PATCH core")
    })?;
    from_captures(text, &captures)
}

fn from_captures(text: &str, captures: &Captures<'_>) -> Result<SemVer> {
    let mut version = SemVer::new(
        numeral(text, captures, 1, "major")?,
        numeral(text, captures, 2, "minor")?,
        numeral(text, captures, 3, "patch")?,
    );

    // A bare "-" or "+" still yields one empty identifier so validation sees it
    if let Some(pre) = captures.get(4) {
        version.set_pre_release_identifiers(split_identifiers(pre.as_str()));
    }
    if let Some(build) = captures.get(5) {
        version.set_build_identifiers(split_identifiers(build.as_str()));
    }

    trace!(input = text, parsed = ?version, "Parsed version");
    Ok(version)
}

fn numeral(text: &str, captures: &Captures<'_>, group: usize, name: &str) -> Result<u32> {
    let digits = captures.get(group).map(|m| m.as_str()).unwrap_or_default();
    digits
        .parse::<u32>()
        .map_err(|_| Error::unparsable(text, format!("{} version '{}' does not fit in 32 bits", name, digits)))
}

/// Split a segment on `.`, keeping empty pieces
pub fn split_identifiers(segment: &str) -> Vec<String> {
    segment.split('.').map(str::to_string).collect()
}

/// Split field text the way a text box assigns it: empty text means no identifiers
pub fn split_field(text: &str) -> Vec<String> {
    if text.is_empty() {
        Vec::new()
    } else {
        split_identifiers(text)
    }
}
