//! Validation engine
//!
//! Validation never fails and never mutates its input. It returns a corrected
//! copy together with the kinds of problems it fixed:
//!
//! - empty identifiers are dropped
//! - characters outside `[0-9A-Za-z-]` become `-`
//! - leading zeros are stripped from numeric pre-release identifiers
//!
//! Each kind is reported at most once per segment, pre-release first.

use crate::auto_build::BuildEnvironment;
use crate::error::{ErrorKind, Result};
use crate::identifier::{self, Segment};
use crate::parser;
use crate::version::SemVer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// One problem found in one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub segment: Segment,
    pub kind: ErrorKind,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.segment, self.kind)
    }
}

/// Result of validating a version
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// No corrections were needed
    pub is_valid: bool,
    /// Independent copy with every correction applied
    pub corrected: SemVer,
    /// Error kinds, pre-release segment first, each at most once per segment
    pub errors: Vec<ErrorKind>,
    /// The same entries tagged with their segment
    pub findings: Vec<Finding>,
}

impl ValidationResult {
    /// Findings for one segment
    pub fn findings_in(&self, segment: Segment) -> impl Iterator<Item = &Finding> + '_ {
        self.findings.iter().filter(move |f| f.segment == segment)
    }
}

impl SemVer {
    /// Validate against the current process environment
    pub fn validate(&self) -> ValidationResult {
        self.validate_with(&BuildEnvironment::current())
    }

    /// Validate against an explicit build environment
    ///
    /// The environment only matters when a generated build mode is selected.
    pub fn validate_with(&self, env: &BuildEnvironment) -> ValidationResult {
        let mut corrected = self.clone();
        let mut findings = Vec::new();

        let (pre_release, kinds) = correct_segment(self.pre_release(), Segment::PreRelease);
        corrected.set_pre_release_identifiers(pre_release);
        findings.extend(kinds.into_iter().map(|kind| Finding {
            segment: Segment::PreRelease,
            kind,
        }));

        // Findings describe the effective build. The stored manual sequence is
        // corrected too, so switching the copy back to Manual keeps it valid.
        let (_, kinds) = correct_segment(&self.build_with(env), Segment::Build);
        let (manual, _) = correct_segment(self.manual_build(), Segment::Build);
        corrected.replace_manual_build(manual);
        findings.extend(kinds.into_iter().map(|kind| Finding {
            segment: Segment::Build,
            kind,
        }));

        let errors: Vec<ErrorKind> = findings.iter().map(|f| f.kind).collect();
        if !errors.is_empty() {
            debug!(
                input = %self.render_with(env),
                corrected = %corrected.render_with(env),
                ?errors,
                "Version corrected"
            );
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            corrected,
            errors,
            findings,
        }
    }

    /// Whether the version needs no correction
    pub fn is_valid(&self) -> bool {
        self.validate().is_valid
    }
}

/// Correct one identifier sequence, returning the kinds found in reporting order
fn correct_segment(identifiers: &[String], segment: Segment) -> (Vec<String>, BTreeSet<ErrorKind>) {
    let mut kinds = BTreeSet::new();
    let corrected = identifiers
        .iter()
        .filter_map(|id| {
            let check = identifier::check(id, segment);
            if let Some(kind) = check.error {
                kinds.insert(kind);
            }
            check.corrected
        })
        .collect();
    (corrected, kinds)
}

/// Parse text leniently, correct it and render the canonical form
///
/// This is the path for plain string fields that should hold a version.
pub fn normalize(text: &str) -> Result<String> {
    let version = parser::parse_lenient(text)?;
    Ok(version.validate().corrected.to_string())
}
