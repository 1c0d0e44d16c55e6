//! The semantic version value
//!
//! [`SemVer`] holds the numeric core, the pre-release and build identifier
//! sequences, and the auto-build mode. Equality, hashing and ordering live in
//! [`crate::precedence`]; correction lives in [`crate::validation`].

use crate::auto_build::{self, AutoBuild, BuildEnvironment};
use crate::error::{Error, Result};
use crate::fields::VersionPart;
use crate::parser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// A semantic version
#[derive(Debug, Clone)]
pub struct SemVer {
    /// Major version number (X in X.Y.Z)
    pub major: u32,
    /// Minor version number (Y in X.Y.Z)
    pub minor: u32,
    /// Patch version number (Z in X.Y.Z)
    pub patch: u32,
    pre_release: Vec<String>,
    build: Vec<String>,
    auto_build: AutoBuild,
}

impl Default for SemVer {
    fn default() -> Self {
        Self::new(0, 1, 0)
    }
}

impl SemVer {
    /// Create a release version with no pre-release or build identifiers
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build: Vec::new(),
            auto_build: AutoBuild::Manual,
        }
    }

    /// Parse a canonical SemVer string
    pub fn parse(text: &str) -> Result<Self> {
        parser::parse_strict(text)
    }

    /// Parse a numeric core followed by arbitrary pre-release and build text
    ///
    /// The result may hold malformed identifiers; run [`SemVer::validate`] to
    /// correct them.
    pub fn parse_lenient(text: &str) -> Result<Self> {
        parser::parse_lenient(text)
    }

    /// Builder-style pre-release assignment from dot-separated text
    pub fn with_pre_release(mut self, text: &str) -> Self {
        self.set_pre_release(text);
        self
    }

    /// Builder-style build assignment from dot-separated text
    pub fn with_build(mut self, text: &str) -> Self {
        self.set_build(text);
        self
    }

    /// Builder-style auto-build selection
    pub fn with_auto_build(mut self, mode: AutoBuild) -> Self {
        self.auto_build = mode;
        self
    }

    /// `major.minor.patch` without pre-release or build
    pub fn core(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Pre-release identifiers in order
    pub fn pre_release(&self) -> &[String] {
        &self.pre_release
    }

    /// Pre-release identifiers joined with `.`
    pub fn pre_release_text(&self) -> String {
        self.pre_release.join(".")
    }

    /// Whether this version carries pre-release identifiers
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Assign pre-release identifiers from dot-separated text
    ///
    /// Empty text clears the pre-release. Empty pieces are kept for validation.
    pub fn set_pre_release(&mut self, text: &str) {
        self.pre_release = parser::split_field(text);
    }

    /// Assign pre-release identifiers as a sequence
    pub fn set_pre_release_identifiers(&mut self, identifiers: Vec<String>) {
        self.pre_release = identifiers;
    }

    /// The selected auto-build mode
    pub fn auto_build(&self) -> AutoBuild {
        self.auto_build
    }

    /// Select the strategy that supplies the build field
    pub fn set_auto_build(&mut self, mode: AutoBuild) {
        self.auto_build = mode;
    }

    /// Effective build identifiers, sampling the process environment for
    /// generated modes
    pub fn build(&self) -> Vec<String> {
        if self.auto_build == AutoBuild::Manual {
            return self.build.clone();
        }
        self.build_with(&BuildEnvironment::current())
    }

    /// Effective build identifiers against an explicit environment
    pub fn build_with(&self, env: &BuildEnvironment) -> Vec<String> {
        auto_build::strategy(self.auto_build)
            .generate(env)
            .unwrap_or_else(|| self.build.clone())
    }

    /// Build identifiers held for manual mode, regardless of the selected mode
    pub fn manual_build(&self) -> &[String] {
        &self.build
    }

    /// Assign build identifiers from dot-separated text
    ///
    /// Returns `false` and leaves the field untouched when the selected
    /// strategy is read-only.
    pub fn set_build(&mut self, text: &str) -> bool {
        self.set_build_identifiers(parser::split_field(text))
    }

    /// Assign build identifiers as a sequence, honouring read-only strategies
    pub fn set_build_identifiers(&mut self, identifiers: Vec<String>) -> bool {
        if auto_build::strategy(self.auto_build).is_read_only() {
            debug!(
                mode = %self.auto_build,
                ignored = ?identifiers,
                "Build is generated by a read-only strategy; write ignored"
            );
            return false;
        }
        self.build = identifiers;
        true
    }

    /// Replace the manual build sequence whatever mode is selected
    pub(crate) fn replace_manual_build(&mut self, identifiers: Vec<String>) {
        self.build = identifiers;
    }

    /// Render against an explicit build environment
    pub fn render_with(&self, env: &BuildEnvironment) -> String {
        render(self.major, self.minor, self.patch, &self.pre_release, &self.build_with(env))
    }

    /// Increment the major version and reset minor and patch to 0
    pub fn increment_major(&mut self) {
        self.increment(VersionPart::Major);
    }

    /// Increment the minor version and reset patch to 0
    pub fn increment_minor(&mut self) {
        self.increment(VersionPart::Minor);
    }

    /// Increment the patch version
    pub fn increment_patch(&mut self) {
        self.increment(VersionPart::Patch);
    }

    /// Increment a numeric part and zero every lower one
    ///
    /// Returns `false` without changing anything for non-numeric parts or
    /// when the part is already at its maximum.
    pub fn increment(&mut self, part: VersionPart) -> bool {
        let current = match part {
            VersionPart::Major => self.major,
            VersionPart::Minor => self.minor,
            VersionPart::Patch => self.patch,
            VersionPart::PreRelease | VersionPart::Build => return false,
        };
        let Some(next) = current.checked_add(1) else {
            warn!(part = %part, value = current, "Version part is at its maximum; not incremented");
            return false;
        };

        match part {
            VersionPart::Major => {
                self.major = next;
                self.minor = 0;
                self.patch = 0;
            }
            VersionPart::Minor => {
                self.minor = next;
                self.patch = 0;
            }
            _ => self.patch = next,
        }
        true
    }

    /// Copy of this version with `part` incremented
    pub fn incremented(&self, part: VersionPart) -> Self {
        let mut next = self.clone();
        next.increment(part);
        next
    }

    /// Assign a numeric part from a signed numeral, as an integer input field would
    ///
    /// Out-of-range values leave the field unchanged and return `false`.
    pub fn assign_numeral(&mut self, part: VersionPart, value: i64) -> bool {
        let converted = match u32::try_from(value) {
            Ok(converted) => converted,
            Err(_) if value < 0 => {
                warn!(part = %part, value, "A version must not be negative");
                return false;
            }
            Err(_) => {
                warn!(part = %part, value, "A version must fit in 32 bits");
                return false;
            }
        };

        match part {
            VersionPart::Major => self.major = converted,
            VersionPart::Minor => self.minor = converted,
            VersionPart::Patch => self.patch = converted,
            VersionPart::PreRelease | VersionPart::Build => return false,
        }
        true
    }
}

pub(crate) fn render(major: u32, minor: u32, patch: u32, pre: &[String], build: &[String]) -> String {
    let mut out = format!("{}.{}.{}", major, minor, patch);
    if !pre.is_empty() {
        out.push('-');
        out.push_str(&pre.join("."));
    }
    if !build.is_empty() {
        out.push('+');
        out.push_str(&build.join("."));
    }
    out
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.major, self.minor, self.patch, &self.pre_release, &self.build()))
    }
}

impl FromStr for SemVer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for SemVer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemVer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        SemVer::parse(&text).map_err(serde::de::Error::custom)
    }
}
