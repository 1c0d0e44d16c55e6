//! Field metadata for presentation layers
//!
//! Labels, SemVer descriptions and increment hints for every part of a
//! version, so front ends can explain a field without restating the rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One addressable part of a semantic version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VersionPart {
    Major,
    Minor,
    Patch,
    PreRelease,
    Build,
}

impl VersionPart {
    /// All parts in rendering order
    pub const ALL: [VersionPart; 5] = [
        VersionPart::Major,
        VersionPart::Minor,
        VersionPart::Patch,
        VersionPart::PreRelease,
        VersionPart::Build,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            VersionPart::Major => "Major",
            VersionPart::Minor => "Minor",
            VersionPart::Patch => "Patch",
            VersionPart::PreRelease => "Pre-Release",
            VersionPart::Build => "Build",
        }
    }

    /// What SemVer says about this part
    pub fn description(self) -> &'static str {
        match self {
            VersionPart::Major => {
                "Major version X (X.y.z | X > 0) MUST be incremented if any backwards incompatible \
                 changes are introduced to the public API. It MAY include minor and patch level \
                 changes. Patch and minor version MUST be reset to 0 when major version is \
                 incremented."
            }
            VersionPart::Minor => {
                "Minor version Y (x.Y.z | x > 0) MUST be incremented if new, backwards compatible \
                 functionality is introduced to the public API. It MUST be incremented if any \
                 public API functionality is marked as deprecated. It MAY be incremented if \
                 substantial new functionality or improvements are introduced within the private \
                 code. It MAY include patch level changes. Patch version MUST be reset to 0 when \
                 minor version is incremented."
            }
            VersionPart::Patch => {
                "Patch version Z (x.y.Z | x > 0) MUST be incremented if only backwards compatible \
                 bug fixes are introduced."
            }
            VersionPart::PreRelease => {
                "A pre-release version indicates that the version is unstable and might not \
                 satisfy the intended compatibility requirements as denoted by its associated \
                 normal version."
            }
            VersionPart::Build => {
                "Build metadata MUST be ignored when determining version precedence. Thus two \
                 versions that differ only in the build metadata, have the same precedence."
            }
        }
    }

    /// Hint for the increment action, only defined for the numeric parts
    pub fn increment_hint(self) -> Option<&'static str> {
        match self {
            VersionPart::Major => {
                Some("Increment the major version, reset the patch and the minor version to 0.")
            }
            VersionPart::Minor => Some("Increment the minor version, reset the patch version to 0."),
            VersionPart::Patch => Some("Increment the patch version."),
            VersionPart::PreRelease | VersionPart::Build => None,
        }
    }

    /// Whether this part is one of major, minor, patch
    pub fn is_numeric(self) -> bool {
        self.increment_hint().is_some()
    }
}

impl fmt::Display for VersionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VersionPart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(VersionPart::Major),
            "minor" => Ok(VersionPart::Minor),
            "patch" => Ok(VersionPart::Patch),
            "pre-release" | "prerelease" | "pre_release" | "pre" => Ok(VersionPart::PreRelease),
            "build" => Ok(VersionPart::Build),
            other => Err(format!("unknown version part '{}'", other)),
        }
    }
}
