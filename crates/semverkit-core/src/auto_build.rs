//! Auto-build strategies
//!
//! [`AutoBuild`] selects who supplies a version's build metadata: the caller
//! (Manual) or one of the read-only generators. Each mode maps to exactly one
//! [`BuildStrategy`] in a process-wide static table.
//!
//! Generators read a [`BuildEnvironment`] rather than the process directly so
//! their output can be pinned in tests.

use crate::identifier::{self, Segment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Variables consulted by [`AutoBuild::VcsRevision`], in priority order
pub const VCS_REVISION_VARS: [&str; 4] = [
    "SEMVERKIT_VCS_REVISION",
    "GIT_COMMIT",
    "GITHUB_SHA",
    "CI_COMMIT_SHA",
];

/// Variables consulted by [`AutoBuild::CiBuildNumber`], in priority order
pub const BUILD_NUMBER_VARS: [&str; 4] = [
    "SEMVERKIT_BUILD_NUMBER",
    "BUILD_NUMBER",
    "GITHUB_RUN_NUMBER",
    "CI_PIPELINE_IID",
];

/// Length of the abbreviated revision hash
pub const SHORT_REVISION_LEN: usize = 7;

/// Source of a version's build metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoBuild {
    /// Build identifiers are supplied by the caller
    #[default]
    Manual,
    /// UTC timestamp `YYYYMMDDHHMMSS`
    Timestamp,
    /// Abbreviated source-control revision, `sha.<rev>`
    VcsRevision,
    /// Continuous-integration build counter, `build.<n>`
    CiBuildNumber,
}

impl AutoBuild {
    /// Every mode, in registry order
    pub const ALL: [AutoBuild; 4] = [
        AutoBuild::Manual,
        AutoBuild::Timestamp,
        AutoBuild::VcsRevision,
        AutoBuild::CiBuildNumber,
    ];

    /// Stable kebab-case name
    pub fn name(self) -> &'static str {
        strategy(self).name
    }
}

impl fmt::Display for AutoBuild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AutoBuild {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        AutoBuild::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = AutoBuild::ALL.iter().map(|m| m.name()).collect();
                format!("unknown auto-build mode '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

/// Snapshot of everything a generator may sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEnvironment {
    /// Clock reading used by time-based generators
    pub now: DateTime<Utc>,
    vars: BTreeMap<String, String>,
}

impl BuildEnvironment {
    /// Sample the current clock and the variables generators read
    pub fn current() -> Self {
        let vars = VCS_REVISION_VARS
            .iter()
            .chain(BUILD_NUMBER_VARS.iter())
            .filter_map(|name| std::env::var(name).ok().map(|value| (name.to_string(), value)))
            .collect();
        Self {
            now: Utc::now(),
            vars,
        }
    }

    /// Fixed environment with no variables set
    pub fn fixed(now: DateTime<Utc>) -> Self {
        Self {
            now,
            vars: BTreeMap::new(),
        }
    }

    /// Add or replace a variable
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Look up a variable; blank values count as unset
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    fn first_var(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.var(name))
    }
}

type Generator = fn(&BuildEnvironment) -> Vec<String>;

/// A named source of build metadata
pub struct BuildStrategy {
    /// Mode this strategy serves
    pub mode: AutoBuild,
    /// Stable kebab-case name
    pub name: &'static str,
    /// One-line description for listings
    pub description: &'static str,
    generator: Option<Generator>,
}

impl fmt::Debug for BuildStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildStrategy")
            .field("mode", &self.mode)
            .field("name", &self.name)
            .field("read_only", &self.is_read_only())
            .finish()
    }
}

impl BuildStrategy {
    /// Read-only strategies compute the build field and ignore writes to it
    pub fn is_read_only(&self) -> bool {
        self.generator.is_some()
    }

    /// Compute build identifiers, or `None` for the manual strategy
    ///
    /// Generated identifiers are sanitized, so they are always valid.
    pub fn generate(&self, env: &BuildEnvironment) -> Option<Vec<String>> {
        self.generator.map(|generate| {
            generate(env)
                .iter()
                .filter_map(|id| identifier::sanitize(id, Segment::Build))
                .collect()
        })
    }
}

static REGISTRY: [BuildStrategy; 4] = [
    BuildStrategy {
        mode: AutoBuild::Manual,
        name: "manual",
        description: "Build identifiers are entered by hand",
        generator: None,
    },
    BuildStrategy {
        mode: AutoBuild::Timestamp,
        name: "timestamp",
        description: "UTC build time as YYYYMMDDHHMMSS",
        generator: Some(timestamp),
    },
    BuildStrategy {
        mode: AutoBuild::VcsRevision,
        name: "vcs-revision",
        description: "Abbreviated source-control revision from the CI environment",
        generator: Some(vcs_revision),
    },
    BuildStrategy {
        mode: AutoBuild::CiBuildNumber,
        name: "ci-build-number",
        description: "Build counter from the CI environment",
        generator: Some(ci_build_number),
    },
];

/// Every registered strategy, in [`AutoBuild::ALL`] order
pub fn registry() -> &'static [BuildStrategy] {
    &REGISTRY
}

/// The strategy serving `mode`
pub fn strategy(mode: AutoBuild) -> &'static BuildStrategy {
    &REGISTRY[mode as usize]
}

fn timestamp(env: &BuildEnvironment) -> Vec<String> {
    vec![env.now.format("%Y%m%d%H%M%S").to_string()]
}

fn vcs_revision(env: &BuildEnvironment) -> Vec<String> {
    let revision = env
        .first_var(&VCS_REVISION_VARS)
        .map(|rev| rev.chars().take(SHORT_REVISION_LEN).collect::<String>())
        .unwrap_or_else(|| "unknown".to_string());
    vec!["sha".to_string(), revision]
}

fn ci_build_number(env: &BuildEnvironment) -> Vec<String> {
    let number = env.first_var(&BUILD_NUMBER_VARS).unwrap_or("0");
    vec!["build".to_string(), number.to_string()]
}
