//! Version precedence
//!
//! Equality, hashing and ordering all look at the core triplet and the
//! pre-release identifiers only. Build metadata and the auto-build mode never
//! take part.

use crate::identifier;
use crate::version::SemVer;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Compare two versions by SemVer precedence
pub fn compare(a: &SemVer, b: &SemVer) -> Ordering {
    a.major
        .cmp(&b.major)
        .then_with(|| a.minor.cmp(&b.minor))
        .then_with(|| a.patch.cmp(&b.patch))
        .then_with(|| compare_pre_release(a.pre_release(), b.pre_release()))
}

/// Compare pre-release identifier sequences
///
/// An empty sequence is a release and outranks any pre-release. Otherwise the
/// first differing identifier decides, and a shorter sequence that is a prefix
/// of the longer one ranks lower.
pub fn compare_pre_release(a: &[String], b: &[String]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a
            .iter()
            .zip(b)
            .map(|(x, y)| identifier::compare(x, y))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or_else(|| a.len().cmp(&b.len())),
    }
}

impl PartialEq for SemVer {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for SemVer {}

impl Hash for SemVer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release().hash(state);
    }
}

impl PartialOrd for SemVer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemVer {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}
