//! Integer encodings of the core triplet
//!
//! [`SemVer::build_code`] is the decimal platform scheme
//! `major * 10000 + minor * 100 + patch` used by release packaging that needs
//! one increasing integer per build. [`SemVer::monotonic_code`] packs the
//! triplet into 21-bit fields of a `u64`.
//!
//! Both refuse to encode a part that does not fit its field, since a wrapped
//! value would no longer sort like the version.

use crate::error::{Error, Result};
use crate::fields::VersionPart;
use crate::version::SemVer;

/// Exclusive upper bound for minor and patch in the decimal scheme
pub const DECIMAL_PART_LIMIT: u32 = 100;

/// Largest major that keeps the decimal scheme within `u32`
pub const DECIMAL_MAJOR_MAX: u32 = (u32::MAX - 9_999) / 10_000;

/// Bits per part in the monotonic code
pub const MONOTONIC_PART_BITS: u32 = 21;

const MONOTONIC_PART_MAX: u64 = (1 << MONOTONIC_PART_BITS) - 1;

impl SemVer {
    /// Platform build number `major * 10000 + minor * 100 + patch`
    pub fn build_code(&self) -> Result<u32> {
        check(VersionPart::Major, self.major, DECIMAL_MAJOR_MAX)?;
        check(VersionPart::Minor, self.minor, DECIMAL_PART_LIMIT - 1)?;
        check(VersionPart::Patch, self.patch, DECIMAL_PART_LIMIT - 1)?;
        Ok(self.major * 10_000 + self.minor * 100 + self.patch)
    }

    /// Triplet packed as `major << 42 | minor << 21 | patch`
    pub fn monotonic_code(&self) -> Result<u64> {
        let mut code = 0u64;
        for (part, value) in [
            (VersionPart::Major, self.major),
            (VersionPart::Minor, self.minor),
            (VersionPart::Patch, self.patch),
        ] {
            if u64::from(value) > MONOTONIC_PART_MAX {
                return Err(overflow(part, u64::from(value), MONOTONIC_PART_MAX));
            }
            code = (code << MONOTONIC_PART_BITS) | u64::from(value);
        }
        Ok(code)
    }
}

fn check(part: VersionPart, value: u32, max: u32) -> Result<()> {
    if value > max {
        return Err(overflow(part, u64::from(value), u64::from(max)));
    }
    Ok(())
}

fn overflow(part: VersionPart, value: u64, limit: u64) -> Error {
    Error::BuildCodeOverflow { part, value, limit }
}
