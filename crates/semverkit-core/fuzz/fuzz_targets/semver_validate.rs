//! Fuzzing target for validation
//!
//! Arbitrary field text is corrected, and the correction must itself be valid.

#![no_main]

use libfuzzer_sys::fuzz_target;
use semverkit_core::{parser, SemVer};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let (pre, build) = text.split_once('+').unwrap_or((&*text, ""));

    let version = SemVer::new(1, 0, 0).with_pre_release(pre).with_build(build);
    let corrected = version.validate().corrected;

    assert!(corrected.validate().is_valid);
    assert!(parser::is_canonical(&corrected.to_string()));
});
