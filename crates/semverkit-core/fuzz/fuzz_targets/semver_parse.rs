//! Fuzzing target for version parsing
//!
//! Any input must either parse and render back unchanged, or fail with an
//! error. Neither parser may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use semverkit_core::SemVer;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    if let Ok(version) = SemVer::parse(&text) {
        assert_eq!(version.to_string(), text);
    }

    let _ = SemVer::parse_lenient(&text);
});
