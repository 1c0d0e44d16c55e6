//! Integration tests for the public semverkit-core API
//!
//! Literal cases from the SemVer 2.0.0 document and from the behaviour that
//! presentation layers rely on.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use semverkit_core::{
    auto_build, compare, normalize, AutoBuild, BuildEnvironment, Error, ErrorKind, Segment,
    SemVer, VersionPart,
};
use std::cmp::Ordering;

fn v(text: &str) -> SemVer {
    SemVer::parse(text).unwrap_or_else(|e| panic!("{} should parse: {}", text, e))
}

fn fixed_env() -> BuildEnvironment {
    BuildEnvironment::fixed(Utc.with_ymd_and_hms(2013, 3, 13, 14, 47, 0).unwrap())
        .with_var("GIT_COMMIT", "5114f85aabbccdd")
        .with_var("BUILD_NUMBER", "128")
}

#[test]
fn test_round_trip_of_canonical_strings() {
    for text in [
        "0.0.0",
        "0.1.0",
        "1.2.3-pr+b",
        "1.0.0-alpha.1",
        "1.0.0-0.3.7",
        "1.0.0-x.7.z.92",
        "1.0.0-x-y-z.--",
        "1.0.0-alpha+001",
        "1.0.0+20130313144700",
        "1.0.0-beta+exp.sha.5114f85",
        "1.0.0+21AF26D3----117B344092BD",
        "99999999.99999999.99999999",
    ] {
        assert_eq!(v(text).to_string(), text);
    }
}

#[test]
fn test_default_value() {
    assert_eq!(SemVer::default().to_string(), "0.1.0");
    assert_eq!(SemVer::default().auto_build(), AutoBuild::Manual);
}

#[test]
fn test_string_conversion_literals() {
    let version = SemVer::new(1, 2, 3).with_pre_release("pr").with_build("b");
    assert_eq!(version.to_string(), "1.2.3-pr+b");

    let version = SemVer::default().with_pre_release("pre-alpha");
    assert_eq!(version.to_string(), "0.1.0-pre-alpha");
}

#[test]
fn test_parse_yields_fields() {
    let cases = [
        ("1.2.3-pr+b", (1, 2, 3), vec!["pr"], vec!["b"]),
        ("1.2.3+b", (1, 2, 3), vec![], vec!["b"]),
        ("1.2.3-pr", (1, 2, 3), vec!["pr"], vec![]),
        ("0.1.0-pre-alpha", (0, 1, 0), vec!["pre-alpha"], vec![]),
    ];
    for (text, core, pre, build) in cases {
        let version = v(text);
        assert_eq!((version.major, version.minor, version.patch), core, "{}", text);
        assert_eq!(version.pre_release(), pre.as_slice(), "{}", text);
        assert_eq!(version.build(), build, "{}", text);
    }
    assert_eq!(v("4.5.6-alpha+CustomBuild3").core(), "4.5.6");
}

#[test]
fn test_manual_mode_returns_literal_build() {
    let version = SemVer::default().with_build("auto-build");
    assert_eq!(version.auto_build(), AutoBuild::Manual);
    assert_eq!(version.build(), vec!["auto-build".to_string()]);
    assert_eq!(version.to_string(), "0.1.0+auto-build");
}

#[test]
fn test_parse_failures_are_errors() {
    for text in ["", "1", "1.2", "v1.2.3", "1.2.3-", "1.2.3-01", "01.2.3", "1.2.3+a..b"] {
        let err = SemVer::parse(text).unwrap_err();
        assert!(matches!(err, Error::Unparsable { .. }), "{}", text);
    }
    assert!("1.2.3".parse::<SemVer>().is_ok());
}

#[test]
fn test_precedence_chain() {
    let chain = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
    ];
    for pair in chain.windows(2) {
        assert_eq!(compare(&v(pair[1]), &v(pair[0])), Ordering::Greater);
    }
    // Transitivity over the whole chain
    for (i, lower) in chain.iter().enumerate() {
        for higher in &chain[i + 1..] {
            assert!(v(lower) < v(higher), "{} < {}", lower, higher);
        }
    }
}

#[test]
fn test_build_irrelevance() {
    let base = SemVer::new(1, 0, 0).with_pre_release("beta");
    for build in ["", "001", "exp.sha.5114f85", "a a", "."] {
        let other = base.clone().with_build(build);
        assert_eq!(compare(&base, &other), Ordering::Equal, "build {:?}", build);
    }

    let generated = base.clone().with_auto_build(AutoBuild::Timestamp);
    assert_eq!(base, generated);
}

#[test]
fn test_validation_literal_cases() {
    let cases = [
        (".", ".", "0.1.0", vec![ErrorKind::Empty, ErrorKind::Empty]),
        ("a..a", "a..a", "0.1.0-a.a+a.a", vec![ErrorKind::Empty, ErrorKind::Empty]),
        ("a a", "a a", "0.1.0-a-a+a-a", vec![ErrorKind::Invalid, ErrorKind::Invalid]),
        ("01", "", "0.1.0-1", vec![ErrorKind::LeadingZero]),
        ("alpha", "001", "0.1.0-alpha+001", vec![]),
    ];
    for (pre, build, expected, errors) in cases {
        let version = SemVer::default().with_pre_release(pre).with_build(build);
        let result = version.validate();
        assert_eq!(result.corrected.to_string(), expected, "pre={:?} build={:?}", pre, build);
        assert_eq!(result.errors, errors, "pre={:?} build={:?}", pre, build);
        assert_eq!(result.is_valid, result.errors.is_empty());
    }
}

#[test]
fn test_findings_carry_their_segment() {
    let result = SemVer::default().with_pre_release("01").with_build("a a").validate();
    let segments: Vec<Segment> = result.findings.iter().map(|f| f.segment).collect();
    assert_eq!(segments, vec![Segment::PreRelease, Segment::Build]);
    assert_eq!(result.findings[1].to_string(), format!("build: {}", ErrorKind::Invalid));
}

#[test]
fn test_validation_is_idempotent_and_non_mutating() {
    let version = SemVer::new(3, 1, 4).with_pre_release("..00.x$y.0").with_build("+.é");
    let snapshot = (version.to_string(), version.pre_release().to_vec(), version.build());

    let first = version.validate();
    let second = first.corrected.validate();

    assert!(!first.is_valid);
    assert!(second.is_valid);
    assert_eq!(second.corrected.to_string(), first.corrected.to_string());
    assert_eq!((version.to_string(), version.pre_release().to_vec(), version.build()), snapshot);
}

#[test]
fn test_build_code_literal() {
    let version = SemVer::new(1, 2, 3).with_pre_release("alpha").with_build("CustomBuild4");
    assert_eq!(version.build_code().unwrap(), 10203);
    assert!(SemVer::new(1, 100, 0).build_code().is_err());
}

#[test]
fn test_increment_semantics() {
    let start = SemVer::new(1, 2, 3);

    let major = start.incremented(VersionPart::Major);
    assert_eq!((major.major, major.minor, major.patch), (2, 0, 0));

    let minor = start.incremented(VersionPart::Minor);
    assert_eq!((minor.major, minor.minor, minor.patch), (1, 3, 0));

    let patch = start.incremented(VersionPart::Patch);
    assert_eq!((patch.major, patch.minor, patch.patch), (1, 2, 4));
}

#[test]
fn test_generated_builds_render_against_environment() {
    let env = fixed_env();
    let version = SemVer::new(1, 0, 0);

    let rendered: Vec<String> = AutoBuild::ALL
        .into_iter()
        .map(|mode| version.clone().with_auto_build(mode).render_with(&env))
        .collect();
    assert_eq!(
        rendered,
        vec![
            "1.0.0",
            "1.0.0+20130313144700",
            "1.0.0+sha.5114f85",
            "1.0.0+build.128",
        ]
    );

    for strategy in auto_build::registry() {
        let generated = version.clone().with_auto_build(strategy.mode);
        assert!(generated.validate_with(&env).is_valid, "{}", strategy.name);
    }
}

#[test]
fn test_manual_build_survives_mode_switch() {
    let mut version = SemVer::default().with_build("exp.1");
    version.set_auto_build(AutoBuild::CiBuildNumber);
    assert!(!version.set_build("ignored"));
    version.set_auto_build(AutoBuild::Manual);
    assert_eq!(version.to_string(), "0.1.0+exp.1");
}

#[test]
fn test_normalize_string_fields() {
    assert_eq!(normalize("1.0.0-rc..01+exp sha").unwrap(), "1.0.0-rc.1+exp-sha");
    assert_eq!(normalize("2.0.0").unwrap(), "2.0.0");
    assert!(normalize("2.0").is_err());
}

#[test]
fn test_serde_in_documents() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Manifest {
        version: SemVer,
    }

    let manifest: Manifest = serde_json::from_str(r#"{"version":"1.4.0-rc.2+ci.7"}"#).unwrap();
    assert_eq!(manifest.version, v("1.4.0-rc.2"));
    assert_eq!(
        serde_json::to_string(&manifest).unwrap(),
        r#"{"version":"1.4.0-rc.2+ci.7"}"#
    );
}
