//! Semverkit Core - Semantic Versioning 2.0.0 values
//!
//! This crate provides a strongly typed SemVer value with parsing, precedence,
//! validation with automatic correction, and pluggable build metadata.
//!
//! # Main Components
//!
//! - **Version value**: [`SemVer`] with increments and field assignment
//! - **Precedence**: `Eq`, `Hash` and `Ord` following semver.org, build ignored
//! - **Validation**: [`SemVer::validate`] returns a corrected copy and the problems fixed
//! - **Auto-build**: [`AutoBuild`] strategies that generate the build field
//! - **Build codes**: integer encodings of the core triplet for platform packaging
//!
//! # Example
//!
//! ```
//! use semverkit_core::{ErrorKind, Result, SemVer};
//!
//! fn example() -> Result<()> {
//!     let version = SemVer::parse("1.0.0-rc.1+build.5")?;
//!     assert!(version < SemVer::parse("1.0.0")?);
//!
//!     let result = SemVer::new(1, 2, 3).with_pre_release("a..01").validate();
//!     assert_eq!(result.corrected.to_string(), "1.2.3-a.1");
//!     assert_eq!(result.errors, vec![ErrorKind::Empty, ErrorKind::LeadingZero]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod auto_build;
pub mod build_code;
pub mod error;
pub mod fields;
pub mod identifier;
pub mod parser;
pub mod precedence;
pub mod validation;
pub mod version;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use auto_build::{AutoBuild, BuildEnvironment, BuildStrategy};
pub use error::{Error, ErrorKind, Result};
pub use fields::VersionPart;
pub use identifier::Segment;
pub use precedence::compare;
pub use validation::{normalize, Finding, ValidationResult};
pub use version::SemVer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
