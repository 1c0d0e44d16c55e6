//! Bump command handler

use crate::cli::BumpArgs;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use semverkit_core::{SemVer, VersionPart};
use serde::Serialize;
use tracing::{debug, instrument};

#[derive(Debug, Serialize)]
struct BumpReport<'a> {
    previous: &'a str,
    part: VersionPart,
    version: String,
}

/// Handle the bump command
///
/// Pre-release and build identifiers are carried over unchanged.
#[instrument(skip(output))]
pub fn handle_bump(args: BumpArgs, output: &mut OutputWriter) -> Result<()> {
    let mut version = SemVer::parse(&args.version)?;
    let part = VersionPart::from(args.part);

    if !version.increment(part) {
        return Err(Error::other(format!(
            "Cannot bump {}: the {} version is already at its maximum",
            args.version,
            part.label().to_lowercase()
        )));
    }
    debug!(part = %part, version = %version, "Version bumped");

    let report = BumpReport {
        previous: &args.version,
        part,
        version: version.to_string(),
    };
    output.emit(&report.version, &report)
}
