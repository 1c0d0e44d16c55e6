//! Build-code command handler

use crate::cli::BuildCodeArgs;
use crate::error::Result;
use crate::output::OutputWriter;
use semverkit_core::SemVer;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct BuildCodeReport<'a> {
    version: &'a str,
    scheme: &'static str,
    code: u64,
}

/// Handle the build-code command
#[instrument(skip(output))]
pub fn handle_build_code(args: BuildCodeArgs, output: &mut OutputWriter) -> Result<()> {
    let version = SemVer::parse(&args.version)?;

    let (scheme, code) = if args.monotonic {
        ("monotonic", version.monotonic_code()?)
    } else {
        ("decimal", u64::from(version.build_code()?))
    };

    let report = BuildCodeReport {
        version: &args.version,
        scheme,
        code,
    };
    output.emit(&code.to_string(), &report)
}
