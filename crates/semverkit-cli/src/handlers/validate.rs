//! Validation command handler

use crate::cli::{OutputFormat, ValidateArgs};
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::{OutputWriter, ValidationReport};
use semverkit_core::SemVer;
use tracing::{info, instrument, warn};

/// Handle the validate command
///
/// The input is parsed leniently so malformed identifiers can be reported
/// and corrected instead of rejected outright.
#[instrument(skip(output), fields(version = %args.version, fix = args.fix))]
pub fn handle_validate(args: ValidateArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("validate_command", &args.version);

    let version = SemVer::parse_lenient(&args.version)?;
    let result = version.validate();
    let corrected = result.corrected.to_string();

    if result.is_valid {
        info!("Version is valid");
    } else {
        warn!(problems = result.findings.len(), corrected = %corrected, "Version needs correction");
    }

    let report = ValidationReport {
        input: &args.version,
        is_valid: result.is_valid,
        corrected: corrected.clone(),
        errors: &result.errors,
        findings: &result.findings,
    };

    if args.fix && output.format() == OutputFormat::Human {
        // Only the corrected version goes to stdout so it can be captured;
        // the fixes are logged to stderr
        for finding in &result.findings {
            info!(%finding, "Fixed");
        }
        return output.writeln(&corrected);
    }

    output.validation_report(&report)?;

    if !result.is_valid && !args.fix {
        return Err(Error::InvalidVersion {
            input: args.version.clone(),
            problems: result.findings.len(),
        });
    }
    Ok(())
}
