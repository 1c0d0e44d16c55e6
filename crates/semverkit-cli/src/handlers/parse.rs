//! Parse command handler

use crate::cli::ParseArgs;
use crate::error::Result;
use crate::output::{OutputWriter, VersionReport};
use semverkit_core::SemVer;
use tracing::{debug, instrument};

/// Handle the parse command
#[instrument(skip(output), fields(version = %args.version, lenient = args.lenient))]
pub fn handle_parse(args: ParseArgs, output: &mut OutputWriter) -> Result<()> {
    let version = if args.lenient {
        SemVer::parse_lenient(&args.version)?
    } else {
        SemVer::parse(&args.version)?
    };
    debug!(parsed = ?version, "Version parsed");

    let report = VersionReport::from(&version);
    output.version_report(&report)?;

    if !report.is_valid {
        output.warning(&format!(
            "{} needs correction; run 'semverkit validate --fix'",
            args.version
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::error::Error;
    use crate::output::capture;

    fn args(version: &str, lenient: bool) -> ParseArgs {
        ParseArgs {
            version: version.to_string(),
            lenient,
        }
    }

    #[test]
    fn test_parse_prints_parts() {
        let (mut output, buffer) = capture::writer(OutputFormat::Human);
        handle_parse(args("1.0.0-beta.11+exp.sha.5114f85", false), &mut output).unwrap();

        let text = buffer.contents();
        assert!(text.contains("Pre-Release: beta.11"));
        assert!(text.contains("exp.sha.5114f85"));
        assert!(!text.contains("WARNING"));
    }

    #[test]
    fn test_strict_parse_rejects_malformed_identifiers() {
        let (mut output, _buffer) = capture::writer(OutputFormat::Human);
        let err = handle_parse(args("1.0.0-a..b", false), &mut output).unwrap_err();
        assert!(matches!(err, Error::Core(semverkit_core::Error::Unparsable { .. })));
    }

    #[test]
    fn test_lenient_parse_warns() {
        let (mut output, buffer) = capture::writer(OutputFormat::Human);
        handle_parse(args("1.0.0-a..b", true), &mut output).unwrap();
        assert!(buffer.contents().contains("WARNING: 1.0.0-a..b needs correction"));
    }

    #[test]
    fn test_parse_json() {
        let (mut output, buffer) = capture::writer(OutputFormat::Json);
        handle_parse(args("3.2.1", false), &mut output).unwrap();
        let value: serde_json::Value = serde_json::from_str(buffer.contents().trim()).unwrap();
        assert_eq!(value["major"], 3);
        assert_eq!(value["is_valid"], true);
    }
}
