//! Stamp command handler

use crate::cli::StampArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use semverkit_core::{AutoBuild, BuildEnvironment, SemVer};
use serde::Serialize;
use tracing::{debug, info, instrument};

#[derive(Debug, Serialize)]
struct StampReport {
    version: String,
    auto_build: AutoBuild,
    build: Vec<String>,
}

/// Handle the stamp command
#[instrument(skip(config, output))]
pub fn handle_stamp(args: StampArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    stamp_with(args, config, &BuildEnvironment::current(), output)
}

fn stamp_with(
    args: StampArgs,
    config: &Config,
    env: &BuildEnvironment,
    output: &mut OutputWriter,
) -> Result<()> {
    let mut version = SemVer::parse(&args.version)?;
    let mode = args
        .auto_build
        .map(AutoBuild::from)
        .unwrap_or(config.defaults.auto_build);

    if mode == AutoBuild::Manual {
        info!("Manual mode keeps the build identifiers given on the command line");
    }
    version.set_auto_build(mode);

    let report = StampReport {
        version: version.render_with(env),
        auto_build: mode,
        build: version.build_with(env),
    };
    debug!(mode = %mode, version = %report.version, "Version stamped");

    output.emit(&report.version, &report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{AutoBuildMode, OutputFormat};
    use crate::config::DefaultsConfig;
    use crate::output::capture;
    use chrono::{TimeZone, Utc};

    fn env() -> BuildEnvironment {
        BuildEnvironment::fixed(Utc.with_ymd_and_hms(2013, 3, 13, 14, 47, 0).unwrap())
            .with_var("GITHUB_SHA", "5114f85aabbccdd")
            .with_var("GITHUB_RUN_NUMBER", "42")
    }

    fn stamp(version: &str, mode: Option<AutoBuildMode>, config: &Config) -> String {
        let (mut output, buffer) = capture::writer(OutputFormat::Human);
        let args = StampArgs {
            version: version.to_string(),
            auto_build: mode,
        };
        stamp_with(args, config, &env(), &mut output).unwrap();
        buffer.contents()
    }

    #[test]
    fn test_stamp_replaces_build() {
        let config = Config::default();
        assert_eq!(
            stamp("1.2.3+old", Some(AutoBuildMode::Timestamp), &config),
            "1.2.3+20130313144700\n"
        );
        assert_eq!(
            stamp("1.2.3-rc.1", Some(AutoBuildMode::VcsRevision), &config),
            "1.2.3-rc.1+sha.5114f85\n"
        );
        assert_eq!(
            stamp("1.2.3", Some(AutoBuildMode::CiBuildNumber), &config),
            "1.2.3+build.42\n"
        );
    }

    #[test]
    fn test_stamp_uses_configured_default() {
        let config = Config {
            defaults: DefaultsConfig {
                auto_build: AutoBuild::CiBuildNumber,
            },
            ..Config::default()
        };
        assert_eq!(stamp("0.1.0", None, &config), "0.1.0+build.42\n");
    }

    #[test]
    fn test_manual_mode_keeps_build() {
        assert_eq!(stamp("1.2.3+old", None, &Config::default()), "1.2.3+old\n");
    }
}
