//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use semverkit_core::{AutoBuild, VersionPart};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Semverkit - Semantic Versioning 2.0.0 toolkit
///
/// Parse, validate, correct, compare and bump semantic versions, and derive
/// build metadata and platform build codes from them.
#[derive(Parser, Debug)]
#[command(
    name = "semverkit",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SEMVERKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a version and show its parts
    Parse(ParseArgs),

    /// Check a version against SemVer 2.0.0 and optionally correct it
    Validate(ValidateArgs),

    /// Compare two versions by precedence
    Compare(CompareArgs),

    /// Increment the major, minor or patch version
    Bump(BumpArgs),

    /// Derive an integer build code from the core version
    BuildCode(BuildCodeArgs),

    /// Render a version with generated build metadata
    Stamp(StampArgs),

    /// Describe the parts of a version and the auto-build strategies
    Explain(ExplainArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the parse command
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Version text, e.g. 1.0.0-rc.1+build.5
    #[arg(id = "version_text", value_name = "VERSION")]
    pub version: String,

    /// Accept any text after the numeric core; it may need correction
    #[arg(long)]
    pub lenient: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Version text; anything after MAJOR.MINOR.PATCH is checked
    #[arg(id = "version_text", value_name = "VERSION")]
    pub version: String,

    /// Print the corrected version instead of failing
    #[arg(long)]
    pub fix: bool,
}

/// Arguments for the compare command
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    #[arg(value_name = "A")]
    pub left: String,

    /// Right-hand version
    #[arg(value_name = "B")]
    pub right: String,
}

/// Arguments for the bump command
#[derive(Parser, Debug)]
pub struct BumpArgs {
    /// Version to increment
    #[arg(id = "version_text", value_name = "VERSION")]
    pub version: String,

    /// Part to increment; lower parts reset to 0
    #[arg(value_enum)]
    pub part: BumpPart,
}

/// Arguments for the build-code command
#[derive(Parser, Debug)]
pub struct BuildCodeArgs {
    /// Version to encode
    #[arg(id = "version_text", value_name = "VERSION")]
    pub version: String,

    /// Pack the parts into 21-bit fields instead of the decimal scheme
    #[arg(long)]
    pub monotonic: bool,
}

/// Arguments for the stamp command
#[derive(Parser, Debug)]
pub struct StampArgs {
    /// Version to stamp
    #[arg(id = "version_text", value_name = "VERSION")]
    pub version: String,

    /// Build strategy (defaults to the configured strategy)
    #[arg(short, long, value_enum)]
    pub auto_build: Option<AutoBuildMode>,
}

/// Arguments for the explain command
#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// Part to describe; all parts when omitted
    #[arg(value_enum)]
    pub field: Option<Field>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default project configuration file
    Init(ConfigInitArgs),

    /// Show the effective configuration
    Show(ConfigShowArgs),
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// File format of the new project config
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,

    /// Force overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Numeric parts that can be bumped
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BumpPart {
    Major,
    Minor,
    Patch,
}

/// Every part of a version
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Field {
    Major,
    Minor,
    Patch,
    PreRelease,
    Build,
}

/// Build metadata strategies
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AutoBuildMode {
    /// Keep the build identifiers given on the command line
    Manual,
    /// UTC build time as YYYYMMDDHHMMSS
    Timestamp,
    /// Abbreviated source-control revision from the CI environment
    VcsRevision,
    /// Build counter from the CI environment
    CiBuildNumber,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<BumpPart> for VersionPart {
    fn from(part: BumpPart) -> Self {
        match part {
            BumpPart::Major => VersionPart::Major,
            BumpPart::Minor => VersionPart::Minor,
            BumpPart::Patch => VersionPart::Patch,
        }
    }
}

impl From<Field> for VersionPart {
    fn from(field: Field) -> Self {
        match field {
            Field::Major => VersionPart::Major,
            Field::Minor => VersionPart::Minor,
            Field::Patch => VersionPart::Patch,
            Field::PreRelease => VersionPart::PreRelease,
            Field::Build => VersionPart::Build,
        }
    }
}

impl From<AutoBuildMode> for AutoBuild {
    fn from(mode: AutoBuildMode) -> Self {
        match mode {
            AutoBuildMode::Manual => AutoBuild::Manual,
            AutoBuildMode::Timestamp => AutoBuild::Timestamp,
            AutoBuildMode::VcsRevision => AutoBuild::VcsRevision,
            AutoBuildMode::CiBuildNumber => AutoBuild::CiBuildNumber,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify that the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
            config: None,
            output: None,
            no_color: false,
            command: Commands::Validate(ValidateArgs {
                version: "1.0.0".to_string(),
                fix: false,
            }),
        };
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli {
            verbose: 2,
            quiet: true,
            ..cli
        };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_value_enum_names() {
        let cli = Cli::parse_from(["semverkit", "stamp", "1.0.0", "--auto-build", "vcs-revision"]);
        match cli.command {
            Commands::Stamp(args) => {
                assert_eq!(args.auto_build.map(AutoBuild::from), Some(AutoBuild::VcsRevision));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::parse_from(["semverkit", "explain", "pre-release"]);
        match cli.command {
            Commands::Explain(args) => {
                assert_eq!(args.field.map(VersionPart::from), Some(VersionPart::PreRelease));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_hyphenated_version_is_positional() {
        let cli = Cli::parse_from(["semverkit", "bump", "1.0.0-rc.1", "minor"]);
        match cli.command {
            Commands::Bump(args) => {
                assert_eq!(args.version, "1.0.0-rc.1");
                assert_eq!(VersionPart::from(args.part), VersionPart::Minor);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
