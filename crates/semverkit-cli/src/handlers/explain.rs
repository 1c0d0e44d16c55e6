//! Explain command handler

use crate::cli::{ExplainArgs, OutputFormat};
use crate::error::Result;
use crate::output::{FieldInfo, OutputWriter};
use semverkit_core::{auto_build, AutoBuild, VersionPart};
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct StrategyInfo {
    mode: AutoBuild,
    read_only: bool,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct ExplainReport<'a> {
    fields: &'a [FieldInfo],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    auto_build: Vec<StrategyInfo>,
}

/// Handle the explain command
#[instrument(skip(output))]
pub fn handle_explain(args: ExplainArgs, output: &mut OutputWriter) -> Result<()> {
    let parts = match args.field {
        Some(field) => vec![VersionPart::from(field)],
        None => VersionPart::ALL.to_vec(),
    };
    let fields: Vec<FieldInfo> = parts.into_iter().map(FieldInfo::from).collect();

    // Strategies are only listed in the full overview
    let strategies: Vec<StrategyInfo> = if args.field.is_none() {
        auto_build::registry()
            .iter()
            .map(|strategy| StrategyInfo {
                mode: strategy.mode,
                read_only: strategy.is_read_only(),
                description: strategy.description,
            })
            .collect()
    } else {
        Vec::new()
    };

    if output.format() != OutputFormat::Human {
        return output.data(&ExplainReport {
            fields: &fields,
            auto_build: strategies,
        });
    }

    output.field_infos(&fields)?;

    if !strategies.is_empty() {
        output.section("Auto-build strategies")?;
        let rows = strategies
            .iter()
            .map(|info| {
                vec![
                    info.mode.to_string(),
                    (if info.read_only { "yes" } else { "no" }).to_string(),
                    info.description.to_string(),
                ]
            })
            .collect();
        output.table(&["Strategy", "Read-only", "Description"], rows)?;
    }
    Ok(())
}
