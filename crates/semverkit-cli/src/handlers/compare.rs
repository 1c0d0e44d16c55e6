//! Compare command handler

use crate::cli::CompareArgs;
use crate::error::Result;
use crate::output::OutputWriter;
use semverkit_core::SemVer;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct CompareReport<'a> {
    left: &'a str,
    right: &'a str,
    ordering: &'static str,
    symbol: &'static str,
}

/// Handle the compare command
#[instrument(skip(output))]
pub fn handle_compare(args: CompareArgs, output: &mut OutputWriter) -> Result<()> {
    let left = SemVer::parse(&args.left)?;
    let right = SemVer::parse(&args.right)?;

    let (ordering, symbol) = match left.cmp(&right) {
        Ordering::Less => ("less", "<"),
        Ordering::Equal => ("equal", "="),
        Ordering::Greater => ("greater", ">"),
    };

    let report = CompareReport {
        left: &args.left,
        right: &args.right,
        ordering,
        symbol,
    };
    output.emit(&format!("{} {} {}", args.left, symbol, args.right), &report)
}
