use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use stylescale::config::{self, ScaleOptions};
use stylescale::scale::{self, ScaleReport};
use stylescale::BoundaryMode;

use crate::commands::CmdResult;

#[derive(Args, Debug)]
pub struct ScaleArgs {
    /// Root stylesheet of the project
    pub root: String,

    /// Coefficient overrides as NAME=RATIO (e.g. width=1.5 font-size=1.2)
    #[arg(value_name = "NAME=RATIO")]
    pub coefficients: Vec<String>,

    /// JSON file with coefficient defaults
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Property name boundary check: word (default) or left
    #[arg(long, value_name = "MODE")]
    pub boundary: Option<String>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Serialize)]
pub struct ScaleOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub report: ScaleReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_arguments: Vec<String>,
}

pub fn run(args: ScaleArgs) -> CmdResult<ScaleOutput> {
    let (options, ignored_arguments) = build_options(&args)?;

    stylescale::log_status!("scale", "Input mapcss file is {}", args.root);
    let report = scale::run(&args.root, &options)?;

    Ok((
        ScaleOutput {
            command: "scale",
            report,
            ignored_arguments,
        },
        0,
    ))
}

/// Defaults, then the config file, then command-line overrides.
fn build_options(args: &ScaleArgs) -> stylescale::Result<(ScaleOptions, Vec<String>)> {
    let mut options = ScaleOptions::default();

    if let Some(path) = &args.config {
        let file = config::load_config(path)?;
        options.merge_config(&file)?;
    }

    let ignored = options.table.apply_overrides(args.coefficients.as_slice())?;
    for arg in &ignored {
        stylescale::log_status!("scale", "Ignoring '{}' (expected NAME=RATIO)", arg);
    }

    if let Some(boundary) = &args.boundary {
        options.boundary = boundary.parse::<BoundaryMode>()?;
    }
    options.dry_run = args.dry_run;

    Ok((options, ignored))
}
