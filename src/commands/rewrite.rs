use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use borderfix::defaults::{self, FaultPolicy, Replacement, RewriteConfig};
use borderfix::rewrite::{self, FileFault, FileUpdate};
use borderfix::{paths, Error, Result};

use crate::commands::CmdResult;

#[derive(Args, Debug, Default)]
pub struct RewriteArgs {
    /// Directory to rewrite (default: configured root, else the current directory)
    pub root: Option<String>,

    /// JSON config file (default: ~/.config/borderfix/borderfix.json when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory name to skip at any depth; replaces the built-in set
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// File name suffix to rewrite, e.g. .tsx; replaces the built-in set
    #[arg(long = "ext", value_name = "SUFFIX")]
    pub ext: Vec<String>,

    /// Literal replacement, applied in the order given; replaces the built-in table
    #[arg(
        long,
        num_args = 2,
        value_names = ["FROM", "TO"],
        allow_hyphen_values = true
    )]
    pub replace: Vec<String>,

    /// Report unreadable or unwritable files and continue instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RewriteOutput {
    #[serde(rename = "rewrite.run")]
    Run {
        root: String,
        scanned: usize,
        total_replacements: usize,
        updated: Vec<FileUpdate>,
        faults: Vec<FileFault>,
    },
    #[serde(rename = "rewrite.config")]
    Config { config: RewriteConfig },
}

pub fn run<W: Write>(args: RewriteArgs, notices: &mut W) -> CmdResult<RewriteOutput> {
    let config = resolve_config(&args)?;

    if args.show_config {
        return Ok((RewriteOutput::Config { config }, 0));
    }

    let report = rewrite::rewrite_tree(&config, notices)?;
    let total_replacements = report.updated.iter().map(|u| u.replacements).sum();

    Ok((
        RewriteOutput::Run {
            root: report.root,
            scanned: report.scanned,
            total_replacements,
            updated: report.updated,
            faults: report.faults,
        },
        0,
    ))
}

/// Layer CLI flags over the loaded config: defaults < file < flags.
pub fn resolve_config(args: &RewriteArgs) -> Result<RewriteConfig> {
    let mut config = defaults::load_config(args.config.as_deref())?;

    if let Some(root) = &args.root {
        config.root = PathBuf::from(root);
    }
    if !args.exclude.is_empty() {
        config.exclude_dirs = args.exclude.clone();
    }
    if !args.ext.is_empty() {
        config.extensions = args.ext.clone();
    }
    if !args.replace.is_empty() {
        config.replacements = parse_replace_pairs(&args.replace)?;
    }
    if args.keep_going {
        config.on_error = FaultPolicy::Skip;
    }

    config.root = paths::resolve_root(&config.root.to_string_lossy())?;
    config.validate()?;
    Ok(config)
}

fn parse_replace_pairs(values: &[String]) -> Result<Vec<Replacement>> {
    if values.len() % 2 != 0 {
        return Err(Error::validation_invalid_argument(
            "replace",
            "Each --replace takes exactly two values: FROM TO",
        ));
    }

    Ok(values
        .chunks(2)
        .map(|pair| Replacement::new(pair[0].as_str(), pair[1].as_str()))
        .collect())
}
