use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::finder::{DEFAULT_TEST_DIR, DEFAULT_TEST_SUFFIX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dart-test-finder")]
#[command(about = "Discover Dart test files and filter them by declared tags", long_about = None)]
pub struct Args {
    /// Test files or directories to resolve (scans the test directory if omitted)
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Keep only tests declaring at least one of these tags. Can be specified multiple times.
    #[arg(long, value_name = "TAG")]
    pub tags: Vec<String>,

    /// Path suffix that marks a file as a test
    #[arg(long, default_value = DEFAULT_TEST_SUFFIX)]
    pub suffix: String,

    /// Root directory scanned when no targets are given
    #[arg(long, value_name = "DIR", default_value = DEFAULT_TEST_DIR)]
    pub test_dir: PathBuf,

    /// Absolute test-file path to omit from scans. Can be specified multiple times.
    #[arg(long, value_name = "PATH")]
    pub exclude: Vec<PathBuf>,

    /// Require the target to resolve to exactly one test file
    #[arg(long)]
    pub single: bool,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if self.suffix.is_empty() {
            anyhow::bail!("--suffix must not be empty");
        }
        if !self.tags.is_empty() && !self.targets.is_empty() {
            anyhow::bail!("--tags cannot be combined with explicit targets");
        }
        if self.single && self.targets.len() != 1 {
            anyhow::bail!("--single requires exactly one target");
        }
        Ok(())
    }
}
