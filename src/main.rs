use std::collections::HashSet;

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;

use dart_test_finder::cli::Args;
use dart_test_finder::finder::TestFinder;
use dart_test_finder::{logging, output};

fn main() -> Result<()> {
    let args = Args::parse();
    args.validate().context("invalid arguments")?;

    logging::init(logging::Verbosity::from_flags(args.verbose, args.quiet));

    let finder = TestFinder::new(args.test_dir.clone()).with_suffix(args.suffix.clone());

    let tests = if !args.tags.is_empty() {
        finder.find_tests_for_tags(&args.tags)?
    } else if args.single {
        vec![finder.find_test(&args.targets[0])?]
    } else if args.targets.is_empty() {
        let excludes: HashSet<_> = args.exclude.iter().cloned().collect();
        finder.find_all_tests(None, &excludes)?
    } else {
        finder.find_tests(&args.targets)?
    };

    let rendered = output::render(&tests, args.format)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    Ok(())
}
