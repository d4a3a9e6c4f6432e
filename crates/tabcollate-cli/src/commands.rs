use anyhow::Result;

use tabcollate_cli::pipeline::{
    LoadOutcome, LocateKind, clean_file, load_folder, locate, report_json,
};
use tabcollate_ingest::{CleanedTable, LoadOptions};

use crate::cli::{CleanArgs, LoadArgs, LocateArgs, LocateKindArg};

pub fn run_load(args: &LoadArgs) -> Result<LoadOutcome> {
    let options = LoadOptions::new().with_clean(args.thresholds.clean_options());
    load_folder(&args.folder, &options, args.output_dir.as_deref())
}

pub fn print_report_json(outcome: &LoadOutcome) -> Result<()> {
    println!("{}", report_json(outcome.collection.report())?);
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanedTable> {
    clean_file(&args.file, &args.thresholds.clean_options())
}

pub fn run_locate(args: &LocateArgs) -> Result<()> {
    let kind = match args.kind {
        LocateKindArg::File => LocateKind::File,
        LocateKindArg::Dir => LocateKind::Dir,
        LocateKindArg::Subroot => LocateKind::Subroot,
    };
    let found = locate(&args.root, &args.name, kind, args.max_depth)?;
    println!("{}", found.display());
    Ok(())
}
