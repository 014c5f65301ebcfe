#![cfg_attr(feature = "strict", deny(warnings))]
#![cfg_attr(feature = "strict", deny(clippy::all))]
//! This module provides a binary to replay a range operation script against a lazy segment tree.
//! Run `cargo run --bin range_report -- --help` for usage.
use common::{logging, util, RtError, RtResult};
use executables::{script_from_path, ScriptOp};
use serde::Serialize;
use std::ops::Range;
use std::path::PathBuf;
use structopt::StructOpt;
use trees::segment_tree::LazySegmentTree;

#[derive(StructOpt)]
struct Cli {
    /// Where is the operation script csv? (columns: op,start,end,value)
    #[structopt(name = "FILE", parse(from_os_str))]
    script_path: PathBuf,
    /// Where should the json report be written?
    /// Defaults to reports/range_report.json on the project root.
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output_path: Option<PathBuf>,
    /// How many positions does the domain have?
    #[structopt(long, default_value = "1000000000")]
    domain_len: u64,
}

#[derive(Debug, Serialize)]
struct SumOutcome {
    range: Range<u64>,
    total: i64,
}

#[derive(Debug, Serialize)]
struct Report {
    domain: Range<u64>,
    assignments: usize,
    sums: Vec<SumOutcome>,
    materialized_nodes: usize,
}

fn main() -> RtResult<()> {
    logging::init_logging();

    let args = Cli::from_args();
    if args.domain_len == 0 {
        return Err("The domain needs at least one position".into());
    }
    let domain = 0..args.domain_len;

    log::info!("Reading script...");
    let script = script_from_path(&args.script_path)
        .map_err(RtError::rethrow_with("could not read operation script"))?;
    log::info!("Reading script... DONE\n\t{} operations", script.len());

    let mut tree = LazySegmentTree::<i64>::new(domain.clone());
    let mut assignments = 0;
    let mut sums = Vec::new();
    for op in &script {
        match op {
            ScriptOp::Assign(range, value) => {
                if !(domain.start <= range.start && range.end <= domain.end) {
                    return Err(format!(
                        "Assignment {}..{} reaches outside of the domain 0..{}",
                        range.start, range.end, domain.end
                    )
                    .into());
                }
                tree.assign(range.clone(), *value);
                assignments += 1;
            }
            ScriptOp::Sum(range) => sums.push(SumOutcome {
                range: range.clone(),
                total: tree.sum(range.clone()),
            }),
        }
    }
    log::info!(
        "Replayed {} assignments and {} sum queries\n\tmaterialized {} nodes",
        assignments,
        sums.len(),
        tree.node_count()
    );

    let report = Report {
        domain,
        assignments,
        sums,
        materialized_nodes: tree.node_count(),
    };
    let output_path =
        util::path_or_relative_to_project_root(args.output_path.as_ref(), "reports/range_report.json");
    util::write_serializable_to_json(&report, &output_path)
        .map_err(RtError::rethrow_with("could not write report"))?;
    log::info!("Wrote report to {}", output_path.display());

    Ok(())
}
