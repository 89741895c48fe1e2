//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{DocSearchArgs, OutputFormat};
use crate::error::Result;
use crate::search::SearchResults;

/// One timed pass of the mode-comparison benchmark.
#[derive(Debug, Serialize, Deserialize)]
pub struct BenchRun {
    pub mode: String,
    pub queries: usize,
    pub total_ms: u64,
}

/// Benchmark results across all modes.
#[derive(Debug, Serialize, Deserialize)]
pub struct BenchResults {
    pub runs: Vec<BenchRun>,
}

/// Render search results in the configured output format.
///
/// Human format follows the traditional display contract: one line per
/// document sorted by descending match count, then the elapsed time.
pub fn render_search_results(results: &SearchResults, args: &DocSearchArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for (name, count) in results.sorted_counts() {
                println!("\t{name} - {count}");
            }
            println!("Elapsed time: {} ms", results.duration_ms);
            Ok(())
        }
        OutputFormat::Json => render_json(results, args),
    }
}

/// Render benchmark results in the configured output format.
pub fn render_bench_results(results: &BenchResults, args: &DocSearchArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for run in &results.runs {
                println!(
                    "Search mode: {} - {} queries in {} ms",
                    run.mode, run.queries, run.total_ms
                );
            }
            Ok(())
        }
        OutputFormat::Json => render_json(results, args),
    }
}

fn render_json<T: Serialize>(value: &T, args: &DocSearchArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
