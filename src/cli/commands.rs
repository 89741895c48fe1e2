//! Command implementations for the docsearch CLI.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;
use rand::Rng;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{DocSearchError, Result};
use crate::search::{SearchEngine, SearchMode};

/// Execute a CLI command.
pub fn execute_command(args: DocSearchArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => run_search(search_args.clone(), &args),
        Command::Interactive(interactive_args) => run_interactive(interactive_args.clone(), &args),
        Command::Bench(bench_args) => run_bench(bench_args.clone(), &args),
    }
}

/// Enumerate every regular file under `dir` (recursively) as a source of
/// (file name, content) pairs for the engine.
///
/// A file that cannot be read becomes a failed item rather than failing
/// the enumeration itself, so the engine's load aborts construction on
/// the first one.
pub fn directory_source(dir: &Path) -> Result<Vec<Result<(String, String)>>> {
    let mut paths = Vec::new();
    collect_files(dir, &mut paths)?;
    // Deterministic load order regardless of directory enumeration.
    paths.sort();
    Ok(paths
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    DocSearchError::load(format!("invalid file name: {}", path.display()))
                })?;
            let raw = fs::read_to_string(&path)?;
            Ok((name, raw))
        })
        .collect())
}

fn collect_files(dir: &Path, paths: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, paths)?;
        } else {
            paths.push(path);
        }
    }
    Ok(())
}

fn load_engine(dir: &Path, cli_args: &DocSearchArgs) -> Result<SearchEngine> {
    if cli_args.verbosity() > 1 {
        println!("Loading documents from: {}", dir.display());
    }
    let engine = SearchEngine::from_source(directory_source(dir)?)?;
    info!("indexed {} documents", engine.store().len());
    Ok(engine)
}

/// Run a one-shot search.
fn run_search(args: SearchArgs, cli_args: &DocSearchArgs) -> Result<()> {
    let engine = load_engine(&args.documents, cli_args)?;
    let results = engine.search(&args.term, args.mode)?;
    render_search_results(&results, cli_args)
}

/// Run the interactive prompt loop.
fn run_interactive(args: InteractiveArgs, cli_args: &DocSearchArgs) -> Result<()> {
    let engine = load_engine(&args.documents, cli_args)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let term = match prompt_line(&mut lines, "Enter search term: ")? {
            Some(term) => term,
            None => break,
        };

        let mode = loop {
            let answer = match prompt_line(
                &mut lines,
                "Enter search method (1-String Match 2-Regex 3-Indexed): ",
            )? {
                Some(answer) => answer,
                None => return Ok(()),
            };
            match answer.parse::<SearchMode>() {
                Ok(mode) => break mode,
                Err(_) => println!("Invalid input. Please enter 1, 2, or 3."),
            }
        };

        let results = engine.search(&term, mode)?;
        render_search_results(&results, cli_args)?;

        match prompt_line(&mut lines, "Would you like to enter another search term? (y/n): ")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }

    Ok(())
}

/// Print a prompt and read one line; `None` on end of input.
fn prompt_line<B: BufRead>(
    lines: &mut io::Lines<B>,
    prompt: &str,
) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

/// Time each search mode over a stream of random query words.
fn run_bench(args: BenchArgs, cli_args: &DocSearchArgs) -> Result<()> {
    let engine = load_engine(&args.documents, cli_args)?;
    let words = random_words(args.queries);

    let mut runs = Vec::with_capacity(SearchMode::ALL.len());
    for mode in SearchMode::ALL {
        let start = Instant::now();
        for word in &words {
            engine.search(word, mode)?;
        }
        runs.push(BenchRun {
            mode: mode.to_string(),
            queries: words.len(),
            total_ms: start.elapsed().as_millis() as u64,
        });
        info!("finished {mode} pass");
    }

    render_bench_results(&BenchResults { runs }, cli_args)
}

/// Random lowercase alphabetic words with lengths cycling 2 through 6.
fn random_words(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|i| {
            let len = i % 5 + 2;
            (0..len).map(|_| rng.random_range('a'..='z')).collect()
        })
        .collect()
}
