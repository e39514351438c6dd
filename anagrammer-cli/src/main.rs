use anyhow::Context;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use anagrammer::{solve, AnagramQuery, SolverConfig, SortOrder, WordList};

/// Finds dictionary words that can be built from the given letters
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Letters to solve for
    letters: String,

    /// Wordlist file to use
    #[arg(short = 'f', long, default_value = "wordlist.txt")]
    wordlist: PathBuf,

    /// Token separator used when splitting the word list
    #[arg(long, default_value = "\n")]
    delimiter: String,

    /// Minimum word size
    #[arg(long, default_value = "1")]
    min: usize,

    /// Maximum word size (0 for no limit)
    #[arg(long, default_value = "0")]
    max: usize,

    /// Sort results by word size
    #[arg(short = 's', long)]
    sort: bool,

    /// With --sort, sort from larger to smaller size
    #[arg(short = 'r', long)]
    reverse: bool,

    /// Maximum number of results (0 for no limit)
    #[arg(short = 'c', long, default_value = "0")]
    count: usize,

    /// Allow sub-anagrams (not all letters required)
    #[arg(long)]
    sub: bool,

    /// Don't show any message except for the solutions
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Number of threads to use
    #[arg(short = 'j', long)]
    threads: Option<NonZeroUsize>,

    /// Configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn to_config(&self) -> SolverConfig {
        SolverConfig {
            wordlist: self.wordlist.clone(),
            delimiter: self.delimiter.clone(),
            min_size: self.min,
            max_size: self.max,
            sort_results: self.sort,
            reverse: self.reverse,
            count: self.count,
            sub_anagrams: self.sub,
            thread_count: self
                .threads
                .unwrap_or_else(|| NonZeroUsize::new(num_cpus::get()).unwrap()),
            log_level: self.log_level.clone().unwrap_or_else(|| "warn".to_string()),
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = SolverConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?
        .merge_with_cli(cli.to_config());

    if let Err(e) = config.validate() {
        eprintln!("{} {e}", "error:".red().bold());
        let mut command = Cli::command();
        command.print_help().ok();
        std::process::exit(2);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let wordlist = WordList::load(&config.wordlist, &config.delimiter)
        .with_context(|| format!("failed to read word list {}", config.wordlist.display()))?;

    let query = AnagramQuery::new(
        &cli.letters,
        config.min_size,
        config.max_size,
        config.sub_anagrams,
    );

    let spinner = phase_spinner(cli.quiet, "Identifying anagrams");
    let matches = solve(&query, &wordlist, config.thread_count);
    finish_phase(spinner);

    if config.sort_results {
        let spinner = phase_spinner(cli.quiet, "Sorting results");
        matches.sort(if config.reverse {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        });
        finish_phase(spinner);
    }

    for (i, word) in matches.into_words().iter().enumerate() {
        if config.count > 0 && i >= config.count {
            break;
        }
        println!("{word}");
    }

    Ok(())
}

fn phase_spinner(quiet: bool, message: &str) -> Option<ProgressBar> {
    if quiet {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    Some(spinner)
}

fn finish_phase(spinner: Option<ProgressBar>) {
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
}
