use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::errors::{SolverError, SolverResult};

/// Configuration for a solver run.
///
/// # Configuration Locations
///
/// The configuration can be loaded from multiple locations in order of precedence:
/// 1. Custom config file specified via `--config` flag
/// 2. Local `.anagrammer.yaml` in the current directory
/// 3. Global `$HOME/.config/anagrammer/config.yaml`
///
/// # Configuration Format
///
/// The configuration uses YAML format. Example:
/// ```yaml
/// # Word list file to match against
/// wordlist: "wordlist.txt"
///
/// # Minimum and maximum solution size (max 0 = unbounded)
/// min_size: 3
/// max_size: 0
///
/// # Sort results by word size, largest first when reverse is set
/// sort_results: true
/// reverse: false
///
/// # Maximum number of results (0 = unlimited)
/// count: 20
///
/// # Allow sub-anagrams (not all input letters required)
/// sub_anagrams: false
///
/// # Thread count (default: CPU cores)
/// thread_count: 4
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "warn"
/// ```
///
/// When using the CLI, command-line arguments take precedence over config
/// file values; the merging behavior is defined in [`merge_with_cli`].
///
/// [`merge_with_cli`]: SolverConfig::merge_with_cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Word list file to match against
    #[serde(default = "default_wordlist")]
    pub wordlist: PathBuf,

    /// Token separator used when splitting the word list file
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Minimum solution word size
    #[serde(default = "default_min_size")]
    pub min_size: usize,

    /// Maximum solution word size (0 = unbounded)
    #[serde(default)]
    pub max_size: usize,

    /// Whether to sort results by word size
    #[serde(default)]
    pub sort_results: bool,

    /// Sort from larger to smaller size instead
    #[serde(default)]
    pub reverse: bool,

    /// Maximum number of results to emit (0 = unlimited)
    #[serde(default)]
    pub count: usize,

    /// Allow sub-anagrams (solutions need not use every input letter)
    #[serde(default)]
    pub sub_anagrams: bool,

    /// Number of threads to use for matching
    /// Defaults to number of CPU cores if not specified
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_wordlist() -> PathBuf {
    PathBuf::from("wordlist.txt")
}

fn default_delimiter() -> String {
    "\n".to_string()
}

fn default_min_size() -> usize {
    1
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            wordlist: default_wordlist(),
            delimiter: default_delimiter(),
            min_size: default_min_size(),
            max_size: 0,
            sort_results: false,
            reverse: false,
            count: 0,
            sub_anagrams: false,
            thread_count: default_thread_count(),
            log_level: default_log_level(),
        }
    }
}

impl SolverConfig {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from a specific file
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Default config locations
        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("anagrammer/config.yaml")),
            // Local config
            Some(PathBuf::from(".anagrammer.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        // Add existing config files
        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        // Build and deserialize
        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli_config: SolverConfig) -> Self {
        // CLI values take precedence over config file values
        if cli_config.wordlist != default_wordlist() {
            self.wordlist = cli_config.wordlist;
        }
        if cli_config.delimiter != default_delimiter() {
            self.delimiter = cli_config.delimiter;
        }
        if cli_config.min_size != default_min_size() {
            self.min_size = cli_config.min_size;
        }
        if cli_config.max_size != 0 {
            self.max_size = cli_config.max_size;
        }
        if cli_config.sort_results {
            self.sort_results = true;
        }
        if cli_config.reverse {
            self.reverse = true;
        }
        if cli_config.count != 0 {
            self.count = cli_config.count;
        }
        if cli_config.sub_anagrams {
            self.sub_anagrams = true;
        }
        // Always use CLI thread count if specified
        self.thread_count = cli_config.thread_count;
        if cli_config.log_level != default_log_level() {
            self.log_level = cli_config.log_level;
        }
        self
    }

    /// Rejects configurations that cannot do any useful work
    pub fn validate(&self) -> SolverResult<()> {
        if self.delimiter.is_empty() {
            return Err(SolverError::config_error("delimiter must not be empty"));
        }
        Ok(())
    }
}
