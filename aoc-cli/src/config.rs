//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::{CliError, InputError};
use crate::inputs::{InputSource, InputStore};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Where puzzle inputs come from
    pub input: InputSource,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Config {
    /// Build config from CLI args, reading stdin eagerly when `--stdin` is set
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let input = if args.stdin {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(InputError::Stdin)?;
            inline_source(args.year, args.day, buf)?
        } else {
            InputSource::Dir(InputStore::new(expand_tilde(&args.input_dir)))
        };

        let thread_count = match args.threads {
            Some(0) => return Err(CliError::Config("--threads must be at least 1".to_string())),
            Some(n) => n,
            None => num_cpus(),
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input,
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
            verbosity: args.verbose,
        })
    }
}

/// Stdin input must name exactly one puzzle.
fn inline_source(year: Option<u16>, day: Option<u8>, input: String) -> Result<InputSource, CliError> {
    match (year, day) {
        (Some(year), Some(day)) => Ok(InputSource::Inline { year, day, input }),
        _ => Err(CliError::Config(
            "--stdin needs both --year and --day".to_string(),
        )),
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
