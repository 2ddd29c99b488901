//! Puzzle input lookup
//!
//! Inputs are only ever read. They come either from a local directory laid
//! out as `{dir}/{year}_day{day:02}.txt` or, for a single puzzle, from
//! standard input.

use crate::error::InputError;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Read-only directory of puzzle inputs
#[derive(Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input, or `None` if there is no file for this puzzle
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, InputError> {
        let path = self.input_path(year, day);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(InputError::Read { path, source }),
        }
    }
}

/// Where the executor gets its puzzle inputs
#[derive(Clone)]
pub enum InputSource {
    /// One file per puzzle in a directory
    Dir(InputStore),
    /// A single puzzle's input, read up front from stdin
    Inline { year: u16, day: u8, input: String },
}

impl InputSource {
    pub fn contains(&self, year: u16, day: u8) -> bool {
        match self {
            InputSource::Dir(store) => store.contains(year, day),
            InputSource::Inline { year: y, day: d, .. } => (*y, *d) == (year, day),
        }
    }

    /// Input text for a puzzle, or `None` if this source has none
    pub fn load(&self, year: u16, day: u8) -> Result<Option<String>, InputError> {
        match self {
            InputSource::Dir(store) => store.get(year, day),
            InputSource::Inline { year: y, day: d, input } => {
                Ok(((*y, *d) == (year, day)).then(|| input.clone()))
            }
        }
    }

    /// Human-readable location of an input, for messages
    pub fn describe(&self, year: u16, day: u8) -> String {
        match self {
            InputSource::Dir(store) => store.input_path(year, day).display().to_string(),
            InputSource::Inline { .. } => "<stdin>".to_string(),
        }
    }
}
