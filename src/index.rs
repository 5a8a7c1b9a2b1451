//! Parses the CSV article index into [`Record`]s. The first row of the
//! index is the header; every following row describes one article.

use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// One article's metadata row from the index. Values are kept as strings
/// exactly as they appear in the file, and records are never mutated
/// after parsing.
#[derive(Clone, Debug, Deserialize)]
pub struct Record {
    /// Row identifier. Present in the index but not consumed by any
    /// builder.
    pub id: String,

    /// Creation date, e.g. `2024-01-01`. Displayed verbatim.
    pub creation_date: String,

    /// Creation time, e.g. `12:00`. Displayed verbatim.
    pub creation_time: String,

    /// Base name of the article. Locates the markdown source file and
    /// names the output HTML file. Uniqueness is not checked; colliding
    /// names overwrite each other's output.
    pub filename: String,

    /// Title shown on the article page and as the link text in the table
    /// of contents.
    pub display_title: String,
}

/// Reads the index at `path` and returns its records in input order. A
/// header-only file yields an empty vector.
pub fn parse_index(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_owned(),
        },
        _ => Error::Io {
            path: path.to_owned(),
            err,
        },
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result.map_err(|err| Error::Malformed {
            path: path.to_owned(),
            err,
        })?);
    }
    Ok(records)
}

type Result<T> = std::result::Result<T, Error>;

/// Represents a problem reading the article index.
#[derive(Debug)]
pub enum Error {
    /// Returned when the index file does not exist.
    NotFound { path: PathBuf },

    /// Returned when the index is not parseable as CSV, including rows
    /// that do not carry every required column.
    Malformed { path: PathBuf, err: csv::Error },

    /// Returned for other I/O problems while reading the index.
    Io { path: PathBuf, err: io::Error },
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound { path } => {
                write!(f, "Index file '{}' not found", path.display())
            }
            Error::Malformed { path, err } => {
                write!(f, "Parsing index file '{}': {}", path.display(), err)
            }
            Error::Io { path, err } => {
                write!(f, "Reading index file '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NotFound { path: _ } => None,
            Error::Malformed { path: _, err } => Some(err),
            Error::Io { path: _, err } => Some(err),
        }
    }
}
