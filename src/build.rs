//! Exports the [`build_site`] function which stitches together the
//! high-level steps of building the output site: parsing the article
//! index ([`crate::index`]) and writing the homepage and article pages
//! ([`crate::write`]).

use crate::config::Config;
use crate::index::{self, Error as ParseError};
use crate::write::{Error as WriteError, Writer};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds the site from a [`Config`] object. This calls into
/// [`index::parse_index`], [`Writer::write_homepage`], and
/// [`Writer::write_articles`] which do the heavy-lifting. Every run
/// regenerates every page from scratch; the first error aborts the run.
pub fn build_site(config: &Config) -> Result<()> {
    let records = index::parse_index(&config.index_path)?;
    log::info!(
        "Parsed {} records from `{}`",
        records.len(),
        config.index_path.display(),
    );

    mkdir(&config.build_directory)?;
    mkdir(&config.articles_directory)?;

    // The two passes share only the read-only record slice, so their
    // order is immaterial; homepage first matches the original layout.
    let writer = Writer { config };
    writer.write_homepage(&records)?;
    log::info!("Wrote homepage");
    writer.write_articles(&records)?;

    Ok(())
}

fn mkdir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|err| Error::CreateDir {
        path: dir.to_owned(),
        err,
    })
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site. Errors can be during index
/// parsing, page writing, or creating the output directories.
#[derive(Debug)]
pub enum Error {
    /// Returned for errors reading the article index.
    Parse(ParseError),

    /// Returned for errors building or writing output pages.
    Write(WriteError),

    /// Returned for I/O problems while creating output directories.
    CreateDir { path: PathBuf, err: std::io::Error },
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(err) => err.fmt(f),
            Error::Write(err) => err.fmt(f),
            Error::CreateDir { path, err } => {
                write!(f, "Creating output directory '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Write(err) => Some(err),
            Error::CreateDir { path: _, err } => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    /// Converts [`ParseError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: ParseError) -> Error {
        Error::Parse(err)
    }
}

impl From<WriteError> for Error {
    /// Converts [`WriteError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: WriteError) -> Error {
        Error::Write(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::index::Error as IndexError;

    const HEADER: &str = "id,creation_date,creation_time,filename,display_title\n";

    /// Lays out a one-article project under a temporary directory.
    fn scenario_project(dir: &tempfile::TempDir) -> Config {
        let config = Config::with_root(dir.path());
        fs::create_dir_all(&config.data_directory).unwrap();
        fs::write(
            &config.index_path,
            format!("{}1,2024-01-01,12:00,hello,\"Hello World\"\n", HEADER),
        )
        .unwrap();
        fs::write(config.data_directory.join("hello.txt"), "Hello, world!").unwrap();
        config
    }

    #[test]
    fn test_build_site_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let config = scenario_project(&dir);
        build_site(&config).unwrap();

        let homepage =
            fs::read_to_string(config.build_directory.join("index.html")).unwrap();
        assert!(homepage.contains(
            r#"<a class="toc-title" href="build/articles/hello.html">Hello World</a>"#
        ));

        let article =
            fs::read_to_string(config.articles_directory.join("hello.html")).unwrap();
        assert!(article.contains("<title>Hello World</title>"));
        assert!(article.contains("<p>Hello, world!</p>"));
    }

    #[test]
    fn test_build_site_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let config = scenario_project(&dir);

        build_site(&config).unwrap();
        let homepage = fs::read(config.build_directory.join("index.html")).unwrap();
        let article = fs::read(config.articles_directory.join("hello.html")).unwrap();

        build_site(&config).unwrap();
        assert_eq!(
            homepage,
            fs::read(config.build_directory.join("index.html")).unwrap(),
        );
        assert_eq!(
            article,
            fs::read(config.articles_directory.join("hello.html")).unwrap(),
        );
    }

    #[test]
    fn test_build_site_empty_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_root(dir.path());
        fs::create_dir_all(&config.data_directory).unwrap();
        fs::write(&config.index_path, HEADER).unwrap();

        build_site(&config).unwrap();

        let homepage =
            fs::read_to_string(config.build_directory.join("index.html")).unwrap();
        assert!(homepage.contains(r#"<table class="toc"></table>"#));
        assert_eq!(fs::read_dir(&config.articles_directory).unwrap().count(), 0);
    }

    #[test]
    fn test_build_site_missing_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_root(dir.path());
        match build_site(&config) {
            Err(Error::Parse(IndexError::NotFound { path })) => {
                assert!(path.ends_with("index.csv"));
            }
            other => panic!("expected Parse(NotFound), got {:?}", other),
        }
    }
}
