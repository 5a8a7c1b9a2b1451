//! Responsible for building and writing the output HTML pages from the
//! parsed index: the homepage with its table of contents, and one page
//! per article rendered from its markdown source. Both passes consume
//! the same read-only record slice and neither depends on the other.

use crate::config::Config;
use crate::html::Element;
use crate::index::Record;
use pulldown_cmark::{html, Parser};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

/// File extension of article markdown sources.
const SOURCE_EXTENSION: &str = ".txt";

/// Stylesheet shared by every page.
const BASE_STYLESHEET: &str = "style.css";

/// Stylesheet loaded only by the homepage.
const INDEX_STYLESHEET: &str = "index.css";

/// Stylesheet loaded only by article pages.
const ARTICLE_STYLESHEET: &str = "article.css";

/// Builds homepage and article documents from [`Record`]s and writes
/// them to disk.
pub struct Writer<'a> {
    pub config: &'a Config,
}

impl Writer<'_> {
    /// Builds the homepage document and writes it to `index.html` in the
    /// build directory, overwriting any previous output.
    pub fn write_homepage(&self, records: &[Record]) -> Result<()> {
        let document = self.homepage_document(records);
        self.write_page(&document, self.config.build_directory.join("index.html"))
    }

    /// Builds and writes one page per article, in input order. The first
    /// failing record aborts the pass; nothing is written for a record
    /// whose source file is missing.
    pub fn write_articles(&self, records: &[Record]) -> Result<()> {
        for record in records {
            self.write_article(record)?;
        }
        Ok(())
    }

    fn write_article(&self, record: &Record) -> Result<()> {
        let source_path = self
            .config
            .data_directory
            .join(format!("{}{}", record.filename, SOURCE_EXTENSION));
        let source = fs::read_to_string(&source_path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::SourceNotFound {
                path: source_path.clone(),
            },
            _ => Error::ReadSource {
                path: source_path.clone(),
                err,
            },
        })?;

        let document = self.article_document(record, &source);
        let path = self
            .config
            .articles_directory
            .join(format!("{}.html", record.filename));
        self.write_page(&document, path)?;
        log::info!("Wrote article `{}`", record.filename);
        Ok(())
    }

    /// Serializes a finished document and writes it out, overwriting any
    /// existing file at `path`.
    fn write_page(&self, document: &Element, path: PathBuf) -> Result<()> {
        let rendered = document.render().map_err(Error::Render)?;
        fs::write(&path, rendered).map_err(|err| Error::WriteOutput { path, err })
    }

    /// The homepage: the shared site header followed by a table of
    /// contents with exactly one row per record, in input order. Each row
    /// links the article page and shows the article's creation date and
    /// time.
    fn homepage_document(&self, records: &[Record]) -> Element {
        let mut toc = Element::new("table").attr("class", "toc");
        for record in records {
            toc = toc.child(
                Element::new("tr")
                    .child(
                        Element::new("td").child(
                            Element::new("a")
                                .attr("class", "toc-title")
                                .attr("href", self.article_href(record))
                                .text(record.display_title.as_str()),
                        ),
                    )
                    .child(
                        Element::new("td").attr("class", "toc-dt").text(format!(
                            "{} {}",
                            record.creation_date, record.creation_time,
                        )),
                    ),
            );
        }

        let title = format!("{} | Blog", self.config.site_title);
        Element::new("html")
            .child(self.head(&title, "../", INDEX_STYLESHEET))
            .child(Element::new("body").child(self.site_header()).child(toc))
    }

    /// One article page: the markdown source converted to an HTML
    /// fragment and wrapped in the content container, under the same
    /// header block the homepage carries.
    fn article_document(&self, record: &Record, source: &str) -> Element {
        let mut fragment = String::new();
        html::push_html(&mut fragment, Parser::new(source));

        Element::new("html")
            .child(self.head(&record.display_title, "../../", ARTICLE_STYLESHEET))
            .child(
                Element::new("body")
                    // `lang` enables locale-aware hyphenation
                    .attr("lang", "en-US")
                    .child(self.site_header())
                    .child(Element::new("div").attr("class", "content").raw(fragment)),
            )
    }

    /// The `head` element shared by every page: the base stylesheet, a
    /// page-kind stylesheet, and the page title. `ascent` is the relative
    /// path from the page's output location up to the project root.
    fn head(&self, title: &str, ascent: &str, page_stylesheet: &str) -> Element {
        Element::new("head")
            .child(self.stylesheet_link(ascent, BASE_STYLESHEET))
            .child(self.stylesheet_link(ascent, page_stylesheet))
            .child(Element::new("title").text(title))
    }

    fn stylesheet_link(&self, ascent: &str, sheet: &str) -> Element {
        Element::new("link").attr("rel", "stylesheet").attr(
            "href",
            format!("{}{}/{}", ascent, self.config.stylesheet_prefix, sheet),
        )
    }

    /// The header block shared by the homepage and every article page.
    fn site_header(&self) -> Element {
        Element::new("div")
            .attr("class", "header")
            .child(Element::new("h1").text(self.config.site_title.as_str()))
            .child(Element::new("h3").text(self.config.site_subtitle.as_str()))
    }

    fn article_href(&self, record: &Record) -> String {
        format!(
            "{}/articles/{}.html",
            self.config.build_prefix, record.filename,
        )
    }
}

type Result<T> = std::result::Result<T, Error>;

/// Represents an error while building or writing output pages.
#[derive(Debug)]
pub enum Error {
    /// Returned when an article's markdown source file does not exist.
    SourceNotFound { path: PathBuf },

    /// Returned for I/O problems reading an article source.
    ReadSource { path: PathBuf, err: io::Error },

    /// Returned when serializing a document fails.
    Render(io::Error),

    /// Returned for I/O problems writing an output file.
    WriteOutput { path: PathBuf, err: io::Error },
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::SourceNotFound { path } => {
                write!(f, "Article source file '{}' not found", path.display())
            }
            Error::ReadSource { path, err } => {
                write!(f, "Reading article source '{}': {}", path.display(), err)
            }
            Error::Render(err) => err.fmt(f),
            Error::WriteOutput { path, err } => {
                write!(f, "Writing output file '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SourceNotFound { path: _ } => None,
            Error::ReadSource { path: _, err } => Some(err),
            Error::Render(err) => Some(err),
            Error::WriteOutput { path: _, err } => Some(err),
        }
    }
}
