//! Project configuration. All of the strings and paths that were fixed
//! in early versions (site title, directory names, stylesheet location)
//! live in a [`Config`] that is passed by reference into each pipeline
//! component, so tests can point a build at a temporary directory.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the project file located by [`Config::from_directory`].
const PROJECT_FILE: &str = "stela.yaml";

/// Name of the index file inside the data directory.
const INDEX_FILE: &str = "index.csv";

#[derive(Deserialize)]
struct Site {
    #[serde(default = "Site::default_title")]
    title: String,

    #[serde(default = "Site::default_subtitle")]
    subtitle: String,
}

impl Site {
    fn default_title() -> String {
        "Arcie's Studio".to_owned()
    }

    fn default_subtitle() -> String {
        "Drafting the Cosmos".to_owned()
    }
}

impl Default for Site {
    fn default() -> Site {
        Site {
            title: Site::default_title(),
            subtitle: Site::default_subtitle(),
        }
    }
}

#[derive(Deserialize)]
struct Project {
    #[serde(default)]
    site: Site,

    #[serde(default = "Project::default_data_directory")]
    data_directory: String,

    #[serde(default = "Project::default_build_directory")]
    build_directory: String,

    #[serde(default = "Project::default_stylesheet_directory")]
    stylesheet_directory: String,
}

impl Project {
    fn default_data_directory() -> String {
        "data".to_owned()
    }

    fn default_build_directory() -> String {
        "build".to_owned()
    }

    fn default_stylesheet_directory() -> String {
        "stylesheet".to_owned()
    }
}

impl Default for Project {
    fn default() -> Project {
        Project {
            site: Site::default(),
            data_directory: Project::default_data_directory(),
            build_directory: Project::default_build_directory(),
            stylesheet_directory: Project::default_stylesheet_directory(),
        }
    }
}

/// Fully-resolved configuration handed to each pipeline component. The
/// `PathBuf` fields are filesystem locations under the project root; the
/// `*_prefix` fields are the bare directory names used to form the
/// relative hrefs embedded in the generated markup, so the output links
/// stay stable no matter where the project root lives.
pub struct Config {
    /// Site title, shown in the shared page header and the homepage
    /// title.
    pub site_title: String,

    /// Site subtitle, shown under the title in the shared page header.
    pub site_subtitle: String,

    /// Location of the CSV article index.
    pub index_path: PathBuf,

    /// Directory holding the index and the article markdown sources.
    pub data_directory: PathBuf,

    /// Directory the homepage is written into.
    pub build_directory: PathBuf,

    /// Directory the article pages are written into.
    pub articles_directory: PathBuf,

    /// Build directory name, used as the href prefix for table of
    /// contents links.
    pub build_prefix: String,

    /// Stylesheet directory name, used in the stylesheet link hrefs.
    pub stylesheet_prefix: String,
}

impl Config {
    /// Resolves configuration for the project containing `dir`: the
    /// nearest `stela.yaml` in `dir` or any of its parents, or the
    /// defaults rooted at `dir` when no project file exists.
    pub fn from_directory(dir: &Path) -> Result<Config> {
        match find_project_file(dir) {
            Some(path) => Config::from_project_file(&path),
            None => Ok(Config::with_root(dir)),
        }
    }

    pub fn from_project_file(path: &Path) -> Result<Config> {
        let file = std::fs::File::open(path)
            .map_err(|e| anyhow!("Opening project file `{}`: {}", path.display(), e))?;
        let project: Project = serde_yaml::from_reader(file)
            .map_err(|e| anyhow!("Parsing project file `{}`: {}", path.display(), e))?;
        match path.parent() {
            None => Err(anyhow!(
                "Can't get parent directory for provided project file path '{:?}'",
                path
            )),
            Some(project_root) => Ok(Config::resolve(project_root, project)),
        }
    }

    /// Default configuration rooted at `root`, as if an empty project
    /// file were found there.
    pub fn with_root(root: &Path) -> Config {
        Config::resolve(root, Project::default())
    }

    fn resolve(root: &Path, project: Project) -> Config {
        let data_directory = root.join(&project.data_directory);
        let build_directory = root.join(&project.build_directory);
        Config {
            site_title: project.site.title,
            site_subtitle: project.site.subtitle,
            index_path: data_directory.join(INDEX_FILE),
            articles_directory: build_directory.join("articles"),
            data_directory,
            build_directory,
            build_prefix: project.build_directory,
            stylesheet_prefix: project.stylesheet_directory,
        }
    }
}

fn find_project_file(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(PROJECT_FILE);
    if path.exists() {
        Some(path)
    } else {
        dir.parent().and_then(find_project_file)
    }
}
