use clap::{App, Arg};
use std::path::Path;
use stela::build::build_site;
use stela::config::Config;

fn main() {
    if let Err(err) = fern::Dispatch::new()
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
    {
        eprintln!("Logger error: {}", err);
        std::process::exit(1);
    }

    let matches = App::new("stela")
        .version(clap::crate_version!())
        .about("Generates static pages from a CSV article index")
        .arg(
            Arg::with_name("project-dir")
                .help("Project directory (defaults to the current directory)")
                .index(1),
        )
        .get_matches();

    let project_dir = Path::new(matches.value_of("project-dir").unwrap_or("."));

    let config = match Config::from_directory(project_dir) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Loading configuration: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = build_site(&config) {
        log::error!("Building site: {}", err);
        std::process::exit(1);
    }
}
