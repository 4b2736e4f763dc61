mod cli;

use clap::Parser;
use cli::Cli;
use std::collections::HashSet;
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;
use yarnlock_inspect::config::{Config, ConfigError, OutputFormat};
use yarnlock_inspect::lockfile::resolve_lockfile_path;
use yarnlock_inspect::output::{self, LockfileReport, SummaryReport};
use yarnlock_inspect::yarn;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .init();
}

/// `RUST_LOG` when set and valid, otherwise `warn`; `-v`/`-vv` raise the global level.
fn log_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    match verbose {
        0 => filter,
        1 => filter.add_directive(Level::DEBUG.into()),
        _ => filter.add_directive(Level::TRACE.into()),
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(ConfigError::NoConfigDir) => {
            debug!("no config directory, using defaults");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    // Flags win over the config file
    let search_parents = cli.find || (cli.path.is_none() && config.search_parents);
    let json_output = cli.json || config.format == OutputFormat::Json;

    let path = resolve_lockfile_path(cli.path.as_deref(), &config.lockfile_name, search_parents)?;
    debug!(path = %path.display(), "reading lockfile");

    let mut database = yarn::parse_file(&path)?;

    if let Some(name) = cli.package.as_deref() {
        let matching: HashSet<String> = database
            .find_by_name(name)
            .map(|(key, _)| key.to_string())
            .collect();
        debug!(package = name, entries = matching.len(), "filtering by package");
        database.retain(|key, _| matching.contains(key));
    }

    if cli.summary {
        let summary = SummaryReport::new(&path, &database);
        if json_output {
            output::print_json(&summary)?;
        } else {
            print!("{}", output::render_summary_text(&summary));
        }
        return Ok(());
    }

    if json_output {
        output::print_json(&LockfileReport::new(&path, &database))?;
    } else {
        print!("{}", output::render_text(&database));
    }

    Ok(())
}
