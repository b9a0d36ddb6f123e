use anyhow::Result;
use methodsort::cli::{Cli, Commands};
use methodsort::commands::{self, ClassifyConfig};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "METHODSORT_LOG";

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "methodsort=debug",
        _ => "methodsort=trace",
    }
}

/// `METHODSORT_LOG` wins over `RUST_LOG`; `-v` applies when neither is set.
fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // Also forwards `log` records through tracing.
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Note: Logging already configured: {e}");
    }
}

fn main() -> Result<()> {
    let cli = methodsort::cli::parse_args();
    init_logging(cli.verbosity);
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Classify {
            path,
            sort,
            format,
            output,
            config,
            include_unmatched,
            no_parallel,
            jobs,
            plain,
        } => commands::classify_hierarchy(ClassifyConfig {
            path,
            sorts: sort,
            format: format.map(Into::into),
            output,
            config,
            include_unmatched,
            no_parallel,
            jobs,
            plain,
        }),
        Commands::Sorts => commands::list_sorts(),
        Commands::Init { force } => commands::init_config(force),
    }
}
