use crate::sort::Sort;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "methodsort")]
#[command(about = "Classify JVM methods by sort and detect bridge methods", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify every method of a class hierarchy document
    Classify {
        /// Hierarchy document (.json or .toml)
        path: PathBuf,

        /// Sorts to report, comma separated (default: all)
        #[arg(short, long, value_delimiter = ',')]
        sort: Option<Vec<Sort>>,

        /// Output format (default: from config, else terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (default: search for .methodsort.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also report methods matching none of the selected sorts
        #[arg(long)]
        include_unmatched: bool,

        /// Classify sequentially
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Number of worker threads (0 = all cores)
        #[arg(short = 'j', long = "jobs")]
        jobs: Option<usize>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// List the method sorts and their matcher labels
    Sorts,

    /// Initialize a .methodsort.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
