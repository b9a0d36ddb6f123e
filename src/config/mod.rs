//! Configuration loaded from `.methodsort.toml`.

mod classification;
mod core;
mod loader;
mod parallel;

pub use classification::ClassificationConfig;
pub use self::core::{MethodsortConfig, OutputConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;
