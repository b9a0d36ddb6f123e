use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::MethodsortConfig;
use crate::errors::{Error, Result};

/// Name of the configuration file searched for by [`load_config`].
pub const CONFIG_FILE_NAME: &str = ".methodsort.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a configuration file and check that every value it names is known.
pub fn parse_and_validate_config(contents: &str) -> Result<MethodsortConfig> {
    let config = toml::from_str::<MethodsortConfig>(contents)?;

    config.classification().selected_sorts()?;
    if let Some(format) = config.default_format() {
        format
            .parse::<crate::io::output::OutputFormat>()
            .map_err(|_| Error::Configuration(format!("unknown output format '{format}'")))?;
    }
    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<MethodsortConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Invalid config file {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            Some(MethodsortConfig::default())
        }
    }
}

/// Only actual errors are logged, a missing file is expected.
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` followed by its ancestors, at most `max_depth` directories.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.methodsort.toml`.
pub fn load_config_from(start: PathBuf) -> MethodsortConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            MethodsortConfig::default()
        })
}

/// Load the configuration for the current directory.
pub fn load_config() -> MethodsortConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            MethodsortConfig::default()
        }
    }
}

/// Load an explicitly named configuration file. Unlike discovery, a missing or
/// invalid file is an error.
pub fn load_config_file(path: &Path) -> Result<MethodsortConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::file_system(
            format!("Failed to read config file {}", path.display()),
            path,
            e,
        )
    })?;
    parse_and_validate_config(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_directory_ancestors_stops_at_root() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a"), 10).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a"), PathBuf::from("/")]);
    }

    #[test]
    fn test_parse_rejects_unknown_sort() {
        let result = parse_and_validate_config("[classification]\nsorts = [\"bridge\"]");
        let err = crate::assert_contains_error!(result, "Unknown method sort 'bridge'");
        assert!(matches!(err, Error::UnknownSort(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let result = parse_and_validate_config("[output]\ndefault_format = \"html\"");
        let err = crate::assert_contains_error!(result, "unknown output format 'html'");
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = Path::new("/nonexistent/.methodsort.toml");
        let err =
            crate::assert_contains_error!(load_config_file(path), "Failed to read config file");
        match err {
            Error::FileSystem {
                path: Some(reported),
                source: Some(_),
                ..
            } => assert_eq!(reported, path),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
