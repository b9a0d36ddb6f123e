//! Configuration discovery through ancestor directories.

use indoc::indoc;
use methodsort::config::{load_config_file, load_config_from, CONFIG_FILE_NAME};
use methodsort::sort::Sort;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_found_in_ancestor_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        indoc! {r#"
            [classification]
            sorts = ["visibility-bridge"]

            [parallel]
            enabled = false
        "#},
    )
    .unwrap();
    let nested = temp_dir.path().join("a/b/c");
    fs::create_dir_all(&nested).unwrap();

    let config = load_config_from(nested);
    assert_eq!(
        config.classification().selected_sorts().unwrap(),
        vec![Sort::VisibilityBridge]
    );
    assert!(!config.parallel().enabled);
}

#[test]
fn test_closest_config_wins() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();
    let nested = temp_dir.path().join("project");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        nested.join(CONFIG_FILE_NAME),
        "[output]\ndefault_format = \"terminal\"\n",
    )
    .unwrap();

    let config = load_config_from(nested);
    assert_eq!(config.default_format(), Some("terminal"));
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "[classification]\nsorts = [\"synthetic\"]\n",
    )
    .unwrap();

    let config = load_config_from(temp_dir.path().to_path_buf());
    assert_eq!(config.classification().selected_sorts().unwrap(), Sort::ALL.to_vec());
}

#[test]
fn test_explicit_invalid_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    fs::write(&path, "[parallel]\nenabled = \"yes\"\n").unwrap();

    assert!(load_config_file(&path).is_err());
}
