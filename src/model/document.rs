use super::definition::ClassDef;
use super::pool::ClassPool;
use crate::errors::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A file describing a class hierarchy.
///
/// JSON documents hold a `classes` array, TOML documents a `[[classes]]` table
/// array. Each entry is a [`ClassDef`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyDocument {
    #[serde(default)]
    pub classes: Vec<ClassDef>,
}

impl HierarchyDocument {
    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Read a document, choosing the format by file extension. Files without a
    /// `.toml` extension are read as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::file_system(
                format!("Failed to read hierarchy document {}", path.display()),
                path,
                e,
            )
        })?;

        let is_toml = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case("toml"));
        let document = if is_toml {
            Self::from_toml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
        .context(format!("Failed to parse {}", path.display()))?;

        debug!(
            path = %path.display(),
            classes = document.classes.len(),
            "Loaded hierarchy document"
        );
        Ok(document)
    }

    pub fn into_pool(self) -> Result<ClassPool> {
        ClassPool::from_definitions(self.classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Modifier, TypeDescription, TypeKind};
    use indoc::indoc;
    use std::io::Write;

    const TOML_DOCUMENT: &str = indoc! {r#"
        [[classes]]
        name = "a.Base"
        type_parameters = [{ name = "T" }]

        [[classes.methods]]
        name = "get"
        modifiers = ["public"]
        returns = "T"

        [[classes]]
        name = "a.Sub"
        modifiers = ["public"]
        extends = "a.Base<java.lang.String>"
    "#};

    #[test]
    fn test_from_toml_str() {
        let document = HierarchyDocument::from_toml_str(TOML_DOCUMENT).unwrap();
        assert_eq!(document.classes.len(), 2);
        assert_eq!(document.classes[0].methods[0].modifiers, vec![Modifier::Public]);
        assert_eq!(document.classes[1].kind, TypeKind::Class);
        assert_eq!(document.classes[1].extends.as_deref(), Some("a.Base<java.lang.String>"));
    }

    #[test]
    fn test_from_json_str_defaults() {
        let document = HierarchyDocument::from_json_str(indoc! {r#"
            { "classes": [ { "name": "a.Service", "kind": "interface",
                             "methods": [ { "name": "run" } ] } ] }
        "#})
        .unwrap();
        let method = &document.classes[0].methods[0];
        assert_eq!(document.classes[0].kind, TypeKind::Interface);
        assert_eq!(method.returns, "void");
        assert!(method.parameters.is_empty());
    }

    #[test]
    fn test_unknown_modifier_is_rejected() {
        let err = HierarchyDocument::from_json_str(
            r#"{ "classes": [ { "name": "a.A", "modifiers": ["volatile"] } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_load_dispatches_on_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(TOML_DOCUMENT.as_bytes()).unwrap();

        let pool = HierarchyDocument::load(file.path()).unwrap().into_pool().unwrap();
        let sub = pool.describe("a.Sub").unwrap();
        assert_eq!(sub.super_type().unwrap().to_string(), "a.Base<java.lang.String>");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = HierarchyDocument::load(&dir.path().join("missing.json"));
        let err = crate::assert_contains_error!(result, "Failed to read hierarchy document");
        assert!(matches!(err, Error::FileSystem { source: Some(_), .. }));
    }
}
