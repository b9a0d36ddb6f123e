use crate::errors::Result;
use crate::sort::Sort;
use serde::{Deserialize, Serialize};

/// Which sorts batch classification reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassificationConfig {
    /// Sort names, e.g. `["visibility-bridge", "return_type_bridge"]`
    /// (default: every sort)
    #[serde(default)]
    pub sorts: Option<Vec<String>>,

    /// Report methods that match none of the selected sorts (default: false)
    #[serde(default)]
    pub include_unmatched: bool,
}

impl ClassificationConfig {
    /// The selected sorts in [`Sort::ALL`] order, without duplicates.
    pub fn selected_sorts(&self) -> Result<Vec<Sort>> {
        let Some(names) = &self.sorts else {
            return Ok(Sort::ALL.to_vec());
        };
        let requested = names
            .iter()
            .map(|name| name.parse::<Sort>())
            .collect::<Result<Vec<_>>>()?;
        Ok(Sort::ALL
            .into_iter()
            .filter(|sort| requested.contains(sort))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_defaults_to_every_sort() {
        let config = ClassificationConfig::default();
        assert_eq!(config.selected_sorts().unwrap(), Sort::ALL.to_vec());
        assert!(!config.include_unmatched);
    }

    #[test]
    fn test_selected_sorts_are_ordered_and_deduplicated() {
        let config = ClassificationConfig {
            sorts: Some(vec![
                "return_type_bridge".into(),
                "method".into(),
                "return-type-bridge".into(),
            ]),
            include_unmatched: false,
        };
        assert_eq!(
            config.selected_sorts().unwrap(),
            vec![Sort::Method, Sort::ReturnTypeBridge]
        );
    }

    #[test]
    fn test_unknown_sort_is_an_error() {
        let config = ClassificationConfig {
            sorts: Some(vec!["synthetic".into()]),
            include_unmatched: false,
        };
        assert!(matches!(config.selected_sorts(), Err(Error::UnknownSort(_))));
    }
}
