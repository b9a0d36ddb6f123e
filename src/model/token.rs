use serde::Serialize;
use std::fmt;

/// Structural signature of a method: internal name, erased return type and
/// erased parameter types, independent of the declaring type.
///
/// Two methods with matching tokens occupy the same slot in the virtual
/// method table. This is a different relation from descriptor equality, which
/// also takes the declaring type into account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MethodToken {
    internal_name: String,
    return_type: String,
    parameter_types: Vec<String>,
}

impl MethodToken {
    pub fn new(
        internal_name: impl Into<String>,
        return_type: impl Into<String>,
        parameter_types: Vec<String>,
    ) -> Self {
        Self {
            internal_name: internal_name.into(),
            return_type: return_type.into(),
            parameter_types,
        }
    }

    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn parameter_types(&self) -> &[String] {
        &self.parameter_types
    }
}

impl fmt::Display for MethodToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}){}",
            self.internal_name,
            self.parameter_types.join(", "),
            self.return_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_differ_by_return_type() {
        let narrow = MethodToken::new("get", "java.lang.String", vec![]);
        let wide = MethodToken::new("get", "java.lang.Object", vec![]);
        assert_ne!(narrow, wide);
    }

    #[test]
    fn test_display() {
        let token = MethodToken::new("put", "void", vec!["int".into(), "java.lang.Object".into()]);
        assert_eq!(token.to_string(), "put(int, java.lang.Object)void");
    }
}
