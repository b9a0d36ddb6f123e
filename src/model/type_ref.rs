//! Generic type expressions and their erasure.
//!
//! Type expressions use Java source syntax with binary names:
//! `java.util.Map<K, java.util.List<? extends V>>[]`. A bare identifier is
//! parsed as a named type; [`TypeRef::resolve_variables`] turns the identifiers
//! that name a type variable in scope into [`TypeRef::Variable`].
//!
//! Wildcards are accepted as type arguments only. Type arguments nest at most
//! [`MAX_TYPE_NESTING`] levels deep and a signature has at most
//! [`MAX_ARRAY_DIMENSIONS`] array dimensions in total.

use crate::errors::{Error, Result};
use std::fmt;

/// Binary name of the root class.
pub const OBJECT: &str = "java.lang.Object";

/// Deepest accepted nesting of type arguments and wildcard bounds.
pub const MAX_TYPE_NESTING: usize = 64;

pub const MAX_ARRAY_DIMENSIONS: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Class, interface or primitive type used without type arguments.
    Named(String),
    /// Reference to a type variable of the enclosing method or type.
    Variable(String),
    /// Generic type applied to type arguments.
    Parameterized {
        raw: String,
        arguments: Vec<TypeRef>,
    },
    Array(Box<TypeRef>),
    /// Wildcard type argument: `?`, `? extends upper` or `? super lower`.
    Wildcard {
        upper: Option<Box<TypeRef>>,
        lower: Option<Box<TypeRef>>,
    },
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn object() -> Self {
        Self::Named(OBJECT.to_string())
    }

    /// Parse a type expression. Every identifier becomes a named type.
    pub fn parse(signature: &str) -> Result<TypeRef> {
        let mut parser = SignatureParser::new(signature);
        let parsed = parser.parse_type()?;
        parser.skip_whitespace();
        if parser.peek().is_some() {
            return Err(parser.error("unexpected trailing input"));
        }
        Ok(parsed)
    }

    /// Replace named types for which `is_variable` holds with type variables.
    pub fn resolve_variables(self, is_variable: &dyn Fn(&str) -> bool) -> TypeRef {
        match self {
            TypeRef::Named(name) if is_variable(&name) => TypeRef::Variable(name),
            TypeRef::Parameterized { raw, arguments } => TypeRef::Parameterized {
                raw,
                arguments: arguments
                    .into_iter()
                    .map(|argument| argument.resolve_variables(is_variable))
                    .collect(),
            },
            TypeRef::Array(component) => {
                TypeRef::Array(Box::new(component.resolve_variables(is_variable)))
            }
            TypeRef::Wildcard { upper, lower } => TypeRef::Wildcard {
                upper: upper.map(|bound| Box::new(bound.resolve_variables(is_variable))),
                lower: lower.map(|bound| Box::new(bound.resolve_variables(is_variable))),
            },
            other => other,
        }
    }

    /// Name of the generic type, for named and parameterized types.
    pub fn raw_name(&self) -> Option<&str> {
        match self {
            TypeRef::Named(name) | TypeRef::Parameterized { raw: name, .. } => Some(name),
            _ => None,
        }
    }

    /// Erased binary name. `erase_variable` supplies the erasure of each
    /// type variable, which depends on the scope the expression appears in.
    /// A wildcard erases to its upper bound.
    pub fn erasure(&self, erase_variable: &dyn Fn(&str) -> String) -> String {
        match self {
            TypeRef::Named(name) => name.clone(),
            TypeRef::Parameterized { raw, .. } => raw.clone(),
            TypeRef::Variable(name) => erase_variable(name),
            TypeRef::Array(component) => format!("{}[]", component.erasure(erase_variable)),
            TypeRef::Wildcard {
                upper: Some(bound), ..
            } => bound.erasure(erase_variable),
            TypeRef::Wildcard { upper: None, .. } => OBJECT.to_string(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) | TypeRef::Variable(name) => f.write_str(name),
            TypeRef::Parameterized { raw, arguments } => {
                write!(f, "{raw}<")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(">")
            }
            TypeRef::Array(component) => write!(f, "{component}[]"),
            TypeRef::Wildcard {
                upper: Some(bound), ..
            } => write!(f, "? extends {bound}"),
            TypeRef::Wildcard {
                lower: Some(bound), ..
            } => write!(f, "? super {bound}"),
            TypeRef::Wildcard { .. } => f.write_str("?"),
        }
    }
}

struct SignatureParser<'a> {
    source: &'a str,
    chars: Vec<char>,
    position: usize,
    depth: usize,
    dimensions: usize,
}

impl<'a> SignatureParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            position: 0,
            depth: 0,
            dimensions: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.position += 1;
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.position += 1;
            Ok(())
        } else {
            Err(self.error(&format!("expected '{expected}'")))
        }
    }

    fn error(&self, reason: &str) -> Error {
        Error::invalid_signature(
            self.source,
            format!("{reason} at offset {}", self.position),
        )
    }

    fn parse_identifier(&mut self) -> Result<String> {
        self.skip_whitespace();
        let start = self.position;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '$'))
        {
            self.position += 1;
        }
        if start == self.position {
            return Err(self.error("expected type name"));
        }
        Ok(self.chars[start..self.position].iter().collect())
    }

    fn parse_type(&mut self) -> Result<TypeRef> {
        if self.depth == MAX_TYPE_NESTING {
            return Err(self.error("type nesting too deep"));
        }
        self.depth += 1;
        let parsed = self.parse_unnested_type();
        self.depth -= 1;
        parsed
    }

    fn parse_type_argument(&mut self) -> Result<TypeRef> {
        self.skip_whitespace();
        if self.peek() != Some('?') {
            return self.parse_type();
        }
        self.position += 1;
        self.skip_whitespace();
        if matches!(self.peek(), Some(',' | '>')) {
            return Ok(TypeRef::Wildcard {
                upper: None,
                lower: None,
            });
        }

        let keyword = self.parse_identifier()?;
        if keyword != "extends" && keyword != "super" {
            return Err(self.error("expected 'extends' or 'super' after '?'"));
        }
        let bound = Some(Box::new(self.parse_type()?));
        Ok(if keyword == "extends" {
            TypeRef::Wildcard {
                upper: bound,
                lower: None,
            }
        } else {
            TypeRef::Wildcard {
                upper: None,
                lower: bound,
            }
        })
    }

    fn parse_unnested_type(&mut self) -> Result<TypeRef> {
        let name = self.parse_identifier()?;
        self.skip_whitespace();

        let mut parsed = if self.peek() == Some('<') {
            self.position += 1;
            let mut arguments = vec![self.parse_type_argument()?];
            self.skip_whitespace();
            while self.peek() == Some(',') {
                self.position += 1;
                arguments.push(self.parse_type_argument()?);
                self.skip_whitespace();
            }
            self.expect('>')?;
            TypeRef::Parameterized {
                raw: name,
                arguments,
            }
        } else {
            TypeRef::Named(name)
        };

        self.skip_whitespace();
        while self.peek() == Some('[') {
            if self.dimensions == MAX_ARRAY_DIMENSIONS {
                return Err(self.error("too many array dimensions"));
            }
            self.dimensions += 1;
            self.position += 1;
            self.expect(']')?;
            parsed = TypeRef::Array(Box::new(parsed));
            self.skip_whitespace();
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_variables(name: &str) -> String {
        panic!("unexpected type variable {name}")
    }

    #[test]
    fn test_parse_nested_parameterized_array() {
        let parsed = TypeRef::parse("java.util.Map<K, java.util.List<V>>[]").unwrap();
        assert_eq!(
            parsed,
            TypeRef::Array(Box::new(TypeRef::Parameterized {
                raw: "java.util.Map".into(),
                arguments: vec![
                    TypeRef::named("K"),
                    TypeRef::Parameterized {
                        raw: "java.util.List".into(),
                        arguments: vec![TypeRef::named("V")],
                    },
                ],
            }))
        );
        assert_eq!(parsed.to_string(), "java.util.Map<K, java.util.List<V>>[]");
    }

    #[test]
    fn test_parse_rejects_malformed_signatures() {
        let malformed = [
            "",
            "List<",
            "List<>",
            "a.B]",
            "int[",
            "a b",
            "?",
            "List<? implements T>",
        ];
        for signature in malformed {
            let err = TypeRef::parse(signature).unwrap_err();
            assert!(
                matches!(err, Error::InvalidSignature { .. }),
                "{signature:?} produced {err:?}"
            );
        }
    }

    #[test]
    fn test_resolve_variables_only_touches_scope() {
        let parsed = TypeRef::parse("java.util.List<T>[]")
            .unwrap()
            .resolve_variables(&|name| name == "T");
        assert_eq!(
            parsed,
            TypeRef::Array(Box::new(TypeRef::Parameterized {
                raw: "java.util.List".into(),
                arguments: vec![TypeRef::Variable("T".into())],
            }))
        );
    }

    #[test]
    fn test_erasure() {
        let list = TypeRef::parse("java.util.List<java.lang.String>").unwrap();
        assert_eq!(list.erasure(&no_variables), "java.util.List");

        let array = TypeRef::Array(Box::new(TypeRef::Variable("T".into())));
        assert_eq!(
            array.erasure(&|_| "java.lang.Number".to_string()),
            "java.lang.Number[]"
        );
    }

    #[test]
    fn test_parse_rejects_deep_nesting() {
        let depth = 20_000;
        let signature = format!("{}a{}", "a<".repeat(depth), ">".repeat(depth));
        let err = TypeRef::parse(&signature).unwrap_err();
        assert!(
            matches!(&err, Error::InvalidSignature { reason, .. }
                if reason.starts_with("type nesting too deep")),
            "{err:?}"
        );

        let within_limit = MAX_TYPE_NESTING - 1;
        let signature = format!("{}a{}", "a<".repeat(within_limit), ">".repeat(within_limit));
        assert!(TypeRef::parse(&signature).is_ok());
    }

    #[test]
    fn test_parse_rejects_too_many_array_dimensions() {
        let signature = format!("int{}", "[]".repeat(MAX_ARRAY_DIMENSIONS + 1));
        let err = TypeRef::parse(&signature).unwrap_err();
        assert!(err.to_string().contains("too many array dimensions"));

        let signature = format!("int{}", "[]".repeat(MAX_ARRAY_DIMENSIONS));
        assert!(TypeRef::parse(&signature).is_ok());

        let dimensions = "[]".repeat(MAX_ARRAY_DIMENSIONS);
        let signature = format!("java.util.List<int{dimensions}>[]");
        assert!(TypeRef::parse(&signature).is_err());
    }

    #[test]
    fn test_parse_wildcards() {
        let parsed = TypeRef::parse("java.util.Map<?, ? super T>").unwrap();
        assert_eq!(
            parsed,
            TypeRef::Parameterized {
                raw: "java.util.Map".into(),
                arguments: vec![
                    TypeRef::Wildcard {
                        upper: None,
                        lower: None,
                    },
                    TypeRef::Wildcard {
                        upper: None,
                        lower: Some(Box::new(TypeRef::named("T"))),
                    },
                ],
            }
        );
        assert_eq!(parsed.to_string(), "java.util.Map<?, ? super T>");

        let resolved = TypeRef::parse("java.util.List<? extends T>")
            .unwrap()
            .resolve_variables(&|name| name == "T");
        assert_eq!(resolved.to_string(), "java.util.List<? extends T>");
        let TypeRef::Parameterized { arguments, .. } = resolved else {
            panic!("expected a parameterized type");
        };
        assert_eq!(
            arguments[0],
            TypeRef::Wildcard {
                upper: Some(Box::new(TypeRef::Variable("T".into()))),
                lower: None,
            }
        );
    }

    #[test]
    fn test_wildcard_erasure() {
        let extends = TypeRef::Wildcard {
            upper: Some(Box::new(TypeRef::Variable("T".into()))),
            lower: None,
        };
        assert_eq!(extends.erasure(&|_| "java.lang.Number".to_string()), "java.lang.Number");

        let lower = TypeRef::Wildcard {
            upper: None,
            lower: Some(Box::new(TypeRef::named("java.lang.Integer"))),
        };
        assert_eq!(lower.erasure(&no_variables), OBJECT);
    }
}
