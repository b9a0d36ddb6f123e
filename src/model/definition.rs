//! Serializable class and method definitions.
//!
//! Definitions are the unvalidated input to [`ClassPool::from_definitions`]:
//! type expressions are still strings and super types are still names. They
//! deserialize from hierarchy documents and double as fluent builders in tests.
//!
//! [`ClassPool::from_definitions`]: super::ClassPool::from_definitions

use super::modifiers::Modifier;
use super::{CONSTRUCTOR_NAME, TYPE_INITIALIZER_NAME};
use serde::{Deserialize, Serialize};

fn default_return_type() -> String {
    "void".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
}

/// Declaration of a type variable, `T` or `T extends Bound`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeVariableDef {
    pub name: String,

    /// Upper bound; `java.lang.Object` when absent
    #[serde(default)]
    pub bound: Option<String>,
}

impl TypeVariableDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: None,
        }
    }

    pub fn bounded(name: impl Into<String>, bound: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: Some(bound.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDef {
    /// Internal name; `<init>` for constructors, `<clinit>` for the type initializer
    pub name: String,

    #[serde(default)]
    pub modifiers: Vec<Modifier>,

    #[serde(default)]
    pub type_parameters: Vec<TypeVariableDef>,

    /// Return type expression (default: `void`)
    #[serde(default = "default_return_type")]
    pub returns: String,

    /// Parameter type expressions in declaration order
    #[serde(default)]
    pub parameters: Vec<String>,
}

impl MethodDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            type_parameters: Vec::new(),
            returns: default_return_type(),
            parameters: Vec::new(),
        }
    }

    pub fn constructor() -> Self {
        Self::new(CONSTRUCTOR_NAME)
    }

    pub fn type_initializer() -> Self {
        Self::new(TYPE_INITIALIZER_NAME).with_modifiers([Modifier::Static])
    }

    pub fn returns(mut self, signature: impl Into<String>) -> Self {
        self.returns = signature.into();
        self
    }

    pub fn parameter(mut self, signature: impl Into<String>) -> Self {
        self.parameters.push(signature.into());
        self
    }

    pub fn type_parameter(mut self, name: impl Into<String>) -> Self {
        self.type_parameters.push(TypeVariableDef::new(name));
        self
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn public(self) -> Self {
        self.with_modifiers([Modifier::Public])
    }

    /// Mark as a compiler-generated bridge (`ACC_BRIDGE | ACC_SYNTHETIC`).
    pub fn bridge(self) -> Self {
        self.with_modifiers([Modifier::Bridge, Modifier::Synthetic])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    /// Binary name, e.g. `com.example.Sub`
    pub name: String,

    #[serde(default)]
    pub kind: TypeKind,

    #[serde(default)]
    pub modifiers: Vec<Modifier>,

    #[serde(default)]
    pub type_parameters: Vec<TypeVariableDef>,

    /// Super class expression; classes default to `java.lang.Object`
    #[serde(default)]
    pub extends: Option<String>,

    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

impl ClassDef {
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Interface).with_modifiers([Modifier::Public, Modifier::Abstract])
    }

    fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            modifiers: Vec::new(),
            type_parameters: Vec::new(),
            extends: None,
            methods: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn public(self) -> Self {
        self.with_modifiers([Modifier::Public])
    }

    pub fn type_parameter(mut self, name: impl Into<String>) -> Self {
        self.type_parameters.push(TypeVariableDef::new(name));
        self
    }

    pub fn bounded_type_parameter(
        mut self,
        name: impl Into<String>,
        bound: impl Into<String>,
    ) -> Self {
        self.type_parameters.push(TypeVariableDef::bounded(name, bound));
        self
    }

    pub fn extends(mut self, signature: impl Into<String>) -> Self {
        self.extends = Some(signature.into());
        self
    }

    pub fn method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }
}
