//! Method and type descriptor model.
//!
//! Classification runs against two traits, [`MethodDescription`] and
//! [`TypeDescription`]. Any metadata system that can answer their queries can
//! be classified; this crate ships one implementation, the in-memory
//! [`ClassPool`], whose [`TypeView`] and [`MethodView`] handles implement them.
//!
//! # Type views
//!
//! The super type of a type is a *view* of the super class as seen from the
//! subclass. When the subclass extends a parameterized type, the view carries
//! the type arguments, and the methods it declares are substituted:
//!
//! ```rust
//! use methodsort::model::{ClassDef, ClassPool, MethodDef, MethodDescription, TypeDescription};
//!
//! let pool = ClassPool::from_definitions([
//!     ClassDef::class("Base")
//!         .type_parameter("T")
//!         .method(MethodDef::new("get").returns("T").public()),
//!     ClassDef::class("Sub").extends("Base<java.lang.String>"),
//! ])
//! .unwrap();
//!
//! let base = pool.describe("Sub").unwrap().super_type().unwrap();
//! let get = base.declared_methods().remove(0);
//! assert_eq!(get.as_token().return_type(), "java.lang.String");
//! assert_eq!(get.as_declared().as_token().return_type(), "java.lang.Object");
//! ```

mod definition;
mod document;
mod modifiers;
mod pool;
mod token;
mod type_ref;

pub use definition::{ClassDef, MethodDef, TypeKind, TypeVariableDef};
pub use document::HierarchyDocument;
pub use modifiers::{AccessFlags, Modifier};
pub use pool::{ClassPool, MethodView, TypeView};
pub use token::MethodToken;
pub use type_ref::{TypeRef, OBJECT};

/// Internal name of instance constructors.
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// Internal name of the type initializer.
pub const TYPE_INITIALIZER_NAME: &str = "<clinit>";

/// A class or interface as seen by the classifier.
pub trait TypeDescription: Clone + Send + Sync {
    /// The method handle type this type declares.
    type Method: MethodDescription<Type = Self>;

    /// Binary name of the type, e.g. `java.lang.String`.
    fn name(&self) -> &str;

    /// Whether this type is an interface.
    fn is_interface(&self) -> bool;

    /// The direct super class, or `None` for the root of the hierarchy and for
    /// interfaces.
    fn super_type(&self) -> Option<Self>;

    /// Methods, constructors and the type initializer declared directly by this
    /// type. Order carries no meaning.
    fn declared_methods(&self) -> Vec<Self::Method>;
}

/// A method, constructor or type initializer as seen by the classifier.
pub trait MethodDescription: Clone + PartialEq + Send + Sync {
    /// The type handle type that declares this method.
    type Type: TypeDescription<Method = Self>;

    /// A method that is neither a constructor nor the type initializer.
    fn is_method(&self) -> bool;

    fn is_constructor(&self) -> bool;

    fn is_type_initializer(&self) -> bool;

    /// Whether a subtype may override this method: a virtual, non-final method
    /// of a non-final type.
    fn is_overridable(&self) -> bool;

    /// Whether the method carries the bridge flag.
    fn is_bridge(&self) -> bool;

    /// Whether this is a non-abstract instance method declared by an interface.
    fn is_default_method(&self) -> bool;

    fn declaring_type(&self) -> Self::Type;

    /// Name as found in the class file (`<init>` for constructors).
    fn internal_name(&self) -> &str;

    /// Erased parameter types in declaration order.
    fn parameter_types(&self) -> Vec<String>;

    /// Structural signature used for override-compatibility comparisons.
    fn as_token(&self) -> MethodToken;

    /// The original declaration this method was derived from. A method seen
    /// through a parameterized super type resolves to its unsubstituted
    /// declaration; any other method resolves to itself.
    fn as_declared(&self) -> Self;
}

/// Iterates the super types of `start`, beginning with its direct super type
/// and ending at the root of the hierarchy. `start` itself is not yielded.
pub fn super_type_chain<T: TypeDescription>(start: &T) -> impl Iterator<Item = T> {
    std::iter::successors(start.super_type(), |current| current.super_type())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_super_type_chain_stops_at_root() {
        let pool = ClassPool::from_definitions([
            ClassDef::class("a.Top"),
            ClassDef::class("a.Mid").extends("a.Top"),
            ClassDef::class("a.Bottom").extends("a.Mid"),
        ])
        .unwrap();

        let bottom = pool.describe("a.Bottom").unwrap();
        let names: Vec<String> = super_type_chain(&bottom)
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(names, vec!["a.Mid", "a.Top", OBJECT]);
    }

    #[test]
    fn test_super_type_chain_of_interface_is_empty() {
        let pool = ClassPool::from_definitions([ClassDef::interface("a.Service")]).unwrap();
        let service = pool.describe("a.Service").unwrap();
        assert_eq!(super_type_chain(&service).count(), 0);
    }
}
