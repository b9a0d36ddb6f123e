//! Element predicates over method descriptors.
//!
//! These compose with the `stillwater` combinators:
//!
//! ```rust
//! use methodsort::matcher::{has_method_name, is, takes_arguments};
//! use methodsort::model::{ClassDef, ClassPool, MethodDef};
//! use stillwater::predicate::*;
//!
//! let pool = ClassPool::from_definitions([ClassDef::class("a.A")
//!     .method(MethodDef::new("put").parameter("int"))
//!     .method(MethodDef::new("put").parameter("long"))])
//! .unwrap();
//! let put_int = pool.find_method("a.A", "void put(int)").unwrap();
//! let put_long = pool.find_method("a.A", "void put(long)").unwrap();
//!
//! let overloads = is(put_int.clone())
//!     .not()
//!     .and(has_method_name("put"))
//!     .and(takes_arguments(["long"]));
//! assert!(overloads.check(&put_long));
//! assert!(!overloads.check(&put_int));
//! ```

use crate::model::MethodDescription;
use stillwater::predicate::Predicate;

/// Matches descriptors equal to a given descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Is<M> {
    value: M,
}

impl<M: MethodDescription> Predicate<M> for Is<M> {
    fn check(&self, candidate: &M) -> bool {
        *candidate == self.value
    }
}

/// Matches methods by internal name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HasMethodName {
    name: String,
}

impl HasMethodName {
    pub fn description(&self) -> String {
        format!("named({})", self.name)
    }
}

impl<M: MethodDescription> Predicate<M> for HasMethodName {
    fn check(&self, candidate: &M) -> bool {
        candidate.internal_name() == self.name
    }
}

/// Matches methods whose erased parameter types are exactly the given list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TakesArguments {
    parameter_types: Vec<String>,
}

impl TakesArguments {
    pub fn description(&self) -> String {
        format!("takesArguments({})", self.parameter_types.join(", "))
    }
}

impl<M: MethodDescription> Predicate<M> for TakesArguments {
    fn check(&self, candidate: &M) -> bool {
        candidate.parameter_types() == self.parameter_types
    }
}

pub fn is<M: MethodDescription>(value: M) -> Is<M> {
    Is { value }
}

pub fn has_method_name(name: impl Into<String>) -> HasMethodName {
    HasMethodName { name: name.into() }
}

pub fn takes_arguments<I, S>(parameter_types: I) -> TakesArguments
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    TakesArguments {
        parameter_types: parameter_types.into_iter().map(Into::into).collect(),
    }
}
