//! Method sort matchers.
//!
//! A [`MethodSortMatcher`] is a `stillwater` predicate over method descriptors
//! that holds when the method belongs to a single [`Sort`]. Matchers are plain
//! values: two matchers are equal exactly when they test the same sort.
//!
//! # Example
//!
//! ```rust
//! use methodsort::matcher::{is_overridable, is_return_type_bridge};
//! use methodsort::model::{ClassDef, ClassPool, MethodDef};
//! use stillwater::predicate::*;
//!
//! let pool = ClassPool::from_definitions([ClassDef::class("a.Sub")
//!     .public()
//!     .method(MethodDef::new("get").returns("java.lang.String").public())
//!     .method(MethodDef::new("get").returns("java.lang.Object").public().bridge())])
//! .unwrap();
//! let bridge = pool.find_method("a.Sub", "java.lang.Object get()").unwrap();
//!
//! assert!(is_return_type_bridge().check(&bridge));
//! assert!(is_overridable().check(&bridge));
//! assert_eq!(is_return_type_bridge().to_string(), "isReturnTypeBridge()");
//! ```

mod element;

pub use element::{has_method_name, is, takes_arguments, HasMethodName, Is, TakesArguments};

use crate::model::MethodDescription;
use crate::sort::Sort;
use std::fmt;
use stillwater::predicate::Predicate;

/// Matches methods of one sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodSortMatcher {
    sort: Sort,
}

impl MethodSortMatcher {
    pub fn new(sort: Sort) -> Self {
        Self { sort }
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    pub fn description(&self) -> &'static str {
        self.sort.description()
    }
}

impl From<Sort> for MethodSortMatcher {
    fn from(sort: Sort) -> Self {
        Self::new(sort)
    }
}

impl<M: MethodDescription> Predicate<M> for MethodSortMatcher {
    fn check(&self, target: &M) -> bool {
        self.sort.is_sort(target)
    }
}

impl fmt::Display for MethodSortMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

pub fn is_method() -> MethodSortMatcher {
    MethodSortMatcher::new(Sort::Method)
}

pub fn is_constructor() -> MethodSortMatcher {
    MethodSortMatcher::new(Sort::Constructor)
}

pub fn is_type_initializer() -> MethodSortMatcher {
    MethodSortMatcher::new(Sort::TypeInitializer)
}

pub fn is_overridable() -> MethodSortMatcher {
    MethodSortMatcher::new(Sort::Overridable)
}

pub fn is_visibility_bridge() -> MethodSortMatcher {
    MethodSortMatcher::new(Sort::VisibilityBridge)
}

pub fn is_type_variable_bridge() -> MethodSortMatcher {
    MethodSortMatcher::new(Sort::TypeVariableBridge)
}

pub fn is_return_type_bridge() -> MethodSortMatcher {
    MethodSortMatcher::new(Sort::ReturnTypeBridge)
}

pub fn is_default_method() -> MethodSortMatcher {
    MethodSortMatcher::new(Sort::DefaultMethod)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_factories_cover_every_sort() {
        let factories = [
            is_method(),
            is_constructor(),
            is_type_initializer(),
            is_overridable(),
            is_visibility_bridge(),
            is_type_variable_bridge(),
            is_return_type_bridge(),
            is_default_method(),
        ];
        let sorts: Vec<Sort> = factories.iter().map(MethodSortMatcher::sort).collect();
        assert_eq!(sorts, Sort::ALL.to_vec());
    }

    #[test]
    fn test_equality_follows_sort() {
        assert_eq!(is_method(), MethodSortMatcher::from(Sort::Method));
        assert_ne!(is_method(), is_overridable());

        let distinct: HashSet<MethodSortMatcher> = Sort::ALL
            .into_iter()
            .chain(Sort::ALL)
            .map(MethodSortMatcher::new)
            .collect();
        assert_eq!(distinct.len(), Sort::ALL.len());
    }

    #[test]
    fn test_display_is_label() {
        assert_eq!(is_type_variable_bridge().to_string(), "isTypeVariableBridge()");
        assert_eq!(is_default_method().to_string(), "isDefaultMethod()");
    }
}
