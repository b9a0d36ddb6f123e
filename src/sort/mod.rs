//! The closed set of method sorts and their classification rules.
//!
//! Five sorts read a single descriptor flag. The three bridge sorts inspect the
//! declaring type and its super types, see [`bridge`].

pub mod bridge;

use crate::errors::{Error, Result};
use crate::model::MethodDescription;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sort {
    /// Any method that is neither a constructor nor the type initializer.
    Method,
    Constructor,
    TypeInitializer,
    /// A virtual method that a subtype may override.
    Overridable,
    /// Bridge that re-exposes an inherited method with wider visibility.
    VisibilityBridge,
    /// Bridge that forwards an erased signature to a specialized override.
    TypeVariableBridge,
    /// Bridge that forwards to a sibling with a covariant return type.
    ReturnTypeBridge,
    /// Non-abstract instance method of an interface.
    DefaultMethod,
}

impl Sort {
    pub const ALL: [Sort; 8] = [
        Sort::Method,
        Sort::Constructor,
        Sort::TypeInitializer,
        Sort::Overridable,
        Sort::VisibilityBridge,
        Sort::TypeVariableBridge,
        Sort::ReturnTypeBridge,
        Sort::DefaultMethod,
    ];

    /// Label of the matcher for this sort, e.g. `isVisibilityBridge()`.
    pub fn description(self) -> &'static str {
        match self {
            Sort::Method => "isMethod()",
            Sort::Constructor => "isConstructor()",
            Sort::TypeInitializer => "isTypeInitializer()",
            Sort::Overridable => "isOverridable()",
            Sort::VisibilityBridge => "isVisibilityBridge()",
            Sort::TypeVariableBridge => "isTypeVariableBridge()",
            Sort::ReturnTypeBridge => "isReturnTypeBridge()",
            Sort::DefaultMethod => "isDefaultMethod()",
        }
    }

    /// Configuration and command line name, e.g. `visibility-bridge`.
    pub fn name(self) -> &'static str {
        match self {
            Sort::Method => "method",
            Sort::Constructor => "constructor",
            Sort::TypeInitializer => "type-initializer",
            Sort::Overridable => "overridable",
            Sort::VisibilityBridge => "visibility-bridge",
            Sort::TypeVariableBridge => "type-variable-bridge",
            Sort::ReturnTypeBridge => "return-type-bridge",
            Sort::DefaultMethod => "default-method",
        }
    }

    pub fn is_bridge_sort(self) -> bool {
        matches!(
            self,
            Sort::VisibilityBridge | Sort::TypeVariableBridge | Sort::ReturnTypeBridge
        )
    }

    /// Whether `target` belongs to this sort.
    pub fn is_sort<M: MethodDescription>(self, target: &M) -> bool {
        match self {
            Sort::Method => target.is_method(),
            Sort::Constructor => target.is_constructor(),
            Sort::TypeInitializer => target.is_type_initializer(),
            Sort::Overridable => target.is_overridable(),
            Sort::VisibilityBridge => bridge::is_visibility_bridge(target),
            Sort::TypeVariableBridge => bridge::is_type_variable_bridge(target),
            Sort::ReturnTypeBridge => bridge::is_return_type_bridge(target),
            Sort::DefaultMethod => target.is_default_method(),
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sort {
    type Err = Error;

    /// Accepts `visibility-bridge` and `visibility_bridge`, in any case.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Sort::ALL
            .into_iter()
            .find(|sort| sort.name() == normalized)
            .ok_or_else(|| Error::UnknownSort(s.to_string()))
    }
}

/// Whether `target` belongs to `sort`. Never fails.
pub fn classify<M: MethodDescription>(sort: Sort, target: &M) -> bool {
    sort.is_sort(target)
}

/// Every sort `target` belongs to, in [`Sort::ALL`] order.
pub fn sorts_of<M: MethodDescription>(target: &M) -> Vec<Sort> {
    Sort::ALL
        .into_iter()
        .filter(|sort| sort.is_sort(target))
        .collect()
}
