//! Bridge method rules.
//!
//! A compiler emits a bridge method for one of three reasons:
//!
//! - **Return-type bridge**: an override narrows the return type. The bridge keeps
//!   the wider signature and a sibling with the same name and parameters carries
//!   the narrowed one.
//! - **Visibility bridge**: a public class inherits a public method from a
//!   package-private class and re-declares it so that it is reachable.
//! - **Type-variable bridge**: an override specializes a type variable. The bridge
//!   keeps the erased signature of the generic declaration.
//!
//! Only the flag `is_bridge` is recorded in the class file, so the reason is
//! recovered by inspecting the declaring type and its super types. Every rule is
//! `false` for a method that is not a bridge. A return-type bridge is never
//! classified as one of the other two.
//!
//! The super type walks stop at the closest ancestor declaring a matching method.

use crate::matcher::{has_method_name, is, takes_arguments};
use crate::model::{super_type_chain, MethodDescription, TypeDescription};
use stillwater::predicate::*;
use tracing::trace;

/// Whether the declaring type also declares a method with the target's name and
/// parameter types.
pub fn is_return_type_bridge<M: MethodDescription>(target: &M) -> bool {
    if !target.is_bridge() {
        return false;
    }
    let sibling = is(target.clone())
        .not()
        .and(has_method_name(target.internal_name()))
        .and(takes_arguments(target.parameter_types()));

    let found = target
        .declaring_type()
        .declared_methods()
        .iter()
        .any(|candidate| sibling.check(candidate));
    trace!(
        method = target.internal_name(),
        found,
        "Checked return type bridge"
    );
    found
}

/// Whether the closest overridable ancestor method with the target's signature
/// is an unsubstituted declaration.
pub fn is_visibility_bridge<M: MethodDescription>(target: &M) -> bool {
    let declaring_type = target.declaring_type();
    if !target.is_bridge() || declaring_type.is_interface() || is_return_type_bridge(target) {
        return false;
    }
    let token = target.as_token();

    let decision = super_type_chain(&declaring_type).find_map(|ancestor| {
        ancestor
            .declared_methods()
            .into_iter()
            .filter(MethodDescription::is_overridable)
            .find(|candidate| candidate.as_token() == token)
            .map(|candidate| {
                trace!(ancestor = ancestor.name(), "Found overridden method");
                candidate == candidate.as_declared()
            })
    });
    decision.unwrap_or(false)
}

/// Whether the closest ancestor method whose declared signature matches the
/// target's is seen through a type substitution. Bridges declared by interfaces
/// always qualify.
pub fn is_type_variable_bridge<M: MethodDescription>(target: &M) -> bool {
    if !target.is_bridge() || is_return_type_bridge(target) {
        return false;
    }
    let declaring_type = target.declaring_type();
    if declaring_type.is_interface() {
        return true;
    }
    let token = target.as_token();

    let decision = super_type_chain(&declaring_type).find_map(|ancestor| {
        ancestor
            .declared_methods()
            .into_iter()
            .find_map(|candidate| {
                let declared = candidate.as_declared();
                (declared.as_token() == token).then(|| candidate != declared)
            })
            .inspect(|_| trace!(ancestor = ancestor.name(), "Found erased declaration"))
    });
    decision.unwrap_or(false)
}
