//! Class hierarchies for the bridge scenarios.
//!
//! Every fixture lives in its own package so that [`all_scenarios`] can combine
//! them into a single pool.
//!
//! | Fixture | Bridge under test | Expected sorts |
//! |---------|-------------------|----------------|
//! | [`covariant_return`] | `com.example.Sub.get()Object` | return-type |
//! | [`generic_parameter`] | `generic.Sub.set(Object)` | type-variable |
//! | [`package_private_base`] | `visibility.Sub.foo()` | visibility |
//! | [`interface_bridge`] | `iface.StringComparator.compare(Object, Object)` | type-variable |
//! | [`closest_visibility_ancestor`] | `chain.vis.Sub.put(String)` | visibility |
//! | [`closest_type_variable_ancestor`] | `chain.tv.Sub.put(Object)` | type-variable and visibility |
//! | [`overloaded_bridge`] | `overload.Sub.get()Object` | none |

use crate::model::{ClassDef, ClassPool, MethodDef, Modifier};

const STRING: &str = "java.lang.String";
const OBJECT: &str = "java.lang.Object";

fn pool(definitions: Vec<ClassDef>) -> ClassPool {
    ClassPool::from_definitions(definitions)
        .unwrap_or_else(|e| panic!("fixture hierarchy is invalid: {e}"))
}

/// `Base<T> { T get() }`, `Sub extends Base<String> { String get(); bridge Object get() }`
pub fn covariant_return_definitions() -> Vec<ClassDef> {
    vec![
        ClassDef::class("com.example.Base")
            .public()
            .type_parameter("T")
            .method(MethodDef::constructor().public())
            .method(MethodDef::new("get").returns("T").public()),
        ClassDef::class("com.example.Sub")
            .public()
            .extends("com.example.Base<java.lang.String>")
            .method(MethodDef::constructor().public())
            .method(MethodDef::new("get").returns(STRING).public())
            .method(MethodDef::new("get").returns(OBJECT).public().bridge()),
    ]
}

pub fn covariant_return() -> ClassPool {
    pool(covariant_return_definitions())
}

/// `Base<T> { void set(T) }` and
/// `Sub extends Base<String> { void set(String); bridge void set(Object) }`
pub fn generic_parameter_definitions() -> Vec<ClassDef> {
    vec![
        ClassDef::class("generic.Base")
            .public()
            .type_parameter("T")
            .method(MethodDef::new("set").parameter("T").public()),
        ClassDef::class("generic.Sub")
            .public()
            .extends("generic.Base<java.lang.String>")
            .method(MethodDef::new("set").parameter(STRING).public())
            .method(MethodDef::new("set").parameter(OBJECT).public().bridge()),
    ]
}

pub fn generic_parameter() -> ClassPool {
    pool(generic_parameter_definitions())
}

/// Package-private `Base { public void foo() }` and a public `Sub extends Base`
/// whose compiler-inserted bridge re-exposes `foo`.
pub fn package_private_base_definitions() -> Vec<ClassDef> {
    vec![
        ClassDef::class("visibility.Base").method(MethodDef::new("foo").public()),
        ClassDef::class("visibility.Sub")
            .public()
            .extends("visibility.Base")
            .method(MethodDef::new("foo").public().bridge()),
    ]
}

pub fn package_private_base() -> ClassPool {
    pool(package_private_base_definitions())
}

/// Interface specializing `Comparator<String>` with an erased bridge.
pub fn interface_bridge_definitions() -> Vec<ClassDef> {
    vec![ClassDef::interface("iface.StringComparator")
        .method(
            MethodDef::new("compare")
                .returns("int")
                .parameter(STRING)
                .parameter(STRING)
                .with_modifiers([Modifier::Public, Modifier::Abstract]),
        )
        .method(
            MethodDef::new("compare")
                .returns("int")
                .parameter(OBJECT)
                .parameter(OBJECT)
                .public()
                .bridge(),
        )]
}

pub fn interface_bridge() -> ClassPool {
    pool(interface_bridge_definitions())
}

/// `Top<T> { void put(T) }`, `Mid extends Top<String> { void put(String) }`,
/// `Sub extends Mid { bridge void put(String) }`.
///
/// `Mid` declares `put(String)` unsubstituted, so the bridge is a visibility
/// bridge. `Top<String>` would answer otherwise if it were consulted.
pub fn closest_visibility_ancestor_definitions() -> Vec<ClassDef> {
    vec![
        ClassDef::class("chain.vis.Top")
            .public()
            .type_parameter("T")
            .method(MethodDef::new("put").parameter("T").public()),
        ClassDef::class("chain.vis.Mid")
            .extends("chain.vis.Top<java.lang.String>")
            .method(MethodDef::new("put").parameter(STRING).public()),
        ClassDef::class("chain.vis.Sub")
            .public()
            .extends("chain.vis.Mid")
            .method(MethodDef::new("put").parameter(STRING).public().bridge()),
    ]
}

pub fn closest_visibility_ancestor() -> ClassPool {
    pool(closest_visibility_ancestor_definitions())
}

/// `Top { void put(Object) }`, `Mid<T> extends Top { void put(T) }`,
/// `Sub extends Mid<String> { void put(String); bridge void put(Object) }`.
///
/// `Mid<String>` substitutes `put`, so the bridge is a type-variable bridge.
/// `Top` declares an overridable `put(Object)` as well, which makes the same
/// bridge a visibility bridge.
pub fn closest_type_variable_ancestor_definitions() -> Vec<ClassDef> {
    vec![
        ClassDef::class("chain.tv.Top")
            .public()
            .method(MethodDef::new("put").parameter(OBJECT).public()),
        ClassDef::class("chain.tv.Mid")
            .public()
            .type_parameter("T")
            .extends("chain.tv.Top")
            .method(MethodDef::new("put").parameter("T").public()),
        ClassDef::class("chain.tv.Sub")
            .public()
            .extends("chain.tv.Mid<java.lang.String>")
            .method(MethodDef::new("put").parameter(STRING).public())
            .method(MethodDef::new("put").parameter(OBJECT).public().bridge()),
    ]
}

pub fn closest_type_variable_ancestor() -> ClassPool {
    pool(closest_type_variable_ancestor_definitions())
}

/// A bridge whose only same-named sibling takes different parameters.
pub fn overloaded_bridge_definitions() -> Vec<ClassDef> {
    vec![ClassDef::class("overload.Sub")
        .public()
        .method(MethodDef::new("get").returns(OBJECT).public().bridge())
        .method(MethodDef::new("get").returns(STRING).parameter("int").public())]
}

pub fn overloaded_bridge() -> ClassPool {
    pool(overloaded_bridge_definitions())
}

/// A class and an interface with one method of each non-bridge sort.
pub fn method_kinds_definitions() -> Vec<ClassDef> {
    vec![
        ClassDef::class("kinds.Widget")
            .public()
            .method(MethodDef::constructor().public())
            .method(MethodDef::type_initializer())
            .method(MethodDef::new("render").public())
            .method(MethodDef::new("seal").with_modifiers([Modifier::Public, Modifier::Final]))
            .method(MethodDef::new("helper").with_modifiers([Modifier::Private]))
            .method(
                MethodDef::new("create")
                    .returns("kinds.Widget")
                    .with_modifiers([Modifier::Public, Modifier::Static]),
            ),
        ClassDef::class("kinds.Sealed")
            .with_modifiers([Modifier::Public, Modifier::Final])
            .method(MethodDef::new("run").public()),
        ClassDef::interface("kinds.Greeter")
            .method(MethodDef::new("greet").returns(STRING).public())
            .method(
                MethodDef::new("name")
                    .returns(STRING)
                    .with_modifiers([Modifier::Public, Modifier::Abstract]),
            )
            .method(
                MethodDef::new("of")
                    .returns("kinds.Greeter")
                    .with_modifiers([Modifier::Public, Modifier::Static]),
            ),
    ]
}

pub fn method_kinds() -> ClassPool {
    pool(method_kinds_definitions())
}

/// Every fixture above in one pool.
pub fn all_scenarios() -> ClassPool {
    pool(
        [
            covariant_return_definitions(),
            generic_parameter_definitions(),
            package_private_base_definitions(),
            interface_bridge_definitions(),
            closest_visibility_ancestor_definitions(),
            closest_type_variable_ancestor_definitions(),
            overloaded_bridge_definitions(),
            method_kinds_definitions(),
        ]
        .into_iter()
        .flatten()
        .collect(),
    )
}
