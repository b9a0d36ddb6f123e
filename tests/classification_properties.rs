//! Property-based tests for classification over generated hierarchies.
//!
//! These tests verify invariants that should hold for all inputs:
//! - Classification is deterministic
//! - Non-bridge methods belong to no bridge sort
//! - Return-type bridges belong to neither other bridge sort
//! - Matchers agree with `classify`

use methodsort::model::{
    ClassDef, ClassPool, MethodDef, MethodDescription, Modifier, TypeDescription,
};
use methodsort::sort::{classify, sorts_of, Sort};
use methodsort::MethodSortMatcher;
use proptest::prelude::*;
use std::collections::HashSet;
use stillwater::predicate::Predicate;

const TYPES: &[&str] = &["void", "int", "java.lang.Object", "java.lang.String"];

fn type_expression(generic: bool) -> impl Strategy<Value = String> {
    let mut choices: Vec<String> = TYPES.iter().map(|t| t.to_string()).collect();
    if generic {
        choices.push("T".to_string());
    }
    proptest::sample::select(choices)
}

fn modifiers() -> impl Strategy<Value = Vec<Modifier>> {
    proptest::sample::subsequence(
        vec![
            Modifier::Public,
            Modifier::Private,
            Modifier::Static,
            Modifier::Final,
            Modifier::Bridge,
        ],
        0..=3,
    )
}

fn method(generic: bool) -> impl Strategy<Value = MethodDef> {
    (
        proptest::sample::select(vec!["get", "put"]),
        type_expression(generic),
        proptest::collection::vec(
            type_expression(generic).prop_filter("no void parameters", |t| t != "void"),
            0..=1,
        ),
        modifiers(),
    )
        .prop_map(|(name, returns, parameters, modifiers)| {
            let mut def = MethodDef::new(name).returns(returns).with_modifiers(modifiers);
            for parameter in parameters {
                def = def.parameter(parameter);
            }
            def
        })
}

/// `T` is always bounded by `java.lang.Object`, so this is the signature a
/// class declaring `method` would see.
fn erased_signature(method: &MethodDef) -> (String, String, Vec<String>) {
    let erase = |t: &String| if t == "T" { "java.lang.Object".to_string() } else { t.clone() };
    (
        method.name.clone(),
        erase(&method.returns),
        method.parameters.iter().map(erase).collect(),
    )
}

/// A chain `p.C0 <- p.C1 <- ...` where each class may be generic in `T` and
/// extends its parent with `java.lang.String` as the type argument.
fn hierarchy() -> impl Strategy<Value = Vec<ClassDef>> {
    proptest::collection::vec(any::<bool>(), 1..=4).prop_flat_map(|generics| {
        let classes: Vec<_> = generics
            .iter()
            .map(|&generic| proptest::collection::vec(method(generic), 0..=4))
            .collect();
        (Just(generics), classes)
    })
    .prop_map(|(generics, methods)| {
        generics
            .iter()
            .zip(methods)
            .enumerate()
            .map(|(index, (&generic, methods))| {
                let mut class = ClassDef::class(format!("p.C{index}")).public();
                if generic {
                    class = class.type_parameter("T");
                }
                if index > 0 {
                    let parent = format!("p.C{}", index - 1);
                    class = if generics[index - 1] {
                        class.extends(format!("{parent}<java.lang.String>"))
                    } else {
                        class.extends(parent)
                    };
                }
                let mut signatures = HashSet::new();
                methods
                    .into_iter()
                    .filter(|method| signatures.insert(erased_signature(method)))
                    .fold(class, ClassDef::method)
            })
            .collect()
    })
}

fn all_methods(pool: &ClassPool) -> Vec<methodsort::model::MethodView<'_>> {
    pool.types().flat_map(|t| t.declared_methods()).collect()
}

proptest! {
    /// Property: classifying the same method twice gives the same answer
    #[test]
    fn prop_classification_is_deterministic(definitions in hierarchy()) {
        let pool = ClassPool::from_definitions(definitions).unwrap();
        for method in all_methods(&pool) {
            prop_assert_eq!(sorts_of(&method), sorts_of(&method));
        }
    }

    /// Property: the bridge sorts require the bridge flag
    #[test]
    fn prop_non_bridges_have_no_bridge_sort(definitions in hierarchy()) {
        let pool = ClassPool::from_definitions(definitions).unwrap();
        for method in all_methods(&pool).into_iter().filter(|m| !m.is_bridge()) {
            prop_assert!(sorts_of(&method).iter().all(|sort| !sort.is_bridge_sort()), "{}", method);
        }
    }

    /// Property: a return-type bridge is neither a visibility nor a
    /// type-variable bridge
    #[test]
    fn prop_return_type_bridges_are_exclusive(definitions in hierarchy()) {
        let pool = ClassPool::from_definitions(definitions).unwrap();
        for method in all_methods(&pool) {
            if classify(Sort::ReturnTypeBridge, &method) {
                prop_assert!(!classify(Sort::VisibilityBridge, &method));
                prop_assert!(!classify(Sort::TypeVariableBridge, &method));
            }
        }
    }

    /// Property: every method belongs to exactly one of method, constructor
    /// and type initializer
    #[test]
    fn prop_kinds_partition_methods(definitions in hierarchy()) {
        let pool = ClassPool::from_definitions(definitions).unwrap();
        for method in all_methods(&pool) {
            let kinds = [Sort::Method, Sort::Constructor, Sort::TypeInitializer]
                .into_iter()
                .filter(|sort| classify(*sort, &method))
                .count();
            prop_assert_eq!(kinds, 1);
        }
    }

    /// Property: a matcher checks exactly what `classify` answers
    #[test]
    fn prop_matchers_agree_with_classify(definitions in hierarchy(), index in 0usize..8) {
        let pool = ClassPool::from_definitions(definitions).unwrap();
        let sort = Sort::ALL[index];
        let matcher = MethodSortMatcher::new(sort);
        for method in all_methods(&pool) {
            prop_assert_eq!(matcher.check(&method), classify(sort, &method));
        }
    }
}
