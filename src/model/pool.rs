//! In-memory class model.
//!
//! [`ClassPool`] validates a set of [`ClassDef`]s once and stores them in an
//! arena. [`TypeView`] and [`MethodView`] are cheap handles into the arena that
//! implement the descriptor traits.

use super::definition::{ClassDef, MethodDef, TypeKind, TypeVariableDef};
use super::modifiers::AccessFlags;
use super::token::MethodToken;
use super::type_ref::{TypeRef, OBJECT};
use super::{MethodDescription, TypeDescription, CONSTRUCTOR_NAME, TYPE_INITIALIZER_NAME};
use crate::errors::{Error, Result, ResultExt};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Bound chains deeper than this erase to `java.lang.Object`.
const MAX_BOUND_DEPTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct ClassId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct MethodId(usize);

#[derive(Debug)]
struct TypeVariable {
    name: String,
    bound: TypeRef,
}

#[derive(Debug)]
struct ClassData {
    name: String,
    interface: bool,
    flags: AccessFlags,
    type_parameters: Vec<TypeVariable>,
    super_class: Option<TypeRef>,
    methods: Vec<MethodId>,
}

#[derive(Debug)]
struct MethodData {
    internal_name: String,
    flags: AccessFlags,
    type_parameters: Vec<TypeVariable>,
    return_type: TypeRef,
    parameter_types: Vec<TypeRef>,
}

/// Validated, immutable set of classes and their methods.
#[derive(Debug, Default)]
pub struct ClassPool {
    classes: Vec<ClassData>,
    methods: Vec<MethodData>,
    by_name: HashMap<String, ClassId>,
}

impl ClassPool {
    /// Build a pool, registering `java.lang.Object` when no definition names it.
    pub fn from_definitions(definitions: impl IntoIterator<Item = ClassDef>) -> Result<Self> {
        let mut definitions: Vec<ClassDef> = definitions.into_iter().collect();
        if !definitions.iter().any(|definition| definition.name == OBJECT) {
            definitions.push(ClassDef::class(OBJECT).public());
        }

        let mut pool = ClassPool::default();
        for definition in &definitions {
            let id = ClassId(pool.classes.len());
            if pool.by_name.insert(definition.name.clone(), id).is_some() {
                return Err(Error::DuplicateType(definition.name.clone()));
            }
            let type_parameters = parse_type_variables(&definition.type_parameters, &[])
                .context(format!("Invalid type parameters of '{}'", definition.name))?;
            pool.classes.push(ClassData {
                name: definition.name.clone(),
                interface: definition.kind == TypeKind::Interface,
                flags: AccessFlags::from_modifiers(definition.modifiers.iter().copied()),
                type_parameters,
                super_class: None,
                methods: Vec::new(),
            });
        }

        for (index, definition) in definitions.iter().enumerate() {
            let super_class = pool.resolve_super_class(definition)?;
            let method_ids = definition
                .methods
                .iter()
                .map(|method| pool.add_method(ClassId(index), method))
                .collect::<Result<Vec<_>>>()?;
            let class = &mut pool.classes[index];
            class.super_class = super_class;
            class.methods = method_ids;
        }

        pool.check_acyclic()?;
        pool.check_unique_methods()?;
        debug!(
            classes = pool.classes.len(),
            methods = pool.methods.len(),
            "Built class pool"
        );
        Ok(pool)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The declaration of the named type, without type arguments applied.
    pub fn describe(&self, name: &str) -> Option<TypeView<'_>> {
        self.by_name
            .get(name)
            .map(|&id| TypeView::declaration(self, id))
    }

    /// Declarations of all types, in definition order.
    pub fn types(&self) -> impl Iterator<Item = TypeView<'_>> + '_ {
        (0..self.classes.len()).map(move |index| TypeView::declaration(self, ClassId(index)))
    }

    /// Find a method declared by `type_name` by its erased signature, written as
    /// `returnType name(parameterType, ...)`.
    pub fn find_method(&self, type_name: &str, signature: &str) -> Option<MethodView<'_>> {
        self.describe(type_name)?
            .declared_methods()
            .into_iter()
            .find(|method| method.signature() == signature)
    }

    fn class(&self, id: ClassId) -> &ClassData {
        &self.classes[id.0]
    }

    fn resolve_super_class(&self, definition: &ClassDef) -> Result<Option<TypeRef>> {
        let signature = match (&definition.extends, definition.kind) {
            (Some(_), TypeKind::Interface) => {
                return Err(Error::invalid_super_type(
                    &definition.name,
                    "interfaces cannot extend a class",
                ))
            }
            (None, TypeKind::Interface) => return Ok(None),
            (None, TypeKind::Class) if definition.name == OBJECT => return Ok(None),
            (None, TypeKind::Class) => return Ok(Some(TypeRef::object())),
            (Some(signature), TypeKind::Class) => signature,
        };

        let own_parameters: Vec<&str> = definition
            .type_parameters
            .iter()
            .map(|parameter| parameter.name.as_str())
            .collect();
        let super_class = TypeRef::parse(signature)
            .context(format!("Invalid super type of '{}'", definition.name))?
            .resolve_variables(&|name| own_parameters.contains(&name));

        let (raw, argument_count) = match &super_class {
            TypeRef::Named(raw) => (raw, None),
            TypeRef::Parameterized { raw, arguments } => (raw, Some(arguments.len())),
            TypeRef::Variable(_) | TypeRef::Array(_) | TypeRef::Wildcard { .. } => {
                return Err(Error::invalid_super_type(
                    &definition.name,
                    format!("'{super_class}' is not a class type"),
                ))
            }
        };
        if let TypeRef::Parameterized { arguments, .. } = &super_class {
            if arguments
                .iter()
                .any(|argument| matches!(argument, TypeRef::Wildcard { .. }))
            {
                return Err(Error::invalid_super_type(
                    &definition.name,
                    format!("'{super_class}' has a wildcard type argument"),
                ));
            }
        }
        let target = self
            .by_name
            .get(raw)
            .map(|&id| self.class(id))
            .ok_or_else(|| Error::UnknownType(raw.clone()))?;
        if target.interface {
            return Err(Error::invalid_super_type(
                &definition.name,
                format!("'{raw}' is an interface"),
            ));
        }
        if let Some(found) = argument_count {
            if found != target.type_parameters.len() {
                return Err(Error::TypeArgumentMismatch {
                    type_name: raw.clone(),
                    expected: target.type_parameters.len(),
                    found,
                });
            }
        }
        Ok(Some(super_class))
    }

    fn add_method(&mut self, declaring: ClassId, method: &MethodDef) -> Result<MethodId> {
        let class = self.class(declaring);
        let context = format!("Invalid signature of '{}.{}'", class.name, method.name);
        let class_parameters: Vec<&str> = class
            .type_parameters
            .iter()
            .map(|parameter| parameter.name.as_str())
            .collect();
        let type_parameters =
            parse_type_variables(&method.type_parameters, &class_parameters).context(&context)?;

        let in_scope = |name: &str| {
            class_parameters.contains(&name)
                || type_parameters.iter().any(|parameter| parameter.name == name)
        };
        let return_type = TypeRef::parse(&method.returns)
            .context(&context)?
            .resolve_variables(&in_scope);
        let parameter_types = method
            .parameters
            .iter()
            .map(|parameter| {
                TypeRef::parse(parameter).map(|parsed| parsed.resolve_variables(&in_scope))
            })
            .collect::<Result<Vec<_>>>()
            .context(&context)?;

        let id = MethodId(self.methods.len());
        self.methods.push(MethodData {
            internal_name: method.name.clone(),
            flags: AccessFlags::from_modifiers(method.modifiers.iter().copied()),
            type_parameters,
            return_type,
            parameter_types,
        });
        Ok(id)
    }

    fn super_class_id(&self, id: ClassId) -> Option<ClassId> {
        let raw = self.class(id).super_class.as_ref()?.raw_name()?;
        self.by_name.get(raw).copied()
    }

    fn check_acyclic(&self) -> Result<()> {
        for index in 0..self.classes.len() {
            let mut visited = HashSet::new();
            let mut current = Some(ClassId(index));
            while let Some(id) = current {
                if !visited.insert(id) {
                    return Err(Error::CyclicHierarchy(self.class(id).name.clone()));
                }
                current = self.super_class_id(id);
            }
        }
        Ok(())
    }

    /// A class may not declare two methods with the same erased signature.
    fn check_unique_methods(&self) -> Result<()> {
        for declaring in self.types() {
            let mut seen = HashSet::new();
            for method in declaring.declared_methods() {
                if !seen.insert(method.as_token()) {
                    return Err(Error::DuplicateMethod {
                        type_name: declaring.name().to_string(),
                        signature: method.signature(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Parse type variable declarations. Bounds may refer to the declared variables
/// themselves and to `outer`, the variables of the enclosing type.
fn parse_type_variables(
    definitions: &[TypeVariableDef],
    outer: &[&str],
) -> Result<Vec<TypeVariable>> {
    let in_scope = |name: &str| {
        outer.contains(&name) || definitions.iter().any(|definition| definition.name == name)
    };
    definitions
        .iter()
        .map(|definition| {
            let bound = match &definition.bound {
                Some(signature) => TypeRef::parse(signature)?.resolve_variables(&in_scope),
                None => TypeRef::object(),
            };
            Ok(TypeVariable {
                name: definition.name.clone(),
                bound,
            })
        })
        .collect()
}

/// A type of a [`ClassPool`], possibly seen through type arguments.
///
/// The declaration view has no bindings. The view returned by
/// [`TypeDescription::super_type`] binds the super class's type variables to the
/// erasure of the arguments the subclass supplied.
#[derive(Clone)]
pub struct TypeView<'p> {
    pool: &'p ClassPool,
    id: ClassId,
    bindings: Arc<Vec<(String, String)>>,
}

impl<'p> TypeView<'p> {
    fn declaration(pool: &'p ClassPool, id: ClassId) -> Self {
        Self {
            pool,
            id,
            bindings: Arc::new(Vec::new()),
        }
    }

    fn data(&self) -> &'p ClassData {
        self.pool.class(self.id)
    }

    pub fn is_final(&self) -> bool {
        self.data().flags.contains(AccessFlags::FINAL)
    }

    /// Whether this view applies type arguments to a generic type.
    pub fn is_parameterized(&self) -> bool {
        !self.bindings.is_empty()
    }

    /// The type with its method bindings dropped.
    pub fn as_declaration(&self) -> TypeView<'p> {
        TypeView::declaration(self.pool, self.id)
    }

    fn erasure_of(&self, type_ref: &TypeRef, method: Option<&MethodData>) -> String {
        type_ref.erasure(&|name| self.erase_variable(name, method, 0))
    }

    fn erase_variable(&self, name: &str, method: Option<&MethodData>, depth: usize) -> String {
        if depth > MAX_BOUND_DEPTH {
            return OBJECT.to_string();
        }
        if let Some(method) = method {
            if let Some(variable) = method.type_parameters.iter().find(|v| v.name == name) {
                return variable
                    .bound
                    .erasure(&|inner| self.erase_variable(inner, Some(method), depth + 1));
            }
        }
        if let Some((_, erased)) = self.bindings.iter().find(|(variable, _)| variable == name) {
            return erased.clone();
        }
        match self.data().type_parameters.iter().find(|v| v.name == name) {
            Some(variable) => variable
                .bound
                .erasure(&|inner| self.erase_variable(inner, None, depth + 1)),
            None => OBJECT.to_string(),
        }
    }
}

impl<'p> TypeDescription for TypeView<'p> {
    type Method = MethodView<'p>;

    fn name(&self) -> &str {
        &self.data().name
    }

    fn is_interface(&self) -> bool {
        self.data().interface
    }

    fn super_type(&self) -> Option<TypeView<'p>> {
        let super_class = self.data().super_class.as_ref()?;
        let id = *self.pool.by_name.get(super_class.raw_name()?)?;
        let bindings = match super_class {
            TypeRef::Parameterized { arguments, .. } => self
                .pool
                .class(id)
                .type_parameters
                .iter()
                .zip(arguments)
                .map(|(variable, argument)| {
                    (variable.name.clone(), self.erasure_of(argument, None))
                })
                .collect(),
            _ => Vec::new(),
        };
        Some(TypeView {
            pool: self.pool,
            id,
            bindings: Arc::new(bindings),
        })
    }

    fn declared_methods(&self) -> Vec<MethodView<'p>> {
        self.data()
            .methods
            .iter()
            .map(|&id| MethodView {
                owner: self.clone(),
                id,
            })
            .collect()
    }
}

impl PartialEq for TypeView<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.pool, other.pool)
            && self.id == other.id
            && self.bindings == other.bindings
    }
}

impl fmt::Debug for TypeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeView({self})")
    }
}

impl fmt::Display for TypeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        if self.is_parameterized() {
            let arguments: Vec<&str> = self
                .bindings
                .iter()
                .map(|(_, erased)| erased.as_str())
                .collect();
            write!(f, "<{}>", arguments.join(", "))?;
        }
        Ok(())
    }
}

/// A method of a [`ClassPool`] as declared by a [`TypeView`].
#[derive(Clone)]
pub struct MethodView<'p> {
    owner: TypeView<'p>,
    id: MethodId,
}

impl<'p> MethodView<'p> {
    fn data(&self) -> &'p MethodData {
        &self.owner.pool.methods[self.id.0]
    }

    pub fn flags(&self) -> AccessFlags {
        self.data().flags
    }

    /// Erased return type, with the owner's type arguments applied.
    pub fn return_type(&self) -> String {
        self.owner.erasure_of(&self.data().return_type, Some(self.data()))
    }

    /// Erased signature in the form `returnType name(parameterType, ...)`.
    pub fn signature(&self) -> String {
        format!(
            "{} {}({})",
            self.return_type(),
            self.internal_name(),
            self.parameter_types().join(", ")
        )
    }

    fn is_static(&self) -> bool {
        self.flags().contains(AccessFlags::STATIC)
    }

    fn is_private(&self) -> bool {
        self.flags().contains(AccessFlags::PRIVATE)
    }
}

impl<'p> MethodDescription for MethodView<'p> {
    type Type = TypeView<'p>;

    fn is_method(&self) -> bool {
        !self.is_constructor() && !self.is_type_initializer()
    }

    fn is_constructor(&self) -> bool {
        self.internal_name() == CONSTRUCTOR_NAME
    }

    fn is_type_initializer(&self) -> bool {
        self.internal_name() == TYPE_INITIALIZER_NAME
    }

    fn is_overridable(&self) -> bool {
        self.is_method()
            && !self.is_static()
            && !self.is_private()
            && !self.flags().contains(AccessFlags::FINAL)
            && !self.owner.is_final()
    }

    fn is_bridge(&self) -> bool {
        self.flags().contains(AccessFlags::BRIDGE)
    }

    fn is_default_method(&self) -> bool {
        self.is_method()
            && self.owner.is_interface()
            && !self.is_static()
            && !self.is_private()
            && !self.is_bridge()
            && !self.flags().contains(AccessFlags::ABSTRACT)
    }

    fn declaring_type(&self) -> TypeView<'p> {
        self.owner.clone()
    }

    fn internal_name(&self) -> &str {
        &self.data().internal_name
    }

    fn parameter_types(&self) -> Vec<String> {
        let data = self.data();
        data.parameter_types
            .iter()
            .map(|parameter| self.owner.erasure_of(parameter, Some(data)))
            .collect()
    }

    fn as_token(&self) -> MethodToken {
        MethodToken::new(
            self.internal_name(),
            self.return_type(),
            self.parameter_types(),
        )
    }

    fn as_declared(&self) -> MethodView<'p> {
        MethodView {
            owner: self.owner.as_declaration(),
            id: self.id,
        }
    }
}

/// Methods are equal when they share the declaring type, the internal name and
/// the erased return and parameter types.
impl PartialEq for MethodView<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.owner.pool, other.owner.pool)
            && self.owner.id == other.owner.id
            && self.internal_name() == other.internal_name()
            && self.return_type() == other.return_type()
            && self.parameter_types() == other.parameter_types()
    }
}

impl fmt::Debug for MethodView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MethodView({self})")
    }
}

impl fmt::Display for MethodView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in self.flags().modifiers() {
            write!(f, "{modifier} ")?;
        }
        write!(
            f,
            "{} {}.{}({})",
            self.return_type(),
            self.owner.name(),
            self.internal_name(),
            self.parameter_types().join(", ")
        )
    }
}
