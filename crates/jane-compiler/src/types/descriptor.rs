//! Type descriptors.
//!
//! A descriptor pairs a base category with the canonical source signature of
//! the type. Shapes (pointer, array, slice, map) are encoded as signature
//! prefixes: `*[]i32` is a pointer to an array of `i32` whose category is
//! `i32`. Pointer markers always come first.

use jane_core::{TypeCategory, split_ident};

use crate::source_map::Span;

pub(crate) const POINTER: char = '*';
pub(crate) const ARRAY: &str = "[]";
pub(crate) const SLICE: &str = "[:]";

/// Category-specific data attached to a descriptor.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum TypePayload {
    #[default]
    None,
    Map {
        key: Box<TypeDescriptor>,
        value: Box<TypeDescriptor>,
    },
    /// Generic arguments of a struct, enum or trait instantiation.
    Generics(Vec<TypeDescriptor>),
    /// Underlying type of an enum.
    Enum(Box<TypeDescriptor>),
    Func(Box<FuncSignature>),
    /// Elements of a multi-return tuple.
    Tuple(Vec<TypeDescriptor>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: TypeDescriptor,
    pub is_const: bool,
    pub variadic: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            is_const: false,
            variadic: false,
        }
    }

    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    fn signature(&self) -> String {
        let mut sig = String::new();
        if self.is_const {
            sig.push_str("const ");
        }
        if self.variadic {
            sig.push_str("...");
        }
        sig.push_str(&self.ty.signature);
        sig
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FuncSignature {
    pub params: Vec<Param>,
    pub ret: TypeDescriptor,
}

impl FuncSignature {
    pub fn new(params: Vec<Param>, ret: TypeDescriptor) -> Self {
        Self { params, ret }
    }

    fn signature(&self) -> String {
        let params: Vec<_> = self.params.iter().map(Param::signature).collect();
        let mut sig = format!("fn({})", params.join(", "));
        if !self.ret.is_void() {
            sig.push(' ');
            sig.push_str(&self.ret.signature);
        }
        sig
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeDescriptor {
    pub category: TypeCategory,
    pub signature: String,
    /// Target of a named alias, resolved by [`TypeDescriptor::resolve_alias`].
    pub alias_of: Option<Box<TypeDescriptor>>,
    pub payload: TypePayload,
    /// Multi-return tuple.
    pub multi: bool,
    pub span: Span,
}

impl TypeDescriptor {
    /// A scalar type spelled by its category name.
    pub fn scalar(category: TypeCategory) -> Self {
        Self::named(category, category.name())
    }

    /// A type of `category` spelled `name`, e.g. a struct or an unresolved id.
    pub fn named(category: TypeCategory, name: impl Into<String>) -> Self {
        Self {
            category,
            signature: name.into(),
            alias_of: None,
            payload: TypePayload::None,
            multi: false,
            span: Span::detached(),
        }
    }

    pub fn void() -> Self {
        Self::scalar(TypeCategory::Void)
    }

    pub fn bool() -> Self {
        Self::scalar(TypeCategory::Bool)
    }

    pub fn nil() -> Self {
        Self::scalar(TypeCategory::Nil)
    }

    pub fn pointer_to(inner: TypeDescriptor) -> Self {
        Self::prefixed("*", inner)
    }

    pub fn array_of(element: TypeDescriptor) -> Self {
        Self::prefixed(ARRAY, element)
    }

    pub fn slice_of(element: TypeDescriptor) -> Self {
        Self::prefixed(SLICE, element)
    }

    fn prefixed(marker: &str, mut inner: TypeDescriptor) -> Self {
        inner.signature.insert_str(0, marker);
        inner
    }

    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        let signature = format!("[{}:{}]", key.signature, value.signature);
        Self {
            payload: TypePayload::Map {
                key: Box::new(key),
                value: Box::new(value),
            },
            ..Self::named(TypeCategory::Map, signature)
        }
    }

    pub fn tuple(elements: Vec<TypeDescriptor>) -> Self {
        let sigs: Vec<_> = elements.iter().map(|e| e.signature.as_str()).collect();
        let signature = format!("({})", sigs.join(", "));
        Self {
            multi: true,
            payload: TypePayload::Tuple(elements),
            ..Self::named(TypeCategory::Void, signature)
        }
    }

    pub fn function(sig: FuncSignature) -> Self {
        Self {
            payload: TypePayload::Func(Box::new(sig.clone())),
            ..Self::named(TypeCategory::Fn, sig.signature())
        }
    }

    pub fn enumeration(name: impl Into<String>, underlying: TypeDescriptor) -> Self {
        Self {
            payload: TypePayload::Enum(Box::new(underlying)),
            ..Self::named(TypeCategory::Enum, name)
        }
    }

    /// A named alias of `target`. Its category stays `id` until resolved.
    pub fn alias(name: impl Into<String>, target: TypeDescriptor) -> Self {
        Self {
            alias_of: Some(Box::new(target)),
            ..Self::named(TypeCategory::Id, name)
        }
    }

    /// Instantiate a struct, enum or trait with generic arguments.
    ///
    /// The arguments are appended to the signature as `Name[A, B]`.
    pub fn with_generics(mut self, generics: Vec<TypeDescriptor>) -> Self {
        if !generics.is_empty() {
            let sigs: Vec<_> = generics.iter().map(|g| g.signature.as_str()).collect();
            self.signature = format!("{}[{}]", self.signature, sigs.join(", "));
        }
        self.payload = TypePayload::Generics(generics);
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Number of leading pointer markers.
    pub fn pointers(&self) -> usize {
        self.signature.chars().take_while(|&c| c == POINTER).count()
    }

    /// The same type with its pointer markers removed.
    pub fn strip_pointers(&self) -> TypeDescriptor {
        let mut stripped = self.clone();
        stripped.signature = self.signature[self.pointers()..].to_owned();
        stripped
    }

    /// The element type of an array or slice.
    pub fn element(&self) -> Option<TypeDescriptor> {
        let rest = self
            .signature
            .strip_prefix(SLICE)
            .or_else(|| self.signature.strip_prefix(ARRAY))?;
        let mut element = self.clone();
        element.signature = rest.to_owned();
        Some(element)
    }

    /// Replace this named alias by its target.
    ///
    /// Pointer and shape markers before the alias name, and any suffix after
    /// it, are carried over to the target's signature. The span is kept.
    /// Chains resolve transitively; non-alias types are returned unchanged.
    pub fn resolve_alias(&self) -> TypeDescriptor {
        let Some(target) = &self.alias_of else {
            return self.clone();
        };
        let mut resolved = target.resolve_alias();
        let parts = split_ident(&self.signature);
        resolved.signature = format!("{}{}{}", parts.prefix, resolved.signature, parts.suffix);
        resolved.span = self.span;
        resolved
    }

    pub fn is_pointer(&self) -> bool {
        self.signature.starts_with(POINTER) || self.is_voidptr()
    }

    pub fn is_voidptr(&self) -> bool {
        self.is_plain_of(TypeCategory::Voidptr)
    }

    pub fn is_array(&self) -> bool {
        self.signature.starts_with(ARRAY)
    }

    pub fn is_slice(&self) -> bool {
        self.signature.starts_with(SLICE)
    }

    pub fn is_map(&self) -> bool {
        self.category == TypeCategory::Map
            && self.signature.starts_with('[')
            && !self.is_array()
            && !self.is_slice()
    }

    pub fn is_tuple(&self) -> bool {
        self.multi
    }

    /// No pointer, array, slice or map shape, and not a tuple.
    pub fn is_plain(&self) -> bool {
        !self.multi
            && !self.signature.starts_with(POINTER)
            && !self.signature.starts_with('[')
    }

    fn is_plain_of(&self, category: TypeCategory) -> bool {
        self.category == category && self.is_plain()
    }

    pub fn is_void(&self) -> bool {
        self.is_plain_of(TypeCategory::Void)
    }

    pub fn is_nil(&self) -> bool {
        self.is_plain_of(TypeCategory::Nil)
    }

    pub fn is_any(&self) -> bool {
        self.is_plain_of(TypeCategory::Any)
    }

    pub fn is_bool(&self) -> bool {
        self.is_plain_of(TypeCategory::Bool)
    }

    pub fn is_str(&self) -> bool {
        self.is_plain_of(TypeCategory::Str)
    }

    pub fn is_struct(&self) -> bool {
        self.is_plain_of(TypeCategory::Struct)
    }

    pub fn is_enum(&self) -> bool {
        self.is_plain_of(TypeCategory::Enum)
    }

    pub fn is_trait(&self) -> bool {
        self.is_plain_of(TypeCategory::Trait)
    }

    pub fn is_func(&self) -> bool {
        self.is_plain_of(TypeCategory::Fn)
    }

    pub fn is_float(&self) -> bool {
        self.is_plain() && self.category.is_float()
    }

    pub fn is_unsigned_integer(&self) -> bool {
        self.is_plain() && self.category.is_unsigned_integer()
    }

    pub fn is_signed_integer(&self) -> bool {
        self.is_plain() && self.category.is_signed_integer()
    }

    pub fn is_integer(&self) -> bool {
        self.is_plain() && self.category.is_integer()
    }

    pub fn is_signed_numeric(&self) -> bool {
        self.is_plain() && self.category.is_signed_numeric()
    }

    pub fn is_numeric(&self) -> bool {
        self.is_plain() && self.category.is_numeric()
    }

    /// Underlying type of an enum.
    pub fn enum_underlying(&self) -> Option<&TypeDescriptor> {
        match &self.payload {
            TypePayload::Enum(underlying) if self.is_enum() => Some(underlying),
            _ => None,
        }
    }

    pub fn generics(&self) -> Option<&[TypeDescriptor]> {
        match &self.payload {
            TypePayload::Generics(generics) => Some(generics),
            _ => None,
        }
    }

    pub fn func_signature(&self) -> Option<&FuncSignature> {
        match &self.payload {
            TypePayload::Func(sig) => Some(sig),
            _ => None,
        }
    }

    pub fn tuple_elements(&self) -> Option<&[TypeDescriptor]> {
        match &self.payload {
            TypePayload::Tuple(elements) if self.multi => Some(elements),
            _ => None,
        }
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.signature)
    }
}
