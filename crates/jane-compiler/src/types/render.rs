//! C++ spelling of type descriptors.

use jane_core::{DefaultEscaper, IdentEscaper, TypeCategory, split_ident};

use super::descriptor::{Param, TypeDescriptor, TypePayload};
use crate::config::Config;
use crate::source_map::SourceMap;

/// Renders a descriptor as the type spelling used in emitted code.
pub trait TypeRenderer {
    fn render(&self, ty: &TypeDescriptor) -> String;
}

/// Renderer targeting the Jane C++ runtime templates.
///
/// Named types are escaped with `E`. When a `SourceMap` is attached, the
/// declaring file of a named type is the path of the source its span points
/// into.
pub struct DefaultRenderer<'a, E = DefaultEscaper> {
    config: &'a Config,
    escaper: E,
    sources: Option<&'a SourceMap>,
}

impl<'a> DefaultRenderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            escaper: DefaultEscaper,
            sources: None,
        }
    }
}

impl<'a, E: IdentEscaper> DefaultRenderer<'a, E> {
    pub fn with_escaper<F: IdentEscaper>(self, escaper: F) -> DefaultRenderer<'a, F> {
        DefaultRenderer {
            config: self.config,
            escaper,
            sources: self.sources,
        }
    }

    pub fn with_sources(mut self, sources: &'a SourceMap) -> Self {
        self.sources = Some(sources);
        self
    }

    fn render_shape(&self, ty: &TypeDescriptor) -> String {
        let templates = self.config.get_templates();

        if ty.is_array() || ty.is_slice() {
            let template = if ty.is_slice() {
                &templates.slice
            } else {
                &templates.array
            };
            let element = ty
                .element()
                .map(|e| self.render(&e))
                .unwrap_or_default();
            return format!("{template}<{element}>");
        }

        if ty.is_map() {
            if let TypePayload::Map { key, value } = &ty.payload {
                return format!(
                    "{}<{},{}>",
                    templates.map,
                    self.render(key),
                    self.render(value)
                );
            }
        }

        if let Some(generics) = ty.generics() {
            return self.render_generic(ty, generics);
        }

        match ty.category {
            TypeCategory::Id | TypeCategory::Enum | TypeCategory::Struct | TypeCategory::Trait => {
                self.escape(ty)
            }
            TypeCategory::Fn => match ty.func_signature() {
                Some(sig) => {
                    let params = if sig.params.is_empty() {
                        "void".to_owned()
                    } else {
                        let protos: Vec<_> =
                            sig.params.iter().map(|p| self.prototype(p)).collect();
                        protos.join(",")
                    };
                    format!("{}<{}({})>", templates.func, self.render(&sig.ret), params)
                }
                None => ty.category.cxx_spelling().to_owned(),
            },
            category => category.cxx_spelling().to_owned(),
        }
    }

    fn render_generic(&self, ty: &TypeDescriptor, generics: &[TypeDescriptor]) -> String {
        let mut out = self.escape(ty);
        if !generics.is_empty() {
            let args: Vec<_> = generics.iter().map(|g| self.render(g)).collect();
            out.push('<');
            out.push_str(&args.join(","));
            out.push('>');
        }
        out
    }

    fn prototype(&self, param: &Param) -> String {
        let mut ty = self.render(&param.ty);
        if param.variadic {
            ty = format!("{}<{}>", self.config.get_templates().slice, ty);
        }
        if param.is_const {
            ty.insert_str(0, "const ");
        }
        ty
    }

    fn escape(&self, ty: &TypeDescriptor) -> String {
        let file = ty
            .span
            .source
            .zip(self.sources)
            .and_then(|(id, sources)| sources.path(id));
        self.escaper.escape(split_ident(&ty.signature).ident, file)
    }
}

impl<E: IdentEscaper> TypeRenderer for DefaultRenderer<'_, E> {
    fn render(&self, ty: &TypeDescriptor) -> String {
        let ty = ty.resolve_alias();
        let pointers = "*".repeat(ty.pointers());

        if let Some(elements) = ty.tuple_elements() {
            let rendered: Vec<_> = elements.iter().map(|e| self.render(e)).collect();
            return format!(
                "{}<{}>{}",
                self.config.get_templates().tuple,
                rendered.join(","),
                pointers
            );
        }

        let mut out = self.render_shape(&ty.strip_pointers());
        out.push_str(&pointers);
        out
    }
}
