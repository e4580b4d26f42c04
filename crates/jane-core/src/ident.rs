//! Identifier handling for type signatures and emitted names.

/// A signature split around its first identifier.
///
/// `*[]Vec[i32]` splits into prefix `*[]`, ident `Vec` and suffix `[i32]`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct IdentParts<'a> {
    pub prefix: &'a str,
    pub ident: &'a str,
    pub suffix: &'a str,
}

/// Split `signature` into the markers before its first identifier, the
/// identifier itself and whatever follows it.
///
/// Without an identifier the whole signature is the prefix.
pub fn split_ident(signature: &str) -> IdentParts<'_> {
    let Some(start) = signature.find(|c: char| c == '_' || c.is_alphabetic()) else {
        return IdentParts {
            prefix: signature,
            ident: "",
            suffix: "",
        };
    };
    let rest = &signature[start..];
    let len = rest
        .find(|c: char| c != '_' && !c.is_alphanumeric())
        .unwrap_or(rest.len());
    IdentParts {
        prefix: &signature[..start],
        ident: &rest[..len],
        suffix: &rest[len..],
    }
}

/// Maps source identifiers to names that are safe in the emitted C++.
///
/// Implementations must never produce a C++ keyword or a name that collides
/// with the runtime's generated symbols.
pub trait IdentEscaper {
    fn escape(&self, ident: &str, file: Option<&str>) -> String;
}

/// Scopes identifiers by the crc32 of their declaring file, or wraps them in
/// the runtime's `JNID` macro when the file is unknown.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultEscaper;

impl IdentEscaper for DefaultEscaper {
    fn escape(&self, ident: &str, file: Option<&str>) -> String {
        match file {
            Some(path) => format!("_{:08x}_{}", crc32fast::hash(path.as_bytes()), ident),
            None => format!("JNID({ident})"),
        }
    }
}
