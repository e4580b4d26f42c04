//! Type model: descriptors, compatibility and C++ spelling.

mod compat;
mod descriptor;
mod render;

#[cfg(test)]
mod compat_tests;
#[cfg(test)]
mod descriptor_tests;

pub use compat::{StructuralCompatibility, TypeCompatibility};
pub use descriptor::{FuncSignature, Param, TypeDescriptor, TypePayload};
pub use render::{DefaultRenderer, TypeRenderer};
