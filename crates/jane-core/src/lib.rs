//! Core building blocks shared by the Jane transpiler crates.
//!
//! - `category` - base type categories and their numeric traits
//! - `bits` - minimal bit-width inference for literal values
//! - `ident` - identifier splitting and target-safe escaping

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod bits;
mod category;
pub mod ident;


pub use category::{TypeCategory, WordSize};
pub use ident::{DefaultEscaper, IdentEscaper, IdentParts, split_ident};
