//! # Elogic Core
//!
//! A text-to-tree front end for the elogic scheme-description language:
//! a small declarative language describing named schemes built from
//! instructions wired through named input/output ports.
//!
//! This library provides:
//! - A scanner and recursive-descent parser for the language
//! - An ordered, owned AST (module → scheme → instruction) with a
//!   canonical textual serializer
//! - Hierarchical flattening of a scheme down to primitive instructions
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Scanner, parser, and AST for the scheme language
//! - [`flatten`] - Expansion of scheme references to primitive bodies
//! - [`error`] - Unified error type for all operations
//!
//! Data flows strictly one way: source text → tokens → AST →
//! serialization or flattening. One parse call consumes its whole input
//! before returning, succeeds with a complete module or fails with the
//! first error, and keeps all of its state in the parser value — parses
//! are reentrant and safe to run concurrently for different inputs.
//!
//! ## Usage
//!
//! ```
//! use elogic_core::dsl;
//!
//! let source = "SCHEME adder a b -> s c\n  XOR a b -> s\n  AND a b -> c\nEND\n";
//! let module = dsl::parse(source).unwrap();
//!
//! assert_eq!(module.schemes[0].name, "adder");
//! // The serializer reproduces canonical source text; a blank line
//! // follows each scheme.
//! assert_eq!(module.to_string(), format!("{source}\n"));
//! ```

pub mod dsl;
pub mod error;
pub mod flatten;

// Re-export main types for convenience
pub use dsl::{Instruction, Module, Scheme};
pub use error::{ElogicError, Result};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{canonicalize, flatten_scheme};
