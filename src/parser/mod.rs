//! D-Bus type signature parser
//!
//! This module transforms a signature string into a type tree:
//! - [`lexer`]: tokenization (signature text → tokens, one per character)
//! - [`builder`]: tree building (tokens → nested [`ast::TypeNode`]s)
//! - [`ast`]: parse tree definitions
//!
//! # Grammar
//!
//! Thirteen single-character basic scalar codes (`y b n q i u x t d h s o
//! g`), `v` for variant, `a` prefixing an element type for arrays, `(`/`)`
//! around struct fields, and `{`/`}` around a dictionary's key and value.
//! Arrays have no closing character: the single element type following the
//! `a` completes the array.
//!
//! # Implementation
//!
//! The builder is a stack machine rather than a recursive descent parser:
//! one dispatch per token against an explicit stack of open containers. A
//! signature cannot recurse unboundedly through the call stack this way,
//! and every malformed-nesting case maps onto a stack check.

pub mod ast;
pub mod builder;
pub mod lexer;
