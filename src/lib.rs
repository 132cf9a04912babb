//! # Introduction
//!
//! `sigtree` parses D-Bus type signatures — the compact single-character
//! strings the bus uses to describe argument types, such as `"a{sv}"` —
//! into a tree, and provides a visitor-based traversal over that tree for
//! pretty-printing or further analysis.
//!
//! ## Pipeline
//!
//! ```text
//! Signature → Lexer → Tokens → Builder → Tree → Visitor
//! ```
//!
//! 1. [`parser::lexer`] — maps each signature character to a [`Token`].
//! 2. [`parser::builder`] — folds the token sequence into [`TypeNode`]s
//!    using an explicit open-container stack.
//! 3. [`visit`] — depth-first traversal firing paired enter/leave hooks
//!    on a caller-supplied [`Visitor`].
//! 4. [`print`] — sample visitor rendering the tree as indented text.
//!
//! ## Usage
//!
//! ```
//! use sigtree::{parse_signature, pretty_print};
//!
//! let tree = parse_signature("a{sv}").unwrap();
//! print!("{}", pretty_print(&tree));
//! ```
//!
//! Malformed signatures fail with a [`SignatureError`] naming the offending
//! character or container and its position; no partial tree is returned.

pub mod error;
pub mod parser;
pub mod print;
pub mod visit;

pub use error::{ContainerKind, SignatureError};
pub use parser::ast::{BasicKind, TypeNode};
pub use parser::builder::{build, parse_signature};
pub use parser::lexer::{tokenize, Token};
pub use print::{pretty_print, PrettyPrinter};
pub use visit::{visit_node, visit_tree, Visitor};
