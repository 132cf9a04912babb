//! Error types for signature parsing
//!
//! All malformed-input conditions are collected in [`SignatureError`], one
//! variant per failure mode. Errors are fatal: parsing aborts at the first
//! one and no partial tree is returned. Positions are zero-based character
//! indices into the signature string.

use std::fmt;

use thiserror::Error;

/// The three container categories a signature can open.
///
/// Used in error payloads to name which container was involved; the parse
/// tree itself uses [`crate::parser::ast::TypeNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Array,
    Struct,
    Dict,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Array => write!(f, "array"),
            ContainerKind::Struct => write!(f, "struct"),
            ContainerKind::Dict => write!(f, "dictionary"),
        }
    }
}

/// Errors raised while lexing or building a signature tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The signature contains a character outside the type grammar.
    #[error("invalid signature character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// A third child was attached to a dictionary that already has a key
    /// and a value.
    #[error("dictionary already has a key and a value (third entry at position {position})")]
    DictionaryOverflow { position: usize },

    /// A dictionary was closed before both its key and value were given.
    #[error("dictionary closed at position {position} before receiving a key and a value")]
    DictionaryUnderflow { position: usize },

    /// A dictionary key must be a basic scalar type.
    #[error("dictionary key must be a basic type, found {found} at position {position}")]
    InvalidDictionaryKey {
        found: &'static str,
        position: usize,
    },

    /// A close token did not match the innermost open container.
    #[error("expected close of {expected} at position {position}, found close of {found}")]
    MismatchedContainer {
        expected: ContainerKind,
        found: ContainerKind,
        position: usize,
    },

    /// A close token appeared with no container open at all.
    #[error("close of {found} at position {position} with no open container")]
    UnbalancedContainer {
        found: ContainerKind,
        position: usize,
    },

    /// The signature ended while at least one container was still open;
    /// `kind` is the innermost unclosed one.
    #[error("signature ended with an unterminated {kind}")]
    UnterminatedContainer { kind: ContainerKind },
}
