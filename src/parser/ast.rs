// Parse tree definitions for D-Bus type signatures

use std::fmt;

/// The thirteen basic (non-container) scalar types of the signature grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicKind {
    Byte,       // y
    Boolean,    // b
    Int16,      // n
    Uint16,     // q
    Int32,      // i
    Uint32,     // u
    Int64,      // x
    Uint64,     // t
    Double,     // d
    UnixFd,     // h
    String,     // s
    ObjectPath, // o
    Signature,  // g
}

impl BasicKind {
    /// The single-character signature code for this scalar type.
    pub fn code(self) -> char {
        match self {
            BasicKind::Byte => 'y',
            BasicKind::Boolean => 'b',
            BasicKind::Int16 => 'n',
            BasicKind::Uint16 => 'q',
            BasicKind::Int32 => 'i',
            BasicKind::Uint32 => 'u',
            BasicKind::Int64 => 'x',
            BasicKind::Uint64 => 't',
            BasicKind::Double => 'd',
            BasicKind::UnixFd => 'h',
            BasicKind::String => 's',
            BasicKind::ObjectPath => 'o',
            BasicKind::Signature => 'g',
        }
    }

    /// Human-readable name, as used by the pretty printer.
    pub fn name(self) -> &'static str {
        match self {
            BasicKind::Byte => "byte",
            BasicKind::Boolean => "boolean",
            BasicKind::Int16 => "int16",
            BasicKind::Uint16 => "uint16",
            BasicKind::Int32 => "int32",
            BasicKind::Uint32 => "uint32",
            BasicKind::Int64 => "int64",
            BasicKind::Uint64 => "uint64",
            BasicKind::Double => "double",
            BasicKind::UnixFd => "unix fd",
            BasicKind::String => "string",
            BasicKind::ObjectPath => "object path",
            BasicKind::Signature => "signature",
        }
    }
}

impl fmt::Display for BasicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One node of the parsed type tree.
///
/// A signature parses to a `Vec<TypeNode>` rather than a single node: a
/// signature may describe several consecutive top-level types (`"iis"` is
/// three sibling [`TypeNode::Basic`] nodes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    /// A scalar leaf carrying its [`BasicKind`].
    Basic(BasicKind),
    /// A value whose concrete type is carried alongside each value at
    /// runtime rather than fixed by the signature. Leaf.
    Variant,
    /// Homogeneous sequence; exactly one child describing the element type.
    Array(Box<TypeNode>),
    /// Ordered, fixed-arity composite; field order is significant.
    Struct(Vec<TypeNode>),
    /// Key/value entry type; the key precedes the value in the signature
    /// and must be a basic scalar type.
    Dict {
        key: Box<TypeNode>,
        value: Box<TypeNode>,
    },
}

impl TypeNode {
    /// Name of this node's kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeNode::Basic(_) => "basic",
            TypeNode::Variant => "variant",
            TypeNode::Array(_) => "array",
            TypeNode::Struct(_) => "struct",
            TypeNode::Dict { .. } => "dictionary",
        }
    }
}
