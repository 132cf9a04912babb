//! Tree builder: token sequence → parse tree
//!
//! Consumes the flat [`Token`] sequence and produces the ordered list of
//! top-level [`TypeNode`]s. Nesting is tracked with an explicit stack of
//! open containers; every open must be matched by a close of the same kind
//! in LIFO order. Arrays have no close token: an array holds exactly one
//! element type, so attaching that single child completes the array and
//! pops it in the same step.

use crate::error::{ContainerKind, SignatureError};
use crate::parser::ast::{BasicKind, TypeNode};
use crate::parser::lexer::{tokenize, Token};

/// A partially built container on the open-container stack.
///
/// An `Array` carries no slot because it never stays open once a child
/// arrives; `Struct` accumulates fields, `Dict` fills key then value.
#[derive(Debug)]
enum Container {
    Array,
    Struct(Vec<TypeNode>),
    Dict {
        key: Option<TypeNode>,
        value: Option<TypeNode>,
    },
}

impl Container {
    fn kind(&self) -> ContainerKind {
        match self {
            Container::Array => ContainerKind::Array,
            Container::Struct(_) => ContainerKind::Struct,
            Container::Dict { .. } => ContainerKind::Dict,
        }
    }
}

/// Stack machine that assembles the tree.
struct Builder {
    root: Vec<TypeNode>,
    stack: Vec<Container>,
}

impl Builder {
    fn new() -> Self {
        Self {
            root: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// Dispatch one token. `position` is the token's index in the input,
    /// which equals its character position in the signature.
    fn step(&mut self, token: Token, position: usize) -> Result<(), SignatureError> {
        match token {
            Token::ArrayOpen => {
                self.stack.push(Container::Array);
                Ok(())
            }
            Token::StructOpen => {
                self.stack.push(Container::Struct(Vec::new()));
                Ok(())
            }
            Token::DictOpen => {
                self.stack.push(Container::Dict {
                    key: None,
                    value: None,
                });
                Ok(())
            }
            Token::StructClose => self.close(ContainerKind::Struct, position),
            Token::DictClose => self.close(ContainerKind::Dict, position),
            Token::Variant => self.attach(TypeNode::Variant, position),
            Token::Byte => self.attach_basic(BasicKind::Byte, position),
            Token::Boolean => self.attach_basic(BasicKind::Boolean, position),
            Token::Int16 => self.attach_basic(BasicKind::Int16, position),
            Token::Uint16 => self.attach_basic(BasicKind::Uint16, position),
            Token::Int32 => self.attach_basic(BasicKind::Int32, position),
            Token::Uint32 => self.attach_basic(BasicKind::Uint32, position),
            Token::Int64 => self.attach_basic(BasicKind::Int64, position),
            Token::Uint64 => self.attach_basic(BasicKind::Uint64, position),
            Token::Double => self.attach_basic(BasicKind::Double, position),
            Token::UnixFd => self.attach_basic(BasicKind::UnixFd, position),
            Token::String => self.attach_basic(BasicKind::String, position),
            Token::ObjectPath => self.attach_basic(BasicKind::ObjectPath, position),
            Token::Signature => self.attach_basic(BasicKind::Signature, position),
        }
    }

    fn attach_basic(&mut self, kind: BasicKind, position: usize) -> Result<(), SignatureError> {
        self.attach(TypeNode::Basic(kind), position)
    }

    /// Attach a completed node to the innermost open container, or to the
    /// root sequence when nothing is open.
    ///
    /// Filling an array completes the array itself, which then has to be
    /// attached one level further out, so this runs as a loop rather than
    /// recursing: each iteration either finishes or wraps `node` in one
    /// more completed array.
    fn attach(&mut self, node: TypeNode, position: usize) -> Result<(), SignatureError> {
        let mut node = node;

        loop {
            match self.stack.last_mut() {
                None => {
                    self.root.push(node);
                    return Ok(());
                }
                Some(Container::Array) => {
                    self.stack.pop();
                    node = TypeNode::Array(Box::new(node));
                }
                Some(Container::Struct(fields)) => {
                    fields.push(node);
                    return Ok(());
                }
                Some(Container::Dict { key, value }) => {
                    if key.is_none() {
                        // The bus grammar restricts dictionary keys to
                        // basic scalar types.
                        if !matches!(node, TypeNode::Basic(_)) {
                            return Err(SignatureError::InvalidDictionaryKey {
                                found: node.kind_name(),
                                position,
                            });
                        }
                        *key = Some(node);
                    } else if value.is_none() {
                        *value = Some(node);
                    } else {
                        return Err(SignatureError::DictionaryOverflow { position });
                    }
                    return Ok(());
                }
            }
        }
    }

    /// Handle a close token of the given kind: pop the innermost container,
    /// verify it matches, seal it into a node, and attach that node.
    fn close(&mut self, found: ContainerKind, position: usize) -> Result<(), SignatureError> {
        let container = self
            .stack
            .pop()
            .ok_or(SignatureError::UnbalancedContainer { found, position })?;

        if container.kind() != found {
            return Err(SignatureError::MismatchedContainer {
                expected: container.kind(),
                found,
                position,
            });
        }

        let node = match container {
            Container::Struct(fields) => TypeNode::Struct(fields),
            Container::Dict {
                key: Some(key),
                value: Some(value),
            } => TypeNode::Dict {
                key: Box::new(key),
                value: Box::new(value),
            },
            Container::Dict { .. } => {
                return Err(SignatureError::DictionaryUnderflow { position });
            }
            // Arrays auto-close on their single child and never reach here.
            Container::Array => unreachable!("array has no close token"),
        };

        self.attach(node, position)
    }

    /// Finish the build; any container still open is a malformed signature.
    fn finish(self) -> Result<Vec<TypeNode>, SignatureError> {
        if let Some(container) = self.stack.last() {
            return Err(SignatureError::UnterminatedContainer {
                kind: container.kind(),
            });
        }
        Ok(self.root)
    }
}

/// Build a parse tree from a token sequence.
pub fn build(tokens: &[Token]) -> Result<Vec<TypeNode>, SignatureError> {
    let mut builder = Builder::new();

    for (position, token) in tokens.iter().enumerate() {
        builder.step(*token, position)?;
    }

    builder.finish()
}

/// Parse a signature string into its type tree: tokenize, then build.
///
/// This is the main entry point of the crate.
///
/// ```
/// use sigtree::{parse_signature, BasicKind, TypeNode};
///
/// let tree = parse_signature("as").unwrap();
/// assert_eq!(
///     tree,
///     vec![TypeNode::Array(Box::new(TypeNode::Basic(BasicKind::String)))]
/// );
/// ```
pub fn parse_signature(signature: &str) -> Result<Vec<TypeNode>, SignatureError> {
    let tokens = tokenize(signature)?;
    build(&tokens)
}
