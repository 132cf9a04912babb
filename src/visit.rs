//! Generic depth-first traversal of a signature tree
//!
//! A traversal fires a paired enter/leave hook for every node: enter before
//! descending into children, leave after. Consumers implement [`Visitor`]
//! and override only the hooks they care about; every hook has a default
//! empty body, so an unimplemented hook is a plain no-op call.
//!
//! Traversal order is fixed: struct fields in declared order, dictionary
//! key before value, always.

use crate::parser::ast::{BasicKind, TypeNode};

/// Paired enter/leave hooks, one pair per node kind.
///
/// All ten methods default to doing nothing; implement the subset you need.
/// Hooks take `&mut self` so visitors can accumulate state (the pretty
/// printer builds its output string this way).
pub trait Visitor {
    fn enter_basic(&mut self, _kind: BasicKind) {}
    fn leave_basic(&mut self, _kind: BasicKind) {}

    fn enter_variant(&mut self) {}
    fn leave_variant(&mut self) {}

    fn enter_array(&mut self) {}
    fn leave_array(&mut self) {}

    fn enter_struct(&mut self) {}
    fn leave_struct(&mut self) {}

    fn enter_dict(&mut self) {}
    fn leave_dict(&mut self) {}
}

/// Traverse every top-level node of a parsed signature in order.
///
/// The tree is never mutated; repeated traversals of the same tree produce
/// the same hook sequence.
pub fn visit_tree<V: Visitor>(tree: &[TypeNode], visitor: &mut V) {
    for node in tree {
        visit_node(node, visitor);
    }
}

/// Traverse a single node depth-first, firing enter before children and
/// leave after.
pub fn visit_node<V: Visitor>(node: &TypeNode, visitor: &mut V) {
    match node {
        TypeNode::Basic(kind) => {
            visitor.enter_basic(*kind);
            visitor.leave_basic(*kind);
        }
        TypeNode::Variant => {
            visitor.enter_variant();
            visitor.leave_variant();
        }
        TypeNode::Array(element) => {
            visitor.enter_array();
            visit_node(element, visitor);
            visitor.leave_array();
        }
        TypeNode::Struct(fields) => {
            visitor.enter_struct();
            for field in fields {
                visit_node(field, visitor);
            }
            visitor.leave_struct();
        }
        TypeNode::Dict { key, value } => {
            visitor.enter_dict();
            visit_node(key, visitor);
            visit_node(value, visitor);
            visitor.leave_dict();
        }
    }
}
