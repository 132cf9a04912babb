//! Indented pretty printer, the sample [`Visitor`] consumer
//!
//! Renders a parsed tree one line per node, with two spaces of indentation
//! per container nesting level. Container hooks grow the indent on enter
//! and shrink it on leave; leaves print at the current depth.

use crate::parser::ast::{BasicKind, TypeNode};
use crate::visit::{visit_tree, Visitor};

const INDENT: &str = "  ";

/// Visitor that accumulates an indented textual rendering of the tree.
#[derive(Debug, Default)]
pub struct PrettyPrinter {
    out: String,
    depth: usize,
}

impl PrettyPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the printer and return the accumulated text.
    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }
}

impl Visitor for PrettyPrinter {
    fn enter_basic(&mut self, kind: BasicKind) {
        self.line(&format!("basic: {}", kind));
    }

    fn enter_variant(&mut self) {
        self.line("variant");
    }

    fn enter_array(&mut self) {
        self.line("array");
        self.depth += 1;
    }

    fn leave_array(&mut self) {
        self.depth -= 1;
    }

    fn enter_struct(&mut self) {
        self.line("struct");
        self.depth += 1;
    }

    fn leave_struct(&mut self) {
        self.depth -= 1;
    }

    fn enter_dict(&mut self) {
        self.line("dict");
        self.depth += 1;
    }

    fn leave_dict(&mut self) {
        self.depth -= 1;
    }
}

/// Render a parsed tree as indented text, one line per node.
pub fn pretty_print(tree: &[TypeNode]) -> String {
    let mut printer = PrettyPrinter::new();
    visit_tree(tree, &mut printer);
    printer.finish()
}
