//! Indented rendering for human inspection.
//!
//! Same escaping and same CSS nesting decisions as the compact renderer,
//! with two-space indentation and one child per line wherever an element
//! contains nested nodes. Elements holding only scalar children stay on
//! one line, so text keeps its exact spacing.

use crate::node::Node;
use crate::value::Value;

use super::{child_table, close_tag, open_tag, scalar_child};

/// Render a tree with indentation.
///
/// ```
/// use ramus::{markup, pretty};
///
/// let tree = markup("div")?.with_children(markup("p")?.with_children("hi")?)?;
/// assert_eq!(pretty(&tree), "<div>\n  <p>hi</p>\n</div>\n");
/// # Ok::<(), ramus::Error>(())
/// ```
pub fn pretty(node: &Node) -> String {
    let mut out = String::new();
    pretty_to(&mut out, node);
    out
}

/// Render a tree with indentation into an existing buffer.
pub fn pretty_to(out: &mut String, node: &Node) {
    let mut printer = Printer { out, depth: 0 };
    printer.node(node);
}

struct Printer<'a> {
    out: &'a mut String,
    depth: usize,
}

impl Printer<'_> {
    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }

    fn node(&mut self, node: &Node) {
        if node.context().is_style() {
            self.style(node);
        } else {
            self.markup(node);
        }
    }

    fn markup(&mut self, node: &Node) {
        self.indent();
        if !open_tag(node, self.out) {
            self.out.push('\n');
            return;
        }

        let has_node_children = node
            .children()
            .iter()
            .any(|c| matches!(c, Value::Node(_) | Value::Styled(_)));
        let table = child_table(node);

        if !has_node_children {
            for child in node.children() {
                scalar_child(child, table, self.out);
            }
            close_tag(node, self.out);
            self.out.push('\n');
            return;
        }

        self.out.push('\n');
        self.depth += 1;
        for child in node.children() {
            match child {
                Value::Node(n) => self.node(n),
                Value::Styled(s) => self.node(s.node()),
                Value::Empty => {}
                scalar => {
                    self.indent();
                    scalar_child(scalar, table, self.out);
                    self.out.push('\n');
                }
            }
        }
        self.depth -= 1;
        self.indent();
        close_tag(node, self.out);
        self.out.push('\n');
    }

    fn style(&mut self, node: &Node) {
        let is_at_rule = node.tag().starts_with('@');
        let has_decls = node.attrs().next().is_some();
        let nests = is_at_rule && node.has_children();

        self.indent();
        self.out.push_str(node.tag());
        if !has_decls && !nests {
            self.out.push_str(" {}\n");
        } else {
            self.out.push_str(" {\n");
            for (name, value) in node.attrs() {
                self.depth += 1;
                self.indent();
                self.depth -= 1;
                self.out.push_str(name);
                self.out.push_str(": ");
                value.write_scalar(self.out);
                self.out.push_str(";\n");
            }
            if nests {
                self.depth += 1;
                for child in node.children() {
                    if let Value::Node(child) = child {
                        self.style(child);
                    }
                }
                self.depth -= 1;
            }
            self.indent();
            self.out.push_str("}\n");
        }

        if !is_at_rule {
            for child in node.children() {
                if let Value::Node(child) = child {
                    let merged = child.retagged(format!("{} {}", node.tag(), child.tag()));
                    self.style(&merged);
                }
            }
        }
    }
}
