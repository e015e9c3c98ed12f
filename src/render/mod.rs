//! Tree serialization.
//!
//! This module walks a node tree and emits text, dispatching on each
//! node's own context: markup nodes become escaped HTML-style elements,
//! style nodes become CSS blocks. Rendering never fails; everything that
//! could go wrong was rejected while the tree was built.
//!
//! Nested style selectors take the central fork: an at-rule keeps its
//! children inside its braces, any other selector closes first and its
//! children reappear as flattened descendant blocks (`p` containing `q`
//! emits a `p q` block).

mod escape;
mod pretty;

pub use pretty::{pretty, pretty_to};

use crate::node::Node;
use crate::validate::{is_boolean_attr, is_void_tag};
use crate::value::Value;

pub(crate) use escape::{Table, escape_into};

/// Serialize a value as markup or CSS text.
pub trait Render {
    /// Append this value's rendered form to the buffer.
    fn render_to(&self, out: &mut String);

    /// Render to a fresh string (convenience method).
    fn render(&self) -> String {
        let mut out = String::new();
        self.render_to(&mut out);
        out
    }
}

impl Render for Node {
    fn render_to(&self, out: &mut String) {
        if self.context().is_style() {
            style_to(self, out);
        } else {
            markup_to(self, out);
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Emit one markup element and its subtree.
fn markup_to(node: &Node, out: &mut String) {
    if !open_tag(node, out) {
        return;
    }
    let table = child_table(node);
    for child in node.children() {
        match child {
            Value::Node(n) => n.render_to(out),
            Value::Styled(s) => s.node().render_to(out),
            Value::Empty => {}
            scalar => scalar_child(scalar, table, out),
        }
    }
    close_tag(node, out);
}

/// Emit `<tag attrs...>`. A void tag self-closes; the return value says
/// whether the element is still open.
pub(crate) fn open_tag(node: &Node, out: &mut String) -> bool {
    out.push('<');
    escape_into(out, node.tag(), Table::Full);

    for (name, value) in node.attrs() {
        match value {
            Value::Bool(false) if is_boolean_attr(name) => continue,
            Value::Bool(true) if is_boolean_attr(name) => {
                out.push(' ');
                escape_into(out, name, Table::Full);
            }
            Value::Empty => {
                out.push(' ');
                escape_into(out, name, Table::Full);
            }
            value => {
                out.push(' ');
                escape_into(out, name, Table::Full);
                out.push_str("=\"");
                let mut text = String::new();
                match value {
                    Value::Node(n) => n.render_to(&mut text),
                    Value::Styled(s) => s.node().render_to(&mut text),
                    scalar => scalar.write_scalar(&mut text),
                }
                escape_into(out, &text, Table::AttrValue);
                out.push('"');
            }
        }
    }

    if is_void_tag(node.tag()) {
        out.push_str(" />");
        return false;
    }
    out.push('>');
    true
}

pub(crate) fn close_tag(node: &Node, out: &mut String) {
    out.push_str("</");
    escape_into(out, node.tag(), Table::Full);
    out.push('>');
}

/// The escape table for this node's scalar children.
pub(crate) fn child_table(node: &Node) -> Table {
    if node.context().escaping_disabled() {
        Table::Identity
    } else {
        Table::Full
    }
}

/// Emit one scalar child through the parent's escape table.
pub(crate) fn scalar_child(child: &Value, table: Table, out: &mut String) {
    let mut text = String::new();
    child.write_scalar(&mut text);
    escape_into(out, &text, table);
}

/// Emit one CSS block, then its children per the at-rule fork. Each
/// completed block ends with a newline. Style output is never escaped.
fn style_to(node: &Node, out: &mut String) {
    out.push_str(node.tag());
    out.push_str(" {");

    let mut first = true;
    for (name, value) in node.attrs() {
        if !first {
            out.push(' ');
        }
        first = false;
        out.push_str(name);
        out.push_str(": ");
        value.write_scalar(out);
        out.push(';');
    }

    if node.tag().starts_with('@') {
        if node.has_children() {
            out.push('\n');
            for child in node.children() {
                if let Value::Node(child) = child {
                    style_to(child, out);
                }
            }
        }
        out.push_str("}\n");
    } else {
        out.push_str("}\n");
        for child in node.children() {
            if let Value::Node(child) = child {
                let merged = child.retagged(format!("{} {}", node.tag(), child.tag()));
                style_to(&merged, out);
            }
        }
    }
}
