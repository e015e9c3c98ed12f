//! Whole-document helpers: root wrapping and file output.
//!
//! The renderer emits fragments. These helpers turn a fragment into a
//! complete HTML document by inserting the missing `<html>`/`<body>`
//! shell, then write rendered markup or CSS to disk.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::node::{Node, markup};
use crate::render::Render;
use crate::value::Value;

const DOCTYPE: &str = "<!DOCTYPE html>";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Wrap a markup fragment into a full `<html>` document.
///
/// A node already tagged `html` is returned as-is. A `head` or `body`
/// node is wrapped in `<html>`; anything else lands inside
/// `<html><body>...</body></html>`. The inserted `html` element carries
/// the XHTML namespace.
pub fn wrap_document(node: &Node) -> Result<Node> {
    if node.context().is_style() {
        return Err(Error::ContextMismatch(node.tag().to_string()));
    }
    if node.tag() == "html" {
        return Ok(node.clone());
    }
    let shell = markup("html")?.with_attr("xmlns", XHTML_NS)?;
    match node.tag() {
        "head" | "body" => shell.with_children(node.clone()),
        _ => shell.with_children(markup("body")?.with_children(node.clone())?),
    }
}

/// Render a fragment as a complete document with a doctype line.
pub fn render_document(node: &Node) -> Result<String> {
    let wrapped = wrap_document(node)?;
    let mut out = String::with_capacity(64);
    out.push_str(DOCTYPE);
    out.push('\n');
    wrapped.render_to(&mut out);
    out.push('\n');
    Ok(out)
}

/// Write a fragment to `path` as a complete HTML document.
pub fn write_html(path: impl AsRef<Path>, node: &Node) -> Result<()> {
    let path = path.as_ref();
    let document = render_document(node)?;
    fs::write(path, document)?;
    debug!("wrote HTML document to {}", path.display());
    Ok(())
}

/// Write CSS rules to `path`, one block per rule.
///
/// Accepts any slice of style nodes, including
/// [`Style::rules`](crate::Style::rules).
pub fn write_css(path: impl AsRef<Path>, rules: &[Node]) -> Result<()> {
    let path = path.as_ref();
    let mut out = String::new();
    for rule in rules {
        if !rule.context().is_style() {
            return Err(Error::NonStyleRule(Value::Node(rule.clone()).kind()));
        }
        rule.render_to(&mut out);
    }
    fs::write(path, out)?;
    debug!("wrote {} CSS rules to {}", rules.len(), path.display());
    Ok(())
}
