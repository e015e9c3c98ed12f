//! Scoped styles: unique selector markers and cascade barriers.
//!
//! A [`Style`] is a set of CSS rules whose selectors are rewritten with a
//! unique attribute-selector suffix, `[v-style<id>]`. Applying the style
//! to a markup tree stamps the matching valueless `v-style<id>` attribute
//! onto every element, so the rules reach exactly that subtree and nothing
//! else on the page.
//!
//! The result of an application is a [`Styled`] wrapper, not a plain node.
//! When an outer style's stamping pass meets a `Styled` value it skips the
//! whole subtree: inner scopes are never overwritten by an ancestor's
//! scope. That is the cascade barrier.
//!
//! # Example
//!
//! ```
//! use ramus::{Render, ScopeCounter, Style, css, markup};
//!
//! let ids = ScopeCounter::new();
//! let warn = Style::new(&ids, [css("p")?.with_attr("color", "red")?])?;
//!
//! let scoped = warn.apply(&markup("p")?.with_children("careful")?)?;
//! assert_eq!(scoped.render(), "<p v-style1>careful</p>");
//! assert_eq!(warn.render(), "p[v-style1] {color: red;}\n");
//! # Ok::<(), ramus::Error>(())
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use crate::error::{Error, Result};
use crate::node::{IntoChildren, Node};
use crate::render::Render;
use crate::value::Value;

/// Source of unique scope ids.
///
/// Pass one counter to every [`Style::new`] call that should share an id
/// space; a `static` counter gives process-wide uniqueness:
///
/// ```
/// use ramus::ScopeCounter;
///
/// static IDS: ScopeCounter = ScopeCounter::new();
/// assert_ne!(IDS.next_id(), IDS.next_id());
/// ```
#[derive(Debug)]
pub struct ScopeCounter {
    next: AtomicU64,
}

impl ScopeCounter {
    /// A fresh counter. The first id handed out is 1.
    pub const fn new() -> ScopeCounter {
        ScopeCounter {
            next: AtomicU64::new(1),
        }
    }

    /// Take the next unique id.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for ScopeCounter {
    fn default() -> ScopeCounter {
        ScopeCounter::new()
    }
}

#[derive(Debug, PartialEq)]
struct StyleData {
    id: u64,
    rules: Vec<Node>,
}

/// A set of CSS rules rewritten under a unique scope id.
#[derive(Debug, Clone, PartialEq)]
pub struct Style(Arc<StyleData>);

impl Style {
    /// Build a scoped style from CSS rule nodes.
    ///
    /// Takes the next id from `counter` and rewrites every selector in
    /// `rules` (the caller's nodes are untouched). A non-style rule is
    /// rejected.
    pub fn new(counter: &ScopeCounter, rules: impl IntoIterator<Item = Node>) -> Result<Style> {
        let id = counter.next_id();
        let mut rewritten = Vec::new();
        for rule in rules {
            if !rule.context().is_style() {
                return Err(Error::NonStyleRule(Value::Node(rule).kind()));
            }
            rewritten.push(scope_selectors(id, &rule));
        }
        debug!("style scope {id} holds {} rules", rewritten.len());
        Ok(Style(Arc::new(StyleData {
            id,
            rules: rewritten,
        })))
    }

    pub fn id(&self) -> u64 {
        self.0.id
    }

    /// The rewritten rules, for insertion into whatever stylesheet
    /// container the caller owns.
    pub fn rules(&self) -> &[Node] {
        &self.0.rules
    }

    /// Scope a markup tree to this style.
    ///
    /// Stamps the scope marker onto the node and, recursively, onto its
    /// node children, stopping at any [`Styled`] wrapper found inside.
    pub fn apply(&self, node: &Node) -> Result<Styled> {
        if node.context().is_style() {
            return Err(Error::ContextMismatch(node.tag().to_string()));
        }
        Ok(Styled {
            node: stamp_node(self.0.id, node),
            style: self.clone(),
        })
    }
}

impl Render for Style {
    fn render_to(&self, out: &mut String) {
        for rule in self.rules() {
            rule.render_to(out);
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// A markup tree bound to the scoped style that was applied to it.
///
/// Renders exactly like its inner node. Not a plain [`Node`]: stamping
/// passes from outer styles recognize this wrapper and leave the subtree
/// alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Styled {
    node: Node,
    style: Style,
}

impl Styled {
    /// The stamped markup tree.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// The style this tree is scoped to.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Append children, stamping each new child with this wrapper's scope
    /// before the ordinary extension pipeline runs.
    pub fn with_children(&self, children: impl IntoChildren) -> Result<Styled> {
        let mut added = Vec::new();
        children.into_children(&mut added);
        let stamped: Vec<Value> = added.iter().map(|c| stamp(self.style.id(), c)).collect();
        Ok(self.rewrap(self.node.with_children(stamped)?))
    }

    /// Set an attribute, as [`Node::with_attr`] would.
    pub fn with_attr(&self, name: &str, value: impl Into<Value>) -> Result<Styled> {
        Ok(self.rewrap(self.node.with_attr(name, value)?))
    }

    /// Set an attribute verbatim, as [`Node::with_raw_attr`] would.
    pub fn with_raw_attr(&self, name: &str, value: impl Into<Value>) -> Result<Styled> {
        Ok(self.rewrap(self.node.with_raw_attr(name, value)?))
    }

    /// Append a class token, as [`Node::with_class`] would.
    pub fn with_class(&self, token: &str) -> Result<Styled> {
        Ok(self.rewrap(self.node.with_class(token)?))
    }

    /// Append a class token verbatim, as [`Node::with_raw_class`] would.
    pub fn with_raw_class(&self, token: &str) -> Result<Styled> {
        Ok(self.rewrap(self.node.with_raw_class(token)?))
    }

    fn rewrap(&self, node: Node) -> Styled {
        Styled {
            node,
            style: self.style.clone(),
        }
    }
}

impl Render for Styled {
    fn render_to(&self, out: &mut String) {
        self.node.render_to(out);
    }
}

impl fmt::Display for Styled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn marker(id: u64) -> String {
    format!("v-style{id}")
}

/// Rewrite a rule's selectors under a scope id.
///
/// A node with no declarations and an at-rule node keep their selector
/// text; any other node gets the `[v-style<id>]` suffix. Children are
/// rewritten with the same rule.
fn scope_selectors(id: u64, node: &Node) -> Node {
    let keep = node.attrs().next().is_none() || node.tag().starts_with('@');
    let tag = if keep {
        node.tag().to_string()
    } else {
        format!("{}[{}]", node.tag(), marker(id))
    };
    let children = node
        .children()
        .iter()
        .map(|child| match child {
            Value::Node(n) => Value::Node(scope_selectors(id, n)),
            other => other.clone(),
        })
        .collect();
    Node::assemble(node.context(), tag, node.attrs_vec(), children)
}

/// Stamp the scope marker through a value.
///
/// Non-node values and style nodes pass through unchanged. A `Styled`
/// value passes through unchanged WITHOUT recursion: its subtree belongs
/// to another scope.
pub(crate) fn stamp(id: u64, value: &Value) -> Value {
    match value {
        Value::Node(node) if node.context().is_markup() => Value::Node(stamp_node(id, node)),
        other => other.clone(),
    }
}

fn stamp_node(id: u64, node: &Node) -> Node {
    let children = node.children().iter().map(|c| stamp(id, c)).collect();
    let mut attrs = node.attrs_vec();
    let marker = marker(id);
    if !attrs.iter().any(|(name, _)| *name == marker) {
        attrs.push((marker, Value::Empty));
    }
    Node::assemble(node.context(), node.tag().to_string(), attrs, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{css, markup};

    #[test]
    fn test_counter_starts_at_one() {
        let ids = ScopeCounter::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }

    #[test]
    fn test_style_rejects_markup_rules() {
        let ids = ScopeCounter::new();
        assert!(matches!(
            Style::new(&ids, [markup("p").unwrap()]),
            Err(Error::NonStyleRule(_))
        ));
    }

    #[test]
    fn test_selector_rewrite_suffixes_declaring_nodes() {
        let ids = ScopeCounter::new();
        let style = Style::new(
            &ids,
            [css("p").unwrap().with_attr("color", "red").unwrap()],
        )
        .unwrap();
        assert_eq!(style.rules()[0].tag(), "p[v-style1]");
    }

    #[test]
    fn test_selector_rewrite_keeps_bare_and_at_rule_selectors() {
        let ids = ScopeCounter::new();
        let rule = css("p")
            .unwrap()
            .with_children(css("q").unwrap().with_attr("color", "blue").unwrap())
            .unwrap();
        let media = css("@media (min-width: 100px)")
            .unwrap()
            .with_children(css("b").unwrap().with_attr("x", 1).unwrap())
            .unwrap();
        let style = Style::new(&ids, [rule, media]).unwrap();

        let plain = &style.rules()[0];
        assert_eq!(plain.tag(), "p");
        let Value::Node(child) = &plain.children()[0] else {
            panic!("expected node child");
        };
        assert_eq!(child.tag(), "q[v-style1]");

        let media = &style.rules()[1];
        assert_eq!(media.tag(), "@media (min-width: 100px)");
        let Value::Node(child) = &media.children()[0] else {
            panic!("expected node child");
        };
        assert_eq!(child.tag(), "b[v-style1]");
    }

    #[test]
    fn test_original_rules_untouched() {
        let ids = ScopeCounter::new();
        let rule = css("p").unwrap().with_attr("color", "red").unwrap();
        let _style = Style::new(&ids, [rule.clone()]).unwrap();
        assert_eq!(rule.tag(), "p");
    }

    #[test]
    fn test_apply_stamps_subtree() {
        let ids = ScopeCounter::new();
        let style = Style::new(&ids, []).unwrap();
        let tree = markup("div")
            .unwrap()
            .with_children(markup("p").unwrap().with_children("x").unwrap())
            .unwrap();
        let styled = style.apply(&tree).unwrap();
        assert_eq!(
            styled.render(),
            "<div v-style1><p v-style1>x</p></div>"
        );
    }

    #[test]
    fn test_apply_requires_markup() {
        let ids = ScopeCounter::new();
        let style = Style::new(&ids, []).unwrap();
        assert!(matches!(
            style.apply(&css("p").unwrap()),
            Err(Error::ContextMismatch(_))
        ));
    }

    #[test]
    fn test_cascade_barrier() {
        let ids = ScopeCounter::new();
        let inner_style = Style::new(&ids, []).unwrap();
        let outer_style = Style::new(&ids, []).unwrap();

        let inner = inner_style
            .apply(&markup("em").unwrap().with_children("kept").unwrap())
            .unwrap();
        let tree = markup("div").unwrap().with_children(inner).unwrap();
        let styled = outer_style.apply(&tree).unwrap();

        assert_eq!(
            styled.render(),
            "<div v-style2><em v-style1>kept</em></div>"
        );
    }

    #[test]
    fn test_styled_extension_stamps_new_children() {
        let ids = ScopeCounter::new();
        let style = Style::new(&ids, []).unwrap();
        let styled = style
            .apply(&markup("div").unwrap())
            .unwrap()
            .with_children(markup("p").unwrap())
            .unwrap();
        assert_eq!(styled.render(), "<div v-style1><p v-style1></p></div>");
    }

    #[test]
    fn test_styled_attr_extension_is_plain() {
        let ids = ScopeCounter::new();
        let style = Style::new(&ids, []).unwrap();
        let styled = style
            .apply(&markup("div").unwrap())
            .unwrap()
            .with_class("fooBar")
            .unwrap();
        assert_eq!(
            styled.render(),
            "<div v-style1 class=\"foo-bar\"></div>"
        );
    }

    #[test]
    fn test_stamp_is_idempotent_per_scope() {
        let ids = ScopeCounter::new();
        let style = Style::new(&ids, []).unwrap();
        let once = style.apply(&markup("p").unwrap()).unwrap();
        let twice = style.apply(once.node()).unwrap();
        assert_eq!(twice.render(), "<p v-style1></p>");
    }

    #[test]
    fn test_style_renders_its_rules() {
        let ids = ScopeCounter::new();
        let style = Style::new(
            &ids,
            [
                css("p").unwrap().with_attr("color", "red").unwrap(),
                css("q").unwrap().with_attr("color", "blue").unwrap(),
            ],
        )
        .unwrap();
        assert_eq!(
            style.render(),
            "p[v-style1] {color: red;}\nq[v-style1] {color: blue;}\n"
        );
    }
}
