//! The node tree: construction, flattening, and extension.
//!
//! A [`Node`] is an immutable element or CSS rule. Every constructor and
//! extension method runs the full normalize/validate pipeline and returns
//! a new node; the receiver is never altered. Unchanged subtrees are
//! shared between the old and new node, so extension is cheap even on
//! deep trees.
//!
//! # Example
//!
//! ```
//! use ramus::{markup, Render};
//!
//! let list = markup("ul")?.with_children((
//!     markup("li")?.with_children("one")?,
//!     markup("li")?.with_children("two")?,
//! ))?;
//! assert_eq!(list.render(), "<ul><li>one</li><li>two</li></ul>");
//! # Ok::<(), ramus::Error>(())
//! ```

use std::sync::Arc;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::normalize::{self, kebab};
use crate::scoped::Styled;
use crate::unit::{Calc, Dimension, Unit};
use crate::validate::{self, Validator};
use crate::value::Value;

#[derive(Debug, PartialEq)]
struct NodeData {
    context: Context,
    tag: String,
    attrs: Vec<(String, Value)>,
    children: Vec<Value>,
}

/// An immutable markup element or CSS rule.
///
/// Attributes keep insertion order; writing an existing name again
/// replaces the value in place, so render order is the order of first
/// writes. Children render in the order they were added.
#[derive(Debug, Clone, PartialEq)]
pub struct Node(Arc<NodeData>);

/// Construct a markup element with the default markup context.
pub fn markup(tag: &str) -> Result<Node> {
    Node::new(Context::MARKUP, tag)
}

/// Construct a CSS rule with the default style context.
///
/// The tag is the selector: an ordinary selector like `p` or `.warn`, or
/// an at-rule like `@media (min-width: 100px)`.
pub fn css(selector: &str) -> Result<Node> {
    Node::new(Context::STYLE, selector)
}

impl Node {
    /// Construct a childless, attributeless node under `context`.
    pub fn new(context: Context, tag: &str) -> Result<Node> {
        let tag = normalize::tag(tag);
        validate::tag(context, &tag)?;
        Ok(Node(Arc::new(NodeData {
            context,
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        })))
    }

    /// Assemble a node from parts that already passed the pipeline.
    pub(crate) fn assemble(
        context: Context,
        tag: String,
        attrs: Vec<(String, Value)>,
        children: Vec<Value>,
    ) -> Node {
        Node(Arc::new(NodeData {
            context,
            tag,
            attrs,
            children,
        }))
    }

    pub fn context(&self) -> Context {
        self.0.context
    }

    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    /// Attributes in render order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up an attribute by its normalized name.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.0
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn children(&self) -> &[Value] {
        &self.0.children
    }

    pub fn has_children(&self) -> bool {
        !self.0.children.is_empty()
    }

    /// Return a new node with `children` flattened, validated, and
    /// appended after the existing children.
    pub fn with_children(&self, children: impl IntoChildren) -> Result<Node> {
        let mut added = Vec::new();
        children.into_children(&mut added);
        for child in &added {
            validate::child(self.0.context, &self.0.tag, child)?;
        }
        let mut all = self.0.children.clone();
        all.extend(added);
        Ok(self.rebuild(self.0.attrs.clone(), all))
    }

    /// Return a new node with the attribute set, normalizing the name.
    pub fn with_attr(&self, name: &str, value: impl Into<Value>) -> Result<Node> {
        self.merge_attrs(normalize::attr(name, value.into()))
    }

    /// Return a new node with the attribute set, using the name verbatim.
    ///
    /// The escape hatch for names normalization would mangle, like SVG's
    /// `viewBox`.
    pub fn with_raw_attr(&self, name: &str, value: impl Into<Value>) -> Result<Node> {
        self.merge_attrs(vec![(name.to_string(), value.into())])
    }

    /// Return a new node with each pair applied as [`with_attr`] would.
    ///
    /// [`with_attr`]: Node::with_attr
    pub fn with_attrs<K, V>(&self, attrs: impl IntoIterator<Item = (K, V)>) -> Result<Node>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut pairs = Vec::new();
        for (name, value) in attrs {
            pairs.extend(normalize::attr(name.as_ref(), value.into()));
        }
        self.merge_attrs(pairs)
    }

    /// Return a new node with the kebab-cased token appended to the
    /// `class` attribute, space-separated.
    pub fn with_class(&self, token: &str) -> Result<Node> {
        self.add_class(kebab(token))
    }

    /// Return a new node with the token appended to `class` verbatim.
    pub fn with_raw_class(&self, token: &str) -> Result<Node> {
        self.add_class(token.to_string())
    }

    /// Audit this markup tree against external tag/attribute tables.
    ///
    /// Reports the first unknown tag or unknown attribute. Nested style
    /// subtrees are skipped.
    pub fn check(&self, validator: &dyn Validator) -> Result<()> {
        validate::check_tree(self, validator)
    }

    fn add_class(&self, token: String) -> Result<Node> {
        if self.0.context.is_style() {
            return Err(Error::ClassOnStyleNode);
        }
        let value = match self.attr("class") {
            Some(existing) if !existing.is_empty() => {
                let mut joined = String::new();
                existing.write_scalar(&mut joined);
                joined.push(' ');
                joined.push_str(&token);
                Value::Text(joined)
            }
            _ => Value::Text(token),
        };
        self.merge_attrs(vec![("class".to_string(), value)])
    }

    fn merge_attrs(&self, pairs: Vec<(String, Value)>) -> Result<Node> {
        let mut attrs = self.0.attrs.clone();
        for (name, value) in pairs {
            validate::attr(self.0.context, &name, &value)?;
            match attrs.iter_mut().find(|(k, _)| *k == name) {
                Some(slot) => slot.1 = value,
                None => attrs.push((name, value)),
            }
        }
        Ok(self.rebuild(attrs, self.0.children.clone()))
    }

    /// Owned copy of the attribute list, for rebuilds that bypass the
    /// pipeline.
    pub(crate) fn attrs_vec(&self) -> Vec<(String, Value)> {
        self.0.attrs.clone()
    }

    /// Same node under a different tag. Used when flattening nested
    /// ordinary selectors into descendant blocks.
    pub(crate) fn retagged(&self, tag: String) -> Node {
        Node(Arc::new(NodeData {
            context: self.0.context,
            tag,
            attrs: self.0.attrs.clone(),
            children: self.0.children.clone(),
        }))
    }

    fn rebuild(&self, attrs: Vec<(String, Value)>, children: Vec<Value>) -> Node {
        Node(Arc::new(NodeData {
            context: self.0.context,
            tag: self.0.tag.clone(),
            attrs,
            children,
        }))
    }
}

/// Anything that can flatten itself into a child list.
///
/// Scalars contribute one value; containers, tuples, and options recurse
/// and concatenate, so arbitrarily nested mixes flatten in one pass.
/// Iterators go through [`flatten`], which consumes them eagerly exactly
/// once.
pub trait IntoChildren {
    fn into_children(self, out: &mut Vec<Value>);
}

/// Flatten an iterator of children into a value list.
///
/// ```
/// use ramus::{markup, flatten, Render};
///
/// let items = flatten((1..=3).map(|n| markup("li").unwrap().with_children(n).unwrap()));
/// let list = markup("ol")?.with_children(items)?;
/// assert_eq!(list.render(), "<ol><li>1</li><li>2</li><li>3</li></ol>");
/// # Ok::<(), ramus::Error>(())
/// ```
pub fn flatten<I>(iter: I) -> Vec<Value>
where
    I: IntoIterator,
    I::Item: IntoChildren,
{
    let mut out = Vec::new();
    for item in iter {
        item.into_children(&mut out);
    }
    out
}

macro_rules! scalar_children {
    ($($ty:ty),*) => {
        $(
            impl IntoChildren for $ty {
                fn into_children(self, out: &mut Vec<Value>) {
                    out.push(self.into());
                }
            }
        )*
    };
}

scalar_children!(
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    usize,
    f32,
    f64,
    bool,
    char,
    &str,
    String,
    Unit,
    Calc,
    Dimension,
    Node,
    Styled,
    Value,
    std::ops::Range<i64>,
    std::ops::Range<i32>
);

impl IntoChildren for &Node {
    fn into_children(self, out: &mut Vec<Value>) {
        out.push(self.clone().into());
    }
}

impl IntoChildren for &Styled {
    fn into_children(self, out: &mut Vec<Value>) {
        out.push(self.clone().into());
    }
}

impl IntoChildren for &Value {
    fn into_children(self, out: &mut Vec<Value>) {
        out.push(self.clone());
    }
}

impl IntoChildren for () {
    fn into_children(self, _out: &mut Vec<Value>) {}
}

impl<C: IntoChildren> IntoChildren for Vec<C> {
    fn into_children(self, out: &mut Vec<Value>) {
        for item in self {
            item.into_children(out);
        }
    }
}

impl<C: IntoChildren, const N: usize> IntoChildren for [C; N] {
    fn into_children(self, out: &mut Vec<Value>) {
        for item in self {
            item.into_children(out);
        }
    }
}

impl<C: IntoChildren + Clone> IntoChildren for &[C] {
    fn into_children(self, out: &mut Vec<Value>) {
        for item in self {
            item.clone().into_children(out);
        }
    }
}

impl<C: IntoChildren> IntoChildren for Option<C> {
    fn into_children(self, out: &mut Vec<Value>) {
        if let Some(item) = self {
            item.into_children(out);
        }
    }
}

macro_rules! tuple_children {
    ($($name:ident),+) => {
        impl<$($name: IntoChildren),+> IntoChildren for ($($name,)+) {
            fn into_children(self, out: &mut Vec<Value>) {
                #[allow(non_snake_case)]
                let ($($name,)+) = self;
                $($name.into_children(out);)+
            }
        }
    };
}

tuple_children!(A);
tuple_children!(A, B);
tuple_children!(A, B, C);
tuple_children!(A, B, C, D);
tuple_children!(A, B, C, D, E);
tuple_children!(A, B, C, D, E, F);
tuple_children!(A, B, C, D, E, F, G);
tuple_children!(A, B, C, D, E, F, G, H);
tuple_children!(A, B, C, D, E, F, G, H, I);
tuple_children!(A, B, C, D, E, F, G, H, I, J);
tuple_children!(A, B, C, D, E, F, G, H, I, J, K);
tuple_children!(A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_construction() {
        let p = markup("p").unwrap();
        assert!(p.context().is_markup());
        assert_eq!(p.tag(), "p");
        assert!(!p.has_children());
    }

    #[test]
    fn test_empty_tag_rejected() {
        assert!(matches!(markup(""), Err(Error::EmptyTag)));
        assert!(matches!(css(""), Err(Error::EmptyTag)));
    }

    #[test]
    fn test_extension_leaves_receiver_unaltered() {
        let base = markup("p").unwrap().with_children("one").unwrap();
        let extended = base.with_children("two").unwrap();

        assert_eq!(base.children().len(), 1);
        assert_eq!(extended.children().len(), 2);
    }

    #[test]
    fn test_children_append_in_order() {
        let p = markup("p")
            .unwrap()
            .with_children("a")
            .unwrap()
            .with_children(("b", "c"))
            .unwrap();
        let texts: Vec<_> = p
            .children()
            .iter()
            .map(|c| match c {
                Value::Text(s) => s.as_str(),
                _ => panic!("expected text"),
            })
            .collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn test_nested_children_flatten() {
        let p = markup("p")
            .unwrap()
            .with_children((1, vec![2, 3], Some(4), None::<i32>, [5, 6]))
            .unwrap();
        assert_eq!(p.children().len(), 6);
    }

    #[test]
    fn test_range_stays_opaque() {
        let p = markup("p").unwrap().with_children(1..3).unwrap();
        assert_eq!(p.children(), &[Value::Range(1, 3)]);
    }

    #[test]
    fn test_attr_normalization_and_raw_bypass() {
        let p = markup("p").unwrap().with_attr("fooBar", 1).unwrap();
        assert!(p.attr("foo-bar").is_some());

        let svg = markup("svg")
            .unwrap()
            .with_raw_attr("viewBox", "0 0 10 10")
            .unwrap();
        assert!(svg.attr("viewBox").is_some());
        assert!(svg.attr("view-box").is_none());
    }

    #[test]
    fn test_attr_overwrite_keeps_position() {
        let p = markup("p")
            .unwrap()
            .with_attrs([("a", 1), ("b", 2)])
            .unwrap()
            .with_attr("a", 9)
            .unwrap();
        let attrs: Vec<_> = p.attrs().map(|(k, v)| (k.to_string(), v.clone())).collect();
        assert_eq!(
            attrs,
            [
                ("a".to_string(), Value::Int(9)),
                ("b".to_string(), Value::Int(2)),
            ]
        );
    }

    #[test]
    fn test_void_tag_rejects_children() {
        let br = markup("br").unwrap();
        assert!(matches!(
            br.with_children("x"),
            Err(Error::VoidTagChildren(_))
        ));
    }

    #[test]
    fn test_class_sugar() {
        let p = markup("p").unwrap().with_class("fooBar").unwrap();
        assert_eq!(p.attr("class"), Some(&Value::Text("foo-bar".to_string())));

        let p = p.with_class("baz").unwrap();
        assert_eq!(
            p.attr("class"),
            Some(&Value::Text("foo-bar baz".to_string()))
        );
    }

    #[test]
    fn test_raw_class_verbatim() {
        let p = markup("p").unwrap().with_raw_class("fooBar").unwrap();
        assert_eq!(p.attr("class"), Some(&Value::Text("fooBar".to_string())));
    }

    #[test]
    fn test_class_attr_overrides_sugar() {
        let p = markup("p")
            .unwrap()
            .with_class("a")
            .unwrap()
            .with_attr("class", "b")
            .unwrap();
        assert_eq!(p.attr("class"), Some(&Value::Text("b".to_string())));
    }

    #[test]
    fn test_no_class_on_style_nodes() {
        let rule = css("p").unwrap();
        assert!(matches!(
            rule.with_class("warn"),
            Err(Error::ClassOnStyleNode)
        ));
        assert!(matches!(
            rule.with_raw_class("warn"),
            Err(Error::ClassOnStyleNode)
        ));
    }

    #[test]
    fn test_style_children_must_be_style_nodes() {
        let outer = css("p").unwrap();
        let inner = css("q").unwrap();
        assert!(outer.with_children(inner).is_ok());

        let outer = css("p").unwrap();
        assert!(matches!(
            outer.with_children("text"),
            Err(Error::NonStyleChild(_))
        ));
        assert!(matches!(
            css("p").unwrap().with_children(markup("q").unwrap()),
            Err(Error::NonStyleChild(_))
        ));
    }

    #[test]
    fn test_flatten_consumes_iterator() {
        let values = flatten((0..4).filter(|n| n % 2 == 0));
        assert_eq!(values, [Value::Int(0), Value::Int(2)]);
    }

    #[test]
    fn test_shared_subtrees_compare_equal() {
        let child = markup("em").unwrap().with_children("x").unwrap();
        let a = markup("p").unwrap().with_children(child.clone()).unwrap();
        let b = markup("p").unwrap().with_children(child).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_strict_check() {
        struct OnlyParagraphs;

        impl Validator for OnlyParagraphs {
            fn is_valid_tag(&self, tag: &str) -> bool {
                tag == "p"
            }
            fn is_valid_attr(&self, _tag: &str, attr: &str) -> bool {
                attr == "class"
            }
        }

        let ok = markup("p").unwrap().with_class("a").unwrap();
        assert!(ok.check(&OnlyParagraphs).is_ok());

        let bad_tag = markup("div").unwrap();
        assert!(matches!(
            bad_tag.check(&OnlyParagraphs),
            Err(Error::UnknownTag(_))
        ));

        let bad_attr = markup("p").unwrap().with_attr("id", "x").unwrap();
        assert!(matches!(
            bad_attr.check(&OnlyParagraphs),
            Err(Error::UnknownAttr { .. })
        ));
    }
}
