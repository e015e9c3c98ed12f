//! Validation rules for tags, attributes, and children.
//!
//! These checks run at construction and at every extension call, after
//! normalization. They are context-dispatched: markup nodes get the HTML
//! registries (void tags, boolean attributes), style nodes get the CSS
//! property rules (no empty values, node-only children).

use crate::context::Context;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::value::Value;

/// HTML void elements, plus SVG's empty `stop`. Sorted for binary search.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "stop", "track", "wbr",
];

/// HTML boolean attributes. Sorted for binary search.
const BOOLEAN_ATTRS: &[&str] = &[
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nomodule",
    "novalidate",
    "open",
    "playsinline",
    "readonly",
    "required",
    "reversed",
    "selected",
];

/// Whether a markup tag must remain childless and self-close.
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.binary_search(&tag).is_ok()
}

/// Whether a markup attribute takes a bare presence/absence value.
pub fn is_boolean_attr(name: &str) -> bool {
    BOOLEAN_ATTRS.binary_search(&name).is_ok()
}

/// Validate a normalized tag name.
pub(crate) fn tag(_context: Context, tag: &str) -> Result<()> {
    if tag.is_empty() {
        return Err(Error::EmptyTag);
    }
    Ok(())
}

/// Validate one normalized attribute pair.
pub(crate) fn attr(context: Context, name: &str, value: &Value) -> Result<()> {
    if name.chars().any(char::is_whitespace) {
        return Err(Error::WhitespaceInName(name.to_string()));
    }
    if value.has_nan() && !context.nan_allowed() {
        return Err(Error::NanValue(name.to_string()));
    }
    match context {
        Context::Markup { .. } => {
            if is_boolean_attr(name) && !matches!(value, Value::Bool(_)) {
                return Err(Error::NonBooleanValue(name.to_string()));
            }
        }
        Context::Style { .. } => {
            if value.is_empty() {
                return Err(Error::EmptyCssValue(name.to_string()));
            }
        }
    }
    Ok(())
}

/// Validate one flattened child of a node with the given tag.
pub(crate) fn child(context: Context, tag: &str, value: &Value) -> Result<()> {
    match context {
        Context::Markup { .. } => {
            if is_void_tag(tag) {
                return Err(Error::VoidTagChildren(tag.to_string()));
            }
            Ok(())
        }
        Context::Style { .. } => match value {
            Value::Node(node) if node.context().is_style() => Ok(()),
            other => Err(Error::NonStyleChild(other.kind())),
        },
    }
}

/// External tag/attribute allow-lists.
///
/// The crate ships no conformance tables. Implement this on whatever owns
/// them and run [`Node::check`] when strict validation is wanted;
/// construction stays lenient either way.
pub trait Validator {
    fn is_valid_tag(&self, tag: &str) -> bool;
    fn is_valid_attr(&self, tag: &str, attr: &str) -> bool;
}

/// Audit a markup subtree against a validator.
///
/// Walks nested nodes (including through styled wrappers) and reports the
/// first unknown tag or attribute. Style subtrees are skipped; selectors
/// and property names are not element vocabulary.
pub(crate) fn check_tree(node: &Node, validator: &dyn Validator) -> Result<()> {
    if node.context().is_style() {
        return Ok(());
    }
    if !validator.is_valid_tag(node.tag()) {
        return Err(Error::UnknownTag(node.tag().to_string()));
    }
    for (name, _) in node.attrs() {
        if !validator.is_valid_attr(node.tag(), name) {
            return Err(Error::UnknownAttr {
                tag: node.tag().to_string(),
                attr: name.to_string(),
            });
        }
    }
    for child in node.children() {
        match child {
            Value::Node(child) => check_tree(child, validator)?,
            Value::Styled(styled) => check_tree(styled.node(), validator)?,
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registries_are_sorted() {
        for pair in VOID_TAGS.windows(2) {
            assert!(pair[0] < pair[1], "{} >= {}", pair[0], pair[1]);
        }
        for pair in BOOLEAN_ATTRS.windows(2) {
            assert!(pair[0] < pair[1], "{} >= {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_void_tag_lookup() {
        assert!(is_void_tag("br"));
        assert!(is_void_tag("img"));
        assert!(is_void_tag("stop"));
        assert!(!is_void_tag("p"));
        assert!(!is_void_tag("div"));
    }

    #[test]
    fn test_boolean_attr_lookup() {
        assert!(is_boolean_attr("checked"));
        assert!(is_boolean_attr("disabled"));
        assert!(!is_boolean_attr("class"));
        assert!(!is_boolean_attr("value"));
    }

    #[test]
    fn test_empty_tag_rejected() {
        assert!(matches!(
            tag(Context::MARKUP, ""),
            Err(Error::EmptyTag)
        ));
        assert!(tag(Context::MARKUP, "p").is_ok());
    }

    #[test]
    fn test_whitespace_in_name_rejected() {
        let err = attr(Context::MARKUP, "foo bar", &Value::from(1));
        assert!(matches!(err, Err(Error::WhitespaceInName(_))));
        let err = attr(Context::STYLE, "foo\tbar", &Value::from(1));
        assert!(matches!(err, Err(Error::WhitespaceInName(_))));
    }

    #[test]
    fn test_nan_rejected_unless_allowed() {
        let nan = Value::from(f64::NAN);
        assert!(matches!(
            attr(Context::MARKUP, "width", &nan),
            Err(Error::NanValue(_))
        ));
        assert!(attr(Context::MARKUP.allow_nan(), "width", &nan).is_ok());
    }

    #[test]
    fn test_boolean_attr_requires_bool() {
        assert!(attr(Context::MARKUP, "checked", &Value::from(true)).is_ok());
        assert!(attr(Context::MARKUP, "checked", &Value::from(false)).is_ok());
        assert!(matches!(
            attr(Context::MARKUP, "checked", &Value::from("yes")),
            Err(Error::NonBooleanValue(_))
        ));
    }

    #[test]
    fn test_style_rejects_empty_values() {
        assert!(matches!(
            attr(Context::STYLE, "color", &Value::Empty),
            Err(Error::EmptyCssValue(_))
        ));
        assert!(matches!(
            attr(Context::STYLE, "color", &Value::from("")),
            Err(Error::EmptyCssValue(_))
        ));
        assert!(attr(Context::STYLE, "color", &Value::from("blue")).is_ok());
    }

    #[test]
    fn test_void_tag_children_rejected() {
        assert!(matches!(
            child(Context::MARKUP, "br", &Value::from("x")),
            Err(Error::VoidTagChildren(_))
        ));
        assert!(child(Context::MARKUP, "p", &Value::from("x")).is_ok());
    }

    #[test]
    fn test_style_children_must_be_style_nodes() {
        assert!(matches!(
            child(Context::STYLE, "p", &Value::from("text")),
            Err(Error::NonStyleChild(_))
        ));
    }
}
