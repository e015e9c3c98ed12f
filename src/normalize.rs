//! Name normalization for tags and attributes.
//!
//! Attribute names arrive as host-language identifiers (camelCase or
//! snake_case, since identifiers cannot contain `-`) and leave as
//! kebab-case. Tags pass through untouched. Raw attribute names supplied
//! through the `with_raw_*` constructors skip this module entirely.

use crate::value::Value;

/// Convert an identifier-style name to kebab-case.
///
/// A dash is inserted before an uppercase letter (which is lowercased) and
/// at a letter/digit switch in either direction. Digit runs stay together,
/// so `data9` becomes `data-9` but `data99` becomes `data-99`. Underscores
/// become dashes. All-lowercase names pass through unchanged.
///
/// ```
/// use ramus::kebab;
///
/// assert_eq!(kebab("fooBar"), "foo-bar");
/// assert_eq!(kebab("font_size"), "font-size");
/// assert_eq!(kebab("data9"), "data-9");
/// ```
pub fn kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev = '\0';
    for c in name.chars() {
        if c == '_' {
            out.push('-');
        } else if c.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else if c.is_ascii_digit() && prev.is_ascii_alphabetic() {
            out.push('-');
            out.push(c);
        } else if c.is_ascii_alphabetic() && prev.is_ascii_digit() {
            out.push('-');
            out.push(c);
        } else {
            out.push(c);
        }
        prev = c;
    }
    out
}

/// Normalize a raw tag name. Tags render as written.
pub(crate) fn tag(raw: &str) -> String {
    raw.to_string()
}

/// Normalize one input attribute pair into its output pairs.
///
/// Both contexts kebab-case the name. The list return is the expansion
/// point for rules that turn one input pair into several; every current
/// rule yields exactly one.
pub(crate) fn attr(name: &str, value: Value) -> Vec<(String, Value)> {
    vec![(kebab(name), value)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_kebab_camel_case() {
        assert_eq!(kebab("fooBar"), "foo-bar");
        assert_eq!(kebab("fontSize"), "font-size");
        assert_eq!(kebab("viewBox"), "view-box");
        assert_eq!(kebab("FooBar"), "foo-bar");
    }

    #[test]
    fn test_kebab_lowercase_unchanged() {
        assert_eq!(kebab("class"), "class");
        assert_eq!(kebab("color"), "color");
        assert_eq!(kebab("font-size"), "font-size");
    }

    #[test]
    fn test_kebab_digit_boundaries() {
        assert_eq!(kebab("data9"), "data-9");
        assert_eq!(kebab("data99"), "data-99");
        assert_eq!(kebab("data9x"), "data-9-x");
        assert_eq!(kebab("h1"), "h-1");
    }

    #[test]
    fn test_kebab_underscores() {
        assert_eq!(kebab("font_size"), "font-size");
        assert_eq!(kebab("aria_label"), "aria-label");
    }

    #[test]
    fn test_attr_hook_yields_one_pair() {
        let pairs = attr("fooBar", Value::from(1));
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "foo-bar");
    }

    proptest! {
        #[test]
        fn prop_kebab_is_idempotent(name in "[A-Za-z0-9_]{0,16}") {
            let once = kebab(&name);
            prop_assert_eq!(kebab(&once), once.clone());
        }

        #[test]
        fn prop_kebab_output_has_no_uppercase(name in "[A-Za-z0-9_]{0,16}") {
            prop_assert!(!kebab(&name).chars().any(|c| c.is_ascii_uppercase()));
        }
    }
}
