//! Escape tables for markup output.
//!
//! Escaped characters become decimal numeric character references, so `<`
//! renders as `&#60;`. Which characters escape depends on where the text
//! lands: attribute values only need the quote-safe set, while tags,
//! attribute names, and child text get the paranoid set that also covers
//! script-injection sigils. Non-ASCII text always passes through.

use std::fmt::Write;

/// Which escape set applies to a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Table {
    /// Tags, attribute names, child text.
    Full,
    /// Double-quoted attribute values.
    AttrValue,
    /// No escaping. Installed by `no_escape` contexts and used for all
    /// style output.
    Identity,
}

impl Table {
    fn escapes(self, c: char) -> bool {
        match self {
            Table::Full => matches!(
                c,
                '&' | '<'
                    | '>'
                    | '"'
                    | '\''
                    | '`'
                    | '!'
                    | '@'
                    | '$'
                    | '%'
                    | '('
                    | ')'
                    | '='
                    | '+'
                    | '{'
                    | '}'
                    | '['
                    | ']'
            ),
            Table::AttrValue => matches!(c, '&' | '<' | '>' | '"' | '\n' | '\r' | '\t'),
            Table::Identity => false,
        }
    }
}

/// Append `text` to `out`, escaping through `table`.
pub(crate) fn escape_into(out: &mut String, text: &str, table: Table) {
    if table == Table::Identity {
        out.push_str(text);
        return;
    }
    for c in text.chars() {
        if table.escapes(c) {
            let _ = write!(out, "&#{};", c as u32);
        } else {
            out.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(text: &str, table: Table) -> String {
        let mut out = String::new();
        escape_into(&mut out, text, table);
        out
    }

    #[test]
    fn test_full_table_uses_decimal_references() {
        assert_eq!(escaped("<", Table::Full), "&#60;");
        assert_eq!(escaped("a&b", Table::Full), "a&#38;b");
        assert_eq!(escaped("f(x)", Table::Full), "f&#40;x&#41;");
        assert_eq!(escaped("`${x}`", Table::Full), "&#96;&#36;&#123;x&#125;&#96;");
    }

    #[test]
    fn test_attr_value_table_is_narrow() {
        assert_eq!(escaped("a='x'", Table::AttrValue), "a='x'");
        assert_eq!(escaped("a\"b", Table::AttrValue), "a&#34;b");
        assert_eq!(escaped("line\nbreak", Table::AttrValue), "line&#10;break");
        assert_eq!(escaped("f(x)", Table::AttrValue), "f(x)");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(escaped("em—dash", Table::Full), "em—dash");
        assert_eq!(escaped("日本語", Table::Full), "日本語");
    }

    #[test]
    fn test_identity_table() {
        assert_eq!(escaped("<script>", Table::Identity), "<script>");
    }
}
