//! Rendering contexts and their policy flags.
//!
//! Every node carries one [`Context`] from construction to output. The
//! context decides which normalization, validation, and escaping rules
//! apply: markup nodes become HTML-style elements, style nodes become CSS
//! blocks. Style trees only accept style-node children; markup trees may
//! embed style nodes, which is how a stylesheet lands inside a `<style>`
//! element.

/// The rendering context of a node, plus its policy flags.
///
/// Contexts are cheap immutable values. The flag builders return a new
/// context, so customized contexts read as a chain:
///
/// ```
/// use ramus::Context;
///
/// let ctx = Context::MARKUP.allow_nan();
/// assert!(ctx.nan_allowed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    /// HTML-style element trees.
    Markup {
        /// Accept NaN attribute and child values instead of rejecting them.
        allow_nan: bool,
        /// Skip child-text escaping one level deep.
        no_escape: bool,
    },
    /// CSS rule trees.
    Style {
        /// Accept NaN property values instead of rejecting them.
        allow_nan: bool,
    },
}

impl Context {
    /// Default markup context: escaping on, NaN rejected.
    pub const MARKUP: Context = Context::Markup {
        allow_nan: false,
        no_escape: false,
    };

    /// Default style context: NaN rejected. Style output is never escaped.
    pub const STYLE: Context = Context::Style { allow_nan: false };

    /// Returns the same context with NaN values permitted.
    pub fn allow_nan(self) -> Context {
        match self {
            Context::Markup { no_escape, .. } => Context::Markup {
                allow_nan: true,
                no_escape,
            },
            Context::Style { .. } => Context::Style { allow_nan: true },
        }
    }

    /// Returns the same context with child-text escaping disabled.
    ///
    /// Escaping applies to the direct scalar children of the node built
    /// with this context; nested nodes keep their own contexts. Style
    /// contexts never escape, so this is a no-op there.
    pub fn no_escape(self) -> Context {
        match self {
            Context::Markup { allow_nan, .. } => Context::Markup {
                allow_nan,
                no_escape: true,
            },
            style @ Context::Style { .. } => style,
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, Context::Markup { .. })
    }

    pub fn is_style(&self) -> bool {
        matches!(self, Context::Style { .. })
    }

    /// Whether NaN magnitudes pass validation under this context.
    pub fn nan_allowed(&self) -> bool {
        match self {
            Context::Markup { allow_nan, .. } | Context::Style { allow_nan } => *allow_nan,
        }
    }

    /// Whether scalar children of this node render unescaped.
    pub fn escaping_disabled(&self) -> bool {
        match self {
            Context::Markup { no_escape, .. } => *no_escape,
            Context::Style { .. } => true,
        }
    }
}
