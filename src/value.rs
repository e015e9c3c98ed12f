//! Attribute and child values.
//!
//! [`Value`] is the closed set of things a node can hold: scalars, units,
//! nested nodes, and scoped-style wrappers. Because the set is closed,
//! every value has a textual form and rendering is total; anything that
//! could go wrong is rejected while the tree is being built.

use std::fmt::Write;

use crate::node::Node;
use crate::scoped::Styled;
use crate::unit::{Calc, Dimension, Unit};

/// A single attribute value or child of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value. Renders as a valueless attribute, or as nothing in a
    /// child position. `Option::None` converts to this.
    Empty,
    /// Boolean scalar. Required for registry boolean attributes.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar. NaN is rejected at validation unless the
    /// context allows it.
    Float(f64),
    /// Text scalar. Escaped on render under markup contexts.
    Text(String),
    /// A dimensioned CSS quantity, e.g. `2px`.
    Unit(Unit),
    /// A deferred CSS `calc()` expression.
    Calc(Calc),
    /// An opaque integer range. Never flattened; renders as `start..end`.
    Range(i64, i64),
    /// A nested node, rendered in its own context.
    Node(Node),
    /// A node wrapped by a scoped style. A cascade barrier: outer scoped
    /// styles do not reach through it.
    Styled(Styled),
}

impl Value {
    /// Whether this value contains a NaN magnitude.
    pub(crate) fn has_nan(&self) -> bool {
        match self {
            Value::Float(f) => f.is_nan(),
            Value::Unit(u) => u.magnitude().is_nan(),
            _ => false,
        }
    }

    /// Whether this value renders as no text at all.
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Value::Empty => true,
            Value::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Append the unescaped textual form of a scalar to `out`.
    ///
    /// `Node` and `Styled` are structural and handled by the renderer;
    /// this writes nothing for them.
    pub(crate) fn write_scalar(&self, out: &mut String) {
        match self {
            Value::Empty => {}
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Int(i) => {
                let _ = write!(out, "{i}");
            }
            Value::Float(f) => {
                let _ = write!(out, "{f}");
            }
            Value::Text(s) => out.push_str(s),
            Value::Unit(u) => {
                let _ = write!(out, "{u}");
            }
            Value::Calc(c) => {
                let _ = write!(out, "{c}");
            }
            Value::Range(start, end) => {
                let _ = write!(out, "{start}..{end}");
            }
            Value::Node(_) | Value::Styled(_) => {}
        }
    }

    /// Short description used in error messages.
    pub(crate) fn kind(&self) -> String {
        match self {
            Value::Empty => "nothing".to_string(),
            Value::Bool(_) => "a bool".to_string(),
            Value::Int(_) | Value::Float(_) => "a number".to_string(),
            Value::Text(s) => format!("text {s:?}"),
            Value::Unit(_) => "a unit".to_string(),
            Value::Calc(_) => "a calc expression".to_string(),
            Value::Range(..) => "a range".to_string(),
            Value::Node(n) if n.context().is_style() => format!("a style node <{}>", n.tag()),
            Value::Node(n) => format!("a markup node <{}>", n.tag()),
            Value::Styled(_) => "a styled node".to_string(),
        }
    }
}

macro_rules! int_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Value {
                    Value::Int(v as i64)
                }
            }
        )*
    };
}

int_value!(i8, i16, i32, i64, u8, u16, u32, usize);

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Value {
        Value::Float(v as f64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Text(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Value {
        Value::Text(v.to_string())
    }
}

impl From<Unit> for Value {
    fn from(v: Unit) -> Value {
        Value::Unit(v)
    }
}

impl From<Calc> for Value {
    fn from(v: Calc) -> Value {
        Value::Calc(v)
    }
}

impl From<Dimension> for Value {
    fn from(v: Dimension) -> Value {
        match v {
            Dimension::Unit(u) => Value::Unit(u),
            Dimension::Calc(c) => Value::Calc(c),
        }
    }
}

impl From<Node> for Value {
    fn from(v: Node) -> Value {
        Value::Node(v)
    }
}

impl From<Styled> for Value {
    fn from(v: Styled) -> Value {
        Value::Styled(v)
    }
}

impl From<std::ops::Range<i64>> for Value {
    fn from(r: std::ops::Range<i64>) -> Value {
        Value::Range(r.start, r.end)
    }
}

impl From<std::ops::Range<i32>> for Value {
    fn from(r: std::ops::Range<i32>) -> Value {
        Value::Range(r.start as i64, r.end as i64)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Value {
        match v {
            Some(inner) => inner.into(),
            None => Value::Empty,
        }
    }
}
