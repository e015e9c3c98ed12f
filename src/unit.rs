//! Dimensioned CSS quantities and their arithmetic.
//!
//! [`Unit`] is a magnitude with a CSS suffix. Arithmetic between units
//! folds when the suffixes agree and otherwise defers symbolically to a
//! CSS `calc()` expression, carried by [`Calc`]. Every operation returns
//! a [`Dimension`], the tagged union of the two outcomes.
//!
//! # Example
//!
//! ```
//! use ramus::unit::{px, em};
//!
//! assert_eq!((px(2) + px(2)).to_string(), "4px");
//! assert_eq!((px(1) + em(2)).to_string(), "calc(1px + 2em)");
//! assert_eq!((5 * (px(1) + em(2))).to_string(), "calc(5 * (1px + 2em))");
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::render::Render;

/// CSS unit suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suffix {
    Ch,
    Cm,
    Em,
    Ex,
    Fr,
    In,
    Mm,
    Pc,
    /// Percentage, rendered as `%`.
    Pct,
    Pt,
    Px,
    Rem,
    Vh,
    Vmax,
    Vmin,
    Vw,
}

impl Suffix {
    /// Returns the CSS spelling of this suffix.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Suffix::Ch => "ch",
            Suffix::Cm => "cm",
            Suffix::Em => "em",
            Suffix::Ex => "ex",
            Suffix::Fr => "fr",
            Suffix::In => "in",
            Suffix::Mm => "mm",
            Suffix::Pc => "pc",
            Suffix::Pct => "%",
            Suffix::Pt => "pt",
            Suffix::Px => "px",
            Suffix::Rem => "rem",
            Suffix::Vh => "vh",
            Suffix::Vmax => "vmax",
            Suffix::Vmin => "vmin",
            Suffix::Vw => "vw",
        }
    }

    /// Parse a CSS suffix spelling.
    #[inline]
    pub fn from_css(s: &str) -> Option<Suffix> {
        match s {
            "ch" => Some(Suffix::Ch),
            "cm" => Some(Suffix::Cm),
            "em" => Some(Suffix::Em),
            "ex" => Some(Suffix::Ex),
            "fr" => Some(Suffix::Fr),
            "in" => Some(Suffix::In),
            "mm" => Some(Suffix::Mm),
            "pc" => Some(Suffix::Pc),
            "%" => Some(Suffix::Pct),
            "pt" => Some(Suffix::Pt),
            "px" => Some(Suffix::Px),
            "rem" => Some(Suffix::Rem),
            "vh" => Some(Suffix::Vh),
            "vmax" => Some(Suffix::Vmax),
            "vmin" => Some(Suffix::Vmin),
            "vw" => Some(Suffix::Vw),
            _ => None,
        }
    }
}

/// A magnitude with a CSS suffix, e.g. `2px` or `50%`.
///
/// Magnitudes format through `f64`'s ordinary `Display`, so integral
/// values print without a decimal point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    magnitude: f64,
    suffix: Suffix,
}

impl Unit {
    pub fn new(magnitude: impl Into<f64>, suffix: Suffix) -> Unit {
        Unit {
            magnitude: magnitude.into(),
            suffix,
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn suffix(&self) -> Suffix {
        self.suffix
    }
}

/// A deferred CSS `calc()` expression.
///
/// The carried expression is always wrapped in one pair of parentheses;
/// rendering prepends `calc`. Expressions combine structurally, so a
/// `calc(...)` never nests inside another `calc(...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calc {
    expression: String,
}

impl Calc {
    fn binary(left: &str, op: char, right: &str) -> Calc {
        Calc {
            expression: format!("({left} {op} {right})"),
        }
    }

    /// The parenthesized expression, without the `calc` prefix.
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

/// The result of unit arithmetic: a folded unit or a deferred expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Dimension {
    Unit(Unit),
    Calc(Calc),
}

impl Dimension {
    /// Add two quantities, folding when the suffixes agree.
    pub fn add(self, other: impl Into<Dimension>) -> Dimension {
        self.combine('+', other.into())
    }

    /// Subtract a quantity, folding when the suffixes agree.
    pub fn sub(self, other: impl Into<Dimension>) -> Dimension {
        self.combine('-', other.into())
    }

    /// Multiply by a unitless scalar. A plain unit folds; an expression
    /// grows a `factor * (...)` term.
    pub fn scale(self, factor: impl Into<f64>) -> Dimension {
        let factor = factor.into();
        match self {
            Dimension::Unit(u) => Dimension::Unit(Unit::new(u.magnitude * factor, u.suffix)),
            Dimension::Calc(c) => {
                Dimension::Calc(Calc::binary(&format!("{factor}"), '*', c.expression()))
            }
        }
    }

    /// Divide by a unitless scalar.
    pub fn div(self, divisor: impl Into<f64>) -> Dimension {
        let divisor = divisor.into();
        match self {
            Dimension::Unit(u) => Dimension::Unit(Unit::new(u.magnitude / divisor, u.suffix)),
            Dimension::Calc(c) => {
                Dimension::Calc(Calc::binary(c.expression(), '/', &format!("{divisor}")))
            }
        }
    }

    fn combine(self, op: char, other: Dimension) -> Dimension {
        match (self, other) {
            (Dimension::Unit(a), Dimension::Unit(b)) if a.suffix == b.suffix => {
                let magnitude = match op {
                    '+' => a.magnitude + b.magnitude,
                    _ => a.magnitude - b.magnitude,
                };
                Dimension::Unit(Unit::new(magnitude, a.suffix))
            }
            (a, b) => Dimension::Calc(Calc::binary(&a.term(), op, &b.term())),
        }
    }

    /// The form this quantity takes inside a larger expression.
    fn term(&self) -> String {
        match self {
            Dimension::Unit(u) => u.render(),
            Dimension::Calc(c) => c.expression().to_string(),
        }
    }
}

impl From<Unit> for Dimension {
    fn from(u: Unit) -> Dimension {
        Dimension::Unit(u)
    }
}

impl From<Calc> for Dimension {
    fn from(c: Calc) -> Dimension {
        Dimension::Calc(c)
    }
}

impl Render for Suffix {
    fn render_to(&self, out: &mut String) {
        out.push_str(self.as_str());
    }
}

impl Render for Unit {
    fn render_to(&self, out: &mut String) {
        use std::fmt::Write;
        let _ = write!(out, "{}{}", self.magnitude, self.suffix.as_str());
    }
}

impl Render for Calc {
    fn render_to(&self, out: &mut String) {
        out.push_str("calc");
        out.push_str(&self.expression);
    }
}

impl Render for Dimension {
    fn render_to(&self, out: &mut String) {
        match self {
            Dimension::Unit(u) => u.render_to(out),
            Dimension::Calc(c) => c.render_to(out),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for Calc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

macro_rules! dimension_ops {
    ($($ty:ty),*) => {
        $(
            impl<R: Into<Dimension>> Add<R> for $ty {
                type Output = Dimension;
                fn add(self, other: R) -> Dimension {
                    Dimension::from(self).add(other)
                }
            }

            impl<R: Into<Dimension>> Sub<R> for $ty {
                type Output = Dimension;
                fn sub(self, other: R) -> Dimension {
                    Dimension::from(self).sub(other)
                }
            }

            impl Mul<f64> for $ty {
                type Output = Dimension;
                fn mul(self, factor: f64) -> Dimension {
                    Dimension::from(self).scale(factor)
                }
            }

            impl Mul<i32> for $ty {
                type Output = Dimension;
                fn mul(self, factor: i32) -> Dimension {
                    Dimension::from(self).scale(factor)
                }
            }

            impl Mul<$ty> for f64 {
                type Output = Dimension;
                fn mul(self, quantity: $ty) -> Dimension {
                    Dimension::from(quantity).scale(self)
                }
            }

            impl Mul<$ty> for i32 {
                type Output = Dimension;
                fn mul(self, quantity: $ty) -> Dimension {
                    Dimension::from(quantity).scale(self)
                }
            }

            impl Div<f64> for $ty {
                type Output = Dimension;
                fn div(self, divisor: f64) -> Dimension {
                    Dimension::from(self).div(divisor)
                }
            }

            impl Div<i32> for $ty {
                type Output = Dimension;
                fn div(self, divisor: i32) -> Dimension {
                    Dimension::from(self).div(divisor)
                }
            }
        )*
    };
}

dimension_ops!(Unit, Calc);

impl<R: Into<Dimension>> Add<R> for Dimension {
    type Output = Dimension;
    fn add(self, other: R) -> Dimension {
        Dimension::add(self, other)
    }
}

impl<R: Into<Dimension>> Sub<R> for Dimension {
    type Output = Dimension;
    fn sub(self, other: R) -> Dimension {
        Dimension::sub(self, other)
    }
}

impl Mul<f64> for Dimension {
    type Output = Dimension;
    fn mul(self, factor: f64) -> Dimension {
        self.scale(factor)
    }
}

impl Mul<i32> for Dimension {
    type Output = Dimension;
    fn mul(self, factor: i32) -> Dimension {
        self.scale(factor)
    }
}

impl Mul<Dimension> for f64 {
    type Output = Dimension;
    fn mul(self, quantity: Dimension) -> Dimension {
        quantity.scale(self)
    }
}

impl Mul<Dimension> for i32 {
    type Output = Dimension;
    fn mul(self, quantity: Dimension) -> Dimension {
        quantity.scale(self)
    }
}

impl Div<f64> for Dimension {
    type Output = Dimension;
    fn div(self, divisor: f64) -> Dimension {
        Dimension::div(self, divisor)
    }
}

impl Div<i32> for Dimension {
    type Output = Dimension;
    fn div(self, divisor: i32) -> Dimension {
        Dimension::div(self, divisor)
    }
}

macro_rules! unit_fns {
    ($($fn_name:ident => $suffix:ident),* $(,)?) => {
        $(
            #[doc = concat!("A quantity in `", stringify!($fn_name), "` units.")]
            pub fn $fn_name(magnitude: impl Into<f64>) -> Unit {
                Unit::new(magnitude, Suffix::$suffix)
            }
        )*
    };
}

unit_fns! {
    ch => Ch,
    cm => Cm,
    em => Em,
    ex => Ex,
    fr => Fr,
    inch => In,
    mm => Mm,
    pc => Pc,
    percent => Pct,
    pt => Pt,
    px => Px,
    rem => Rem,
    vh => Vh,
    vmax => Vmax,
    vmin => Vmin,
    vw => Vw,
}
