//! # ramus
//!
//! A library for building HTML and CSS trees from native Rust values and
//! rendering them to text, with scoped styles and CSS unit arithmetic.
//!
//! ## Features
//!
//! - Immutable node trees: every extension returns a new node and shares
//!   unchanged subtrees
//! - One pipeline per context: normalization, validation, and escaping
//!   rules for markup and for CSS, applied while the tree is built
//! - Scoped styles with unique selector markers and cascade barriers
//! - Unit arithmetic that folds `2px + 2px` and defers `1px + 2em` to
//!   `calc()`
//! - Rendering is infallible; every error surfaces at construction
//!
//! ## Quick Start
//!
//! ```
//! use ramus::{Render, markup};
//!
//! let page = markup("div")?.with_class("intro")?.with_children((
//!     markup("h1")?.with_children("Hello")?,
//!     markup("p")?.with_children(("built ", markup("em")?.with_children("fast")?))?,
//! ))?;
//!
//! assert_eq!(
//!     page.render(),
//!     "<div class=\"intro\"><h1>Hello</h1><p>built <em>fast</em></p></div>",
//! );
//! # Ok::<(), ramus::Error>(())
//! ```
//!
//! ## Scoped styles
//!
//! A [`Style`] rewrites its selectors with a unique marker and stamps the
//! matching attribute onto the tree it is applied to:
//!
//! ```
//! use ramus::{Render, ScopeCounter, Style, css, markup};
//!
//! let ids = ScopeCounter::new();
//! let style = Style::new(&ids, [css("p")?.with_attr("font-weight", "bold")?])?;
//! let scoped = style.apply(&markup("p")?.with_children("hi")?)?;
//!
//! assert_eq!(scoped.render(), "<p v-style1>hi</p>");
//! assert_eq!(style.render(), "p[v-style1] {font-weight: bold;}\n");
//! # Ok::<(), ramus::Error>(())
//! ```
//!
//! ## Units
//!
//! ```
//! use ramus::unit::{em, px};
//!
//! assert_eq!((px(2) + px(2)).to_string(), "4px");
//! assert_eq!((5 * (px(1) + em(2))).to_string(), "calc(5 * (1px + 2em))");
//! ```

pub mod context;
pub mod document;
pub mod error;
pub mod node;
pub mod normalize;
pub mod render;
pub mod scoped;
pub mod tags;
pub mod unit;
pub mod validate;
pub mod value;

pub use context::Context;
pub use document::{render_document, wrap_document, write_css, write_html};
pub use error::{Error, Result};
pub use node::{IntoChildren, Node, css, flatten, markup};
pub use normalize::kebab;
pub use render::{Render, pretty, pretty_to};
pub use scoped::{ScopeCounter, Style, Styled};
pub use validate::{Validator, is_boolean_attr, is_void_tag};
pub use value::Value;
