//! Shorthand constructors for common element names.
//!
//! Each function builds an empty markup element with the default context.
//! The names are known-good, so unlike [`markup`](crate::markup) these
//! never fail; attach attributes and children with the usual extension
//! methods.
//!
//! ```
//! use ramus::Render;
//! use ramus::tags::{li, ul};
//!
//! let list = ul().with_children((li().with_children("a")?, li().with_children("b")?))?;
//! assert_eq!(list.render(), "<ul><li>a</li><li>b</li></ul>");
//! # Ok::<(), ramus::Error>(())
//! ```

use crate::context::Context;
use crate::node::Node;

macro_rules! tag_fns {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("An empty `<", stringify!($name), ">` element.")]
            pub fn $name() -> Node {
                Node::assemble(
                    Context::MARKUP,
                    stringify!($name).to_string(),
                    Vec::new(),
                    Vec::new(),
                )
            }
        )*
    };
}

tag_fns! {
    a, abbr, address, article, aside, audio, b, blockquote, body, br, button,
    canvas, caption, cite, code, col, colgroup, dd, details, dfn, div, dl, dt,
    em, fieldset, figcaption, figure, footer, form, h1, h2, h3, h4, h5, h6,
    head, header, hr, html, i, iframe, img, input, kbd, label, legend, li,
    link, main, map, mark, meta, meter, nav, noscript, object, ol, optgroup,
    option, output, p, picture, pre, progress, q, s, samp, script, section,
    select, small, source, span, strong, style, sub, summary, sup, table,
    tbody, td, template, textarea, tfoot, th, thead, time, title, tr, track,
    u, ul, var, video, wbr,
}

// SVG shapes share the markup pipeline.
tag_fns! {
    circle, defs, ellipse, g, line, path, polygon, polyline, rect, stop, svg,
    text, tspan,
}
