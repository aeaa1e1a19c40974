#![forbid(unsafe_code)]
//! Build HTML documents as plain Rust values and render them to text.
//!
//! A document is a tree of [`Element`], [`Text`] and [`RawText`] nodes. You
//! build it bottom-up with the functions in this crate, then render it
//! either compactly on one line or pretty-printed within a column limit.
//!
//! ```rust
//! use htmlcode::{a, h};
//!
//! let html = h("html")
//!     .attrs(a(&["lang", "en"])?)
//!     .child(h("head").child(h("title").text("Title")))
//!     .child(h("body").child(h("p").text("Fish & chips")));
//!
//! assert_eq!(
//!     html.render(),
//!     r#"<!DOCTYPE html><html lang="en"><head><title>Title</title></head><body><p>Fish &amp; chips</p></body></html>"#
//! );
//! assert_eq!(
//!     html.render_pretty_with(&htmlcode::output::pretty::Parameters {
//!         max_column: 32,
//!         ..Default::default()
//!     }),
//!     r#"<!DOCTYPE html>
//! <html lang="en">
//!     <head>
//!         <title>Title</title>
//!     </head>
//!     <body>
//!         <p>Fish &amp; chips</p>
//!     </body>
//! </html>"#
//! );
//! # Ok::<(), htmlcode::Error>(())
//! ```

mod creation;
mod entity;
mod error;
pub mod layout;
mod node;
pub mod output;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest;

pub use creation::{a, attr, f, h, r, text};
pub use entity::escape;
pub use error::Error;
pub use node::{Attribute, Element, Node, NodeType, RawText, Text};
pub use output::compact::{render, write};
pub use output::html5elements::is_void;
pub use output::pretty::{render_pretty, write_pretty};
