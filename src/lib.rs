//! Fluent construction of tag-structured element trees.
//!
//! An [`ElementBuilder`] stages children under a single root and
//! materializes an immutable [`Element`], which renders itself as
//! indented tag lines:
//!
//! ```
//! use tagtree::ElementBuilder;
//!
//! let mut builder = ElementBuilder::new("ul").unwrap();
//! builder.add_child("li", "hello").add_child("li", "world");
//!
//! let list = builder.build().unwrap();
//! assert_eq!(list.children().len(), 2);
//! assert!(list.render().starts_with("<ul>\n  <li>\n    hello\n"));
//! ```
//!
//! Building copies the staged state, so a builder stays usable after
//! `build()` and previously built elements never change retroactively.

pub mod domain;
pub mod util;

pub use domain::{DomainError, Element, ElementBuilder, TreeDisplay, TreeResult, INDENT_WIDTH};
