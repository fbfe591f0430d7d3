//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod element;
pub mod error;

pub use arena::{ElementArena, NodeData, StagedNode};
pub use builder::ElementBuilder;
pub use element::{Element, TreeDisplay, INDENT_WIDTH};
pub use error::{DomainError, TreeResult};
