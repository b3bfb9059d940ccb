//! Column schema resolution
//!
//! Maps each [`ViewContext`](crate::ViewContext) to an ordered list of column
//! definitions. Adding a tab means registering one more schema; no per-tab
//! branching lives in the grid itself.

mod builtin;
mod column;
mod registry;

#[cfg(test)]
mod tests;

pub use column::{Accessor, ColumnDefinition, ColumnKind, Comparator, RendererHint};
pub use registry::{ColumnSchema, SchemaRegistry, SchemaRegistryBuilder};
