//! Element identity, relations, and the owning context.
//!
//! The registry and table types are plain single-owner structures; the
//! [`Context`] wraps one of each behind a shared lock and is what most
//! consumers interact with.

mod context;
mod element;
mod registry;
mod relation;
mod table;

pub use context::Context;
pub use element::{Element, ElementId};
pub use registry::ElementRegistry;
pub use relation::Relation;
pub use table::RelationTable;
