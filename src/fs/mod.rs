//! File System Module
//!
//! The in-memory virtual file system tree:
//! - TreeStore: node graph plus lookup/creation operations
//! - path: normalization of path strings to component sequences
//! - loader: builds a TreeStore from a CSV description

pub mod types;
pub mod path;
pub mod tree_store;
pub mod loader;

pub use types::*;
pub use path::{normalize_path, render_path};
pub use tree_store::TreeStore;
pub use loader::{LoadError, NodeRecord, RecordKind};
