//! File System Types
//!
//! Core node model and error types for the virtual file system tree.

use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by tree lookups and mutations.
///
/// Every variant carries the path as the caller wrote it (or the rendered
/// absolute path when only components are known).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("{path}: No such file or directory")]
    NotFound { path: String },

    #[error("{path}: Not a directory")]
    NotADirectory { path: String },

    #[error("{path}: Is a directory")]
    TypeConflict { path: String },

    #[error("{path}: Invalid path")]
    InvalidPath { path: String },
}

impl FsError {
    /// Rebind the error to the path as the user typed it.
    pub fn with_path(self, path: impl Into<String>) -> Self {
        let path = path.into();
        match self {
            FsError::NotFound { .. } => FsError::NotFound { path },
            FsError::NotADirectory { .. } => FsError::NotADirectory { path },
            FsError::TypeConflict { .. } => FsError::TypeConflict { path },
            FsError::InvalidPath { .. } => FsError::InvalidPath { path },
        }
    }
}

/// The two kinds of node a tree can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Directory => "dir",
        }
    }
}

/// A node in the tree. Directories exclusively own their children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File { content: String },
    Directory { children: HashMap<String, Node> },
}

impl Node {
    pub fn empty_dir() -> Self {
        Node::Directory { children: HashMap::new() }
    }

    pub fn file(content: impl Into<String>) -> Self {
        Node::File { content: content.into() }
    }

    /// Fresh node of the given kind. Directories ignore `content`.
    pub fn new(kind: NodeKind, content: Option<&str>) -> Self {
        match kind {
            NodeKind::File => Node::file(content.unwrap_or_default()),
            NodeKind::Directory => Node::empty_dir(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File { .. } => NodeKind::File,
            Node::Directory { .. } => NodeKind::Directory,
        }
    }

    /// Check if node is a file
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    /// Check if node is a directory
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// File payload, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File { content } => Some(content),
            Node::Directory { .. } => None,
        }
    }

    pub fn children(&self) -> Option<&HashMap<String, Node>> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut HashMap<String, Node>> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    /// Child names in ascending order. Empty for files.
    pub fn sorted_child_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .children()
            .map(|c| c.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::empty_dir()
    }
}

// ============================================================================
// Tests
// ============================================================================
