//! Bulk loader
//!
//! Builds a whole tree from a CSV description with the header
//! `path,type,content`. Intermediate directories are created on demand and
//! the previous tree is replaced only when every row applied cleanly.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use super::path::SEPARATOR;
use super::tree_store::TreeStore;
use super::types::{Node, NodeKind};

/// Failure to build a tree from a description. Always names the input.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read '{name}': {error}")]
    Io {
        name: String,
        #[source]
        error: io::Error,
    },

    #[error("malformed description '{name}': {error}")]
    Csv {
        name: String,
        #[source]
        error: csv::Error,
    },

    #[error("malformed description '{name}', record {record}: {reason}")]
    Row {
        name: String,
        record: usize,
        reason: String,
    },
}

/// One row of the description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeRecord {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(default)]
    pub content: Option<String>,
}

impl NodeRecord {
    pub fn new(path: &str, kind: NodeKind, content: Option<&str>) -> Self {
        Self {
            path: path.to_string(),
            kind: kind.into(),
            content: content.map(str::to_string),
        }
    }
}

/// Kind tag as spelled in the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RecordKind {
    #[serde(rename = "file")]
    File,
    #[serde(rename = "dir")]
    Dir,
}

impl From<NodeKind> for RecordKind {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::File => RecordKind::File,
            NodeKind::Directory => RecordKind::Dir,
        }
    }
}

impl From<RecordKind> for NodeKind {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::File => NodeKind::File,
            RecordKind::Dir => NodeKind::Directory,
        }
    }
}

impl TreeStore {
    /// Build a fresh tree from `rows` and swap it in.
    ///
    /// On error the current tree is left exactly as it was.
    pub fn load_from_rows<I>(&mut self, name: &str, rows: I) -> Result<usize, LoadError>
    where
        I: IntoIterator<Item = NodeRecord>,
    {
        let mut root = Node::empty_dir();
        let mut count = 0;

        for (idx, row) in rows.into_iter().enumerate() {
            apply_record(&mut root, &row).map_err(|reason| LoadError::Row {
                name: name.to_string(),
                record: idx + 1,
                reason,
            })?;
            count += 1;
        }

        self.replace_root(root);
        info!(source = name, records = count, "loaded tree");
        Ok(count)
    }

    /// Parse CSV from any reader, then load it.
    pub fn load_csv_reader<R: io::Read>(&mut self, name: &str, reader: R) -> Result<usize, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let rows = rdr
            .deserialize::<NodeRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| LoadError::Csv { name: name.to_string(), error })?;

        self.load_from_rows(name, rows)
    }

    /// Load a CSV description from the host filesystem.
    pub fn load_csv_file(&mut self, path: &Path) -> Result<usize, LoadError> {
        let name = path.display().to_string();
        let file = File::open(path).map_err(|error| LoadError::Io { name: name.clone(), error })?;
        self.load_csv_reader(&name, file)
    }
}

fn apply_record(root: &mut Node, row: &NodeRecord) -> Result<(), String> {
    let parts: Vec<&str> = row
        .path
        .trim_matches(SEPARATOR)
        .split(SEPARATOR)
        .filter(|p| !p.is_empty())
        .collect();
    if let Some(bad) = parts.iter().find(|p| **p == "." || **p == "..") {
        return Err(format!("invalid path component '{}' in '{}'", bad, row.path));
    }

    let kind = NodeKind::from(row.kind);
    let Some((leaf, parents)) = parts.split_last() else {
        return match kind {
            NodeKind::Directory => Ok(()),
            NodeKind::File => Err("the root cannot be a file".to_string()),
        };
    };

    let mut current = root;
    let mut walked = String::new();
    for part in parents {
        let children = current
            .children_mut()
            .ok_or_else(|| format!("'{}' is a file", walked))?;
        walked.push(SEPARATOR);
        walked.push_str(part);
        current = children.entry(part.to_string()).or_insert_with(Node::empty_dir);
    }

    let children = current
        .children_mut()
        .ok_or_else(|| format!("'{}' is a file", walked))?;

    // a repeated dir row merges with what is already there
    let merge = kind == NodeKind::Directory
        && matches!(children.get(*leaf), Some(Node::Directory { .. }));
    if !merge {
        children.insert(leaf.to_string(), Node::new(kind, row.content.as_deref()));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
