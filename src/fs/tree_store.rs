//! Tree Store
//!
//! Owns the node graph and every path-sensitive operation on it. Lookups
//! never touch the host filesystem.

use tracing::debug;

use super::path::{normalize_path, render_path};
use super::types::*;

/// In-memory virtual file system rooted at a single directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStore {
    root: Node,
}

impl TreeStore {
    /// Create a store holding only an empty root directory.
    pub fn new() -> Self {
        Self { root: Node::empty_dir() }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Swap in a freshly built tree. The root must be a directory.
    pub(crate) fn replace_root(&mut self, root: Node) {
        debug_assert!(root.is_directory());
        self.root = root;
    }

    /// Walk from the root. Fails as soon as a component is missing or a
    /// file would have to be descended into.
    pub fn find_node(&self, components: &[String]) -> Option<&Node> {
        let mut current = &self.root;
        for part in components {
            current = current.children()?.get(part)?;
        }
        Some(current)
    }

    fn find_node_mut(&mut self, components: &[String]) -> Option<&mut Node> {
        let mut current = &mut self.root;
        for part in components {
            current = current.children_mut()?.get_mut(part)?;
        }
        Some(current)
    }

    /// True when some proper prefix of `components` names a file.
    fn passes_through_file(&self, components: &[String]) -> bool {
        let mut current = &self.root;
        for part in components {
            let Some(children) = current.children() else {
                return true;
            };
            match children.get(part) {
                Some(next) => current = next,
                None => return false,
            }
        }
        false
    }

    /// Names under `path` (or under `cwd` when no path is given), sorted.
    ///
    /// A file target yields just its own name.
    pub fn list_directory(&self, path: Option<&str>, cwd: &[String]) -> Result<Vec<String>, FsError> {
        let components = match path {
            Some(p) => normalize_path(p, cwd),
            None => cwd.to_vec(),
        };
        let shown = path.map(str::to_string).unwrap_or_else(|| render_path(cwd));

        match self.find_node(&components) {
            None => Err(FsError::NotFound { path: shown }),
            Some(Node::File { .. }) => Ok(components.last().cloned().into_iter().collect()),
            Some(dir) => Ok(dir.sorted_child_names()),
        }
    }

    /// Resolve the target of a `cd`. Returns the new current path; the
    /// caller's coordinate is left alone on failure.
    pub fn change_directory(&self, path: &str, cwd: &[String]) -> Result<Vec<String>, FsError> {
        if path.is_empty() || path == "." {
            return Ok(cwd.to_vec());
        }
        let components = normalize_path(path, cwd);
        match self.find_node(&components) {
            None if self.passes_through_file(&components) => {
                Err(FsError::NotADirectory { path: path.to_string() })
            }
            None => Err(FsError::NotFound { path: path.to_string() }),
            Some(Node::File { .. }) => Err(FsError::NotADirectory { path: path.to_string() }),
            Some(Node::Directory { .. }) => Ok(components),
        }
    }

    /// Create a node at `components`.
    ///
    /// An existing node of a compatible kind is returned unchanged, so a
    /// second `touch` never rewrites content. A file over an existing
    /// directory is a `TypeConflict`.
    pub fn create_node(
        &mut self,
        components: &[String],
        kind: NodeKind,
        content: Option<&str>,
    ) -> Result<&Node, FsError> {
        let Some((leaf, parent_path)) = components.split_last() else {
            return Err(FsError::InvalidPath { path: render_path(components) });
        };

        let parent = self
            .find_node_mut(parent_path)
            .ok_or_else(|| FsError::NotFound { path: render_path(parent_path) })?;
        let children = parent
            .children_mut()
            .ok_or_else(|| FsError::NotADirectory { path: render_path(parent_path) })?;

        if let Some(existing) = children.get(leaf) {
            if existing.is_directory() && kind == NodeKind::File {
                return Err(FsError::TypeConflict { path: render_path(components) });
            }
        } else {
            debug!(path = %render_path(components), kind = kind.as_str(), "creating node");
        }

        Ok(children
            .entry(leaf.clone())
            .or_insert_with(|| Node::new(kind, content)))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn v(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> TreeStore {
        let mut store = TreeStore::new();
        store.create_node(&v(&["a"]), NodeKind::Directory, None).unwrap();
        store.create_node(&v(&["a", "b.txt"]), NodeKind::File, Some("hello")).unwrap();
        store.create_node(&v(&["a", "c"]), NodeKind::Directory, None).unwrap();
        store
    }

    #[test]
    fn test_find_node() {
        let store = sample();
        assert!(store.find_node(&[]).unwrap().is_directory());
        assert_eq!(store.find_node(&v(&["a", "b.txt"])).unwrap().content(), Some("hello"));
        assert!(store.find_node(&v(&["a", "missing"])).is_none());
        // cannot descend into a file
        assert!(store.find_node(&v(&["a", "b.txt", "x"])).is_none());
    }

    #[test]
    fn test_create_then_find() {
        let mut store = TreeStore::new();
        store.create_node(&v(&["a"]), NodeKind::Directory, None).unwrap();
        store.create_node(&v(&["a", "b"]), NodeKind::File, Some("x")).unwrap();
        let node = store.find_node(&v(&["a", "b"])).unwrap();
        assert!(node.is_file());
        assert_eq!(node.content(), Some("x"));
    }

    #[test]
    fn test_create_is_idempotent() {
        let mut store = sample();
        let node = store
            .create_node(&v(&["a", "b.txt"]), NodeKind::File, Some("changed"))
            .unwrap();
        assert_eq!(node.content(), Some("hello"));
        assert_eq!(
            store.find_node(&v(&["a", "b.txt"])).unwrap().content(),
            Some("hello")
        );
    }

    #[test]
    fn test_create_defaults_to_empty_content() {
        let mut store = TreeStore::new();
        let node = store.create_node(&v(&["new"]), NodeKind::File, None).unwrap();
        assert_eq!(node.content(), Some(""));
    }

    #[test]
    fn test_create_file_over_directory() {
        let mut store = sample();
        let before = store.clone();
        let err = store.create_node(&v(&["a", "c"]), NodeKind::File, None).unwrap_err();
        assert_eq!(err, FsError::TypeConflict { path: "/a/c".to_string() });
        assert_eq!(store, before);
    }

    #[test]
    fn test_create_missing_parent() {
        let mut store = sample();
        let before = store.clone();
        let err = store.create_node(&v(&["x", "y"]), NodeKind::File, None).unwrap_err();
        assert!(matches!(err, FsError::NotFound { .. }));
        assert_eq!(store, before);
    }

    #[test]
    fn test_create_under_file() {
        let mut store = sample();
        let err = store
            .create_node(&v(&["a", "b.txt", "z"]), NodeKind::File, None)
            .unwrap_err();
        assert!(matches!(err, FsError::NotADirectory { .. }));
    }

    #[test]
    fn test_create_root_is_invalid() {
        let mut store = sample();
        let err = store.create_node(&[], NodeKind::File, None).unwrap_err();
        assert_eq!(err, FsError::InvalidPath { path: "/".to_string() });
    }

    #[test]
    fn test_list_directory() {
        let store = sample();
        assert_eq!(store.list_directory(Some("a"), &[]).unwrap(), vec!["b.txt", "c"]);
        assert_eq!(store.list_directory(None, &[]).unwrap(), vec!["a"]);
        assert_eq!(store.list_directory(None, &v(&["a", "c"])).unwrap(), Vec::<String>::new());
        assert_eq!(store.list_directory(Some(".."), &v(&["a"])).unwrap(), vec!["a"]);
    }

    #[test]
    fn test_list_file_yields_its_name() {
        let store = sample();
        assert_eq!(store.list_directory(Some("/a/b.txt"), &[]).unwrap(), vec!["b.txt"]);
    }

    #[test]
    fn test_list_missing() {
        let store = sample();
        let err = store.list_directory(Some("nope"), &[]).unwrap_err();
        assert_eq!(err, FsError::NotFound { path: "nope".to_string() });
    }

    #[test]
    fn test_change_directory() {
        let store = sample();
        let cwd = store.change_directory("a/c", &[]).unwrap();
        assert_eq!(render_path(&cwd), "/a/c");
        let cwd = store.change_directory("..", &cwd).unwrap();
        assert_eq!(cwd, v(&["a"]));
        assert_eq!(store.change_directory("", &cwd).unwrap(), cwd);
        assert_eq!(store.change_directory(".", &cwd).unwrap(), cwd);
        assert_eq!(store.change_directory("/", &cwd).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_change_directory_errors() {
        let store = sample();
        assert!(matches!(
            store.change_directory("missing", &[]),
            Err(FsError::NotFound { .. })
        ));
        assert!(matches!(
            store.change_directory("a/b.txt", &[]),
            Err(FsError::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_change_directory_through_file() {
        let store = sample();
        assert_eq!(
            store.change_directory("a/b.txt/x", &[]),
            Err(FsError::NotADirectory { path: "a/b.txt/x".to_string() })
        );
        assert!(matches!(
            store.change_directory("a/missing/x", &[]),
            Err(FsError::NotFound { .. })
        ));
    }
}
