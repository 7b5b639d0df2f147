/*!
 * Directory-tree view of a set of relative paths
 */

use std::collections::BTreeMap;

/// A node in the path trie; children are kept sorted by segment name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    /// Create an empty root
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from `/`-separated paths
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = Self::new();
        for path in paths {
            root.insert(path.as_ref());
        }
        root
    }

    /// Insert every segment of `path` as a nested child
    pub fn insert(&mut self, path: &str) {
        let mut node = self;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            node = node.children.entry(segment.to_string()).or_default();
        }
    }

    /// Child nodes in lexical order
    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// True if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Render as display lines, starting with the `.` root label
    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![".".to_string()];
        self.render_children("", &mut lines);
        lines
    }

    fn render_children(&self, prefix: &str, lines: &mut Vec<String>) {
        let count = self.children.len();
        for (i, (name, child)) in self.children.iter().enumerate() {
            let last = i + 1 == count;
            let connector = if last { "└── " } else { "├── " };
            lines.push(format!("{}{}{}", prefix, connector, name));

            let extension = if last { "    " } else { "│   " };
            child.render_children(&format!("{}{}", prefix, extension), lines);
        }
    }
}

/// Render a tree view for the given paths
pub fn render_tree<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    TreeNode::from_paths(paths).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_nested_rendering() {
        let lines = render_tree(&["d.py", "a/c.py", "a/b.py"]);
        assert_eq!(
            lines,
            vec![
                ".",
                "├── a",
                "│   ├── b.py",
                "│   └── c.py",
                "└── d.py",
            ]
        );
    }

    #[test]
    fn test_last_branch_has_no_vertical_bar() {
        let lines = render_tree(&["x/y/z.txt", "w.txt"]);
        assert_eq!(
            lines,
            vec![".", "├── w.txt", "└── x", "    └── y", "        └── z.txt"]
        );
    }

    #[test]
    fn test_empty_path_set() {
        assert_eq!(render_tree::<&str>(&[]), vec!["."]);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let a = TreeNode::from_paths(["b/2", "a/1", "b/1"]);
        let b = TreeNode::from_paths(["b/1", "b/2", "a/1"]);
        assert_eq!(a, b);
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_shared_prefixes_merge() {
        let root = TreeNode::from_paths(["src/a.rs", "src/b.rs"]);
        let names: Vec<_> = root.children().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["src"]);
        let (_, src) = root.children().next().unwrap();
        assert!(!src.is_leaf());
        assert!(src.children().all(|(_, n)| n.is_leaf()));
    }
}
