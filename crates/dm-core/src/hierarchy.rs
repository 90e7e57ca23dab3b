//! Tree model for the hierarchy tab
//!
//! Nodes are addressed by their path of child indices from the top level,
//! e.g. `[0, 2, 1]` is the second child of the third child of the first root.

use serde::{Deserialize, Serialize};

/// Path of child indices from the top level of the tree
pub type NodePath = Vec<usize>;

/// A node with three text columns and ordered children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub label: String,
    pub kind: String,
    pub value: String,
    pub expanded: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>, kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: kind.into(),
            value: value.into(),
            expanded: false,
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn set_expanded_recursive(&mut self, expanded: bool) {
        self.expanded = expanded;
        for child in &mut self.children {
            child.set_expanded_recursive(expanded);
        }
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}

/// Hierarchical view model: column headers plus top-level nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hierarchy {
    headers: Vec<String>,
    roots: Vec<TreeNode>,
}

impl Hierarchy {
    pub fn new<I, S>(headers: I, roots: Vec<TreeNode>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            roots,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Total number of nodes at every depth
    pub fn len(&self) -> usize {
        self.roots.iter().map(TreeNode::count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn expand_all(&mut self) {
        for root in &mut self.roots {
            root.set_expanded_recursive(true);
        }
    }

    pub fn collapse_all(&mut self) {
        for root in &mut self.roots {
            root.set_expanded_recursive(false);
        }
    }

    pub fn node(&self, path: &[usize]) -> Option<&TreeNode> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.roots.get(*first)?, |node, &i| node.children.get(i))
    }

    pub fn node_mut(&mut self, path: &[usize]) -> Option<&mut TreeNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.roots.get_mut(*first)?;
        for &i in rest {
            node = node.children.get_mut(i)?;
        }
        Some(node)
    }

    /// Flip the expanded flag of a node; returns the new state
    pub fn toggle(&mut self, path: &[usize]) -> Option<bool> {
        let node = self.node_mut(path)?;
        node.expanded = !node.expanded;
        Some(node.expanded)
    }

    /// Text for the details panel of the node at `path`
    pub fn details(&self, path: &[usize]) -> Option<String> {
        let node = self.node(path)?;
        let label = |i: usize, fallback: &str| {
            self.headers
                .get(i)
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };
        Some(format!(
            "{}: {}\n{}: {}\n{}: {}\nEnfants: {}",
            label(0, "Élément"),
            node.label,
            label(1, "Type"),
            node.kind,
            label(2, "Valeur"),
            node.value,
            node.children.len()
        ))
    }

    /// Depth-first, pre-order walk over every node
    pub fn walk(&self) -> Vec<(usize, NodePath, &TreeNode)> {
        let mut out = Vec::with_capacity(self.len());
        for (i, root) in self.roots.iter().enumerate() {
            walk_node(root, vec![i], &mut out);
        }
        out
    }

    /// Nodes reachable without passing through a collapsed parent
    pub fn visible(&self) -> Vec<(usize, NodePath, &TreeNode)> {
        self.walk()
            .into_iter()
            .filter(|(_, path, _)| self.ancestors_expanded(path))
            .collect()
    }

    fn ancestors_expanded(&self, path: &[usize]) -> bool {
        (1..path.len()).all(|depth| self.node(&path[..depth]).is_some_and(|n| n.expanded))
    }
}

fn walk_node<'a>(node: &'a TreeNode, path: NodePath, out: &mut Vec<(usize, NodePath, &'a TreeNode)>) {
    let depth = path.len() - 1;
    out.push((depth, path.clone(), node));
    for (i, child) in node.children.iter().enumerate() {
        let mut child_path = path.clone();
        child_path.push(i);
        walk_node(child, child_path, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_tree;

    #[test]
    fn test_node_lookup() {
        let tree = sample_tree();
        assert_eq!(tree.node(&[0]).unwrap().label, "Racine");
        assert_eq!(tree.node(&[0, 0]).unwrap().label, "Catégorie 1");
        assert_eq!(tree.node(&[0, 2, 0]).unwrap().label, "Élément 1");
        assert!(tree.node(&[0, 3]).is_none());
        assert!(tree.node(&[]).is_none());
    }

    #[test]
    fn test_walk_is_preorder() {
        let tree = sample_tree();
        let walked = tree.walk();
        assert_eq!(walked.len(), 16);
        assert_eq!(walked[0].0, 0);
        assert_eq!(walked[1].1, vec![0, 0]);
        assert_eq!(walked[2].1, vec![0, 0, 0]);
        assert_eq!(walked[6].1, vec![0, 1]);
        assert_eq!(walked[15].0, 2);
    }

    #[test]
    fn test_collapse_hides_descendants() {
        let mut tree = sample_tree();
        assert_eq!(tree.visible().len(), 16);

        tree.toggle(&[0, 1]);
        assert_eq!(tree.visible().len(), 12);

        tree.collapse_all();
        assert_eq!(tree.visible().len(), 1);

        tree.expand_all();
        assert_eq!(tree.visible().len(), 16);
    }

    #[test]
    fn test_details() {
        let tree = sample_tree();
        let details = tree.details(&[0, 0]).unwrap();
        assert!(details.contains("Élément: Catégorie 1"));
        assert!(details.contains("Type: Dossier"));
        assert!(details.contains("Valeur: 10"));
        assert!(details.contains("Enfants: 4"));
        assert!(tree.details(&[9]).is_none());
    }
}
