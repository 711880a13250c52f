use super::{Item, SearchTrace, StructureKind};
use crate::errors::{Result, VisualizerError};
use crate::ident::{Token, TokenSource};
use std::cmp::Ordering;
use std::fmt;

const NOUN: &str = StructureKind::BinarySearchTree.noun();

struct TreeNode {
    item: Item,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

/// Where a node sits when the tree is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeLayout {
    pub item: Item,
    /// Root is depth 0
    pub depth: usize,
    /// In-order index, used as the horizontal slot
    pub column: usize,
    pub parent: Option<Token>,
}

/// Unbalanced binary search tree; the ordering is only enforced on insert
pub struct BinarySearchTree {
    root: Option<Box<TreeNode>>,
    len: usize,
    tokens: TokenSource,
}

impl BinarySearchTree {
    pub fn new() -> Self {
        BinarySearchTree {
            root: None,
            len: 0,
            tokens: TokenSource::new(),
        }
    }

    /// Insert `value`; returns `None` and leaves the tree untouched for duplicates
    pub fn insert(&mut self, value: i64) -> Option<Token> {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.item.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return None,
            };
        }

        let token = self.tokens.next_token();
        *slot = Some(Box::new(TreeNode {
            item: Item { value, token },
            left: None,
            right: None,
        }));
        self.len += 1;
        Some(token)
    }

    /// Descend from the root, recording each node compared against
    pub fn search(&self, value: i64) -> Result<SearchTrace> {
        if self.root.is_none() {
            return Err(VisualizerError::EmptyStructure { structure: NOUN });
        }

        let mut path = Vec::new();
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            path.push(node.item.token);
            current = match value.cmp(&node.item.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Ok(SearchTrace { path, found: true }),
            };
        }
        Ok(SearchTrace { path, found: false })
    }

    /// Items in ascending order
    pub fn in_order(&self) -> Vec<Item> {
        let mut items = Vec::with_capacity(self.len);
        let mut stack: Vec<&TreeNode> = Vec::new();
        let mut current = self.root.as_deref();
        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                items.push(node.item);
                current = node.right.as_deref();
            }
        }
        items
    }

    /// Number of levels; an empty tree has height 0
    pub fn height(&self) -> usize {
        fn height_of(node: Option<&TreeNode>) -> usize {
            node.map_or(0, |n| {
                1 + height_of(n.left.as_deref()).max(height_of(n.right.as_deref()))
            })
        }
        height_of(self.root.as_deref())
    }

    /// Depth and in-order column of every node, in in-order sequence
    pub fn layout(&self) -> Vec<NodeLayout> {
        fn walk(
            node: Option<&TreeNode>,
            depth: usize,
            parent: Option<Token>,
            out: &mut Vec<NodeLayout>,
        ) {
            let Some(node) = node else {
                return;
            };
            walk(node.left.as_deref(), depth + 1, Some(node.item.token), out);
            out.push(NodeLayout {
                item: node.item,
                depth,
                column: out.len(),
                parent,
            });
            walk(node.right.as_deref(), depth + 1, Some(node.item.token), out);
        }

        let mut out = Vec::with_capacity(self.len);
        walk(self.root.as_deref(), 0, None, &mut out);
        out
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

impl Default for BinarySearchTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BinarySearchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.in_order().iter().map(|item| item.value))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(values: &[i64]) -> BinarySearchTree {
        let mut tree = BinarySearchTree::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    #[test]
    fn test_search_found_and_missing() {
        let tree = tree(&[5, 3, 8, 1, 4]);
        let hit = tree.search(4).unwrap();
        assert!(hit.found);
        // 5 → 3 → 4
        assert_eq!(hit.path.len(), 3);
        assert!(!tree.search(99).unwrap().found);
    }

    #[test]
    fn test_duplicates_ignored() {
        let mut tree = tree(&[5, 3]);
        assert_eq!(tree.insert(5), None);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_in_order_is_sorted() {
        let tree = tree(&[50, 30, 70, 20, 40, 60, 80]);
        let values: Vec<i64> = tree.in_order().iter().map(|i| i.value).collect();
        assert_eq!(values, vec![20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_layout_depths_and_columns() {
        let tree = tree(&[5, 3, 8]);
        let layout = tree.layout();
        let summary: Vec<(i64, usize, usize)> = layout
            .iter()
            .map(|n| (n.item.value, n.depth, n.column))
            .collect();
        assert_eq!(summary, vec![(3, 1, 0), (5, 0, 1), (8, 1, 2)]);
        assert_eq!(layout[1].parent, None);
        assert_eq!(layout[0].parent, Some(layout[1].item.token));
    }

    #[test]
    fn test_empty_tree_search_errors() {
        let tree = BinarySearchTree::new();
        assert_eq!(
            tree.search(1),
            Err(VisualizerError::EmptyStructure { structure: "tree" })
        );
        assert_eq!(tree.height(), 0);
    }
}
