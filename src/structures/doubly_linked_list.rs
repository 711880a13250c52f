use super::{Item, SearchTrace, StructureKind};
use crate::errors::{Result, VisualizerError};
use crate::ident::{Token, TokenSource};
use rustc_hash::FxHashMap;

const NOUN: &str = StructureKind::DoublyLinkedList.noun();

#[derive(Debug, Clone)]
struct DoublyNode {
    item: Item,
    prev: Option<Token>,
    next: Option<Token>,
}

/// Doubly linked list stored as a node table keyed by token.
///
/// The table owns every node; `prev`/`next`/`head`/`tail` are plain tokens, so
/// the two directions never fight over ownership. Unlinked nodes are removed
/// from the table immediately.
#[derive(Debug, Clone, Default)]
pub struct DoublyLinkedList {
    nodes: FxHashMap<Token, DoublyNode>,
    head: Option<Token>,
    tail: Option<Token>,
    tokens: TokenSource,
}

impl DoublyLinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append after the tracked tail in O(1)
    pub fn append(&mut self, value: i64) -> Token {
        let token = self.tokens.next_token();
        self.nodes.insert(
            token,
            DoublyNode {
                item: Item { value, token },
                prev: self.tail,
                next: None,
            },
        );

        match self.tail.and_then(|tail| self.nodes.get_mut(&tail)) {
            Some(old_tail) => old_tail.next = Some(token),
            None => self.head = Some(token),
        }
        self.tail = Some(token);
        token
    }

    /// Unlink the first node holding `value`, repairing both neighbors
    pub fn remove(&mut self, value: i64) -> Result<Item> {
        if self.is_empty() {
            return Err(VisualizerError::EmptyStructure { structure: NOUN });
        }

        let token = self
            .iter()
            .find(|item| item.value == value)
            .map(|item| item.token)
            .ok_or(VisualizerError::ValueNotFound {
                value,
                structure: NOUN,
            })?;
        let node = self
            .nodes
            .remove(&token)
            .ok_or(VisualizerError::ValueNotFound {
                value,
                structure: NOUN,
            })?;

        match node.prev.and_then(|prev| self.nodes.get_mut(&prev)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.nodes.get_mut(&next)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }

        Ok(node.item)
    }

    /// Walk from the head until `value` is found
    pub fn search(&self, value: i64) -> Result<SearchTrace> {
        if self.is_empty() {
            return Err(VisualizerError::EmptyStructure { structure: NOUN });
        }

        let mut path = Vec::new();
        for item in self.iter() {
            path.push(item.token);
            if item.value == value {
                return Ok(SearchTrace { path, found: true });
            }
        }
        Ok(SearchTrace { path, found: false })
    }

    /// Head-to-tail iterator
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            forward: true,
        }
    }

    /// Tail-to-head iterator
    pub fn iter_back(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.tail,
            forward: false,
        }
    }

    pub fn values(&self) -> Vec<i64> {
        self.iter().map(|item| item.value).collect()
    }

    pub fn head(&self) -> Option<&Item> {
        self.head
            .and_then(|token| self.nodes.get(&token))
            .map(|node| &node.item)
    }

    pub fn tail(&self) -> Option<&Item> {
        self.tail
            .and_then(|token| self.nodes.get(&token))
            .map(|node| &node.item)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }
}

/// Iterator in either direction
pub struct Iter<'a> {
    nodes: &'a FxHashMap<Token, DoublyNode>,
    cursor: Option<Token>,
    forward: bool,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(&self.cursor?)?;
        self.cursor = if self.forward { node.next } else { node.prev };
        Some(&node.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[i64]) -> DoublyLinkedList {
        let mut list = DoublyLinkedList::new();
        for &v in values {
            list.append(v);
        }
        list
    }

    fn backward(list: &DoublyLinkedList) -> Vec<i64> {
        list.iter_back().map(|item| item.value).collect()
    }

    #[test]
    fn test_both_directions_agree() {
        let list = list(&[1, 2, 3]);
        assert_eq!(list.values(), vec![1, 2, 3]);
        assert_eq!(backward(&list), vec![3, 2, 1]);
        assert_eq!(list.head().map(|i| i.value), Some(1));
        assert_eq!(list.tail().map(|i| i.value), Some(3));
    }

    #[test]
    fn test_remove_only_node_empties_head_and_tail() {
        let mut list = list(&[7]);
        list.remove(7).unwrap();
        assert!(list.is_empty());
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
        assert_eq!(list.iter().count(), 0);
        assert_eq!(list.iter_back().count(), 0);
    }

    #[test]
    fn test_remove_tail_updates_new_tail() {
        let mut list = list(&[1, 2, 3]);
        list.remove(3).unwrap();
        assert_eq!(list.tail().map(|i| i.value), Some(2));
        assert_eq!(list.values(), vec![1, 2]);
        assert_eq!(backward(&list), vec![2, 1]);

        // Appending after the removal links onto the new tail
        list.append(4);
        assert_eq!(list.values(), vec![1, 2, 4]);
        assert_eq!(backward(&list), vec![4, 2, 1]);
    }

    #[test]
    fn test_remove_head_and_middle() {
        let mut list = list(&[1, 2, 3, 4]);
        list.remove(1).unwrap();
        list.remove(3).unwrap();
        assert_eq!(list.values(), vec![2, 4]);
        assert_eq!(backward(&list), vec![4, 2]);
        assert_eq!(list.head().map(|i| i.value), Some(2));
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let mut list = list(&[1]);
        assert!(matches!(
            list.remove(5),
            Err(VisualizerError::ValueNotFound { value: 5, .. })
        ));
        assert_eq!(list.len(), 1);
    }
}
