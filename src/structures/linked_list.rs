use super::{Item, SearchTrace, StructureKind};
use crate::errors::{Result, VisualizerError};
use crate::ident::{Token, TokenSource};
use std::fmt;

const NOUN: &str = StructureKind::LinkedList.noun();

struct ListNode {
    item: Item,
    next: Option<Box<ListNode>>,
}

/// Singly linked list with owned `next` links
pub struct LinkedList {
    head: Option<Box<ListNode>>,
    len: usize,
    tokens: TokenSource,
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            len: 0,
            tokens: TokenSource::new(),
        }
    }

    /// Append at the tail, walking the whole list
    pub fn append(&mut self, value: i64) -> Token {
        let token = self.tokens.next_token();
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(ListNode {
            item: Item { value, token },
            next: None,
        }));
        self.len += 1;
        token
    }

    /// Unlink the first node holding `value`
    pub fn remove(&mut self, value: i64) -> Result<Item> {
        if self.head.is_none() {
            return Err(VisualizerError::EmptyStructure { structure: NOUN });
        }

        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.item.value != value) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }

        let node = cursor.take().ok_or(VisualizerError::ValueNotFound {
            value,
            structure: NOUN,
        })?;
        let ListNode { item, next } = *node;
        *cursor = next;
        self.len -= 1;
        Ok(item)
    }

    /// Walk from the head until `value` is found
    pub fn search(&self, value: i64) -> Result<SearchTrace> {
        if self.head.is_none() {
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

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn values(&self) -> Vec<i64> {
        self.iter().map(|item| item.value).collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.unlink_all();
        self.len = 0;
    }

    // Iterative so long lists don't recurse through Box drops
    fn unlink_all(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|item| item.value)).finish()
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

/// Head-to-tail iterator
pub struct Iter<'a> {
    next: Option<&'a ListNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.item
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[i64]) -> LinkedList {
        let mut list = LinkedList::new();
        for &v in values {
            list.append(v);
        }
        list
    }

    #[test]
    fn test_append_keeps_order() {
        let list = list(&[10, 20, 30]);
        assert_eq!(list.values(), vec![10, 20, 30]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_head_middle_tail() {
        let mut list = list(&[1, 2, 3, 4]);
        assert_eq!(list.remove(1).unwrap().value, 1);
        assert_eq!(list.remove(3).unwrap().value, 3);
        assert_eq!(list.remove(4).unwrap().value, 4);
        assert_eq!(list.values(), vec![2]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_missing_leaves_list_alone() {
        let mut list = list(&[1, 2]);
        assert_eq!(
            list.remove(9),
            Err(VisualizerError::ValueNotFound {
                value: 9,
                structure: "linked list"
            })
        );
        assert_eq!(list.values(), vec![1, 2]);
    }

    #[test]
    fn test_search_reports_position() {
        let list = list(&[5, 6, 7]);
        let trace = list.search(7).unwrap();
        assert_eq!(trace.position(), Some(2));
        assert_eq!(trace.path.len(), 3);

        let miss = list.search(8).unwrap();
        assert!(!miss.found);
        assert_eq!(miss.path.len(), 3);
    }

    #[test]
    fn test_empty_list_errors() {
        let mut list = LinkedList::new();
        assert!(matches!(
            list.search(1),
            Err(VisualizerError::EmptyStructure { .. })
        ));
        assert!(matches!(
            list.remove(1),
            Err(VisualizerError::EmptyStructure { .. })
        ));
    }
}
