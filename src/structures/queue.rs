use super::{Item, StructureKind};
use crate::errors::{Result, VisualizerError};
use crate::ident::TokenSource;
use std::collections::VecDeque;

const NOUN: &str = StructureKind::Queue.noun();

/// FIFO queue: enqueue at the back, dequeue at the front
#[derive(Debug, Clone, Default)]
pub struct Queue {
    items: VecDeque<Item>,
    tokens: TokenSource,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, value: i64) -> Item {
        let item = Item {
            value,
            token: self.tokens.next_token(),
        };
        self.items.push_back(item);
        item
    }

    pub fn dequeue(&mut self) -> Result<Item> {
        self.items
            .pop_front()
            .ok_or(VisualizerError::EmptyStructure { structure: NOUN })
    }

    pub fn front(&self) -> Result<&Item> {
        self.items
            .front()
            .ok_or(VisualizerError::EmptyStructure { structure: NOUN })
    }

    /// Front to back
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new();
        for v in [1, 2, 3] {
            queue.enqueue(v);
        }
        assert_eq!(queue.dequeue().unwrap().value, 1);
        let rest: Vec<i64> = queue.iter().map(|i| i.value).collect();
        assert_eq!(rest, vec![2, 3]);
        assert_eq!(queue.front().unwrap().value, 2);
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = Queue::new();
        assert!(matches!(
            queue.dequeue(),
            Err(VisualizerError::EmptyStructure { structure: "queue" })
        ));
        assert!(queue.front().is_err());
    }
}
