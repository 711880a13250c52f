use super::{Item, StructureKind};
use crate::errors::{Result, VisualizerError};
use crate::ident::TokenSource;

const NOUN: &str = StructureKind::Stack.noun();

/// LIFO stack; the top is the end of the backing vector
#[derive(Debug, Clone, Default)]
pub struct Stack {
    items: Vec<Item>,
    tokens: TokenSource,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: i64) -> Item {
        let item = Item {
            value,
            token: self.tokens.next_token(),
        };
        self.items.push(item);
        item
    }

    pub fn pop(&mut self) -> Result<Item> {
        self.items
            .pop()
            .ok_or(VisualizerError::EmptyStructure { structure: NOUN })
    }

    pub fn peek(&self) -> Result<&Item> {
        self.items
            .last()
            .ok_or(VisualizerError::EmptyStructure { structure: NOUN })
    }

    /// Bottom to top
    pub fn items(&self) -> &[Item] {
        &self.items
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
