//! Data structures shown on the Structures and Search pages
//!
//! - [`linked_list::LinkedList`]: singly linked, `Box`-owned `next` links, O(n) append
//! - [`doubly_linked_list::DoublyLinkedList`]: token-keyed node table with
//!   non-owning `prev`/`next` links and tracked head/tail, O(1) append
//! - [`bst::BinarySearchTree`]: unbalanced BST, `Box`-owned children, no deletion
//! - [`stack::Stack`] and [`queue::Queue`]: O(1) at their designated ends
//!
//! Every stored value is an [`Item`] carrying a [`Token`] so the UI can highlight
//! a node during a search animation. Operations on an empty structure report
//! [`VisualizerError::EmptyStructure`](crate::errors::VisualizerError) and removals of
//! missing values report `ValueNotFound`; neither mutates anything.

pub mod bst;
pub mod doubly_linked_list;
pub mod linked_list;
pub mod queue;
pub mod stack;

use crate::ident::Token;
use std::fmt;

/// A value with its identity token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub value: i64,
    pub token: Token,
}

/// Nodes examined by a search, in the order they were examined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTrace {
    pub path: Vec<Token>,
    pub found: bool,
}

impl SearchTrace {
    /// Index of the matching node along the path (list position, or tree depth)
    pub fn position(&self) -> Option<usize> {
        if self.found {
            self.path.len().checked_sub(1)
        } else {
            None
        }
    }

    /// Token of the matching node
    pub fn hit(&self) -> Option<Token> {
        if self.found {
            self.path.last().copied()
        } else {
            None
        }
    }
}

/// The structures that can be visualized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    LinkedList,
    DoublyLinkedList,
    BinarySearchTree,
    Stack,
    Queue,
}

impl StructureKind {
    pub const ALL: [StructureKind; 5] = [
        StructureKind::LinkedList,
        StructureKind::DoublyLinkedList,
        StructureKind::BinarySearchTree,
        StructureKind::Stack,
        StructureKind::Queue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StructureKind::LinkedList => "Linked List",
            StructureKind::DoublyLinkedList => "Doubly Linked List",
            StructureKind::BinarySearchTree => "Binary Search Tree",
            StructureKind::Stack => "Stack",
            StructureKind::Queue => "Queue",
        }
    }

    /// Lower-case name used in messages ("The stack is empty")
    pub const fn noun(self) -> &'static str {
        match self {
            StructureKind::LinkedList => "linked list",
            StructureKind::DoublyLinkedList => "doubly linked list",
            StructureKind::BinarySearchTree => "tree",
            StructureKind::Stack => "stack",
            StructureKind::Queue => "queue",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StructureKind::LinkedList => "Nodes linked one way; append walks to the tail",
            StructureKind::DoublyLinkedList => {
                "Nodes linked both ways with a tail reference for O(1) append"
            }
            StructureKind::BinarySearchTree => "Smaller values left, larger values right",
            StructureKind::Stack => "Last in, first out",
            StructureKind::Queue => "First in, first out",
        }
    }

    /// Whether the Search page can animate a lookup on this structure
    pub fn is_searchable(self) -> bool {
        matches!(
            self,
            StructureKind::LinkedList
                | StructureKind::DoublyLinkedList
                | StructureKind::BinarySearchTree
        )
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
