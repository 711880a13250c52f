// Integration tests for the data structures

use algoviz::errors::VisualizerError;
use algoviz::structures::bst::BinarySearchTree;
use algoviz::structures::doubly_linked_list::DoublyLinkedList;
use algoviz::structures::queue::Queue;
use algoviz::structures::stack::Stack;

#[test]
fn test_bst_search_found_and_missing() {
    let mut tree = BinarySearchTree::new();
    for value in [5, 3, 8, 1, 4] {
        tree.insert(value);
    }

    let hit = tree.search(4).unwrap();
    assert!(hit.found);
    // 5 → 3 → 4
    assert_eq!(hit.path.len(), 3);

    let miss = tree.search(99).unwrap();
    assert!(!miss.found);
    assert!(miss.hit().is_none());
}

#[test]
fn test_stack_pops_in_reverse() {
    let mut stack = Stack::new();
    for value in [1, 2, 3] {
        stack.push(value);
    }
    assert_eq!(stack.pop().unwrap().value, 3);
    assert_eq!(stack.pop().unwrap().value, 2);
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.peek().unwrap().value, 1);
}

#[test]
fn test_queue_dequeues_in_order() {
    let mut queue = Queue::new();
    for value in [1, 2, 3] {
        queue.enqueue(value);
    }
    assert_eq!(queue.dequeue().unwrap().value, 1);
    let rest: Vec<i64> = queue.iter().map(|item| item.value).collect();
    assert_eq!(rest, vec![2, 3]);
}

#[test]
fn test_doubly_linked_list_keeps_ends_consistent() {
    let mut list = DoublyLinkedList::new();
    list.append(7);
    list.remove(7).unwrap();
    assert!(list.head().is_none());
    assert!(list.tail().is_none());
    assert!(list.is_empty());

    for value in [1, 2, 3] {
        list.append(value);
    }
    list.remove(3).unwrap();
    assert_eq!(list.tail().map(|item| item.value), Some(2));
    // The new tail links forward to nothing, so forward iteration stops there
    assert_eq!(list.values(), vec![1, 2]);
    let backwards: Vec<i64> = list.iter_back().map(|item| item.value).collect();
    assert_eq!(backwards, vec![2, 1]);
}

#[test]
fn test_failed_operations_do_not_mutate() {
    let mut list = DoublyLinkedList::new();
    list.append(1);
    assert!(matches!(
        list.remove(9),
        Err(VisualizerError::ValueNotFound { value: 9, .. })
    ));
    assert_eq!(list.values(), vec![1]);

    let mut stack = Stack::new();
    assert!(matches!(
        stack.pop(),
        Err(VisualizerError::EmptyStructure { .. })
    ));
    assert!(stack.is_empty());
}
