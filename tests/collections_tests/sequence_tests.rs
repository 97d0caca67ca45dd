//! Sequence Container Tests
//!
//! Tests verify:
//! - LinkedList ordering, canonical storage and removal
//! - Stack LIFO order and overflow rejection
//! - CircularQueue FIFO order, wrap-around and overflow rejection

use citynet::collections::{CircularQueue, LinkedList, Stack};
use citynet::{CityError, Config};

// =============================================================================
// LinkedList Tests
// =============================================================================

#[test]
fn test_list_append_keeps_order() {
    let mut list = LinkedList::new();
    list.append("stop1");
    list.append("stop2");
    list.append("stop3");

    assert_eq!(list.len(), 3);
    assert_eq!(list.get(0), Some("STOP1"));
    assert_eq!(list.get(2), Some("STOP3"));
    assert_eq!(list.get(3), None);
}

#[test]
fn test_list_prepend_goes_to_front() {
    let mut list = LinkedList::new();
    list.append("middle");
    list.prepend("first");
    list.append("last");

    assert_eq!(list.to_string(), "FIRST -> MIDDLE -> LAST");
}

#[test]
fn test_list_canonicalizes_every_insert() {
    let mut list = LinkedList::new();
    list.append("a");
    list.prepend("b");
    assert!(list.insert_after("A", "c"));

    let values: Vec<_> = list.iter().collect();
    assert_eq!(values, vec!["B", "A", "C"]);
}

#[test]
fn test_list_contains_ignores_case() {
    let mut list = LinkedList::new();
    list.append("Blue Area");

    assert!(list.contains("blue area"));
    assert!(list.contains("BLUE AREA"));
    assert!(!list.contains("red area"));
}

#[test]
fn test_list_insert_after_anchor() {
    let mut list = LinkedList::new();
    list.append("s1");
    list.append("s3");

    assert!(list.insert_after("s1", "s2"));
    assert_eq!(list.to_string(), "S1 -> S2 -> S3");
}

#[test]
fn test_list_insert_after_missing_anchor() {
    let mut list = LinkedList::new();
    list.append("s1");

    assert!(!list.insert_after("s9", "s2"));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_list_remove_head_middle_tail() {
    let mut list = LinkedList::new();
    for stop in ["a", "b", "c", "d"] {
        list.append(stop);
    }

    assert!(list.remove("a"));
    assert!(list.remove("C"));
    assert!(list.remove("d"));
    assert!(!list.remove("missing"));

    assert_eq!(list.to_string(), "B");
    list.append("e");
    assert_eq!(list.to_string(), "B -> E");
}

#[test]
fn test_list_remove_first_match_only() {
    let mut list = LinkedList::new();
    list.append("x");
    list.append("y");
    list.append("x");

    assert!(list.remove("X"));
    assert_eq!(list.to_string(), "Y -> X");
}

#[test]
fn test_empty_list_display() {
    let list = LinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.to_string(), "");
}

// =============================================================================
// Stack Tests
// =============================================================================

#[test]
fn test_stack_is_lifo() {
    let mut stack = Stack::new(5);
    for page in ["home", "search", "result"] {
        stack.push(page.to_string()).unwrap();
    }

    assert_eq!(stack.peek().map(String::as_str), Some("result"));
    assert_eq!(stack.pop().as_deref(), Some("result"));
    assert_eq!(stack.pop().as_deref(), Some("search"));
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_stack_overflow_is_rejected() {
    let mut stack = Stack::new(1);
    stack.push(1).unwrap();

    match stack.push(2) {
        Err(CityError::CapacityExceeded { container, capacity }) => {
            assert_eq!(container, "stack");
            assert_eq!(capacity, 1);
        }
        other => panic!("expected capacity error, got {:?}", other),
    }
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.peek(), Some(&1));
}

#[test]
fn test_stack_underflow_returns_none() {
    let mut stack: Stack = Stack::new(2);
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);
}

// =============================================================================
// CircularQueue Tests
// =============================================================================

#[test]
fn test_queue_fourth_enqueue_rejected_at_capacity_three() {
    let mut queue = CircularQueue::new(3);
    queue.enqueue(10).unwrap();
    queue.enqueue(20).unwrap();
    queue.enqueue(30).unwrap();

    assert!(matches!(
        queue.enqueue(40),
        Err(CityError::CapacityExceeded { capacity: 3, .. })
    ));
    assert_eq!(queue.size(), 3);

    assert_eq!(queue.dequeue(), Some(10));
    assert_eq!(queue.dequeue(), Some(20));
    assert_eq!(queue.dequeue(), Some(30));
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_queue_peek_does_not_remove() {
    let mut queue = CircularQueue::new(2);
    queue.enqueue("p1").unwrap();

    assert_eq!(queue.peek(), Some(&"p1"));
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_queue_boarding_simulation_wraps() {
    let mut queue = CircularQueue::new(15);
    let mut boarded = Vec::new();

    for passenger in 1..=40 {
        if queue.is_full() {
            boarded.push(queue.dequeue().unwrap());
        }
        queue.enqueue(passenger).unwrap();
    }
    while let Some(passenger) = queue.dequeue() {
        boarded.push(passenger);
    }

    assert_eq!(boarded, (1..=40).collect::<Vec<_>>());
    assert!(queue.is_empty());
}

// =============================================================================
// LinkedList Link Tests
// =============================================================================

#[test]
fn test_list_tail_follows_removal_of_last_node() {
    let mut list = LinkedList::new();
    list.append("a");
    list.append("b");
    assert!(list.remove("b"));

    list.append("c");
    assert_eq!(list.iter().collect::<Vec<_>>(), vec!["A", "C"]);
}

#[test]
fn test_list_removing_only_node_resets_head_and_tail() {
    let mut list = LinkedList::new();
    list.prepend("solo");
    assert!(list.remove("SOLO"));
    assert!(list.is_empty());

    list.append("next");
    assert_eq!(list.get(0), Some("NEXT"));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_list_insert_after_tail_moves_tail() {
    let mut list = LinkedList::new();
    list.append("x");
    assert!(list.insert_after("X", "y"));
    list.append("z");
    assert_eq!(list.to_string(), "X -> Y -> Z");
}

// =============================================================================
// Bounded Container Config Tests
// =============================================================================

#[test]
fn test_stack_from_config() {
    let config = Config::builder().stack_capacity(1).build();
    let mut stack: Stack = Stack::from_config(&config);

    stack.push("map".to_string()).unwrap();
    assert!(matches!(
        stack.push("gate".to_string()),
        Err(CityError::CapacityExceeded { capacity: 1, .. })
    ));
    assert_eq!(stack.peek().map(String::as_str), Some("map"));
}

#[test]
fn test_stack_with_huge_capacity_allocates_lazily() {
    let mut stack: Stack = Stack::new(usize::MAX / 2);
    stack.push("a".to_string()).unwrap();
    assert!(!stack.is_full());
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_queue_from_config() {
    let config = Config::builder().queue_capacity(2).build();
    let mut queue: CircularQueue = CircularQueue::from_config(&config);

    assert_eq!(queue.capacity(), 2);
    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();
    assert!(queue.enqueue(3).is_err());
}

#[test]
fn test_queue_indices_wrap_around() {
    let mut queue = CircularQueue::new(3);
    for i in 0..3 {
        queue.enqueue(i).unwrap();
    }
    assert_eq!(queue.dequeue(), Some(0));
    assert_eq!(queue.dequeue(), Some(1));

    // rear wraps into slots freed at the start of the buffer
    queue.enqueue(3).unwrap();
    queue.enqueue(4).unwrap();
    assert!(queue.is_full());

    let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
    assert_eq!(drained, vec![2, 3, 4]);
}

#[test]
fn test_zero_capacity_queue_rejects_everything() {
    let mut queue: CircularQueue = CircularQueue::new(0);
    assert!(queue.is_full());
    assert!(queue.enqueue(1).is_err());
    assert_eq!(queue.dequeue(), None);
}
