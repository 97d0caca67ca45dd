//! Singly linked string list
//!
//! Nodes live in a `SlotMap` arena and link to each other through
//! generational keys, which gives O(1) append through a tail link without
//! raw pointers.
//!
//! ## Canonicalization
//! Every value entering the list is stored in canonical (uppercase) form,
//! and every value used to search it is canonicalized first. `append`,
//! `prepend`, `insert_after`, `contains` and `remove` all follow the same
//! rule, so route stop lists behave like the registries they index into.

use std::fmt;

use slotmap::{DefaultKey, SlotMap};

use crate::key;

#[derive(Debug, Clone)]
struct Node {
    value: String,
    next: Option<DefaultKey>,
}

/// Ordered sequence of canonical strings
#[derive(Debug, Clone, Default)]
pub struct LinkedList {
    nodes: SlotMap<DefaultKey, Node>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value at the end. O(1)
    pub fn append(&mut self, value: &str) {
        let node = self.nodes.insert(Node {
            value: key::canonical(value),
            next: None,
        });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
    }

    /// Add a value at the front. O(1)
    pub fn prepend(&mut self, value: &str) {
        let node = self.nodes.insert(Node {
            value: key::canonical(value),
            next: self.head,
        });

        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
    }

    /// Value at `index`, counting from the head. O(n)
    pub fn get(&self, index: usize) -> Option<&str> {
        self.iter().nth(index)
    }

    /// Whether any node matches `value` case-insensitively. O(n)
    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    /// Insert `value` right after the first node matching `anchor`
    ///
    /// Returns false, leaving the list untouched, when `anchor` is absent.
    pub fn insert_after(&mut self, anchor: &str, value: &str) -> bool {
        let Some(anchor) = self.find(anchor) else {
            return false;
        };

        let node = self.nodes.insert(Node {
            value: key::canonical(value),
            next: self.nodes[anchor].next,
        });
        self.nodes[anchor].next = Some(node);

        if self.tail == Some(anchor) {
            self.tail = Some(node);
        }
        true
    }

    /// Remove the first node matching `value`. Returns false when absent
    pub fn remove(&mut self, value: &str) -> bool {
        let target = key::canonical(value);
        let mut prev: Option<DefaultKey> = None;
        let mut cursor = self.head;

        while let Some(current) = cursor {
            let next = self.nodes[current].next;

            if self.nodes[current].value == target {
                match prev {
                    Some(p) => self.nodes[p].next = next,
                    None => self.head = next,
                }
                if self.tail == Some(current) {
                    self.tail = prev;
                }
                self.nodes.remove(current);
                return true;
            }

            prev = Some(current);
            cursor = next;
        }

        false
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Values from head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    fn find(&self, value: &str) -> Option<DefaultKey> {
        let target = key::canonical(value);
        let mut cursor = self.head;

        while let Some(current) = cursor {
            let node = &self.nodes[current];
            if node.value == target {
                return Some(current);
            }
            cursor = node.next;
        }
        None
    }
}

/// Iterator over list values, head to tail
pub struct Iter<'a> {
    nodes: &'a SlotMap<DefaultKey, Node>,
    cursor: Option<DefaultKey>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.cursor?];
        self.cursor = node.next;
        Some(node.value.as_str())
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(value)?;
        }
        Ok(())
    }
}
