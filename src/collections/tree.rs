//! N-ary tree of named nodes
//!
//! Used for organisational hierarchies (school → department → class,
//! sector → subsector). Node names are canonical and unique across the whole
//! tree, so any node can be addressed by name alone.

use std::fmt;

use tracing::debug;

use crate::config::{Config, DEFAULT_TREE_CHILD_CAPACITY};
use crate::error::{CityError, Result};
use crate::key;

/// A named node owning its subtree
#[derive(Debug, Clone)]
pub struct TreeNode<T = i32> {
    name: String,
    payload: T,
    children: Vec<TreeNode<T>>,
    /// Logical child slots; doubles when a child is added to a full array
    child_capacity: usize,
}

impl<T> TreeNode<T> {
    fn new(payload: T, name: &str, child_capacity: usize) -> Self {
        Self {
            name: key::canonical(name),
            payload,
            children: Vec::new(),
            child_capacity,
        }
    }

    fn push_child(&mut self, child: TreeNode<T>) {
        if self.children.len() >= self.child_capacity {
            self.child_capacity = self.child_capacity.saturating_mul(2);
        }
        self.children.push(child);
    }

    /// Canonical (uppercase) name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    /// Children in insertion order
    pub fn children(&self) -> &[TreeNode<T>] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Child slots; doubles whenever a child is added to a full array
    pub fn child_capacity(&self) -> usize {
        self.child_capacity
    }

    fn find(&self, canonical: &str) -> Option<&TreeNode<T>> {
        if self.name == canonical {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(canonical))
    }

    fn find_mut(&mut self, canonical: &str) -> Option<&mut TreeNode<T>> {
        if self.name == canonical {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(canonical))
    }

    fn len(&self) -> usize {
        1 + self.children.iter().map(TreeNode::len).sum::<usize>()
    }

    fn depth(&self) -> usize {
        1 + self.children.iter().map(TreeNode::depth).max().unwrap_or(0)
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", self.name, indent = level * 2)?;
        for child in &self.children {
            child.write_outline(f, level + 1)?;
        }
        Ok(())
    }
}

/// N-ary tree with tree-wide unique, case-insensitive node names
#[derive(Debug, Clone)]
pub struct Tree<T = i32> {
    root: Option<TreeNode<T>>,
    child_capacity: usize,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self::with_child_capacity(DEFAULT_TREE_CHILD_CAPACITY)
    }

    /// Tree whose nodes start with `child_capacity` child slots
    pub fn with_child_capacity(child_capacity: usize) -> Self {
        Self {
            root: None,
            child_capacity: child_capacity.max(1),
        }
    }

    /// Tree whose nodes start with `config.tree_child_capacity` child slots
    pub fn from_config(config: &Config) -> Self {
        Self::with_child_capacity(config.tree_child_capacity)
    }

    /// Replace the whole tree with a single root node
    pub fn set_root(&mut self, payload: T, name: &str) {
        let root = TreeNode::new(payload, name, self.child_capacity);
        debug!(name = %root.name, "tree root set");
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_ref()
    }

    /// Add `child` as the last child of `parent`
    ///
    /// An empty tree takes the node as its root whatever `parent` says.
    /// Otherwise the child name must not exist anywhere in the tree and the
    /// parent must.
    pub fn insert(&mut self, parent: &str, payload: T, child: &str) -> Result<()> {
        let child_name = key::canonical(child);
        let parent_name = key::canonical(parent);
        let child_capacity = self.child_capacity;

        let Some(root) = self.root.as_mut() else {
            self.set_root(payload, child);
            return Ok(());
        };

        if root.find(&child_name).is_some() {
            return Err(CityError::DuplicateNode(child_name));
        }

        let parent_node = root
            .find_mut(&parent_name)
            .ok_or(CityError::NodeNotFound(parent_name))?;

        parent_node.push_child(TreeNode::new(payload, &child_name, child_capacity));

        debug!(parent = %parent_node.name, child = %child_name, "tree node added");
        Ok(())
    }

    /// Alias of `insert`
    pub fn add_node(&mut self, parent: &str, payload: T, child: &str) -> Result<()> {
        self.insert(parent, payload, child)
    }

    /// Node with the given name anywhere in the tree (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&TreeNode<T>> {
        self.root.as_ref()?.find(&key::canonical(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut TreeNode<T>> {
        self.root.as_mut()?.find_mut(&key::canonical(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::len)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels (0 for an empty tree)
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::depth)
    }

    /// Pre-order traversal
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self.root.iter().collect(),
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order iterator over tree nodes
pub struct Iter<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl<T> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => root.write_outline(f, 0),
            None => writeln!(f, "Tree is empty"),
        }
    }
}
