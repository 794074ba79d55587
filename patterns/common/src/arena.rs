//! # Arena-Backed Linked Lists
//!
//! Singly linked lists whose nodes live in a contiguous `Vec` and point at
//! each other through [`NodeId`] indices instead of `Rc<RefCell<_>>`.
//!
//! ## Benefits
//!
//! - Splicing and reversal are plain index writes
//! - Cycles are easy: just store an earlier index
//! - Several lists can share a tail, because they share one arena
//!
//! Nodes are never freed. A node spliced out of a list stays in the arena but
//! is no longer reachable from the head.
//!
//! ## Example
//!
//! ```
//! use patterns_common::arena::NodeArena;
//!
//! let mut arena = NodeArena::new();
//! let head = arena.push_list(&[1, 2, 3]);
//!
//! assert_eq!(arena.values(head).unwrap(), vec![1, 2, 3]);
//!
//! // Tail -> node 1 turns the list into a loop
//! arena.make_cycle(head, 1).unwrap();
//! assert!(arena.values(head).is_err());
//! ```

use std::ops::{Index, IndexMut};

use crate::error::{PatternError, Result};

/// A typed index into a [`NodeArena`].
///
/// Ids are only meaningful for the arena that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw slot index of this node.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A singly linked list node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub val: i32,
    pub next: Option<NodeId>,
}

/// Append-only storage for [`ListNode`]s.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<ListNode>,
}

impl NodeArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes ever allocated, reachable or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocates a detached node and returns its id.
    pub fn alloc(&mut self, val: i32) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ListNode { val, next: None });
        id
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different, larger arena.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &ListNode {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn val(&self, id: NodeId) -> i32 {
        self.nodes[id.0].val
    }

    #[must_use]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next
    }

    /// Re-points the successor of `id`.
    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        self.nodes[id.0].next = next;
    }

    /// Allocates a chain holding `values` in order and returns its head.
    ///
    /// An empty slice yields `None`, the empty list.
    pub fn push_list(&mut self, values: &[i32]) -> Option<NodeId> {
        self.nodes.reserve(values.len());
        let mut head = None;
        for &val in values.iter().rev() {
            let id = self.alloc(val);
            self.set_next(id, head);
            head = Some(id);
        }
        head
    }

    /// Iterates node ids starting at `head`.
    ///
    /// The iterator does not stop on a cyclic list; bound it with `take`.
    pub fn walk(&self, head: Option<NodeId>) -> Walk<'_> {
        Walk {
            arena: self,
            cursor: head,
        }
    }

    /// Collects the values reachable from `head`.
    ///
    /// Fails with [`PatternError::CycleDetected`] once the walk has visited
    /// more nodes than exist, which can only happen on a loop.
    pub fn values(&self, head: Option<NodeId>) -> Result<Vec<i32>> {
        let mut out = Vec::new();
        for id in self.walk(head) {
            if out.len() == self.nodes.len() {
                return Err(PatternError::CycleDetected { visited: out.len() });
            }
            out.push(self.val(id));
        }
        Ok(out)
    }

    /// Length of the list starting at `head`.
    pub fn list_len(&self, head: Option<NodeId>) -> Result<usize> {
        let mut len = 0;
        for _ in self.walk(head) {
            if len == self.nodes.len() {
                return Err(PatternError::CycleDetected { visited: len });
            }
            len += 1;
        }
        Ok(len)
    }

    /// The `k`-th node (0-based) of the list, if it has one.
    #[must_use]
    pub fn nth(&self, head: Option<NodeId>, k: usize) -> Option<NodeId> {
        self.walk(head).take(self.nodes.len()).nth(k)
    }

    /// The final node of an acyclic list. `None` for empty or cyclic lists.
    #[must_use]
    pub fn last(&self, head: Option<NodeId>) -> Option<NodeId> {
        let mut cursor = head?;
        for _ in 0..self.nodes.len() {
            match self.next(cursor) {
                None => return Some(cursor),
                Some(next) => cursor = next,
            }
        }
        None
    }

    /// Points the tail of the list back at its `pos`-th node, closing a loop.
    pub fn make_cycle(&mut self, head: Option<NodeId>, pos: usize) -> Result<()> {
        let len = self.list_len(head)?;
        let target = self
            .nth(head, pos)
            .ok_or(PatternError::NodeOutOfRange { pos, len })?;
        // Non-empty and acyclic, so the tail exists.
        if let Some(tail) = self.last(head) {
            self.set_next(tail, Some(target));
        }
        Ok(())
    }

    /// Links `shared` after the tail of `head` and returns the joined head.
    ///
    /// Used to build two lists that merge into a common suffix.
    pub fn append(
        &mut self,
        head: Option<NodeId>,
        shared: Option<NodeId>,
    ) -> Result<Option<NodeId>> {
        self.list_len(head)?;
        match self.last(head) {
            None => Ok(shared),
            Some(tail) => {
                self.set_next(tail, shared);
                Ok(head)
            }
        }
    }
}

impl Index<NodeId> for NodeArena {
    type Output = ListNode;

    fn index(&self, id: NodeId) -> &ListNode {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut ListNode {
        &mut self.nodes[id.0]
    }
}

/// Iterator over the node ids of a list. See [`NodeArena::walk`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    arena: &'a NodeArena,
    cursor: Option<NodeId>,
}

impl Iterator for Walk<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.cursor?;
        self.cursor = self.arena.next(id);
        Some(id)
    }
}
