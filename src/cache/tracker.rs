//! Order Tracker Module
//!
//! Ordered key sequence backing the FIFO, LRU and MRU eviction policies.
//!
//! Keys are held in a doubly-linked list over a slab of nodes, with a
//! HashMap from key to slot index:
//! - Front = oldest / least recently used
//! - Back = newest / most recently used
//!
//! All mutations (push, move-to-back, pop, remove) are O(1); the naive
//! alternative of a plain Vec with search-and-remove is O(n) per touch.

use std::collections::HashMap;

// == List Node ==
/// A single key in the tracked sequence.
#[derive(Debug)]
struct Node {
    key: String,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Order Tracker ==
/// Tracks the relative order of cache keys.
///
/// The sequence imposes a strict total order, so victim selection never
/// has to break a tie.
#[derive(Debug, Default)]
pub struct OrderTracker {
    /// Slab of nodes; freed slots are recycled via `free_list`
    nodes: Vec<Option<Node>>,
    /// Key -> slot index for O(1) lookup
    index: HashMap<String, usize>,
    /// Front of the sequence (oldest)
    head: Option<usize>,
    /// Back of the sequence (newest)
    tail: Option<usize>,
    /// Recycled slot indices
    free_list: Vec<usize>,
}

impl OrderTracker {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push Back ==
    /// Appends a key at the back (newest position).
    ///
    /// The key must not already be tracked; pushing a duplicate would
    /// corrupt the index, so it is rejected in debug builds.
    pub fn push_back(&mut self, key: &str) {
        debug_assert!(
            !self.index.contains_key(key),
            "key pushed twice: {key}"
        );

        let idx = self.alloc_node(key);
        self.link_back(idx);
        self.index.insert(key.to_string(), idx);
    }

    // == Move To Back ==
    /// Moves an already-tracked key to the back (newest position).
    ///
    /// Returns false if the key is not tracked.
    pub fn move_to_back(&mut self, key: &str) -> bool {
        let Some(&idx) = self.index.get(key) else {
            return false;
        };

        if self.tail != Some(idx) {
            self.unlink(idx);
            self.link_back(idx);
        }
        true
    }

    // == Pop Front ==
    /// Removes and returns the key at the front (oldest position).
    pub fn pop_front(&mut self) -> Option<String> {
        let idx = self.head?;
        Some(self.take(idx))
    }

    // == Pop Back ==
    /// Removes and returns the key at the back (newest position).
    pub fn pop_back(&mut self) -> Option<String> {
        let idx = self.tail?;
        Some(self.take(idx))
    }

    // == Remove ==
    /// Removes a key from the tracker, wherever it sits.
    ///
    /// Returns false if the key is not tracked.
    pub fn remove(&mut self, key: &str) -> bool {
        let Some(&idx) = self.index.get(key) else {
            return false;
        };
        self.take(idx);
        true
    }

    // == Peek Front ==
    /// Returns the oldest key without removing it.
    pub fn front(&self) -> Option<&str> {
        let idx = self.head?;
        self.nodes[idx].as_ref().map(|n| n.key.as_str())
    }

    // == Peek Back ==
    /// Returns the newest key without removing it.
    pub fn back(&self) -> Option<&str> {
        let idx = self.tail?;
        self.nodes[idx].as_ref().map(|n| n.key.as_str())
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    /// Returns true if no keys are tracked.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Keys ==
    /// Returns the tracked keys, front (oldest) to back (newest).
    ///
    /// Walks the list, so this is O(n); intended for diagnostics and
    /// invariant checks, not the hot path.
    pub fn keys(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.index.len());
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            if let Some(node) = self.nodes[idx].as_ref() {
                out.push(node.key.clone());
                cursor = node.next;
            } else {
                break;
            }
        }
        out
    }

    // == Internal: Slab Allocation ==
    fn alloc_node(&mut self, key: &str) -> usize {
        let node = Node {
            key: key.to_string(),
            prev: None,
            next: None,
        };
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx] = Some(node);
            idx
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }

    // == Internal: Link At Tail ==
    fn link_back(&mut self, idx: usize) {
        if let Some(node) = self.nodes[idx].as_mut() {
            node.prev = self.tail;
            node.next = None;
        }

        if let Some(tail_idx) = self.tail {
            if let Some(tail) = self.nodes[tail_idx].as_mut() {
                tail.next = Some(idx);
            }
        }

        self.tail = Some(idx);
        if self.head.is_none() {
            self.head = Some(idx);
        }
    }

    // == Internal: Unlink ==
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.nodes[idx].as_ref() {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = self.nodes[prev_idx].as_mut() {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = self.nodes[next_idx].as_mut() {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    // == Internal: Detach And Free ==
    fn take(&mut self, idx: usize) -> String {
        self.unlink(idx);
        self.free_list.push(idx);
        let node = self.nodes[idx].take().expect("tracker slot occupied");
        self.index.remove(&node.key);
        node.key
    }
}
