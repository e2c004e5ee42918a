//! Min-priority queue with decrease-key.
//!
//! Re-prioritising a task pushes a fresh heap entry and tombstones the old
//! one; tombstoned entries are dropped lazily when they reach the top. There
//! is never more than one live entry per task.
//!
//! ```rust
//! use aoc_solutions::utils::priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.push("A", 10);
//! queue.push("B", 5);
//! queue.set_priority("A", 1);
//!
//! assert_eq!(queue.pop().unwrap(), (1, "A"));
//! assert_eq!(queue.pop().unwrap(), (5, "B"));
//! assert!(queue.pop().is_err());
//! ```

use std::cmp::{Ordering, Reverse};
use std::collections::hash_map::Entry as MapEntry;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("pop from an empty priority queue")]
    Empty,
}

/// Heap entry; ordered by priority, then by insertion id
#[derive(Debug, Clone)]
struct Entry<T, P> {
    priority: P,
    id: u64,
    task: T,
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.id.cmp(&other.id))
    }
}

/// A min-heap of tasks keyed by priority
///
/// Priorities are any `Ord` value; tuples give lexicographic tie-breaking.
/// Ties that the priority does not break pop in insertion order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P> {
    heap: BinaryHeap<Reverse<Entry<T, P>>>,
    /// task -> (live entry id, its priority)
    live: HashMap<T, (u64, P)>,
    tombstones: HashSet<u64>,
    next_id: u64,
}

impl<T, P> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            tombstones: HashSet::new(),
            next_id: 0,
        }
    }
}

impl<T, P> PriorityQueue<T, P>
where
    T: Hash + Eq + Clone,
    P: Ord + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `task`; a task that is already queued is re-prioritised instead
    pub fn push(&mut self, task: T, priority: P) {
        self.set_priority(task, priority);
    }

    /// Give `task` a new priority, inserting it if absent
    pub fn set_priority(&mut self, task: T, priority: P) {
        let id = self.next_id;
        self.next_id += 1;

        match self.live.entry(task.clone()) {
            MapEntry::Occupied(mut occupied) => {
                let (old_id, _) = occupied.insert((id, priority.clone()));
                self.tombstones.insert(old_id);
            }
            MapEntry::Vacant(vacant) => {
                vacant.insert((id, priority.clone()));
            }
        }

        self.heap.push(Reverse(Entry { priority, id, task }));
    }

    /// Lower `task`'s priority if `priority` beats the current one, or insert it.
    ///
    /// Returns whether the queue changed. This is the relaxation step of
    /// Dijkstra-style searches.
    pub fn push_or_decrease(&mut self, task: T, priority: P) -> bool {
        match self.live.get(&task) {
            Some((_, current)) if *current <= priority => false,
            _ => {
                self.set_priority(task, priority);
                true
            }
        }
    }

    /// Remove and return the live entry with the smallest priority
    pub fn pop(&mut self) -> Result<(P, T), QueueError> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.tombstones.remove(&entry.id) {
                continue;
            }
            self.live.remove(&entry.task);
            return Ok((entry.priority, entry.task));
        }
        Err(QueueError::Empty)
    }

    /// The live entry that [`PriorityQueue::pop`] would return
    pub fn peek(&mut self) -> Option<(&P, &T)> {
        while let Some(Reverse(top)) = self.heap.peek() {
            if !self.tombstones.contains(&top.id) {
                break;
            }
            let id = top.id;
            self.heap.pop();
            self.tombstones.remove(&id);
        }
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.priority, &entry.task))
    }

    /// Drop `task` from the queue; returns its priority if it was queued
    pub fn remove(&mut self, task: &T) -> Option<P> {
        let (id, priority) = self.live.remove(task)?;
        self.tombstones.insert(id);
        Some(priority)
    }

    pub fn has_task(&self, task: &T) -> bool {
        self.live.contains_key(task)
    }

    pub fn priority(&self, task: &T) -> Option<&P> {
        self.live.get(task).map(|(_, priority)| priority)
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
