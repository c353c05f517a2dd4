//! Updatable priority queue with lazy deletion.
//!
//! Entries live in an arena of slots indexed by insertion sequence. The heap
//! holds only `(priority, sequence)` keys; removing or re-prioritizing a task
//! empties its slot (a tombstone) and the stale key is discarded when it
//! reaches the top of the heap.
//!
//! The arena gains one slot per `add`, relaxations included. When it holds
//! more than twice the live count (plus [`COMPACT_FLOOR`]) it is rebuilt from
//! the live entries, renumbering sequences in their existing order so pop
//! order and tie-breaks are unchanged. Arena and heap size stay O(live).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::error::FrontierError;

/// Arena slack tolerated before compaction.
pub const COMPACT_FLOOR: usize = 64;

/// Heap ordering key: lower priority first, then older sequence.
///
/// Field order matters: the derived `Ord` compares `priority` before
/// `sequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct EntryKey<P> {
    priority: P,
    sequence: usize,
}

/// A task → priority map supporting decrease-key and arbitrary removal.
///
/// `pop` returns the live task with the lowest priority; ties go to the
/// task inserted (or last re-added) earliest. `len`, `is_empty` and
/// `contains` count live tasks only, never tombstones.
#[derive(Debug)]
pub struct UpdatablePriorityQueue<T, P> {
    heap: BinaryHeap<Reverse<EntryKey<P>>>,
    slots: Vec<Option<T>>,
    index: HashMap<T, EntryKey<P>>,
    high_water: usize,
}

impl<T, P> UpdatablePriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: Ord + Copy,
{
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            slots: Vec::new(),
            index: HashMap::new(),
            high_water: 0,
        }
    }

    /// Insert `task`, or replace its priority if already present.
    ///
    /// Replacing tombstones the old entry and moves the task to the back of
    /// its priority class.
    pub fn add(&mut self, task: T, priority: P) {
        if let Some(old) = self.index.remove(&task) {
            self.tombstone(old.sequence);
        }
        let key = EntryKey {
            priority,
            sequence: self.slots.len(),
        };
        self.slots.push(Some(task.clone()));
        self.index.insert(task, key);
        self.heap.push(Reverse(key));
        self.high_water = self.high_water.max(self.index.len());

        if self.slots.len() > 2 * self.index.len() + COMPACT_FLOOR {
            self.compact();
        }
    }

    /// Logically delete `task`, returning the priority it had.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::NotFound`] if `task` is not live.
    pub fn remove(&mut self, task: &T) -> Result<P, FrontierError> {
        let key = self.index.remove(task).ok_or(FrontierError::NotFound)?;
        self.tombstone(key.sequence);
        Ok(key.priority)
    }

    /// Current priority of `task`.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::NotFound`] if `task` is not live.
    pub fn get(&self, task: &T) -> Result<P, FrontierError> {
        self.index
            .get(task)
            .map(|key| key.priority)
            .ok_or(FrontierError::NotFound)
    }

    /// Remove and return the lowest-priority live task with its priority.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::Empty`] if no live task remains.
    pub fn pop(&mut self) -> Result<(T, P), FrontierError> {
        while let Some(Reverse(key)) = self.heap.pop() {
            let live = self.slots.get_mut(key.sequence).and_then(Option::take);
            if let Some(task) = live {
                self.index.remove(&task);
                if self.heap.is_empty() {
                    self.slots.clear();
                }
                return Ok((task, key.priority));
            }
        }
        self.slots.clear();
        Err(FrontierError::Empty)
    }

    /// Whether `task` is live in the queue.
    #[must_use]
    pub fn contains(&self, task: &T) -> bool {
        self.index.contains_key(task)
    }

    /// Number of live tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether no live task remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Dead entries still held by the heap.
    #[must_use]
    pub fn tombstones(&self) -> usize {
        self.heap.len() - self.index.len()
    }

    /// High-water mark of the live size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Live `(task, priority)` pairs in the order `pop` would return them.
    #[must_use]
    pub fn entries_in_order(&self) -> Vec<(&T, P)> {
        let mut entries: Vec<(&T, EntryKey<P>)> =
            self.index.iter().map(|(task, key)| (task, *key)).collect();
        entries.sort_by_key(|&(_, key)| key);
        entries
            .into_iter()
            .map(|(task, key)| (task, key.priority))
            .collect()
    }

    /// Drop tombstones and renumber live entries `0..len` in key order.
    fn compact(&mut self) {
        let mut live: Vec<(EntryKey<P>, T)> = self
            .index
            .iter()
            .map(|(task, key)| (*key, task.clone()))
            .collect();
        live.sort_by_key(|&(key, _)| key);

        self.heap.clear();
        self.slots.clear();
        for (sequence, (old, task)) in live.into_iter().enumerate() {
            let key = EntryKey {
                priority: old.priority,
                sequence,
            };
            self.slots.push(Some(task.clone()));
            self.index.insert(task, key);
            self.heap.push(Reverse(key));
        }
    }

    fn tombstone(&mut self, sequence: usize) {
        if let Some(slot) = self.slots.get_mut(sequence) {
            *slot = None;
        }
    }
}

impl<T, P> Default for UpdatablePriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
