/*
Array-backed binary min-heap keyed by tentative distance.

Entries are immutable once pushed and there is no decrease-key: when a
vertex's distance improves, a fresh entry is pushed and the stale one is
left in place for the caller to discard when it surfaces at the root
(lazy deletion). The heap may therefore hold several entries for the
same vertex at once.

Order invariant: for every non-root slot i, a[i].priority >= a[(i-1)/2].priority.
Growth is the backing Vec's amortized doubling.
*/

use crate::graph::{Vertex, Weight};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub vertex: Vertex,
    pub priority: Weight,
}

#[derive(Debug)]
pub struct MinHeap {
    entries: Vec<HeapEntry>,
}

impl MinHeap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append `entry` and sift it up while it is strictly cheaper than its
    /// parent, shifting parents down into the hole it leaves behind.
    pub fn push(&mut self, entry: HeapEntry) {
        self.entries.push(entry);
        let mut i = self.entries.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if entry.priority >= self.entries[parent].priority {
                break;
            }
            self.entries[i] = self.entries[parent];
            i = parent;
        }
        self.entries[i] = entry;
    }

    /// Remove and return the cheapest entry, or `None` if the heap is empty.
    ///
    /// The last element takes the root's place and sifts down against the
    /// smaller of the two children at each level, stopping as soon as it is
    /// not greater. When both children share a priority the left child wins
    /// the comparison, so the pop order is fully deterministic.
    pub fn pop_min(&mut self) -> Option<HeapEntry> {
        let last = self.entries.pop()?;
        if self.entries.is_empty() {
            return Some(last);
        }
        let min = std::mem::replace(&mut self.entries[0], last);
        self.sift_down(0);
        Some(min)
    }

    fn sift_down(&mut self, mut i: usize) {
        let moved = self.entries[i];
        let len = self.entries.len();
        loop {
            let mut child = 2 * i + 1;
            if child >= len {
                break;
            }
            if child + 1 < len
                && self.entries[child + 1].priority < self.entries[child].priority
            {
                child += 1;
            }
            if moved.priority <= self.entries[child].priority {
                break;
            }
            self.entries[i] = self.entries[child];
            i = child;
        }
        self.entries[i] = moved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orx_priority_queue::*;

    fn entry(vertex: Vertex, priority: Weight) -> HeapEntry {
        HeapEntry { vertex, priority }
    }

    fn assert_heap_order(heap: &MinHeap) {
        for i in 1..heap.entries.len() {
            let parent = (i - 1) / 2;
            assert!(
                heap.entries[parent].priority <= heap.entries[i].priority,
                "order violated at slot {}: parent {} > child {}",
                i,
                heap.entries[parent].priority,
                heap.entries[i].priority
            );
        }
    }

    #[test]
    fn pops_in_priority_order() {
        let mut heap = MinHeap::new();
        for (v, p) in [(0, 9), (1, 3), (2, 7), (3, 1), (4, 5)] {
            heap.push(entry(v, p));
            assert_heap_order(&heap);
        }

        let mut popped = Vec::new();
        while let Some(e) = heap.pop_min() {
            assert_heap_order(&heap);
            popped.push(e.priority);
        }
        assert_eq!(popped, vec![1, 3, 5, 7, 9]);
        assert!(heap.is_empty());
    }

    #[test]
    fn pop_from_empty_returns_none() {
        let mut heap = MinHeap::new();
        assert!(heap.pop_min().is_none());
        heap.push(entry(0, 1));
        assert_eq!(heap.pop_min(), Some(entry(0, 1)));
        assert!(heap.pop_min().is_none());
    }

    #[test]
    fn duplicate_vertices_pop_cheapest_first() {
        // Lazy deletion: the same vertex may be queued several times.
        let mut heap = MinHeap::new();
        heap.push(entry(4, 8));
        heap.push(entry(4, 2));
        heap.push(entry(4, 5));

        assert_eq!(heap.pop_min(), Some(entry(4, 2)));
        assert_eq!(heap.pop_min(), Some(entry(4, 5)));
        assert_eq!(heap.pop_min(), Some(entry(4, 8)));
    }

    #[test]
    fn matches_reference_queue_under_interleaved_ops() {
        let mut heap = MinHeap::new();
        let mut reference: BinaryHeap<Vertex, Weight> = BinaryHeap::new();

        // Deterministic pseudo-random mix of pushes and pops.
        let mut x: u64 = 7;
        for step in 0..500 {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            if step % 3 == 2 && !heap.is_empty() {
                let ours = heap.pop_min().unwrap();
                let (_, theirs) = reference.pop().unwrap();
                assert_eq!(ours.priority, theirs);
            } else {
                let priority = x % 100;
                heap.push(entry(step, priority));
                reference.push(step, priority);
            }
            assert_heap_order(&heap);
            assert_eq!(heap.len(), reference.len());
        }

        let mut previous = 0;
        while let Some(e) = heap.pop_min() {
            let (_, theirs) = reference.pop().unwrap();
            assert_eq!(e.priority, theirs);
            assert!(e.priority >= previous);
            previous = e.priority;
        }
        assert!(reference.is_empty());
    }

    #[test]
    fn growth_from_zero_capacity_keeps_every_entry() {
        // Start with no backing storage and force repeated doubling.
        let mut heap = MinHeap::with_capacity(0);
        for v in 0..1000 {
            heap.push(entry(v, (v as Weight * 37) % 101));
            assert_heap_order(&heap);
        }
        assert_eq!(heap.len(), 1000);

        let mut popped: Vec<Vertex> = Vec::new();
        let mut previous = 0;
        while let Some(e) = heap.pop_min() {
            assert!(e.priority >= previous);
            previous = e.priority;
            popped.push(e.vertex);
        }
        popped.sort_unstable();
        assert_eq!(popped, (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn tie_break_is_deterministic() {
        let push_and_drain = || {
            let mut heap = MinHeap::new();
            for (v, p) in [(0, 5), (1, 5), (2, 3), (3, 5), (4, 3), (5, 1)] {
                heap.push(entry(v, p));
            }
            let mut order = Vec::new();
            while let Some(e) = heap.pop_min() {
                order.push(e);
            }
            order
        };

        assert_eq!(push_and_drain(), push_and_drain());
    }
}
