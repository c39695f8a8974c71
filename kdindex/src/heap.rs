use std::collections::BinaryHeap;
use std::num::NonZeroUsize;

/// A bounded min heap that maintains at most `capacity` elements.
/// When the heap is full, incoming elements replace the largest element if they are smaller.
/// The largest kept element is always the next to be evicted.
#[derive(Debug)]
pub struct BoundedMinHeap<T: Ord> {
    heap: BinaryHeap<T>,
    capacity: usize,
}

impl<T: Ord> BoundedMinHeap<T> {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity.get()),
            capacity: capacity.get(),
        }
    }

    /// Insert an element into the bounded heap.
    /// If the heap is at capacity and the new element is smaller than the largest,
    /// the largest element is removed and the new element is added.
    /// Returns whether the element was kept.
    pub fn push(&mut self, item: T) -> bool {
        if self.heap.len() < self.capacity {
            self.heap.push(item);
            return true;
        }
        match self.heap.peek_mut() {
            Some(mut largest) if item < *largest => {
                *largest = item;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// The current worst (largest) element
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop()
    }

    /// Convert the bounded heap into a Vec, consuming the heap.
    /// Elements are returned in ascending order (smallest first).
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }

    /// Get an iterator over the heap elements (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.heap.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_the_smallest_elements() {
        let mut heap = BoundedMinHeap::new(NonZeroUsize::new(3).unwrap());
        for value in [9, 4, 7, 1, 8, 3] {
            heap.push(value);
        }
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some(&4));
        assert_eq!(heap.into_sorted_vec(), vec![1, 3, 4]);
    }

    #[test]
    fn equal_to_worst_is_not_kept() {
        let mut heap = BoundedMinHeap::new(NonZeroUsize::new(2).unwrap());
        assert!(heap.push(5));
        assert!(heap.push(2));
        assert!(heap.is_full());
        assert!(!heap.push(5));
        assert!(heap.push(4));
        assert_eq!(heap.iter().copied().max(), Some(4));
        assert_eq!(heap.pop(), Some(4));
        assert_eq!(heap.pop(), Some(2));
        assert!(heap.is_empty());
    }
}
