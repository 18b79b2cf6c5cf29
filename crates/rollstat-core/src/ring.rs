//! Generic fixed-capacity circular buffer.
//!
//! The [`RingBuffer`] type stores the most recent `capacity` items of a
//! stream with FIFO semantics: once full, each insertion evicts the oldest
//! item in O(1).

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{Result, WindowError};

/// A fixed-capacity circular buffer with overwrite-on-full semantics.
///
/// `RingBuffer` keeps a sliding window over a stream of items:
///
/// - `push` is O(1) and never fails; on a full buffer it evicts (and
///   returns) the oldest item
/// - logical index 0 is always the oldest live item
/// - traversal via [`iter`](RingBuffer::iter) is ordered oldest to newest
///   and never mutates the buffer
///
/// Slots are cleared when items are removed, so no stale values are
/// retained beyond their logical lifetime.
///
/// # Example
///
/// ```rust
/// use rollstat_core::RingBuffer;
///
/// let mut buffer: RingBuffer<f64> = RingBuffer::new(3)?;
///
/// buffer.push(1.0);
/// buffer.push(2.0);
/// buffer.push(3.0);
/// assert!(buffer.is_full());
///
/// buffer.push(4.0); // evicts 1.0
/// assert_eq!(buffer.to_vec(), vec![2.0, 3.0, 4.0]);
/// # Ok::<(), rollstat_core::WindowError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    /// Slot storage; `None` marks an empty slot.
    storage: Vec<Option<T>>,
    /// Physical index of the next write.
    head: usize,
    /// Physical index of the oldest live item.
    tail: usize,
    /// Number of live items, `0 <= len <= capacity`.
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Create a new ring buffer with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(WindowError::InvalidCapacity(capacity));
        }
        Ok(Self {
            storage: (0..capacity).map(|_| None).collect(),
            head: 0,
            tail: 0,
            len: 0,
        })
    }

    /// Push an item into the buffer.
    ///
    /// If the buffer is full, the oldest item is evicted and returned;
    /// otherwise returns `None`. Always O(1).
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.is_full() {
            // head == tail when full; the slot being written over holds
            // the oldest item.
            let old = self.storage[self.tail].take();
            self.tail = (self.tail + 1) % self.capacity();
            old
        } else {
            self.len += 1;
            None
        };

        self.storage[self.head] = Some(item);
        self.head = (self.head + 1) % self.capacity();
        evicted
    }

    /// Remove and return the oldest item, or `None` if empty.
    ///
    /// The vacated slot is cleared. O(1).
    pub fn pop_oldest(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.storage[self.tail].take();
        self.tail = (self.tail + 1) % self.capacity();
        self.len -= 1;
        item
    }

    /// Get an item by logical index (0 = oldest).
    ///
    /// Returns `None` if `index` is outside `[0, len)`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let physical = (self.tail + index) % self.capacity();
        self.storage[physical].as_ref()
    }

    /// Get the oldest item in the buffer, or `None` if empty.
    #[must_use]
    pub fn oldest(&self) -> Option<&T> {
        self.get(0)
    }

    /// Get the newest item in the buffer, or `None` if empty.
    #[must_use]
    pub fn newest(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.get(self.len - 1)
    }

    /// Returns the number of live items in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the capacity of the buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the buffer holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the buffer is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Remove all items from the buffer.
    ///
    /// Every slot is cleared so held values are dropped, not merely hidden.
    pub fn clear(&mut self) {
        for slot in &mut self.storage {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Returns an iterator over the items from oldest to newest.
    ///
    /// Combined with the standard `Iterator` adapters this provides ordered
    /// traversal and transformation (`for_each`, `map`, `filter`, `fold`)
    /// without mutating the buffer.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        RingBufferIter {
            buffer: self,
            index: 0,
        }
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Copy the live items into a newly allocated `Vec`, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

/// Iterator over ring buffer items.
struct RingBufferIter<'a, T> {
    buffer: &'a RingBuffer<T>,
    index: usize,
}

impl<'a, T> Iterator for RingBufferIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index);
        if item.is_some() {
            self.index += 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for RingBufferIter<'a, T> {}
