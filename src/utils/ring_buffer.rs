use alloc::{boxed::Box, vec::Vec};

use num_traits::Zero;

/// A fixed-size circular buffer holding the values of the current window.
///
/// Once full, every push overwrites the oldest value and hands it back so the
/// caller can retract it from any running aggregate.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Heap-allocated storage, fixed at construction
    data: Box<[T]>,
    /// Slot of the oldest value
    index: usize,
    /// Number of values stored, at most `data.len()`
    len: usize,
}

impl<T: Zero + Copy> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        let mut vec = Vec::with_capacity(capacity);
        vec.resize(capacity, T::zero());
        Self {
            data: vec.into_boxed_slice(),
            index: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Stores `value`, returning the value it displaced once the buffer is full.
    pub fn push(&mut self, value: T) -> Option<T> {
        let cap = self.capacity();

        if self.is_full() {
            let evicted = core::mem::replace(&mut self.data[self.index], value);
            self.index = (self.index + 1) % cap;
            Some(evicted)
        } else {
            self.data[(self.index + self.len) % cap] = value;
            self.len += 1;
            None
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.len = 0;
        self.data.fill(T::zero());
    }

    /// Iterates from the oldest to the newest value
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).map(move |i| &self.data[(self.index + i) % self.capacity()])
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::RingBuffer;

    #[test]
    fn test_new_and_capacity() {
        let buf: RingBuffer<f64> = RingBuffer::new(4);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.len(), 0);
        assert!(!buf.is_full());
    }

    #[test]
    fn test_push_until_full() {
        let mut buf = RingBuffer::new(3);
        assert_eq!(buf.push(10), None);
        assert_eq!(buf.push(20), None);
        assert!(!buf.is_full());
        assert_eq!(buf.push(30), None);
        assert!(buf.is_full());
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_push_returns_evicted_in_order() {
        let mut buf = RingBuffer::new(3);
        buf.push(1);
        buf.push(2);
        buf.push(3);

        assert_eq!(buf.push(4), Some(1));
        assert_eq!(buf.push(5), Some(2));
        assert_eq!(buf.push(6), Some(3));
        assert_eq!(buf.push(7), Some(4));
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![5, 6, 7]);
    }

    #[test]
    fn test_evicts_nan() {
        let mut buf = RingBuffer::new(1);
        buf.push(f64::NAN);
        assert!(buf.push(2.0).is_some_and(f64::is_nan));
    }

    #[test]
    fn test_iter_oldest_first() {
        let mut buf = RingBuffer::new(3);
        buf.push(5);
        buf.push(6);
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![5, 6]);

        buf.push(7);
        buf.push(8);
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![6, 7, 8]);
    }

    #[test]
    fn test_reset() {
        let mut buf = RingBuffer::new(3);
        buf.push(1);
        buf.push(2);
        buf.push(3);
        buf.push(4);
        buf.reset();

        assert_eq!(buf.len(), 0);
        assert_eq!(buf.index, 0);
        assert!(buf.data.iter().all(|&v| v == 0));

        buf.push(42);
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![42]);
    }
}
