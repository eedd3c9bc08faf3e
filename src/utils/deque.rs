use alloc::boxed::Box;

/// A fixed-capacity double-ended queue over a circular buffer
///
/// Backs the monotonic queue: entries enter at the back and leave from either
/// end. Pushing into a full deque overwrites the front element. Vacant slots
/// hold the `fill` value given at construction.
#[derive(Debug, Clone)]
pub struct Deque<T> {
    /// Heap-allocated storage of `cap` slots
    buf: Box<[T]>,
    /// Number of slots
    cap: usize,
    /// Slot of the front element
    front: usize,
    /// Slot one past the back element
    back: usize,
    /// Number of occupied slots
    len: usize,
}

impl<T: Copy> Deque<T> {
    /// Creates an empty deque with room for `cap` elements.
    ///
    /// # Panics
    ///
    /// Panics if `cap` is zero.
    #[inline]
    pub fn new(cap: usize, fill: T) -> Self {
        assert!(cap > 0, "capacity must be > 0");
        Self {
            buf: vec![fill; cap].into_boxed_slice(),
            cap,
            front: 0,
            back: 0,
            len: 0,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == self.cap
    }

    #[inline]
    #[allow(dead_code)]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Empties the deque
    #[inline]
    pub fn reset(&mut self) -> &mut Self {
        self.front = 0;
        self.back = 0;
        self.len = 0;
        self
    }

    #[inline]
    const fn last_slot(&self) -> usize {
        if self.back == 0 {
            self.cap - 1
        } else {
            self.back - 1
        }
    }

    /// Appends `value` at the back
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The front element that was overwritten when the deque was full
    #[inline]
    pub fn push_back(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() {
            self.front = (self.front + 1) % self.cap;
            Some(core::mem::replace(&mut self.buf[self.back], value))
        } else {
            self.buf[self.back] = value;
            self.len += 1;
            None
        };
        self.back = (self.back + 1) % self.cap;
        evicted
    }

    /// Removes and returns the back element, if any
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.back = self.last_slot();
        self.len -= 1;
        Some(self.buf[self.back])
    }

    /// Removes and returns the front element, if any
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.buf[self.front];
        self.front = (self.front + 1) % self.cap;
        self.len -= 1;
        Some(value)
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(&self.buf[self.front])
        }
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(&self.buf[self.last_slot()])
        }
    }
}
