use core::marker::PhantomData;

use num_traits::Zero;

use super::Deque;

/// Decides which entries a new value makes obsolete
pub trait OrderPolicy<T> {
    /// Returns true if `existing` can never again be the window extremum
    /// once `new` has entered the window
    fn should_remove(existing: &T, new: &T) -> bool;
}

/// Order policy for the rolling minimum
#[derive(Debug, Clone)]
pub struct Min;

/// Order policy for the rolling maximum
#[derive(Debug, Clone)]
pub struct Max;

impl<T: PartialOrd> OrderPolicy<T> for Min {
    #[inline]
    fn should_remove(existing: &T, new: &T) -> bool {
        existing > new
    }
}

impl<T: PartialOrd> OrderPolicy<T> for Max {
    #[inline]
    fn should_remove(existing: &T, new: &T) -> bool {
        existing < new
    }
}

// (value, position)
type Entry<T> = (T, usize);

/// Sliding-window monotonic queue
///
/// Entries are kept in the order the policy `O` dictates, so the front is
/// always the extremum of the values currently inside the window. Every
/// position in the stream is either pushed with a value or skipped; skipped
/// positions occupy a slot of the window without ever entering the deque.
#[derive(Debug, Clone)]
pub struct MonotonicQueue<T, O> {
    deque: Deque<Entry<T>>,
    /// Positions consumed so far, pushed or skipped
    element_count: usize,
    /// Most recent skipped position
    last_skipped: Option<usize>,
    _order: PhantomData<O>,
}

impl<T, O> MonotonicQueue<T, O>
where
    T: PartialOrd + Copy + Zero,
    O: OrderPolicy<T>,
{
    /// Creates an empty queue over a window of `window_size` positions.
    ///
    /// # Panics
    ///
    /// Panics if `window_size` is zero.
    #[inline]
    pub fn new(window_size: usize) -> Self {
        Self {
            deque: Deque::new(window_size, (T::zero(), 0)),
            element_count: 0,
            last_skipped: None,
            _order: PhantomData,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.deque.capacity()
    }

    /// Returns true once a full window of positions has been consumed
    #[inline]
    pub fn has_complete_window(&self) -> bool {
        self.element_count >= self.capacity()
    }

    /// Returns true if a skipped position lies inside the current window
    #[inline]
    pub fn window_has_skipped(&self) -> bool {
        self.last_skipped
            .is_some_and(|pos| pos + self.capacity() >= self.element_count)
    }

    /// Returns true if `pos` leaves the window when the next position arrives
    #[inline]
    fn is_position_outside_window(&self, pos: usize) -> bool {
        if !self.has_complete_window() {
            return false;
        }
        pos <= self.element_count - self.capacity()
    }

    #[inline]
    fn remove_expired_elements(&mut self) {
        while let Some(&(_, pos)) = self.deque.front() {
            if self.is_position_outside_window(pos) {
                self.deque.pop_front();
            } else {
                break;
            }
        }
    }

    #[inline]
    fn maintain_monotonic_property(&mut self, value: T) {
        while let Some(&(existing, _)) = self.deque.back() {
            if O::should_remove(&existing, &value) {
                self.deque.pop_back();
            } else {
                break;
            }
        }
    }

    /// Consumes the next position with `value`
    #[inline]
    pub fn push(&mut self, value: T) {
        self.remove_expired_elements();
        self.maintain_monotonic_property(value);
        self.deque.push_back((value, self.element_count));
        self.element_count += 1;
    }

    /// Consumes the next position without a value
    #[inline]
    pub fn skip(&mut self) {
        self.remove_expired_elements();
        self.last_skipped = Some(self.element_count);
        self.element_count += 1;
    }

    /// Returns the extremum of the values inside the window, or `None` if
    /// every position in it was skipped
    #[inline]
    pub fn front(&self) -> Option<T> {
        self.deque.front().map(|&(value, _)| value)
    }

    /// Returns the queue to its initial state
    #[inline]
    pub fn reset(&mut self) -> &mut Self {
        self.deque.reset();
        self.element_count = 0;
        self.last_skipped = None;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use alloc::vec::Vec;

    use super::{Max, Min, MonotonicQueue};

    fn collect<O: super::OrderPolicy<i32>>(input: &[i32], window: usize) -> Vec<i32> {
        let mut mq = MonotonicQueue::<i32, O>::new(window);
        let mut result = vec![];
        for &val in input {
            mq.push(val);
            if mq.has_complete_window() {
                result.push(mq.front().unwrap());
            }
        }
        result
    }

    #[test]
    fn test_min_sliding_window() {
        let input = [25.4, 26.2, 26.0, 26.1, 25.8, 25.9, 26.3, 26.2, 26.5];
        let mut mq = MonotonicQueue::<_, Min>::new(3);
        let mut result = vec![];

        for &val in &input {
            mq.push(val);
            if mq.has_complete_window() {
                result.push(mq.front().unwrap());
            }
        }
        assert_eq!(result, vec![25.4, 26.0, 25.8, 25.8, 25.8, 25.9, 26.2]);
    }

    #[test]
    fn test_max_sliding_window() {
        let input = [
            31, 4, 52, 60, 61, 15, 28, 2, 36, 1, 4, 39, 12, 96, 1, 21, 95, 20, 35, 83,
        ];
        assert_eq!(
            collect::<Max>(&input, 3),
            vec![52, 60, 61, 61, 61, 28, 36, 36, 36, 39, 39, 96, 96, 96, 95, 95, 95, 83]
        );
    }

    #[test]
    fn test_window_size_one_tracks_input() {
        let input = [5, 2, 9, 1, 7, 3];
        assert_eq!(collect::<Min>(&input, 1), input);
        assert_eq!(collect::<Max>(&input, 1), input);
    }

    #[test]
    fn test_full_length_window() {
        let input = [2, 4, 1, 3];
        assert_eq!(collect::<Max>(&input, 4), vec![4]);
        assert_eq!(collect::<Min>(&input, 4), vec![1]);
    }

    #[test]
    fn test_duplicated_values() {
        let input = [3, 3, 3, 3, 2, 2, 2, 4, 4];
        assert_eq!(collect::<Min>(&input, 3), vec![3, 3, 2, 2, 2, 2, 2]);
        assert_eq!(collect::<Max>(&input, 3), vec![3, 3, 3, 3, 2, 4, 4]);
    }

    #[test]
    fn test_oscillating_values() {
        let input = [10, 2, 8, 1, 9, 3, 7, 0];
        assert_eq!(collect::<Min>(&input, 4), vec![1, 1, 1, 1, 0]);
        assert_eq!(collect::<Max>(&input, 4), vec![10, 9, 9, 9, 9]);
    }

    #[test]
    fn test_skip_occupies_window_slot() {
        let mut mq = MonotonicQueue::<_, Max>::new(2);
        mq.push(9);
        mq.skip();
        assert!(mq.has_complete_window());
        assert!(mq.window_has_skipped());
        assert_eq!(mq.front(), Some(9));

        // 9 expires, the skipped slot is still in the window
        mq.push(1);
        assert!(mq.window_has_skipped());
        assert_eq!(mq.front(), Some(1));

        // skipped slot expires
        mq.push(3);
        assert!(!mq.window_has_skipped());
        assert_eq!(mq.front(), Some(3));
    }

    #[test]
    fn test_all_skipped_window_is_empty() {
        let mut mq = MonotonicQueue::<_, Min>::new(2);
        mq.push(4);
        mq.skip();
        mq.skip();
        assert_eq!(mq.front(), None);
        mq.push(6);
        assert_eq!(mq.front(), Some(6));
    }

    #[test]
    fn test_reset() {
        let mut mq = MonotonicQueue::<_, Min>::new(3);
        mq.push(14);
        mq.skip();
        mq.push(12);
        assert_eq!(mq.front(), Some(12));
        mq.reset();
        assert!(mq.front().is_none());
        assert!(!mq.window_has_skipped());
        assert!(!mq.has_complete_window());
        mq.push(10);
        assert_eq!(mq.front(), Some(10));
    }
}
