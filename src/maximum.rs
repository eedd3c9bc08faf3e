use num_traits::Float;

use crate::{
    MissingPolicy, RollingWindow,
    helper::is_missing,
    utils::{Max, MonotonicQueue},
};

/// # Rolling Maximum
///
/// Tracks the maximum of a trailing window in amortized constant time per
/// value. Values are kept in a monotonic queue whose front is always the
/// current maximum; values that can no longer become the maximum are dropped
/// as soon as a larger one arrives.
///
/// Missing (NaN) values never enter the queue. They still occupy a slot of
/// the window, and the configured [`MissingPolicy`] decides whether their
/// presence makes the window's maximum missing.
///
/// # Examples
///
/// ```
/// use windowfn::{Maximum, RollingWindow};
///
/// let mut max = Maximum::new(3);
/// let out: Vec<_> = [1.0, 3.0, 2.0, 5.0, 4.0]
///     .iter()
///     .map(|&v| max.next(v).get())
///     .collect();
/// assert_eq!(out, [None, None, Some(3.0), Some(5.0), Some(5.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct Maximum<T> {
    queue: MonotonicQueue<T, Max>,
    policy: MissingPolicy,
}

impl<T: Float> Maximum<T> {
    /// Creates a rolling maximum over `period` values that propagates missing values
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn new(period: usize) -> Self {
        Self::with_policy(period, MissingPolicy::default())
    }

    /// Creates a rolling maximum over `period` values with the given missing value policy
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn with_policy(period: usize, policy: MissingPolicy) -> Self {
        Self {
            queue: MonotonicQueue::new(period),
            policy,
        }
    }

    /// Returns the missing value policy
    pub const fn policy(&self) -> MissingPolicy {
        self.policy
    }

    /// Returns true once `period` values have been pushed
    pub fn is_ready(&self) -> bool {
        self.queue.has_complete_window()
    }
}

impl<T: Float> RollingWindow<T> for Maximum<T> {
    fn next(&mut self, value: T) -> &mut Self {
        if is_missing(value) {
            self.queue.skip();
        } else {
            self.queue.push(value);
        }
        self
    }

    fn get(&self) -> Option<T> {
        if !self.is_ready() {
            return None;
        }
        match self.policy {
            MissingPolicy::Propagate if self.queue.window_has_skipped() => None,
            _ => self.queue.front(),
        }
    }

    fn period(&self) -> usize {
        self.queue.capacity()
    }

    fn reset(&mut self) -> &mut Self {
        self.queue.reset();
        self
    }
}
