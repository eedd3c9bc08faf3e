use num_traits::Float;

use crate::{
    MissingPolicy, RollingWindow,
    helper::is_missing,
    utils::{Min, MonotonicQueue},
};

/// # Rolling Minimum
///
/// Tracks the minimum of a trailing window in amortized constant time per
/// value, using a monotonic queue ordered the opposite way to [`Maximum`](crate::Maximum).
/// Missing (NaN) values are handled the same way: they take a slot in the
/// window but never enter the queue.
#[derive(Debug, Clone)]
pub struct Minimum<T> {
    queue: MonotonicQueue<T, Min>,
    policy: MissingPolicy,
}

impl<T: Float> Minimum<T> {
    /// Creates a rolling minimum over `period` values that propagates missing values
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn new(period: usize) -> Self {
        Self::with_policy(period, MissingPolicy::default())
    }

    /// Creates a rolling minimum over `period` values with the given missing value policy
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

impl<T: Float> RollingWindow<T> for Minimum<T> {
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
