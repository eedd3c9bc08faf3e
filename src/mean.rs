use num_traits::Float;

use crate::{Kbn, MissingPolicy, RollingWindow, helper::is_missing, utils::RingBuffer};

/// # Rolling Mean
///
/// Maintains the arithmetic mean of a trailing window with one addition and
/// one subtraction per value. The running sum uses Kahan-Babuska-Neumaier
/// compensated summation so that retracting evicted values does not let
/// rounding error build up over long series.
///
/// Only finite values enter the running sum. Missing (NaN) values and
/// infinities are buffered like any other value so that they leave the window
/// on time, but they are counted rather than summed:
///
/// - a window holding `+inf` (or `-inf`) has that infinity as its mean
/// - a window holding both infinities has a NaN mean
///
/// When finite values overflow the running sum, it is rebuilt from the window
/// on every update until the large values have left.
///
/// # Examples
///
/// ```
/// use assert_approx_eq::assert_approx_eq;
/// use windowfn::{Mean, RollingWindow};
///
/// let mut mean = Mean::new(3);
/// let out: Vec<f64> = [1.0, 3.0, 2.0, 5.0, 4.0]
///     .iter()
///     .filter_map(|&v| mean.next(v).get())
///     .collect();
///
/// let expected: [f64; 3] = [2.0, 10.0 / 3.0, 11.0 / 3.0];
/// for (e, r) in expected.iter().zip(out.iter()) {
///     assert_approx_eq!(e, r);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Mean<T> {
    /// Values of the current window, missing ones included
    buf: RingBuffer<T>,
    /// Sum of the finite values in the window
    sum: Kbn<T>,
    /// Number of missing values in the window
    missing: usize,
    /// Number of `+inf` values in the window
    pos_inf: usize,
    /// Number of `-inf` values in the window
    neg_inf: usize,
    policy: MissingPolicy,
}

impl<T: Float> Mean<T> {
    /// Creates a rolling mean over `period` values that propagates missing values
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn new(period: usize) -> Self {
        Self::with_policy(period, MissingPolicy::default())
    }

    /// Creates a rolling mean over `period` values with the given missing value policy
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn with_policy(period: usize, policy: MissingPolicy) -> Self {
        assert!(period > 0, "period can not be zero");
        Self {
            buf: RingBuffer::new(period),
            sum: Kbn::default(),
            missing: 0,
            pos_inf: 0,
            neg_inf: 0,
            policy,
        }
    }

    /// Returns the missing value policy
    pub const fn policy(&self) -> MissingPolicy {
        self.policy
    }

    /// Returns true once `period` values have been pushed
    pub fn is_ready(&self) -> bool {
        self.buf.is_full()
    }

    /// Number of non-missing values in the window
    fn present(&self) -> usize {
        self.buf.len() - self.missing
    }

    /// Number of finite values in the window
    fn finite(&self) -> usize {
        self.present() - self.pos_inf - self.neg_inf
    }

    /// Moves `value` into (`enter`) or out of the running sum and counters
    fn tally(&mut self, value: T, enter: bool) {
        let counter = if is_missing(value) {
            &mut self.missing
        } else if value == T::infinity() {
            &mut self.pos_inf
        } else if value == T::neg_infinity() {
            &mut self.neg_inf
        } else {
            if enter {
                self.sum += value;
            } else {
                self.sum -= value;
            }
            return;
        };

        if enter {
            *counter += 1;
        } else {
            *counter -= 1;
        }
    }

    /// Uncompensated sum of the finite values, in window order
    fn plain_sum(&self) -> T {
        self.buf
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(T::zero(), |acc, v| acc + v)
    }

    /// Rebuilds the running sum from the buffered window, could be called to
    /// drop rounding error compounded over a long series
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The rolling mean
    pub fn recompute(&mut self) -> &mut Self {
        self.sum = Kbn::default();
        for &v in self.buf.iter().filter(|v| v.is_finite()) {
            self.sum += v;
        }
        self
    }
}

impl<T: Float> RollingWindow<T> for Mean<T> {
    fn next(&mut self, value: T) -> &mut Self {
        if let Some(evicted) = self.buf.push(value) {
            self.tally(evicted, false);
        }
        self.tally(value, true);

        if self.finite() == 0 {
            // restart from an exact zero
            self.sum = Kbn::default();
        } else if !self.sum.total().is_finite() {
            self.recompute();
        }
        self
    }

    fn get(&self) -> Option<T> {
        if !self.is_ready() {
            return None;
        }
        if self.policy == MissingPolicy::Propagate && self.missing > 0 {
            return None;
        }
        if self.present() == 0 {
            return None;
        }

        match (self.pos_inf > 0, self.neg_inf > 0) {
            (true, true) => Some(T::nan()),
            (true, false) => Some(T::infinity()),
            (false, true) => Some(T::neg_infinity()),
            (false, false) => {
                let n = T::from(self.present())?;
                let total = self.sum.total();
                // the finite values themselves overflow
                let total = if total.is_finite() {
                    total
                } else {
                    self.plain_sum()
                };
                Some(total / n)
            }
        }
    }

    fn period(&self) -> usize {
        self.buf.capacity()
    }

    fn reset(&mut self) -> &mut Self {
        self.buf.reset();
        self.sum = Kbn::default();
        self.missing = 0;
        self.pos_inf = 0;
        self.neg_inf = 0;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use alloc::vec::Vec;
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    const NAN: f64 = f64::NAN;
    const INF: f64 = f64::INFINITY;

    fn run(mean: &mut Mean<f64>, inputs: &[f64]) -> Vec<Option<f64>> {
        inputs.iter().map(|&v| mean.next(v).get()).collect()
    }

    #[test]
    fn test_rolling_mean_across_gap() {
        let mut mean = Mean::with_policy(3, MissingPolicy::Skip);
        let inputs = [0.25, 1.5, NAN, -0.75, 2.0, 0.5];
        let results = run(&mut mean, &inputs);
        let expected = [
            None,
            None,
            Some(0.875),
            Some(0.375),
            Some(0.625),
            Some(0.5833333333333334),
        ];

        assert_eq!(results.len(), expected.len());
        for (e, r) in expected.iter().zip(results.iter()) {
            match (e, r) {
                (Some(e), Some(r)) => assert_approx_eq!(e, r, 1e-12),
                _ => assert_eq!(e, r),
            }
        }
    }

    #[test]
    fn test_window_of_one_is_identity() {
        let mut mean = Mean::new(1);
        assert_eq!(
            run(&mut mean, &[2.5, -1.0, 0.0, INF, 3.0]),
            vec![Some(2.5), Some(-1.0), Some(0.0), Some(INF), Some(3.0)]
        );
    }

    #[test]
    fn test_propagate_missing() {
        let mut mean = Mean::new(2);
        assert_eq!(
            run(&mut mean, &[1.0, 3.0, NAN, 5.0, 7.0]),
            vec![None, Some(2.0), None, None, Some(6.0)]
        );
    }

    #[test]
    fn test_skip_missing() {
        let mut mean = Mean::with_policy(3, MissingPolicy::Skip);
        assert_eq!(
            run(&mut mean, &[1.0, NAN, 3.0, NAN, NAN, NAN, 8.0]),
            vec![None, None, Some(2.0), Some(3.0), Some(3.0), None, Some(8.0)]
        );
    }

    #[test]
    fn test_missing_never_poisons_sum() {
        let mut mean = Mean::new(2);
        run(&mut mean, &[NAN, NAN, NAN]);
        assert_eq!(mean.next(4.0).next(6.0).get(), Some(5.0));
    }

    #[test]
    fn test_infinity_leaves_window() {
        let mut mean = Mean::new(2);
        assert_eq!(
            run(&mut mean, &[1.0, INF, 2.0, 4.0, 6.0]),
            vec![None, Some(INF), Some(INF), Some(3.0), Some(5.0)]
        );
    }

    #[test]
    fn test_opposite_infinities() {
        let mut mean = Mean::new(2);
        let out = run(&mut mean, &[-INF, INF, 1.0, 3.0]);
        assert_eq!(out[0], None);
        assert!(out[1].is_some_and(f64::is_nan));
        assert_eq!(out[2], Some(INF));
        assert_eq!(out[3], Some(2.0));
    }

    #[test]
    fn test_overflow_recovers() {
        let mut mean = Mean::new(2);
        assert_eq!(
            run(&mut mean, &[f64::MAX, f64::MAX, 1.0, 3.0]),
            vec![None, Some(INF), Some(f64::MAX / 2.0), Some(2.0)]
        );
    }

    #[test]
    fn test_recompute_matches_running_sum() {
        let mut mean = Mean::new(4);
        for v in [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9] {
            mean.next(v);
        }
        let running = mean.get().unwrap();
        let recomputed = mean.recompute().get().unwrap();
        assert_approx_eq!(running, recomputed, 1e-12);
        assert_approx_eq!(recomputed, 0.75, 1e-12);
    }

    #[test]
    fn test_reset() {
        let mut mean = Mean::new(2);
        mean.next(NAN).next(INF);
        mean.reset();
        assert_eq!(mean.period(), 2);
        assert!(mean.next(1.0).get().is_none());
        assert_eq!(mean.next(3.0).get(), Some(2.0));
    }

    #[test]
    #[should_panic(expected = "period can not be zero")]
    fn test_zero_period_panics() {
        let _ = Mean::<f64>::new(0);
    }
}
