use alloc::vec::Vec;

use log::{debug, trace};
use num_traits::{Float, PrimInt};

use crate::{
    Aggregate, Error, Maximum, Mean, Minimum, MissingPolicy, Result, RollingWindow, Strategy,
    helper::{window_max, window_mean, window_min},
};

/// Rolling maximum of `x` over trailing windows of `window` values.
///
/// Positions before the first complete window, and windows holding a missing
/// (NaN) value, are NaN in the output. See [`WindowAggregator`] to change the
/// missing value policy or the algorithm.
///
/// # Errors
///
/// Returns [`Error::InvalidWindow`] unless `1 <= window <= x.len()`.
///
/// # Examples
///
/// ```
/// let out = windowfn::max_over(&[1.0_f64, 3.0, 2.0, 5.0, 4.0], 3).unwrap();
/// assert!(out[0].is_nan() && out[1].is_nan());
/// assert_eq!(&out[2..], &[3.0, 5.0, 5.0]);
///
/// assert!(windowfn::max_over(&[1.0, 2.0], -1).is_err());
/// ```
///
/// The window must be an integer:
///
/// ```compile_fail
/// let _ = windowfn::max_over(&[1.0, 3.0, 2.0], 1.5_f64);
/// ```
pub fn max_over<T, W>(x: &[T], window: W) -> Result<Vec<T>>
where
    T: Float,
    W: PrimInt,
{
    WindowAggregator::new().max_over(x, window)
}

/// Rolling minimum of `x` over trailing windows of `window` values.
///
/// Same output layout and errors as [`max_over`].
///
/// # Errors
///
/// Returns [`Error::InvalidWindow`] unless `1 <= window <= x.len()`.
pub fn min_over<T, W>(x: &[T], window: W) -> Result<Vec<T>>
where
    T: Float,
    W: PrimInt,
{
    WindowAggregator::new().min_over(x, window)
}

/// Rolling arithmetic mean of `x` over trailing windows of `window` values.
///
/// Same output layout and errors as [`max_over`].
///
/// # Errors
///
/// Returns [`Error::InvalidWindow`] unless `1 <= window <= x.len()`.
pub fn mean_over<T, W>(x: &[T], window: W) -> Result<Vec<T>>
where
    T: Float,
    W: PrimInt,
{
    WindowAggregator::new().mean_over(x, window)
}

/// # Window Aggregator
///
/// Batch rolling statistics over a whole series. Each call is independent:
/// the output has the same length as the input, and position `i` holds the
/// aggregate of `x[i + 1 - window ..= i]`, or NaN when that window is
/// incomplete or missing under the configured [`MissingPolicy`].
///
/// # Examples
///
/// ```
/// use windowfn::{MissingPolicy, Strategy, WindowAggregator};
///
/// let agg = WindowAggregator::new()
///     .with_missing_policy(MissingPolicy::Skip)
///     .with_strategy(Strategy::Naive);
///
/// let out = agg.min_over(&[4.0, f64::NAN, 2.0, 3.0], 2).unwrap();
/// assert!(out[0].is_nan());
/// assert_eq!(&out[1..], &[4.0, 2.0, 2.0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowAggregator {
    policy: MissingPolicy,
    strategy: Strategy,
}

impl WindowAggregator {
    /// Creates an aggregator that propagates missing values and uses the
    /// incremental algorithm
    pub const fn new() -> Self {
        Self {
            policy: MissingPolicy::Propagate,
            strategy: Strategy::Incremental,
        }
    }

    /// Sets the missing value policy
    pub const fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the algorithm
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the missing value policy
    pub const fn missing_policy(&self) -> MissingPolicy {
        self.policy
    }

    /// Returns the algorithm
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Rolling maximum, see [`max_over`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindow`] unless `1 <= window <= x.len()`.
    pub fn max_over<T, W>(&self, x: &[T], window: W) -> Result<Vec<T>>
    where
        T: Float,
        W: PrimInt,
    {
        self.apply(Aggregate::Max, x, window)
    }

    /// Rolling minimum, see [`min_over`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindow`] unless `1 <= window <= x.len()`.
    pub fn min_over<T, W>(&self, x: &[T], window: W) -> Result<Vec<T>>
    where
        T: Float,
        W: PrimInt,
    {
        self.apply(Aggregate::Min, x, window)
    }

    /// Rolling mean, see [`mean_over`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindow`] unless `1 <= window <= x.len()`.
    pub fn mean_over<T, W>(&self, x: &[T], window: W) -> Result<Vec<T>>
    where
        T: Float,
        W: PrimInt,
    {
        self.apply(Aggregate::Mean, x, window)
    }

    /// Computes `aggregate` over every trailing window of `x`
    ///
    /// # Arguments
    ///
    /// * `aggregate` - The statistic to compute
    /// * `x` - The input series, NaN marking missing values
    /// * `window` - The window length
    ///
    /// # Returns
    ///
    /// * `Result<Vec<T>>` - One value per input position
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindow`] unless `1 <= window <= x.len()`.
    pub fn apply<T, W>(&self, aggregate: Aggregate, x: &[T], window: W) -> Result<Vec<T>>
    where
        T: Float,
        W: PrimInt,
    {
        let period = validate_window(window, x.len())?;
        trace!(
            "{aggregate}: {:?}/{:?} over {} values, window {period}",
            self.strategy,
            self.policy,
            x.len()
        );

        let out = match (self.strategy, aggregate) {
            (Strategy::Naive, _) => rescan(x, period, self.policy, aggregate),
            (Strategy::Incremental, Aggregate::Max) => {
                stream(x, Maximum::with_policy(period, self.policy))
            }
            (Strategy::Incremental, Aggregate::Min) => {
                stream(x, Minimum::with_policy(period, self.policy))
            }
            (Strategy::Incremental, Aggregate::Mean) => {
                stream(x, Mean::with_policy(period, self.policy))
            }
        };
        Ok(out)
    }
}

/// Checks `1 <= window <= len` and converts the window to `usize`
fn validate_window<W: PrimInt>(window: W, len: usize) -> Result<usize> {
    match window.to_usize() {
        Some(period) if (1..=len).contains(&period) => Ok(period),
        _ => {
            let window = window.to_i128().unwrap_or(i128::MAX);
            debug!("rejecting window {window} for a series of {len} values");
            Err(Error::InvalidWindow { window, len })
        }
    }
}

/// Feeds the series through a rolling statistic, NaN where it has no value
fn stream<T, R>(x: &[T], mut rolling: R) -> Vec<T>
where
    T: Float,
    R: RollingWindow<T>,
{
    x.iter()
        .map(|&v| rolling.next(v).get().unwrap_or_else(T::nan))
        .collect()
}

/// Computes every window from scratch
fn rescan<T: Float>(x: &[T], period: usize, policy: MissingPolicy, aggregate: Aggregate) -> Vec<T> {
    let scan = match aggregate {
        Aggregate::Max => window_max::<T>,
        Aggregate::Min => window_min::<T>,
        Aggregate::Mean => window_mean::<T>,
    };

    let mut out = Vec::with_capacity(x.len());
    out.resize(period - 1, T::nan());
    out.extend(
        x.windows(period)
            .map(|w| scan(w, policy).unwrap_or_else(T::nan)),
    );
    out
}
