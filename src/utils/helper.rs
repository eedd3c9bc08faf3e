use num_traits::Float;

use crate::MissingPolicy;

/// Returns true if `value` is the missing sentinel (NaN)
#[inline]
pub fn is_missing<T: Float>(value: T) -> bool {
    value.is_nan()
}

/// Returns the values of a window that take part in an aggregate
///
/// # Arguments
///
/// * `window` - The window slice
/// * `policy` - The missing value policy
///
/// # Returns
///
/// * `Option<impl Iterator<Item = T>>` - The present values, or `None` if the
///   policy makes the whole window missing
#[inline]
fn present_values<T: Float>(
    window: &[T],
    policy: MissingPolicy,
) -> Option<impl Iterator<Item = T> + '_> {
    if policy == MissingPolicy::Propagate && window.iter().any(|&v| is_missing(v)) {
        return None;
    }
    Some(window.iter().copied().filter(|&v| !is_missing(v)))
}

/// Returns the maximum of a window by scanning it
#[inline]
pub fn window_max<T: Float>(window: &[T], policy: MissingPolicy) -> Option<T> {
    present_values(window, policy)?.reduce(T::max)
}

/// Returns the minimum of a window by scanning it
#[inline]
pub fn window_min<T: Float>(window: &[T], policy: MissingPolicy) -> Option<T> {
    present_values(window, policy)?.reduce(T::min)
}

/// Returns the arithmetic mean of a window, summing in window order
///
/// Infinities decide the mean on their own: a single sign gives that
/// infinity, both signs give NaN. Finite values are summed as they come, so
/// a sum that overflows yields an infinite mean.
#[inline]
pub fn window_mean<T: Float>(window: &[T], policy: MissingPolicy) -> Option<T> {
    let mut sum = T::zero();
    let mut count = 0usize;
    let (mut pos_inf, mut neg_inf) = (false, false);
    for v in present_values(window, policy)? {
        count += 1;
        if v == T::infinity() {
            pos_inf = true;
        } else if v == T::neg_infinity() {
            neg_inf = true;
        } else {
            sum = sum + v;
        }
    }
    if count == 0 {
        return None;
    }

    match (pos_inf, neg_inf) {
        (true, true) => Some(T::nan()),
        (true, false) => Some(T::infinity()),
        (false, true) => Some(T::neg_infinity()),
        (false, false) => T::from(count).map(|n| sum / n),
    }
}
