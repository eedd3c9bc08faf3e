/// A rolling statistic fed one value at a time
///
/// Implementors keep the state of a trailing window of fixed length and
/// expose the aggregate of that window after every update. NaN inputs are
/// treated as missing values; how they affect the aggregate depends on the
/// implementor's [`MissingPolicy`](crate::MissingPolicy).
pub trait RollingWindow<T> {
    /// Pushes the next value of the series into the window
    ///
    /// # Arguments
    ///
    /// * `value` - The new value, or NaN for a missing value
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The rolling statistic
    fn next(&mut self, value: T) -> &mut Self
    where
        Self: Sized;

    /// Returns the aggregate of the current window
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The aggregate, or `None` if the window is not yet full
    ///   or the missing value policy makes it missing
    fn get(&self) -> Option<T>;

    /// Returns the window length
    fn period(&self) -> usize;

    /// Clears all state, as if no value had been pushed
    fn reset(&mut self) -> &mut Self
    where
        Self: Sized;
}
