use core::fmt;

/// How missing (NaN) values inside a window affect the aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MissingPolicy {
    /// Any missing value in the window makes the aggregate missing.
    #[default]
    Propagate,
    /// Missing values are ignored; the aggregate is missing only when every
    /// value in the window is missing.
    Skip,
}

/// Algorithm used by the batch functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Rescans every window, O(n·w).
    Naive,
    /// Monotonic queue for extrema and a running sum for the mean, O(n).
    #[default]
    Incremental,
}

/// The rolling statistic to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregate {
    /// Rolling maximum
    Max,
    /// Rolling minimum
    Min,
    /// Rolling arithmetic mean
    Mean,
}

impl Aggregate {
    /// Returns the name the routine is registered under on the host side
    ///
    /// # Returns
    ///
    /// * `&'static str` - One of `maxOver`, `minOver` or `meanOver`
    pub const fn name(self) -> &'static str {
        match self {
            Aggregate::Max => "maxOver",
            Aggregate::Min => "minOver",
            Aggregate::Mean => "meanOver",
        }
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
