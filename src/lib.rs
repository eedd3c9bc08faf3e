#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::len_without_is_empty)]

#[macro_use]
extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::helper;

mod error;
pub use error::{Error, Result};

mod policy;
pub use policy::{Aggregate, MissingPolicy, Strategy};

mod traits;
pub use traits::RollingWindow;

mod maximum;
pub use maximum::Maximum;

mod minimum;
pub use minimum::Minimum;

mod mean;
pub use mean::Mean;

mod aggregator;
pub use aggregator::{WindowAggregator, max_over, mean_over, min_over};
