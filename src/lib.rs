#![cfg_attr(docsrs, feature(doc_cfg))]

//! An inclusive `f32` range whose boundaries may be given in either order.
//!
//! ```
//! use float_range::FloatRange;
//!
//! let range = FloatRange::new(8., 2.);
//! assert_eq!(2., range.min_value());
//! assert!(range.is_in_range(8.));
//! assert_eq!(0.5, range.get_progress_rate(5., true));
//! assert_eq!(
//!     Some(FloatRange::new(5., 8.)),
//!     FloatRange::get_intersection(&range, &FloatRange::new(5., 15.))
//! );
//! ```

mod error;
mod option;
pub mod random;
mod range;
mod utils;

pub use error::RangeError;
pub use option::{FormatOption, NumberFormat};
pub use random::{HostRandom, RandomSource};
pub use range::FloatRange;
