//! Sortvis Event Model
//!
//! The semantic vocabulary a sorting algorithm speaks while it runs.
//!
//! # Architecture
//!
//! - **SortEvent**: one immutable algorithm action (compare, swap, overwrite,
//!   range enter/exit, completion)
//! - **Inverse**: every event has exactly one inverse, so any prefix of a run
//!   can be undone event by event
//! - **RangeStack**: the nested sub-array bounds an algorithm is working in
//!
//! # Usage
//!
//! ```
//! use sortvis_events::SortEvent;
//!
//! let mut array = vec![3, 1, 2];
//! let swap = SortEvent::Swap { i: 0, j: 1 };
//!
//! swap.apply(&mut array);
//! assert_eq!(array, vec![1, 3, 2]);
//!
//! swap.inverse().apply(&mut array);
//! assert_eq!(array, vec![3, 1, 2]);
//! ```

mod events;
mod range;

pub use events::SortEvent;
pub use range::{IndexRange, RangeStack};
