//! Longest palindromic substring, two ways, with operation counters.
//!
//! Both algorithms share the sentinel-interleaved transform that gives every
//! palindrome (even or odd length) a single center:
//!
//! - [`MirrorScan`] sweeps all centers left to right, reusing previously
//!   computed radii via mirror symmetry for a guaranteed O(n) comparison
//!   bound.
//! - [`PriorityScan`] visits centers in order of their theoretical maximum
//!   radius and stops once nothing unvisited can beat the best, in one of
//!   two configurable orders.
//!
//! Every call returns a [`ScanReport`] carrying the palindrome together with
//! that call's counters; nothing is accumulated across calls, so instances
//! are trivially safe to use from parallel tests and harnesses.
//!
//! ```
//! use palinscan::{MirrorScan, PalindromeScan, PriorityScan};
//!
//! let report = MirrorScan::scan("babad");
//! assert_eq!(report.palindrome, "bab");
//! assert_eq!(PriorityScan::longest_palindrome("babad"), "bab");
//! assert!(report.counters.comparisons > 0);
//! ```

pub mod core;
pub mod fixture;
pub mod mirror;
pub mod priority;

pub use crate::core::{
    BestMatch, PalindromeScan, PriorityOrder, PriorityScanConfig, ScanCounters, ScanReport, Sym,
    to_original_range, transform, transformed_len,
};
pub use crate::mirror::MirrorScan;
pub use crate::priority::PriorityScan;
