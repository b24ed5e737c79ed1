//! Query processing: order the per-language results.
//!
//! This module handles the third stage of the pipeline - turning a raw
//! `CountResult` into ordered rows plus a grand total. It provides:
//!
//! - **Options**: Ordering configuration (`OrderBy`, `OrderDirection`, `Ordering`)
//! - **QuerySet**: Processed rows ready for presentation
//!
//! ## Example
//!
//! ```rust,ignore
//! use sloclib::query::{CountQuerySet, Ordering};
//!
//! let queryset = CountQuerySet::from_result(&result, Ordering::by_code());
//! ```

pub mod options;
pub mod queryset;

pub use options::{OrderBy, OrderDirection, Ordering};
pub use queryset::{CountQuerySet, QueryItem};
