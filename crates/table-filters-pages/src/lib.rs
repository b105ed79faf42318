//! Browser controller for table-filters
//!
//! Scans the document for `<table>` elements and gives each eligible one a
//! toolbar (global search box and clear button) plus a filter row with one
//! text input per column. Every keystroke re-evaluates which body rows are
//! shown.
//!
//! Built on wasm-bindgen, web-sys and js-sys. On targets other than
//! `wasm32` the DOM entry points compile to stubs that touch nothing, so the
//! crate can be depended on from native code and tests.
//!
//! ## Modules
//!
//! - [`controller`]: discovery, initialisation and re-filtering
//! - [`logging`]: console logging macros
//! - `entry` (WASM only): `initTableFilters`, `applyTableFilters`,
//!   `installTableFilters` and `window.TableFilters`
//!
//! ## Opting out
//!
//! ```html
//! <table data-filter="off">...</table>
//! <table class="no-filter">...</table>
//! <th data-nofilter="true">Photo</th>
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use table_filters_pages::{FilterSettings, TableFilters, apply_all};
//!
//! let filters = TableFilters::new(FilterSettings::default())?;
//! filters.init()?;
//!
//! // after appending rows from a fetch response
//! apply_all()?;
//! ```

#![warn(missing_docs)]

pub mod controller;
pub mod logging;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub mod entry;
#[cfg(target_arch = "wasm32")]
mod filter_row;
#[cfg(target_arch = "wasm32")]
mod toolbar;

pub use controller::{TableFilters, apply_all};
#[cfg(target_arch = "wasm32")]
pub use controller::apply_table;
#[cfg(target_arch = "wasm32")]
pub use entry::install;
pub use table_filters_core::{FilterError, FilterSettings, FilterSummary};
