//! # table-filters
//!
//! Per-column and global text filtering for HTML tables, compiled to
//! WebAssembly.
//!
//! Every `<table>` with a `<thead>` gets a search toolbar placed right before
//! it and a filter row inserted under its first header row. Typing in a
//! column input keeps the rows whose cell in that column contains the text;
//! typing in the search box keeps the rows where any cell contains it. Both
//! comparisons are case-insensitive substring matches on trimmed text.
//!
//! ## Crates
//!
//! - [`core`]: settings, column classification and the row visibility
//!   predicate, usable on any target
//! - [`pages`]: the browser controller and JavaScript exports
//!
//! ## Feature Flags
//!
//! - `autostart` - run `installTableFilters` when the WASM module loads
//! - `console_error_panic_hook` - readable panic messages in the console
//! - `debug-logging` - per-pass row counts via `debug_log!`
//!
//! ## Quick Example
//!
//! ```ignore
//! use table_filters::{FilterSettings, TableFilters, apply_all};
//!
//! let filters = TableFilters::new(FilterSettings::default())?;
//! filters.init()?;
//!
//! // rows were appended by other code; refresh visibility
//! apply_all()?;
//! ```
//!
//! From JavaScript, after loading the module:
//!
//! ```js
//! initTableFilters();
//! // or, with install: window.TableFilters.apply();
//! ```

#![warn(missing_docs)]

pub use table_filters_core as core;
pub use table_filters_pages as pages;

pub use table_filters_core::{
	ColumnClassifier, ColumnSpec, FilterError, FilterSettings, FilterState, FilterSummary,
	HeaderCell, Result, RowCells, TableLayout,
};
pub use table_filters_pages::{TableFilters, apply_all};
#[cfg(target_arch = "wasm32")]
pub use table_filters_pages::{apply_table, install};
