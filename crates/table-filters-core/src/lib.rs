//! DOM-independent logic of table-filters
//!
//! This crate holds every decision the browser controller makes that does
//! not need a document: which tables and columns take part in filtering,
//! how input values are normalised, and whether a row stays visible.
//!
//! ## Modules
//!
//! - [`settings`]: user-facing configuration and the DOM contract names
//! - [`column`]: header classification into a [`TableLayout`]
//! - [`filter`]: [`FilterState`] and the row visibility predicate
//! - [`error`]: the shared [`FilterError`]
//!
//! ## Example
//!
//! ```
//! use table_filters_core::FilterState;
//!
//! let mut state = FilterState::new();
//! state.set_column(0, "ali");
//!
//! assert!(state.row_visible(&["Alice", "Edit"][..]));
//! assert!(!state.row_visible(&["Bob", "Edit"][..]));
//!
//! state.clear();
//! state.set_global("EDIT");
//! assert!(state.row_visible(&["Bob", "Edit"][..]));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod error;
pub mod filter;
pub mod settings;

// Re-exports for convenience
pub use column::{ColumnClassifier, ColumnSpec, HeaderCell, TableLayout};
pub use error::{FilterError, Result};
pub use filter::{ColumnFilter, FilterState, FilterSummary, RowCells, normalize};
pub use settings::{FilterSettings, is_table_disabled};
