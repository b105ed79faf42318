//! Table discovery, initialisation and re-filtering.
//!
//! [`TableFilters`] enhances every eligible `<table>` of the document once.
//! Filter values stay in the DOM (column inputs and the table's
//! `data-global-filter` attribute) and are read back on every pass, so
//! [`apply_all`] can refresh visibility after rows are added or removed
//! without rebuilding anything.

use table_filters_core::{ColumnClassifier, FilterSettings, Result};

#[cfg(target_arch = "wasm32")]
use table_filters_core::settings::{FILTER_ATTRIBUTE, GLOBAL_FILTER_ATTRIBUTE, NO_FILTER_CLASS};
#[cfg(target_arch = "wasm32")]
use table_filters_core::{FilterState, FilterSummary, is_table_disabled};
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, HtmlTableElement, HtmlTableRowElement, HtmlTableSectionElement};

#[cfg(target_arch = "wasm32")]
use crate::dom::{DomRow, column_inputs, document, elements, filter_row_of, set_row_visible};
#[cfg(target_arch = "wasm32")]
use crate::filter_row::{build_filter_row, insert_filter_row, read_layout};
#[cfg(target_arch = "wasm32")]
use crate::toolbar::insert_toolbar;

/// Controller that injects filter controls into the tables of a document.
#[derive(Debug, Clone)]
pub struct TableFilters {
	settings: FilterSettings,
	classifier: ColumnClassifier,
}

impl TableFilters {
	/// Creates a controller, compiling the action keyword list of `settings`.
	pub fn new(settings: FilterSettings) -> Result<Self> {
		let classifier = ColumnClassifier::new(&settings)?;
		Ok(Self {
			settings,
			classifier,
		})
	}

	/// Enhances every eligible table of the document.
	///
	/// Safe to call repeatedly: tables that already have a filter row are
	/// skipped. A table whose DOM calls fail is logged and skipped without
	/// affecting the others.
	///
	/// Returns the number of tables enhanced by this call.
	#[cfg(target_arch = "wasm32")]
	pub fn init(&self) -> Result<usize> {
		let document = document()?;
		let tables = elements::<HtmlTableElement>(&document.get_elements_by_tag_name("table"));
		let mut enhanced = 0;
		for table in &tables {
			match self.init_table(&document, table) {
				Ok(true) => enhanced += 1,
				Ok(false) => {}
				Err(err) => crate::warn_log!("Skipping table: {}", err),
			}
		}
		crate::info_log!(
			"Table filters initialised on {} of {} table(s)",
			enhanced,
			tables.len()
		);
		Ok(enhanced)
	}

	/// Enhances every eligible table (non-WASM stub).
	#[cfg(not(target_arch = "wasm32"))]
	pub fn init(&self) -> Result<usize> {
		Ok(0)
	}

	/// Enhances a single table. Returns `false` when the table is not eligible.
	#[cfg(target_arch = "wasm32")]
	pub fn init_table(&self, document: &Document, table: &HtmlTableElement) -> Result<bool> {
		let marker = table.get_attribute(FILTER_ATTRIBUTE);
		if is_table_disabled(marker.as_deref(), table.class_list().contains(NO_FILTER_CLASS)) {
			crate::debug_log!("Table opted out of filtering");
			return Ok(false);
		}
		let Some(head) = table.t_head() else {
			crate::debug_log!("Table has no header section, skipping");
			return Ok(false);
		};
		let Some(header_row) = elements::<HtmlTableRowElement>(&head.rows()).into_iter().next()
		else {
			crate::debug_log!("Table header has no rows, skipping");
			return Ok(false);
		};
		if filter_row_of(table).is_some() {
			crate::debug_log!("Table already has a filter row, skipping");
			return Ok(false);
		}

		let layout = read_layout(&header_row, &self.classifier);
		let filter_row = build_filter_row(document, table, &layout, &self.settings)?;
		insert_toolbar(document, table, &self.settings)?;
		insert_filter_row(&head, &header_row, &filter_row)?;
		crate::debug_log!(
			"Filter row added: {} of {} column(s) filterable",
			layout.filterable().count(),
			layout.len()
		);
		Ok(true)
	}
}

/// Recomputes row visibility of one table from its current filter values.
///
/// Returns `None` for tables that were never enhanced; their rows are left
/// untouched.
#[cfg(target_arch = "wasm32")]
pub fn apply_table(table: &HtmlTableElement) -> Result<Option<FilterSummary>> {
	let Some(filter_row) = filter_row_of(table) else {
		return Ok(None);
	};
	let inputs = column_inputs(&filter_row);
	let global = table.get_attribute(GLOBAL_FILTER_ATTRIBUTE).unwrap_or_default();
	let state = FilterState::from_inputs(
		inputs.iter().map(|(index, input)| (*index, input.value())),
		&global,
	);

	let mut summary = FilterSummary::default();
	for body in elements::<HtmlTableSectionElement>(&table.t_bodies()) {
		for row in elements::<HtmlTableRowElement>(&body.rows()) {
			let visible = state.row_visible(&DomRow(&row));
			set_row_visible(&row, visible)?;
			summary.record(visible);
		}
	}
	crate::debug_log!(
		"{} of {} row(s) hidden ({} filter(s) active)",
		summary.hidden(),
		summary.rows,
		state.column_filters().len() + usize::from(state.global().is_some())
	);
	Ok(Some(summary))
}

/// Re-applies the current filters to every enhanced table of the document.
///
/// Toolbars and filter rows are not rebuilt. Returns the number of tables
/// re-filtered.
#[cfg(target_arch = "wasm32")]
pub fn apply_all() -> Result<usize> {
	let document = document()?;
	let mut applied = 0;
	for table in elements::<HtmlTableElement>(&document.get_elements_by_tag_name("table")) {
		match apply_table(&table) {
			Ok(Some(_)) => applied += 1,
			Ok(None) => {}
			Err(err) => crate::warn_log!("Skipping table while re-applying filters: {}", err),
		}
	}
	Ok(applied)
}

/// Re-applies the current filters to every enhanced table (non-WASM stub).
#[cfg(not(target_arch = "wasm32"))]
pub fn apply_all() -> Result<usize> {
	Ok(0)
}

/// Event-handler entry point: re-filters `table`, logging failures.
#[cfg(target_arch = "wasm32")]
pub(crate) fn refilter(table: &HtmlTableElement) {
	if let Err(err) = apply_table(table) {
		crate::error_log!("Filtering failed: {}", err);
	}
}
