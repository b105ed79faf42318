//! The synthetic header row holding one filter input per column.

use table_filters_core::settings::{
	COLUMN_INDEX_ATTRIBUTE, FILTER_ROW_CLASS, NO_FILTER_COLUMN_ATTRIBUTE,
};
use table_filters_core::{ColumnClassifier, FilterSettings, HeaderCell, Result, TableLayout};
use web_sys::{
	Document, Element, HtmlTableCellElement, HtmlTableElement, HtmlTableRowElement,
	HtmlTableSectionElement,
};

use crate::controller::refilter;
use crate::dom::{JsResultExt, create, create_text_input, elements, listen};

/// Reads and classifies the cells of the first header row.
pub(crate) fn read_layout(
	header_row: &HtmlTableRowElement,
	classifier: &ColumnClassifier,
) -> TableLayout {
	let headers = elements::<Element>(&header_row.cells())
		.into_iter()
		.map(|cell| {
			HeaderCell::new(cell.text_content().unwrap_or_default()).opt_out(
				cell.get_attribute(NO_FILTER_COLUMN_ATTRIBUTE).as_deref() == Some("true"),
			)
		});
	TableLayout::from_headers(headers, classifier)
}

/// Builds a detached filter row for `layout`.
///
/// Every input re-filters `table` on each `input` event.
pub(crate) fn build_filter_row(
	document: &Document,
	table: &HtmlTableElement,
	layout: &TableLayout,
	settings: &FilterSettings,
) -> Result<HtmlTableRowElement> {
	let row: HtmlTableRowElement = create(document, "tr")?;
	row.set_class_name(FILTER_ROW_CLASS);

	for column in layout.columns() {
		let cell: HtmlTableCellElement = create(document, "th")?;
		if !column.excluded {
			let input = create_text_input(document, &settings.input_class)?;
			input.set_placeholder(&settings.placeholder_for(&column.label));
			input
				.set_attribute(COLUMN_INDEX_ATTRIBUTE, &column.index.to_string())
				.dom()?;
			listen(&input, "input", {
				let table = table.clone();
				move |_| refilter(&table)
			})?;
			cell.append_child(&input).dom()?;
		}
		row.append_child(&cell).dom()?;
	}
	Ok(row)
}

/// Inserts `filter_row` right after `header_row`, or at the end of the header section.
pub(crate) fn insert_filter_row(
	head: &HtmlTableSectionElement,
	header_row: &HtmlTableRowElement,
	filter_row: &HtmlTableRowElement,
) -> Result<()> {
	match (header_row.next_sibling(), header_row.parent_node()) {
		(Some(next), Some(parent)) => {
			parent.insert_before(filter_row, Some(&next)).dom()?;
		}
		_ => {
			head.append_child(filter_row).dom()?;
		}
	}
	Ok(())
}
