//! Global search box and clear button placed before each table.

use table_filters_core::settings::GLOBAL_FILTER_ATTRIBUTE;
use table_filters_core::{FilterSettings, Result, normalize};
use web_sys::{Document, HtmlButtonElement, HtmlDivElement, HtmlTableElement, Node};

use crate::controller::refilter;
use crate::dom::{JsResultExt, column_inputs, create, create_text_input, filter_row_of, listen};

/// Builds the toolbar for `table` and inserts it as the table's previous sibling.
///
/// Tables without a parent node get no toolbar.
pub(crate) fn insert_toolbar(
	document: &Document,
	table: &HtmlTableElement,
	settings: &FilterSettings,
) -> Result<()> {
	let Some(parent) = table.parent_node() else {
		return Ok(());
	};

	let toolbar: HtmlDivElement = create(document, "div")?;
	toolbar.set_class_name(&settings.toolbar_class);

	let search = create_text_input(document, &settings.input_class)?;
	search.set_placeholder(&settings.global_placeholder);
	search
		.style()
		.set_property("max-width", &settings.global_max_width)
		.dom()?;
	listen(&search, "input", {
		let table = table.clone();
		let search = search.clone();
		move |_| {
			let needle = normalize(&search.value());
			if let Err(err) = table.set_attribute(GLOBAL_FILTER_ATTRIBUTE, &needle).dom() {
				crate::warn_log!("Failed to store global filter: {}", err);
			}
			refilter(&table);
		}
	})?;

	let clear: HtmlButtonElement = create(document, "button")?;
	clear.set_type("button");
	clear.set_class_name(&settings.clear_button_class);
	clear.set_text_content(Some(settings.clear_label.as_str()));
	listen(&clear, "click", {
		let table = table.clone();
		let search = search.clone();
		move |_| {
			search.set_value("");
			if let Err(err) = table.remove_attribute(GLOBAL_FILTER_ATTRIBUTE).dom() {
				crate::warn_log!("Failed to reset global filter: {}", err);
			}
			if let Some(row) = filter_row_of(&table) {
				for (_, input) in column_inputs(&row) {
					input.set_value("");
				}
			}
			refilter(&table);
		}
	})?;

	toolbar.append_child(&search).dom()?;
	toolbar.append_child(&clear).dom()?;
	let anchor: &Node = table;
	parent.insert_before(&toolbar, Some(anchor)).dom()?;
	Ok(())
}
