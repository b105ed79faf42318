//! Thin helpers over `web-sys` used by the controller.

use table_filters_core::settings::{COLUMN_INDEX_ATTRIBUTE, FILTER_ROW_CLASS};
use table_filters_core::{FilterError, Result, RowCells};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
	Document, Element, HtmlCollection, HtmlInputElement, HtmlTableElement, HtmlTableRowElement,
	NodeList, Window,
};

/// Converts `web-sys` results into [`FilterError::Dom`].
pub(crate) trait JsResultExt<T> {
	fn dom(self) -> Result<T>;
}

impl<T> JsResultExt<T> for std::result::Result<T, JsValue> {
	fn dom(self) -> Result<T> {
		self.map_err(|value| {
			FilterError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
		})
	}
}

pub(crate) fn window() -> Result<Window> {
	web_sys::window().ok_or(FilterError::NoWindow)
}

pub(crate) fn document() -> Result<Document> {
	window()?.document().ok_or(FilterError::NoDocument)
}

/// Collects the items of a live collection that cast to `T`.
pub(crate) fn elements<T: JsCast>(collection: &HtmlCollection) -> Vec<T> {
	(0..collection.length())
		.filter_map(|i| collection.item(i))
		.filter_map(|element| element.dyn_into::<T>().ok())
		.collect()
}

/// Collects the nodes of a static node list that cast to `T`.
pub(crate) fn nodes<T: JsCast>(list: &NodeList) -> Vec<T> {
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<T>().ok())
		.collect()
}

/// Creates an element and casts it to its concrete type.
pub(crate) fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T> {
	document
		.create_element(tag)
		.dom()?
		.dyn_into::<T>()
		.map_err(|_| FilterError::Dom(format!("<{}> has an unexpected element type", tag)))
}

/// Creates a text input with the given classes.
pub(crate) fn create_text_input(document: &Document, class: &str) -> Result<HtmlInputElement> {
	let input: HtmlInputElement = create(document, "input")?;
	input.set_type("text");
	input.set_class_name(class);
	Ok(input)
}

/// The filter row of an initialised table.
pub(crate) fn filter_row_of(table: &HtmlTableElement) -> Option<Element> {
	table
		.t_head()?
		.query_selector(&format!(".{}", FILTER_ROW_CLASS))
		.ok()
		.flatten()
}

/// The column inputs of an initialised table, paired with their column index.
///
/// Inputs without a parsable index are ignored.
pub(crate) fn column_inputs(filter_row: &Element) -> Vec<(usize, HtmlInputElement)> {
	let Ok(list) = filter_row.query_selector_all(&format!("input[{}]", COLUMN_INDEX_ATTRIBUTE))
	else {
		return Vec::new();
	};
	nodes::<HtmlInputElement>(&list)
		.into_iter()
		.filter_map(|input| {
			let index = input.get_attribute(COLUMN_INDEX_ATTRIBUTE)?.parse().ok()?;
			Some((index, input))
		})
		.collect()
}

/// Shows or hides a body row.
pub(crate) fn set_row_visible(row: &HtmlTableRowElement, visible: bool) -> Result<()> {
	let style = row.style();
	if visible {
		style.remove_property("display").dom()?;
	} else {
		style.set_property("display", "none").dom()?;
	}
	Ok(())
}

/// A body row viewed through its cells' text content.
pub(crate) struct DomRow<'a>(pub(crate) &'a HtmlTableRowElement);

impl RowCells for DomRow<'_> {
	fn cell_count(&self) -> usize {
		self.0.cells().length() as usize
	}

	fn cell_text(&self, index: usize) -> Option<String> {
		let index = u32::try_from(index).ok()?;
		self.0
			.cells()
			.item(index)
			.map(|cell| cell.text_content().unwrap_or_default())
	}
}

/// Attaches `handler` to `event` on `target` for the lifetime of the page.
pub(crate) fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<()>
where
	F: FnMut(web_sys::Event) + 'static,
{
	use wasm_bindgen::closure::Closure;

	let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
	target
		.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
		.dom()?;
	// Enhanced tables live as long as the document
	closure.forget();
	Ok(())
}
