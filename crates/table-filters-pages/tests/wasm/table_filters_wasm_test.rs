#![cfg(target_arch = "wasm32")]

//! Browser tests for table discovery, filtering and re-application.
//!
//! Run with:
//!   wasm-pack test --chrome --headless crates/table-filters-pages

use table_filters_pages::entry::init_table_filters_with_config;
use table_filters_pages::{FilterSettings, TableFilters, apply_all, install};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{
	Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTableRowElement,
};

wasm_bindgen_test_configure!(run_in_browser);

const PEOPLE_TABLE: &str = r#"
<table id="people">
	<thead><tr><th>Name</th><th>Ações</th></tr></thead>
	<tbody>
		<tr><td>Alice</td><td>Edit</td></tr>
		<tr><td>Bob</td><td>Edit</td></tr>
	</tbody>
</table>"#;

/// A container appended to `<body>` and removed when dropped, so tests
/// sharing the page do not see each other's tables.
struct Fixture {
	root: HtmlElement,
}

impl Fixture {
	fn new(html: &str) -> Self {
		let document = web_sys::window().unwrap().document().unwrap();
		let root: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
		root.set_inner_html(html);
		document.body().unwrap().append_child(&root).unwrap();
		Self { root }
	}

	fn query(&self, selector: &str) -> Element {
		self.root
			.query_selector(selector)
			.unwrap()
			.unwrap_or_else(|| panic!("no element matches {}", selector))
	}

	fn count(&self, selector: &str) -> u32 {
		self.root.query_selector_all(selector).unwrap().length()
	}

	fn input(&self, selector: &str) -> HtmlInputElement {
		self.query(selector).dyn_into().unwrap()
	}

	fn body_rows(&self) -> Vec<HtmlTableRowElement> {
		let list = self.root.query_selector_all("tbody tr").unwrap();
		(0..list.length())
			.filter_map(|i| list.item(i))
			.map(|node| node.dyn_into().unwrap())
			.collect()
	}

	/// First-cell text of the rows currently shown.
	fn visible_names(&self) -> Vec<String> {
		self.body_rows()
			.into_iter()
			.filter(|row| row.style().get_property_value("display").unwrap() != "none")
			.map(|row| row.cells().item(0).unwrap().text_content().unwrap())
			.collect()
	}
}

impl Drop for Fixture {
	fn drop(&mut self) {
		self.root.remove();
	}
}

fn init() {
	TableFilters::new(FilterSettings::default())
		.unwrap()
		.init()
		.unwrap();
}

fn type_into(input: &HtmlInputElement, value: &str) {
	input.set_value(value);
	input.dispatch_event(&Event::new("input").unwrap()).unwrap();
}

#[wasm_bindgen_test]
fn test_init_adds_one_toolbar_and_filter_row() {
	let fixture = Fixture::new(PEOPLE_TABLE);
	init();

	assert_eq!(fixture.count(".table-filter-toolbar"), 1);
	assert_eq!(fixture.count("thead .table-filters-row"), 1);
	let toolbar = fixture.query(".table-filter-toolbar");
	let table = fixture.query("#people");
	assert_eq!(toolbar.next_element_sibling().unwrap(), table);
}

#[wasm_bindgen_test]
fn test_init_is_idempotent() {
	let fixture = Fixture::new(PEOPLE_TABLE);
	init();
	let after_first = fixture.root.inner_html();
	init();

	assert_eq!(fixture.root.inner_html(), after_first);
	assert_eq!(fixture.count(".table-filter-toolbar"), 1);
	assert_eq!(fixture.count(".table-filters-row"), 1);
}

#[wasm_bindgen_test]
fn test_action_column_has_no_input() {
	let fixture = Fixture::new(PEOPLE_TABLE);
	init();

	assert_eq!(fixture.count(".table-filters-row input"), 1);
	let input = fixture.input(".table-filters-row input");
	assert_eq!(input.get_attribute("data-col-index").as_deref(), Some("0"));
	assert_eq!(input.placeholder(), "Filtrar name");
	assert_eq!(fixture.count(".table-filters-row th"), 2);
}

#[wasm_bindgen_test]
fn test_column_opt_out_marker() {
	let fixture = Fixture::new(
		r#"<table><thead><tr><th data-nofilter="true">Photo</th><th>City</th><th></th></tr></thead>
		<tbody><tr><td>x</td><td>Recife</td><td>y</td></tr></tbody></table>"#,
	);
	init();

	let indices: Vec<String> = {
		let list = fixture
			.root
			.query_selector_all(".table-filters-row input")
			.unwrap();
		(0..list.length())
			.map(|i| {
				let input: HtmlInputElement = list.item(i).unwrap().dyn_into().unwrap();
				input.get_attribute("data-col-index").unwrap()
			})
			.collect()
	};
	assert_eq!(indices, vec!["1", "2"]);
	assert_eq!(
		fixture.input(r#"input[data-col-index="2"]"#).placeholder(),
		"Filtrar"
	);
}

#[wasm_bindgen_test]
fn test_column_filter_scenario() {
	let fixture = Fixture::new(PEOPLE_TABLE);
	init();

	type_into(&fixture.input(".table-filters-row input"), "ali");
	assert_eq!(fixture.visible_names(), vec!["Alice"]);

	type_into(&fixture.input(".table-filters-row input"), "");
	assert_eq!(fixture.visible_names(), vec!["Alice", "Bob"]);
}

#[wasm_bindgen_test]
fn test_global_search_scenario() {
	let fixture = Fixture::new(PEOPLE_TABLE);
	init();

	type_into(&fixture.input(".table-filter-toolbar input"), "  ALI ");
	assert_eq!(fixture.visible_names(), vec!["Alice"]);
	assert_eq!(
		fixture.query("#people").get_attribute("data-global-filter").as_deref(),
		Some("ali")
	);

	// Excluded columns are still searched globally
	type_into(&fixture.input(".table-filter-toolbar input"), "edit");
	assert_eq!(fixture.visible_names(), vec!["Alice", "Bob"]);
}

#[wasm_bindgen_test]
fn test_clear_button_resets_everything() {
	let fixture = Fixture::new(PEOPLE_TABLE);
	init();
	let column = fixture.input(".table-filters-row input");
	let global = fixture.input(".table-filter-toolbar input");
	type_into(&column, "ali");
	type_into(&global, "alice");
	assert_eq!(fixture.visible_names(), vec!["Alice"]);

	let clear: HtmlButtonElement = fixture.query(".table-filter-toolbar button").dyn_into().unwrap();
	assert_eq!(clear.text_content().as_deref(), Some("Limpar filtros"));
	clear.click();

	assert_eq!(column.value(), "");
	assert_eq!(global.value(), "");
	assert!(!fixture.query("#people").has_attribute("data-global-filter"));
	assert_eq!(fixture.visible_names(), vec!["Alice", "Bob"]);
}

#[wasm_bindgen_test]
fn test_table_without_header_is_untouched() {
	let fixture = Fixture::new(
		r#"<table id="bare"><tbody><tr><td>Alice</td></tr></tbody></table>"#,
	);
	let before = fixture.root.inner_html();
	init();

	assert_eq!(fixture.root.inner_html(), before);
}

#[wasm_bindgen_test]
fn test_opted_out_tables_are_untouched() {
	let fixture = Fixture::new(
		r#"<table data-filter="off"><thead><tr><th>A</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>
		<table class="striped no-filter"><thead><tr><th>B</th></tr></thead><tbody><tr><td>2</td></tr></tbody></table>"#,
	);
	let before = fixture.root.inner_html();
	init();

	assert_eq!(fixture.root.inner_html(), before);
}

#[wasm_bindgen_test]
fn test_filter_row_follows_first_header_row() {
	let fixture = Fixture::new(
		r#"<table><thead><tr id="top"><th>Name</th></tr><tr id="sub"><th>sub</th></tr></thead>
		<tbody><tr><td>Alice</td></tr></tbody></table>"#,
	);
	init();

	let top = fixture.query("#top");
	let next = top.next_element_sibling().unwrap();
	assert!(next.class_list().contains("table-filters-row"));
	assert_eq!(next.next_element_sibling().unwrap().id(), "sub");
}

#[wasm_bindgen_test]
fn test_apply_all_filters_added_rows() {
	let fixture = Fixture::new(PEOPLE_TABLE);
	init();
	type_into(&fixture.input(".table-filters-row input"), "ali");

	fixture
		.query("#people tbody")
		.insert_adjacent_html(
			"beforeend",
			"<tr><td>Alicia</td><td>Edit</td></tr><tr><td>Carol</td><td>Edit</td></tr>",
		)
		.unwrap();
	apply_all().unwrap();

	assert_eq!(fixture.visible_names(), vec!["Alice", "Alicia"]);
}

#[wasm_bindgen_test]
fn test_apply_all_leaves_plain_tables_alone() {
	let fixture = Fixture::new(
		r#"<table class="no-filter"><thead><tr><th>A</th></tr></thead>
		<tbody><tr style="display: none"><td>hidden by the page</td></tr></tbody></table>"#,
	);
	init();
	apply_all().unwrap();

	assert!(fixture.visible_names().is_empty());
}

#[wasm_bindgen_test]
fn test_custom_settings_labels() {
	let fixture = Fixture::new(PEOPLE_TABLE);
	let settings = FilterSettings::from_json(
		r#"{"placeholder_prefix": "Filter", "clear_label": "Clear", "global_placeholder": "Search"}"#,
	)
	.unwrap();
	TableFilters::new(settings).unwrap().init().unwrap();

	assert_eq!(fixture.input(".table-filters-row input").placeholder(), "Filter name");
	assert_eq!(fixture.input(".table-filter-toolbar input").placeholder(), "Search");
	assert_eq!(
		fixture.query(".table-filter-toolbar button").text_content().as_deref(),
		Some("Clear")
	);
}

#[wasm_bindgen_test]
fn test_header_without_rows_is_untouched() {
	let fixture = Fixture::new(
		r#"<table><thead></thead><tbody><tr><td>Alice</td></tr></tbody></table>"#,
	);
	let before = fixture.root.inner_html();
	init();
	init();

	assert_eq!(fixture.root.inner_html(), before);
}

#[wasm_bindgen_test]
fn test_global_filter_with_every_column_excluded() {
	let fixture = Fixture::new(
		r#"<table id="actions"><thead><tr><th>Ações</th><th data-nofilter="true">Actions</th></tr></thead>
		<tbody><tr><td>Alice</td><td>Edit</td></tr><tr><td>Bob</td><td>Remove</td></tr></tbody></table>"#,
	);
	init();
	assert_eq!(fixture.count(".table-filters-row"), 1);
	assert_eq!(fixture.count(".table-filters-row input"), 0);

	type_into(&fixture.input(".table-filter-toolbar input"), "remove");

	assert_eq!(fixture.visible_names(), vec!["Bob"]);
}

#[wasm_bindgen_test]
fn test_install_publishes_global_api() {
	let fixture = Fixture::new(PEOPLE_TABLE);
	install(FilterSettings::default()).unwrap();
	assert_eq!(fixture.count(".table-filters-row"), 1);

	let window = web_sys::window().unwrap();
	let api = js_sys::Reflect::get(&window, &JsValue::from_str("TableFilters")).unwrap();
	assert!(api.is_object());
	let init_fn: js_sys::Function = js_sys::Reflect::get(&api, &JsValue::from_str("init"))
		.unwrap()
		.dyn_into()
		.unwrap();
	let apply_fn: js_sys::Function = js_sys::Reflect::get(&api, &JsValue::from_str("apply"))
		.unwrap()
		.dyn_into()
		.unwrap();

	// The table is already enhanced, so init from JS adds nothing to it
	init_fn.call0(&JsValue::NULL).unwrap();
	assert_eq!(fixture.count(".table-filters-row"), 1);
	assert_eq!(fixture.count(".table-filter-toolbar"), 1);

	type_into(&fixture.input(".table-filters-row input"), "ali");
	fixture
		.query("#people tbody")
		.insert_adjacent_html(
			"beforeend",
			"<tr><td>Alicia</td><td>Edit</td></tr><tr><td>Carol</td><td>Edit</td></tr>",
		)
		.unwrap();
	let applied = apply_fn.call0(&JsValue::NULL).unwrap();

	assert!(applied.as_f64().unwrap() >= 1.0);
	assert_eq!(fixture.visible_names(), vec!["Alice", "Alicia"]);
}

#[wasm_bindgen_test]
fn test_init_with_invalid_config_is_rejected() {
	let fixture = Fixture::new(PEOPLE_TABLE);
	let before = fixture.root.inner_html();

	let err = init_table_filters_with_config("{").unwrap_err();

	assert!(err.as_string().unwrap().starts_with("invalid filter settings"));
	assert_eq!(fixture.root.inner_html(), before);
}

#[wasm_bindgen_test]
fn test_init_with_config_applies_settings() {
	let fixture = Fixture::new(PEOPLE_TABLE);

	init_table_filters_with_config(r#"{"clear_label": "Reset"}"#).unwrap();

	assert_eq!(
		fixture.query(".table-filter-toolbar button").text_content().as_deref(),
		Some("Reset")
	);
}
