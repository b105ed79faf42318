//! JavaScript entry points.
//!
//! Pages either call the exported functions directly or rely on
//! [`install`], which waits for the document to be parsed and publishes
//! `window.TableFilters = { init, apply }` for scripts that add rows later.

use std::rc::Rc;

use table_filters_core::{FilterError, FilterSettings, Result};
use wasm_bindgen::prelude::*;

use crate::controller::{TableFilters, apply_all};
use crate::dom::{JsResultExt, document, listen, window};

/// Name of the global object published by [`install`].
pub const GLOBAL_API_NAME: &str = "TableFilters";

fn to_js(err: FilterError) -> JsValue {
	JsValue::from_str(&err.to_string())
}

/// Initialises filtering now, or on `DOMContentLoaded` while the document is
/// still loading, and publishes `window.TableFilters`.
pub fn install(settings: FilterSettings) -> Result<()> {
	let filters = Rc::new(TableFilters::new(settings)?);
	publish_global_api(Rc::clone(&filters))?;

	let document = document()?;
	if document.ready_state() == "loading" {
		listen(&document, "DOMContentLoaded", move |_| {
			if let Err(err) = filters.init() {
				crate::error_log!("Table filter initialisation failed: {}", err);
			}
		})?;
	} else {
		filters.init()?;
	}
	Ok(())
}

fn publish_global_api(filters: Rc<TableFilters>) -> Result<()> {
	let api = js_sys::Object::new();

	let init = Closure::wrap(Box::new(move || match filters.init() {
		Ok(count) => count as u32,
		Err(err) => {
			crate::error_log!("TableFilters.init failed: {}", err);
			0
		}
	}) as Box<dyn FnMut() -> u32>);
	let apply = Closure::wrap(Box::new(|| match apply_all() {
		Ok(count) => count as u32,
		Err(err) => {
			crate::error_log!("TableFilters.apply failed: {}", err);
			0
		}
	}) as Box<dyn FnMut() -> u32>);

	js_sys::Reflect::set(&api, &JsValue::from_str("init"), init.as_ref()).dom()?;
	js_sys::Reflect::set(&api, &JsValue::from_str("apply"), apply.as_ref()).dom()?;
	init.forget();
	apply.forget();

	js_sys::Reflect::set(&window()?, &JsValue::from_str(GLOBAL_API_NAME), &api).dom()?;
	Ok(())
}

/// Enhances every eligible table with the default settings.
///
/// Returns the number of tables enhanced.
#[wasm_bindgen(js_name = initTableFilters)]
pub fn init_table_filters() -> std::result::Result<u32, JsValue> {
	let filters = TableFilters::new(FilterSettings::default()).map_err(to_js)?;
	Ok(filters.init().map_err(to_js)? as u32)
}

/// Enhances every eligible table with settings given as a JSON object.
#[wasm_bindgen(js_name = initTableFiltersWithConfig)]
pub fn init_table_filters_with_config(config: &str) -> std::result::Result<u32, JsValue> {
	let settings = FilterSettings::from_json(config).map_err(to_js)?;
	let filters = TableFilters::new(settings).map_err(to_js)?;
	Ok(filters.init().map_err(to_js)? as u32)
}

/// Re-applies the current filters to every enhanced table.
#[wasm_bindgen(js_name = applyTableFilters)]
pub fn apply_table_filters() -> std::result::Result<u32, JsValue> {
	Ok(apply_all().map_err(to_js)? as u32)
}

/// Readiness-aware initialisation with the default settings.
#[wasm_bindgen(js_name = installTableFilters)]
pub fn install_table_filters() -> std::result::Result<(), JsValue> {
	install(FilterSettings::default()).map_err(to_js)
}

/// WASM start function, enabled by the `autostart` feature.
#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	install_table_filters()
}
