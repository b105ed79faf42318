//! Filter settings and the DOM contract names.
//!
//! The attribute and class names below form the contract with the page
//! markup and are shared by initialisation and re-application, so they are
//! constants rather than settings. Everything user-visible (labels, CSS
//! classes, the action keyword list) lives in [`FilterSettings`].
//!
//! ## Example
//!
//! ```
//! use table_filters_core::FilterSettings;
//!
//! let settings = FilterSettings::from_json(r#"{"clear_label": "Clear"}"#).unwrap();
//! assert_eq!(settings.clear_label, "Clear");
//! assert_eq!(settings.global_placeholder, "Pesquisar na tabela");
//! ```

use serde::Deserialize;

use crate::error::Result;

/// Table attribute that disables filtering when set to [`FILTER_OFF_VALUE`].
pub const FILTER_ATTRIBUTE: &str = "data-filter";

/// Value of [`FILTER_ATTRIBUTE`] that opts a table out.
pub const FILTER_OFF_VALUE: &str = "off";

/// Table class that opts a table out.
pub const NO_FILTER_CLASS: &str = "no-filter";

/// Header cell attribute that opts a column out when set to `"true"`.
pub const NO_FILTER_COLUMN_ATTRIBUTE: &str = "data-nofilter";

/// Attribute binding a filter input to its column index.
pub const COLUMN_INDEX_ATTRIBUTE: &str = "data-col-index";

/// Table attribute holding the normalised global filter.
pub const GLOBAL_FILTER_ATTRIBUTE: &str = "data-global-filter";

/// Class of the synthetic filter row; its presence marks a table as initialised.
pub const FILTER_ROW_CLASS: &str = "table-filters-row";

/// User-facing configuration of the injected controls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
	/// Header labels containing any of these (case-insensitive) get no filter input.
	pub action_keywords: Vec<String>,
	/// Placeholder prefix, followed by the column label.
	pub placeholder_prefix: String,
	/// Placeholder for columns with an empty header.
	pub placeholder_fallback: String,
	/// Placeholder of the global search box.
	pub global_placeholder: String,
	/// CSS `max-width` of the global search box.
	pub global_max_width: String,
	/// Text of the clear button.
	pub clear_label: String,
	/// Classes applied to every injected text input.
	pub input_class: String,
	/// Classes applied to the clear button.
	pub clear_button_class: String,
	/// Classes applied to the toolbar container.
	pub toolbar_class: String,
}

impl Default for FilterSettings {
	fn default() -> Self {
		Self {
			action_keywords: ["ação", "ações", "acoes", "actions"]
				.into_iter()
				.map(String::from)
				.collect(),
			placeholder_prefix: "Filtrar".to_string(),
			placeholder_fallback: "Filtrar".to_string(),
			global_placeholder: "Pesquisar na tabela".to_string(),
			global_max_width: "280px".to_string(),
			clear_label: "Limpar filtros".to_string(),
			input_class: "form-control form-control-sm".to_string(),
			clear_button_class: "btn btn-sm btn-outline-secondary".to_string(),
			toolbar_class: "table-filter-toolbar d-flex flex-wrap align-items-center gap-2 mb-2"
				.to_string(),
		}
	}
}

impl FilterSettings {
	/// Parses settings from a JSON object. Missing fields keep their defaults.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Builds the placeholder for a column with the given normalised label.
	pub fn placeholder_for(&self, label: &str) -> String {
		if label.is_empty() {
			self.placeholder_fallback.clone()
		} else {
			format!("{} {}", self.placeholder_prefix, label)
		}
	}
}

/// Returns true when a table's markers opt it out of filtering.
///
/// `marker` is the value of [`FILTER_ATTRIBUTE`], `has_no_filter_class`
/// whether the table's class list contains [`NO_FILTER_CLASS`].
pub fn is_table_disabled(marker: Option<&str>, has_no_filter_class: bool) -> bool {
	marker == Some(FILTER_OFF_VALUE) || has_no_filter_class
}
