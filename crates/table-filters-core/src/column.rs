//! Column classification.
//!
//! A table's first header row is read once at initialisation into a
//! [`TableLayout`]. Columns whose header is marked with
//! `data-nofilter="true"` or whose label mentions an action keyword are
//! excluded from per-column filtering.

use regex::{Regex, RegexBuilder};

use crate::error::Result;
use crate::filter::normalize;
use crate::settings::FilterSettings;

/// Raw header cell data as read from the DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderCell {
	/// The cell's text content, untrimmed.
	pub text: String,
	/// Whether the cell carries the explicit opt-out marker.
	pub opt_out: bool,
}

impl HeaderCell {
	/// Creates a header cell without the opt-out marker.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			opt_out: false,
		}
	}

	/// Sets the opt-out marker.
	pub fn opt_out(mut self, opt_out: bool) -> Self {
		self.opt_out = opt_out;
		self
	}
}

/// A classified column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
	/// Positional index in the header row.
	pub index: usize,
	/// Trimmed, lower-cased header text.
	pub label: String,
	/// Whether the column gets no filter input.
	pub excluded: bool,
}

/// Decides which columns take part in per-column filtering.
#[derive(Debug, Clone)]
pub struct ColumnClassifier {
	keywords: Option<Regex>,
}

impl ColumnClassifier {
	/// Compiles the action keyword list of `settings`.
	///
	/// Keywords are matched literally, unanchored and case-insensitively.
	/// An empty list disables keyword exclusion.
	pub fn new(settings: &FilterSettings) -> Result<Self> {
		let alternatives: Vec<String> = settings
			.action_keywords
			.iter()
			.filter(|k| !k.is_empty())
			.map(|k| regex::escape(k))
			.collect();
		if alternatives.is_empty() {
			return Ok(Self { keywords: None });
		}
		let pattern = RegexBuilder::new(&alternatives.join("|"))
			.case_insensitive(true)
			.build()?;
		Ok(Self {
			keywords: Some(pattern),
		})
	}

	/// Returns true when `label` names an action-like column.
	pub fn is_action_label(&self, label: &str) -> bool {
		self.keywords
			.as_ref()
			.is_some_and(|pattern| pattern.is_match(label))
	}

	/// Classifies a single header cell at `index`.
	pub fn classify(&self, index: usize, cell: &HeaderCell) -> ColumnSpec {
		let label = normalize(&cell.text);
		let excluded = cell.opt_out || self.is_action_label(&label);
		ColumnSpec {
			index,
			label,
			excluded,
		}
	}
}

/// The per-table column configuration computed at initialisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableLayout {
	columns: Vec<ColumnSpec>,
}

impl TableLayout {
	/// Classifies the header cells of a table's first header row.
	pub fn from_headers<I>(headers: I, classifier: &ColumnClassifier) -> Self
	where
		I: IntoIterator<Item = HeaderCell>,
	{
		let columns = headers
			.into_iter()
			.enumerate()
			.map(|(index, cell)| classifier.classify(index, &cell))
			.collect();
		Self { columns }
	}

	/// All columns in positional order.
	pub fn columns(&self) -> &[ColumnSpec] {
		&self.columns
	}

	/// Columns that receive a filter input.
	pub fn filterable(&self) -> impl Iterator<Item = &ColumnSpec> {
		self.columns.iter().filter(|c| !c.excluded)
	}

	/// Number of columns.
	pub fn len(&self) -> usize {
		self.columns.len()
	}

	/// Returns true if the header row had no cells.
	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}
}
