//! Filter state and the row visibility predicate.
//!
//! A [`FilterState`] is a snapshot of the column inputs and the global search
//! value of one table. A row is visible when it satisfies every active
//! column filter and, if a global needle is set, at least one of its cells
//! contains it. Matching is plain substring containment on trimmed,
//! lower-cased text.

/// Trims and lower-cases `text` for comparison.
pub fn normalize(text: &str) -> String {
	text.trim().to_lowercase()
}

/// Positional access to the text of a row's cells.
pub trait RowCells {
	/// Number of cells in the row.
	fn cell_count(&self) -> usize;

	/// Text of the cell at `index`, or `None` if the row has no such cell.
	fn cell_text(&self, index: usize) -> Option<String>;
}

impl<S: AsRef<str>> RowCells for [S] {
	fn cell_count(&self) -> usize {
		self.len()
	}

	fn cell_text(&self, index: usize) -> Option<String> {
		self.get(index).map(|s| s.as_ref().to_string())
	}
}

impl<S: AsRef<str>> RowCells for Vec<S> {
	fn cell_count(&self) -> usize {
		self.len()
	}

	fn cell_text(&self, index: usize) -> Option<String> {
		self.as_slice().cell_text(index)
	}
}

/// An active filter on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
	/// Column index the filter applies to.
	pub column: usize,
	/// Normalised, non-empty needle.
	pub needle: String,
}

/// The filter values of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
	/// Sorted by column index, at most one filter per column.
	columns: Vec<ColumnFilter>,
	global: String,
}

impl FilterState {
	/// Creates an empty state; every row is visible.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a state from raw `(column, value)` input pairs and a raw global value.
	///
	/// Values are normalised; empty values are not active filters.
	pub fn from_inputs<I, S>(inputs: I, global: &str) -> Self
	where
		I: IntoIterator<Item = (usize, S)>,
		S: AsRef<str>,
	{
		let mut state = Self::new();
		for (column, value) in inputs {
			state.set_column(column, value.as_ref());
		}
		state.set_global(global);
		state
	}

	/// Sets the filter for `column`. An empty value removes it.
	pub fn set_column(&mut self, column: usize, raw: &str) {
		let needle = normalize(raw);
		match (
			self.columns.binary_search_by_key(&column, |f| f.column),
			needle.is_empty(),
		) {
			(Ok(pos), true) => {
				self.columns.remove(pos);
			}
			(Ok(pos), false) => self.columns[pos].needle = needle,
			(Err(_), true) => {}
			(Err(pos), false) => self.columns.insert(pos, ColumnFilter { column, needle }),
		}
	}

	/// Sets the global needle. An empty value removes it.
	pub fn set_global(&mut self, raw: &str) {
		self.global = normalize(raw);
	}

	/// Removes every filter.
	pub fn clear(&mut self) {
		self.columns.clear();
		self.global.clear();
	}

	/// Active column filters in column-index order.
	pub fn column_filters(&self) -> &[ColumnFilter] {
		&self.columns
	}

	/// The global needle, if set.
	pub fn global(&self) -> Option<&str> {
		if self.global.is_empty() {
			None
		} else {
			Some(&self.global)
		}
	}

	/// Returns true if any filter is active.
	pub fn is_active(&self) -> bool {
		!self.columns.is_empty() || !self.global.is_empty()
	}

	/// Decides whether `row` is visible under this state.
	pub fn row_visible<R: RowCells + ?Sized>(&self, row: &R) -> bool {
		if !self.is_active() {
			return true;
		}
		let columns_match = self.column_filters().iter().all(|filter| {
			row.cell_text(filter.column)
				.is_some_and(|text| normalize(&text).contains(filter.needle.as_str()))
		});
		if !columns_match {
			return false;
		}
		match self.global() {
			None => true,
			Some(needle) => (0..row.cell_count()).any(|index| {
				row.cell_text(index)
					.is_some_and(|text| normalize(&text).contains(needle))
			}),
		}
	}
}

/// Row counts of one visibility pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
	/// Rows examined.
	pub rows: usize,
	/// Rows left visible.
	pub visible: usize,
}

impl FilterSummary {
	/// Records one row.
	pub fn record(&mut self, visible: bool) {
		self.rows += 1;
		if visible {
			self.visible += 1;
		}
	}

	/// Rows hidden by the pass.
	pub fn hidden(&self) -> usize {
		self.rows - self.visible
	}
}
