//! Console logging for the table filter controller
//!
//! Records go to the browser console on WASM and to stderr elsewhere, each
//! prefixed with `[table-filters]` and its level. Failures that make a table
//! lose its filters are reported in every build; chatter is limited to
//! development builds.
//!
//! | Macro | Enabled when | WASM |
//! |-------|--------------|------|
//! | `debug_log!` | `debug_assertions` + `debug-logging` feature | `console.debug` |
//! | `info_log!` | `debug_assertions` | `console.info` |
//! | `warn_log!` | always | `console.warn` |
//! | `error_log!` | always | `console.error` |
//!
//! Disabled levels are checked against a constant, so their formatting code
//! is removed by the optimiser.
//!
//! ## Example
//!
//! ```ignore
//! use table_filters_pages::{debug_log, warn_log};
//!
//! debug_log!("{} of {} rows hidden", summary.hidden(), summary.rows);
//! warn_log!("Skipping table: {}", err);
//! ```

use std::fmt;

/// Prefix of every record.
pub const LOG_TARGET: &str = "table-filters";

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
	/// Per-pass row counts and skip reasons.
	Debug,
	/// Initialisation summaries.
	Info,
	/// A table was skipped or a filter value could not be stored.
	Warn,
	/// Filtering or installation failed.
	Error,
}

impl Level {
	/// Whether records of this level are emitted in the current build.
	pub const fn is_enabled(self) -> bool {
		match self {
			Level::Debug => cfg!(all(debug_assertions, feature = "debug-logging")),
			Level::Info => cfg!(debug_assertions),
			Level::Warn | Level::Error => true,
		}
	}

	/// Upper-case label used in the record prefix.
	pub const fn label(self) -> &'static str {
		match self {
			Level::Debug => "DEBUG",
			Level::Info => "INFO",
			Level::Warn => "WARN",
			Level::Error => "ERROR",
		}
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Renders a record as written to the console.
pub fn format_record(level: Level, message: fmt::Arguments<'_>) -> String {
	format!("[{}] {}: {}", LOG_TARGET, level, message)
}

/// Writes a record if `level` is enabled. Called by the logging macros.
#[doc(hidden)]
pub fn emit(level: Level, message: fmt::Arguments<'_>) {
	if !level.is_enabled() {
		return;
	}
	let record = format_record(level, message);

	#[cfg(target_arch = "wasm32")]
	{
		let value = wasm_bindgen::JsValue::from_str(&record);
		match level {
			Level::Debug => web_sys::console::debug_1(&value),
			Level::Info => web_sys::console::info_1(&value),
			Level::Warn => web_sys::console::warn_1(&value),
			Level::Error => web_sys::console::error_1(&value),
		}
	}

	#[cfg(not(target_arch = "wasm32"))]
	eprintln!("{}", record);
}

/// Logs a debug record (development builds with the `debug-logging` feature).
#[macro_export]
macro_rules! debug_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Debug, format_args!($($arg)*))
	};
}

/// Logs an info record (development builds).
#[macro_export]
macro_rules! info_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Info, format_args!($($arg)*))
	};
}

/// Logs a warning record (all builds).
#[macro_export]
macro_rules! warn_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Warn, format_args!($($arg)*))
	};
}

/// Logs an error record (all builds).
#[macro_export]
macro_rules! error_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Error, format_args!($($arg)*))
	};
}
