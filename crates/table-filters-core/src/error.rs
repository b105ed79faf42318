//! Error type shared by the core and browser crates.

/// Errors raised while configuring or enhancing tables.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
	/// The action keyword list could not be compiled into a pattern.
	#[error("invalid action keyword pattern: {0}")]
	Pattern(#[from] regex::Error),
	/// The JSON configuration could not be parsed.
	#[error("invalid filter settings: {0}")]
	Settings(#[from] serde_json::Error),
	/// Window object not available.
	#[error("window object not available")]
	NoWindow,
	/// Document object not available.
	#[error("document object not available")]
	NoDocument,
	/// A DOM call returned an error value.
	#[error("DOM operation failed: {0}")]
	Dom(String),
}

/// Result alias using [`FilterError`].
pub type Result<T> = std::result::Result<T, FilterError>;
