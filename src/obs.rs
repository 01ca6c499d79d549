//! Optional instrumentation for searches and request signing.
//!
//! # Feature Flags
//!
//! - `tracing`: every search runs inside a `yelp_search.request` span carrying the query `kind`
//!   and the endpoint `host`/`path`; every signature is computed inside a `yelp_search.sign` span
//!   carrying the HTTP `method` and the number of caller `parameters`.
//! - `metrics`: `yelp_search_request_total` counts searches by `kind` and `outcome`, and
//!   `yelp_search_option_rejected_total` counts options refused during validation by `category`.
//!
//! Without the features every helper is a no-op.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// How the query behind a search was assembled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchKind {
	/// [`Client::search_query`](crate::client::Client::search_query) with a ready-made container.
	Query,
	/// [`Client::search_options`](crate::client::Client::search_options) with typed options.
	Options,
}
impl SearchKind {
	/// Label used for the `kind` span field and metric label.
	pub const fn as_str(self) -> &'static str {
		match self {
			SearchKind::Query => "query",
			SearchKind::Options => "options",
		}
	}
}
impl Display for SearchKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Stage a search reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
	/// The search was requested.
	Attempt,
	/// Results were decoded.
	Success,
	/// Validation, transport, decoding, or the API itself failed the search.
	Failure,
}
impl SearchOutcome {
	/// Maps a finished search to [`SearchOutcome::Success`] or [`SearchOutcome::Failure`].
	pub fn of<T, E>(result: &std::result::Result<T, E>) -> Self {
		match result {
			Ok(_) => Self::Success,
			Err(_) => Self::Failure,
		}
	}

	/// Label used for the `outcome` metric label.
	pub const fn as_str(self) -> &'static str {
		match self {
			SearchOutcome::Attempt => "attempt",
			SearchOutcome::Success => "success",
			SearchOutcome::Failure => "failure",
		}
	}
}
impl Display for SearchOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
