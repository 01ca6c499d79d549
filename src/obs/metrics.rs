// self
use crate::{
	obs::{SearchKind, SearchOutcome},
	query::OptionCategory,
};

/// Counts one search stage on `yelp_search_request_total`.
pub fn record_search_outcome(kind: SearchKind, outcome: SearchOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"yelp_search_request_total",
			"kind" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Counts a finished search as a success or failure.
pub fn record_search_result<T, E>(kind: SearchKind, result: &std::result::Result<T, E>) {
	record_search_outcome(kind, SearchOutcome::of(result));
}

/// Counts an option refused during validation on `yelp_search_option_rejected_total`.
pub fn record_rejected_option(category: OptionCategory) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"yelp_search_option_rejected_total",
			"category" => category.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = category;
	}
}
