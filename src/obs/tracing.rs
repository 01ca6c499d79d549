// self
use crate::{_prelude::*, obs::SearchKind};

/// Search future, instrumented when `tracing` is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedSearch<F> = tracing::instrument::Instrumented<F>;
/// Search future, unchanged when `tracing` is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedSearch<F> = F;

/// Span around one search or one signature computation.
#[derive(Clone, Debug)]
pub struct SearchSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl SearchSpan {
	/// Opens the `yelp_search.request` span for a search sent to `endpoint`.
	pub fn request(kind: SearchKind, endpoint: &Url) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"yelp_search.request",
				kind = kind.as_str(),
				host = endpoint.host_str().unwrap_or_default(),
				path = endpoint.path(),
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, endpoint);

			Self {}
		}
	}

	/// Opens the `yelp_search.sign` span for a query holding `parameters` caller elements.
	pub fn signing(method: &str, parameters: usize) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!("yelp_search.sign", method, parameters);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (method, parameters);

			Self {}
		}
	}

	/// Enters the span for the synchronous signing path.
	pub fn entered(self) -> SearchSpanGuard {
		#[cfg(feature = "tracing")]
		{
			SearchSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			SearchSpanGuard {}
		}
	}

	/// Attaches the span to a search future so it is active across transport awaits.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedSearch<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Keeps a [`SearchSpan`] entered until dropped.
pub struct SearchSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for SearchSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("SearchSpanGuard(..)")
	}
}
