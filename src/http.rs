//! Transport primitives for issuing signed search requests.
//!
//! The client only needs one operation from an HTTP stack: GET a fully signed URL and hand back
//! the status plus raw body. [`SearchHttpClient`] captures that so callers can plug in their own
//! transport; [`ReqwestHttpClient`] is the default implementation behind the `reqwest` feature.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future returned by [`SearchHttpClient::get`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + 'a + Send>>;

/// Status and raw body of a search response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}

/// Abstraction over HTTP transports able to GET a signed search URL.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can back many clients.
/// Retries, timeouts, and connection pooling are the transport's concern.
pub trait SearchHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Issues a GET for `url` and returns the response without interpreting it.
	fn get(&self, url: Url) -> TransportFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Debug for ReqwestHttpClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ReqwestHttpClient(..)")
	}
}
#[cfg(feature = "reqwest")]
impl SearchHttpClient for ReqwestHttpClient {
	fn get(&self, url: Url) -> TransportFuture<'_> {
		Box::pin(async move {
			let response = self.0.get(url).send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(HttpResponse { status, body })
		})
	}
}
