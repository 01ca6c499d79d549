//! Search client that applies options, signs the query, and decodes the response.
//!
//! [`Client::search_query`] takes its [`QueryContainer`] by value: signing appends the OAuth
//! parameters to the container it is given, so callers that want to reuse a query clone it first.

// self
use crate::{
	_prelude::*,
	error::DecodeError,
	http::{HttpResponse, SearchHttpClient},
	model::{ApiError, Businesses},
	oauth::Signer,
	obs::{self, SearchKind, SearchOutcome, SearchSpan},
	query::QueryContainer,
	search::SearchOption,
};
#[cfg(feature = "reqwest")]
use crate::{error::ConfigError, http::ReqwestHttpClient, oauth::Credentials};

/// Search endpoint of the v2 API.
pub const DEFAULT_ENDPOINT: &str = "http://api.yelp.com/v2/search";

const METHOD: &str = "GET";

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestSearchClient = Client<ReqwestHttpClient>;

/// Issues signed searches against a single endpoint.
#[derive(Clone)]
pub struct Client<C>
where
	C: ?Sized + SearchHttpClient,
{
	/// Endpoint URL. Any query string or fragment is dropped before signing.
	pub endpoint: Url,
	/// Signer holding the client's credentials.
	pub signer: Arc<Signer>,
	/// Transport used for every request.
	pub http_client: Arc<C>,
}
impl<C> Client<C>
where
	C: ?Sized + SearchHttpClient,
{
	/// Creates a client over a caller-provided transport.
	pub fn with_http_client(
		endpoint: Url,
		signer: impl Into<Arc<Signer>>,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { endpoint, signer: signer.into(), http_client: http_client.into() }
	}

	/// Signs `query` and returns the endpoint URL carrying it.
	///
	/// The signature covers the endpoint without its query string and fragment, which is exactly
	/// the base URL sent. Useful for callers that bring their own transport.
	pub fn signed_url(&self, mut query: QueryContainer) -> Url {
		let mut url = self.endpoint.clone();

		url.set_query(None);
		url.set_fragment(None);
		self.signer.sign(METHOD, url.as_str(), &mut query);
		url.set_query(Some(&query.serialize()));

		url
	}

	/// Runs a search for a manually assembled query.
	pub async fn search_query(&self, query: QueryContainer) -> Result<Businesses> {
		const KIND: SearchKind = SearchKind::Query;

		let span = SearchSpan::request(KIND, &self.endpoint);

		obs::record_search_outcome(KIND, SearchOutcome::Attempt);

		let result = span.instrument(self.execute(query)).await;

		obs::record_search_result(KIND, &result);

		result
	}

	/// Runs a search built from typed options, applied in order.
	///
	/// The first option that fails validation aborts the search before anything is sent.
	pub async fn search_options<'a, I>(&self, options: I) -> Result<Businesses>
	where
		I: IntoIterator<Item = &'a SearchOption>,
	{
		const KIND: SearchKind = SearchKind::Options;

		let span = SearchSpan::request(KIND, &self.endpoint);

		obs::record_search_outcome(KIND, SearchOutcome::Attempt);

		let result = match QueryContainer::from_options(options) {
			Ok(query) => span.instrument(self.execute(query)).await,
			Err(e) => {
				obs::record_rejected_option(e.category());

				Err(e.into())
			},
		};

		obs::record_search_result(KIND, &result);

		result
	}

	async fn execute(&self, query: QueryContainer) -> Result<Businesses> {
		let url = self.signed_url(query);
		let response = self.http_client.get(url).await?;

		decode_response(response)
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a client for [`DEFAULT_ENDPOINT`] backed by a default reqwest transport.
	pub fn new(credentials: Credentials) -> Result<Self> {
		Self::with_endpoint(DEFAULT_ENDPOINT, credentials)
	}

	/// Creates a reqwest-backed client for a custom endpoint.
	///
	/// The endpoint must not carry a query string or fragment.
	pub fn with_endpoint(endpoint: &str, credentials: Credentials) -> Result<Self> {
		let endpoint =
			Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint { source })?;

		if endpoint.query().is_some() || endpoint.fragment().is_some() {
			return Err(ConfigError::EndpointWithQuery { endpoint: endpoint.into() }.into());
		}

		let signer = Signer::new(credentials)?;

		Ok(Self::with_http_client(endpoint, signer, ReqwestHttpClient::default()))
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + SearchHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("endpoint", &self.endpoint.as_str())
			.field("signer", &self.signer)
			.finish()
	}
}

/// Interprets a raw search response.
///
/// A body whose top-level object carries an `error` member becomes [`Error::Api`]; anything else
/// must decode as [`Businesses`].
pub fn decode_response(response: HttpResponse) -> Result<Businesses> {
	let status = Some(response.status);
	let to_decode_error = |source| DecodeError { source, status };
	let mut de = serde_json::Deserializer::from_slice(&response.body);
	let mut value: serde_json::Value =
		serde_path_to_error::deserialize(&mut de).map_err(to_decode_error)?;

	if let Some(error) = value.as_object_mut().and_then(|object| object.remove("error")) {
		let api_error: ApiError = serde_path_to_error::deserialize(error).map_err(to_decode_error)?;

		return Err(Error::Api(api_error));
	}

	Ok(serde_path_to_error::deserialize(value).map_err(to_decode_error)?)
}
