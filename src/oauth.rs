//! OAuth 1.0a (HMAC-SHA1) request signing.
//!
//! [`Signer::sign`] appends the five `oauth_*` protocol parameters to a query, sorts it, signs the
//! base string `METHOD&enc(url)&enc(query)`, and appends `oauth_signature` last without sorting
//! again. Every call draws a fresh nonce and timestamp, so signatures never repeat.

mod credentials;

pub use credentials::*;

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha1::Sha1;
// self
use crate::{
	_prelude::*,
	encoding::percent_encode,
	error::ConfigError,
	nonce::{NonceSource, SeededNonceSource},
	obs::SearchSpan,
	query::QueryContainer,
};

type HmacSha1 = Hmac<Sha1>;

/// Value of `oauth_signature_method`.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
/// Length of the generated `oauth_nonce`.
pub const NONCE_LEN: usize = 30;

/// Per-request protocol values mixed into the signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureParams {
	/// `oauth_nonce`.
	pub nonce: String,
	/// `oauth_timestamp`, in Unix seconds.
	pub timestamp: i64,
}
impl SignatureParams {
	/// Creates a parameter pair.
	pub fn new(nonce: impl Into<String>, timestamp: i64) -> Self {
		Self { nonce: nonce.into(), timestamp }
	}
}

/// Signs query containers with a fixed set of credentials.
///
/// The signing key is derived and loaded into the MAC once, at construction. A signer is
/// `Send + Sync` and can be shared behind an [`Arc`]; its nonce source is locked per call.
#[derive(Clone)]
pub struct Signer {
	consumer_key: String,
	token: String,
	hash_key: HashKey,
	mac: HmacSha1,
	nonce_source: Arc<dyn NonceSource>,
}
impl Signer {
	/// Creates a signer whose nonces come from a time-seeded generator.
	pub fn new(credentials: Credentials) -> Result<Self, ConfigError> {
		Self::with_nonce_source(credentials, Arc::new(SeededNonceSource::from_time()))
	}

	/// Creates a signer that draws nonces from `nonce_source`.
	///
	/// Fails with [`ConfigError::MissingCredential`] when any credential is empty.
	pub fn with_nonce_source(
		credentials: Credentials,
		nonce_source: Arc<dyn NonceSource>,
	) -> Result<Self, ConfigError> {
		credentials.ensure_complete()?;

		let hash_key = credentials.hash_key();
		// HMAC hashes keys longer than one block, so any length is accepted here.
		let mac = <HmacSha1 as Mac>::new_from_slice(hash_key.as_bytes())
			.map_err(|_| ConfigError::InvalidHashKey)?;

		Ok(Self {
			consumer_key: credentials.consumer_key().to_owned(),
			token: credentials.token().to_owned(),
			hash_key,
			mac,
			nonce_source,
		})
	}

	/// Consumer key sent as `oauth_consumer_key`.
	pub fn consumer_key(&self) -> &str {
		&self.consumer_key
	}

	/// Token sent as `oauth_token`.
	pub fn token(&self) -> &str {
		&self.token
	}

	/// Derived signing key.
	pub fn hash_key(&self) -> &HashKey {
		&self.hash_key
	}

	/// Signs `query` for `method` against `url` using a fresh nonce and the current time.
	pub fn sign(&self, method: &str, url: &str, query: &mut QueryContainer) {
		let params = SignatureParams::new(
			self.nonce_source.next(NONCE_LEN),
			OffsetDateTime::now_utc().unix_timestamp(),
		);

		self.sign_with(method, url, query, &params);
	}

	/// Signs `query` with caller-supplied nonce and timestamp.
	///
	/// Deterministic: the same inputs always yield the same `oauth_signature`.
	pub fn sign_with(
		&self,
		method: &str,
		url: &str,
		query: &mut QueryContainer,
		params: &SignatureParams,
	) {
		let _span = SearchSpan::signing(method, query.len()).entered();

		query.append("oauth_consumer_key", self.consumer_key.as_str());
		query.append("oauth_nonce", params.nonce.as_str());
		query.append("oauth_signature_method", SIGNATURE_METHOD);
		query.append("oauth_timestamp", params.timestamp.to_string());
		query.append("oauth_token", self.token.as_str());
		query.sort();

		let base = signature_base(method, url, query);
		let signature = self.signature(&base);

		query.append("oauth_signature", signature);
	}

	/// HMAC-SHA1 of `base`, base64-encoded and then percent-encoded.
	fn signature(&self, base: &str) -> String {
		let mut mac = self.mac.clone();

		mac.update(base.as_bytes());

		percent_encode(STANDARD.encode(mac.finalize().into_bytes()))
	}
}
impl Debug for Signer {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Signer")
			.field("consumer_key", &self.consumer_key)
			.field("token", &self.token)
			.field("hash_key", &self.hash_key)
			.finish()
	}
}

/// Builds the string that gets signed: `method&enc(url)&enc(query.serialize())`.
pub fn signature_base(method: &str, url: &str, query: &QueryContainer) -> String {
	format!("{method}&{}&{}", percent_encode(url), percent_encode(query.serialize()))
}
