//! Typed Yelp v2 search options turned into canonical, OAuth 1.0a signed query strings, with an
//! optional reqwest transport that issues the signed GET and decodes the results.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client;
pub mod encoding;
pub mod error;
pub mod http;
pub mod model;
pub mod nonce;
pub mod oauth;
pub mod obs;
pub mod query;
pub mod search;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		client::Client,
		http::ReqwestHttpClient,
		nonce::FixedNonceSource,
		oauth::{Credentials, Signer},
	};

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = Client<ReqwestHttpClient>;

	/// Consumer key shared by test fixtures.
	pub const TEST_CONSUMER_KEY: &str = "test-consumer-key";
	/// Consumer secret shared by test fixtures.
	pub const TEST_CONSUMER_SECRET: &str = "test-consumer-secret";
	/// Token shared by test fixtures.
	pub const TEST_TOKEN: &str = "test-token";
	/// Token secret shared by test fixtures.
	pub const TEST_TOKEN_SECRET: &str = "test-token-secret";

	/// Credentials assembled from the `TEST_*` constants.
	pub fn test_credentials() -> Credentials {
		Credentials::builder()
			.consumer_key(TEST_CONSUMER_KEY)
			.consumer_secret(TEST_CONSUMER_SECRET)
			.token(TEST_TOKEN)
			.token_secret(TEST_TOKEN_SECRET)
			.build()
			.expect("Test credentials should build successfully.")
	}

	/// Signer over [`test_credentials`] that always emits the provided nonce.
	pub fn test_signer(nonce: &str) -> Signer {
		Signer::with_nonce_source(test_credentials(), Arc::new(FixedNonceSource::new(nonce)))
			.expect("Test signer should build successfully.")
	}

	/// Constructs a reqwest-backed [`Client`] pointed at `endpoint` and signed with a fixed nonce.
	pub fn build_reqwest_test_client(endpoint: &str) -> ReqwestTestClient {
		let endpoint = Url::parse(endpoint).expect("Mock endpoint should parse successfully.");

		Client::with_http_client(endpoint, test_signer("fixednonce"), ReqwestHttpClient::default())
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))]
use {color_eyre as _, httpmock as _, tokio as _, yelp_search as _};
