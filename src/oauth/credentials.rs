//! OAuth 1.0a credentials, their builder, and the derived signing key.

// self
use crate::{_prelude::*, encoding::percent_encode, error::ConfigError};

/// Redacted secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);
impl Secret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Secret").field(&"<redacted>").finish()
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// HMAC-SHA1 key: `percent_encode(consumer_secret) & percent_encode(token_secret)`.
#[derive(Clone, PartialEq, Eq)]
pub struct HashKey(Secret);
impl HashKey {
	/// Derives the key from the two secrets.
	pub fn derive(consumer_secret: &Secret, token_secret: &Secret) -> Self {
		let key = format!(
			"{}&{}",
			percent_encode(consumer_secret.expose()),
			percent_encode(token_secret.expose())
		);

		Self(Secret(key))
	}

	/// Raw key bytes handed to the MAC.
	pub fn as_bytes(&self) -> &[u8] {
		self.0.expose().as_bytes()
	}
}
impl Debug for HashKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("HashKey(<redacted>)")
	}
}

/// The four values identifying a client to the search API.
///
/// Only [`CredentialsBuilder::build`] creates values of this type, so every field is non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
	consumer_key: String,
	consumer_secret: Secret,
	token: String,
	token_secret: Secret,
}
impl Credentials {
	/// Returns a builder that rejects missing or empty values.
	pub fn builder() -> CredentialsBuilder {
		CredentialsBuilder::default()
	}

	/// Consumer key, sent verbatim as `oauth_consumer_key`.
	pub fn consumer_key(&self) -> &str {
		&self.consumer_key
	}

	/// Consumer secret.
	pub fn consumer_secret(&self) -> &Secret {
		&self.consumer_secret
	}

	/// Access token, sent verbatim as `oauth_token`.
	pub fn token(&self) -> &str {
		&self.token
	}

	/// Access token secret.
	pub fn token_secret(&self) -> &Secret {
		&self.token_secret
	}

	/// Fails with the first empty field, in builder order.
	pub(crate) fn ensure_complete(&self) -> Result<(), ConfigError> {
		[
			("consumer_key", self.consumer_key.as_str()),
			("consumer_secret", self.consumer_secret.expose()),
			("token", self.token.as_str()),
			("token_secret", self.token_secret.expose()),
		]
		.into_iter()
		.find(|(_, value)| value.is_empty())
		.map_or(Ok(()), |(field, _)| Err(ConfigError::MissingCredential { field }))
	}

	/// Derives the signing key for these credentials.
	pub fn hash_key(&self) -> HashKey {
		HashKey::derive(&self.consumer_secret, &self.token_secret)
	}
}

/// Builder for [`Credentials`].
#[derive(Clone, Debug, Default)]
pub struct CredentialsBuilder {
	consumer_key: Option<String>,
	consumer_secret: Option<Secret>,
	token: Option<String>,
	token_secret: Option<Secret>,
}
impl CredentialsBuilder {
	/// Sets the consumer key.
	pub fn consumer_key(mut self, value: impl Into<String>) -> Self {
		self.consumer_key = Some(value.into());

		self
	}

	/// Sets the consumer secret.
	pub fn consumer_secret(mut self, value: impl Into<String>) -> Self {
		self.consumer_secret = Some(Secret::new(value));

		self
	}

	/// Sets the access token.
	pub fn token(mut self, value: impl Into<String>) -> Self {
		self.token = Some(value.into());

		self
	}

	/// Sets the access token secret.
	pub fn token_secret(mut self, value: impl Into<String>) -> Self {
		self.token_secret = Some(Secret::new(value));

		self
	}

	/// Consumes the builder, failing on the first missing or empty credential.
	pub fn build(self) -> Result<Credentials, ConfigError> {
		let consumer_key = require("consumer_key", self.consumer_key)?;
		let consumer_secret =
			require("consumer_secret", self.consumer_secret.map(|s| s.0)).map(Secret)?;
		let token = require("token", self.token)?;
		let token_secret = require("token_secret", self.token_secret.map(|s| s.0)).map(Secret)?;

		Ok(Credentials { consumer_key, consumer_secret, token, token_secret })
	}
}

fn require(field: &'static str, value: Option<String>) -> Result<String, ConfigError> {
	value.filter(|v| !v.is_empty()).ok_or(ConfigError::MissingCredential { field })
}
