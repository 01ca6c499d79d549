//! Client-level error types shared across option validation, signing, and transport.

// self
use crate::{_prelude::*, model::ApiError, query::OptionCategory};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A search option was rejected before it touched the query.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body could not be decoded.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// The search endpoint answered with an error payload.
	#[error("Search endpoint returned an error: {0}.")]
	Api(ApiError),
}

/// Failures raised while applying a search option to a query container.
///
/// A failing application never mutates the container it was applied to.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ValidationError {
	/// The option category was already supplied to this container.
	#[error("The {category} option was already set on this query.")]
	DuplicateOption {
		/// Category whose flag was already set.
		category: OptionCategory,
	},
	/// The option payload violated its domain constraint.
	#[error("Invalid {category} option: {reason}.")]
	InvalidValue {
		/// Category of the rejected option.
		category: OptionCategory,
		/// Human-readable description of the violation.
		reason: String,
	},
}
impl ValidationError {
	/// Builds a [`ValidationError::InvalidValue`] for `category`.
	pub fn invalid(category: OptionCategory, reason: impl Into<String>) -> Self {
		Self::InvalidValue { category, reason: reason.into() }
	}

	/// Category that triggered the failure.
	pub fn category(&self) -> OptionCategory {
		match self {
			Self::DuplicateOption { category } | Self::InvalidValue { category, .. } => *category,
		}
	}
}

/// Configuration and construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// One of the four OAuth credentials was not supplied.
	#[error("Credential `{field}` is missing or empty.")]
	MissingCredential {
		/// Name of the missing credential.
		field: &'static str,
	},
	/// The derived signing key was rejected by the HMAC implementation.
	///
	/// HMAC-SHA1 accepts keys of every length, so a signer built from complete credentials never
	/// reports this.
	#[error("Signing key could not initialize HMAC-SHA1.")]
	InvalidHashKey,
	/// Search endpoint cannot be parsed.
	#[error("Search endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Search endpoint carries a query string or fragment, which signing would replace.
	#[error("Search endpoint `{endpoint}` must not carry a query string or fragment.")]
	EndpointWithQuery {
		/// Endpoint as supplied.
		endpoint: String,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the search endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the search endpoint.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Search endpoint responded with a body that is not a valid result payload.
#[derive(Debug, ThisError)]
#[error("Search endpoint returned malformed JSON.")]
pub struct DecodeError {
	/// Structured parsing failure, including the JSON path of the offending field.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
	/// HTTP status code, when available.
	pub status: Option<u16>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn validation_errors_name_their_category() {
		let duplicate = ValidationError::DuplicateOption { category: OptionCategory::Limit };
		let invalid = ValidationError::invalid(OptionCategory::Radius, "40001 exceeds 40000");

		assert_eq!(duplicate.to_string(), "The limit option was already set on this query.");
		assert_eq!(invalid.to_string(), "Invalid radius option: 40001 exceeds 40000.");
		assert_eq!(invalid.category(), OptionCategory::Radius);
	}

	#[test]
	fn validation_errors_lift_into_crate_error() {
		let err: Error =
			ValidationError::DuplicateOption { category: OptionCategory::Location }.into();

		assert!(matches!(err, Error::Validation(ValidationError::DuplicateOption { .. })));
	}
}
