//! Nonce generation for OAuth 1.0a requests.
//!
//! Each [`Signer`](crate::oauth::Signer) owns its source, so concurrent signers never contend on
//! a process-wide generator and tests can swap in a [`FixedNonceSource`].

// crates.io
use rand::{Rng, SeedableRng, distr::Alphanumeric, rngs::StdRng};
// self
use crate::_prelude::*;

/// Produces the `oauth_nonce` value for each signed request.
pub trait NonceSource
where
	Self: Send + Sync,
{
	/// Returns a nonce of `length` characters.
	fn next(&self, length: usize) -> String;
}

/// Pseudorandom alphanumeric nonces drawn uniformly from `[a-zA-Z0-9]`.
///
/// The generator is seeded once, from the wall clock at construction, and guarded by a mutex so a
/// shared signer can be used from several threads. It is not a CSPRNG; nonce uniqueness relies on
/// pairing it with `oauth_timestamp`.
pub struct SeededNonceSource(Mutex<StdRng>);
impl SeededNonceSource {
	/// Seeds the generator from the current time in nanoseconds.
	pub fn from_time() -> Self {
		Self::with_seed(fold_nanos(OffsetDateTime::now_utc().unix_timestamp_nanos()))
	}

	/// Seeds the generator with an explicit value, yielding a reproducible sequence.
	pub fn with_seed(seed: u64) -> Self {
		Self(Mutex::new(StdRng::seed_from_u64(seed)))
	}
}
impl Default for SeededNonceSource {
	fn default() -> Self {
		Self::from_time()
	}
}
impl NonceSource for SeededNonceSource {
	fn next(&self, length: usize) -> String {
		let mut rng = self.0.lock();

		(0..length).map(|_| char::from(rng.sample(Alphanumeric))).collect()
	}
}
impl Debug for SeededNonceSource {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("SeededNonceSource(..)")
	}
}

/// Folds both halves of a nanosecond timestamp into a 64-bit seed.
fn fold_nanos(nanos: i128) -> u64 {
	(nanos as u64) ^ ((nanos >> 64) as u64)
}

/// Returns the same nonce on every call, ignoring the requested length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedNonceSource(String);
impl FixedNonceSource {
	/// Wraps the nonce to hand out.
	pub fn new(nonce: impl Into<String>) -> Self {
		Self(nonce.into())
	}
}
impl NonceSource for FixedNonceSource {
	fn next(&self, _length: usize) -> String {
		self.0.clone()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn seeded_nonces_have_requested_length_and_alphabet() {
		let source = SeededNonceSource::from_time();

		for length in [0, 1, 30, 128] {
			let nonce = source.next(length);

			assert_eq!(nonce.len(), length);
			assert!(
				nonce.bytes().all(|b| b.is_ascii_alphanumeric()),
				"Nonce {nonce:?} left the alphabet."
			);
		}
	}

	#[test]
	fn explicit_seed_is_reproducible() {
		let lhs = SeededNonceSource::with_seed(7);
		let rhs = SeededNonceSource::with_seed(7);

		assert_eq!(lhs.next(30), rhs.next(30));
		assert_ne!(lhs.next(30), lhs.next(30), "Consecutive nonces should differ.");
	}

	#[test]
	fn time_seed_keeps_both_halves() {
		assert_eq!(fold_nanos(0x2a), 0x2a);
		assert_eq!(fold_nanos((1_i128 << 64) | 0x2a), 0x2b);
		assert_eq!(fold_nanos(-1), 0);
	}

	#[test]
	fn fixed_source_ignores_length() {
		let source = FixedNonceSource::new("abc");

		assert_eq!(source.next(30), "abc");
		assert_eq!(source.next(0), "abc");
	}
}
