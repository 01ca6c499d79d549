//! Percent-encoding dialect expected by the search API.
//!
//! The unreserved set `[A-Za-z0-9-._~]` passes through untouched and every other byte becomes
//! `%XX` with uppercase hex digits. Commas are the exception: the API only accepts them
//! double-encoded, so `,` is written as `%252C` instead of `%2C`.

const HEX: &[u8; 16] = b"0123456789ABCDEF";
const ENCODED_COMMA: &str = "%252C";

/// Percent-encodes `raw` byte by byte.
///
/// Multi-byte UTF-8 input has each of its bytes escaped individually.
pub fn percent_encode(raw: impl AsRef<[u8]>) -> String {
	let raw = raw.as_ref();
	let mut out = String::with_capacity(raw.len() * 3);

	for &byte in raw {
		match byte {
			b if is_unreserved(b) => out.push(char::from(b)),
			b',' => out.push_str(ENCODED_COMMA),
			b => {
				out.push('%');
				out.push(char::from(HEX[usize::from(b >> 4)]));
				out.push(char::from(HEX[usize::from(b & 0x0F)]));
			},
		}
	}

	out
}

fn is_unreserved(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}
