//! Response payloads returned by the search endpoint.

// self
use crate::_prelude::*;

/// A latitude/longitude pair.
///
/// Region spans report deltas under `latitude_delta`/`longitude_delta`, which deserialize into the
/// same fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
	/// Latitude (or latitude span) in degrees.
	#[serde(default, alias = "latitude_delta")]
	pub latitude: f64,
	/// Longitude (or longitude span) in degrees.
	#[serde(default, alias = "longitude_delta")]
	pub longitude: f64,
}

/// Postal location of a business.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessLocation {
	/// Street address lines.
	pub address: Vec<String>,
	/// City name.
	pub city: String,
	/// Position of the business.
	#[serde(rename = "coordinate")]
	pub position: Coordinates,
	/// ISO 3166-1 alpha-2 country code.
	pub country_code: String,
	/// Address formatted for display.
	pub display_address: Vec<String>,
	/// Postal code.
	pub postal_code: String,
	/// State or province code.
	pub state_code: String,
}

/// A single business listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Business {
	/// Phone number formatted for display.
	pub display_phone: String,
	/// Distance from the searched location, in meters.
	pub distance: f64,
	/// Whether the business has permanently closed.
	pub is_closed: bool,
	/// Business location, when published.
	pub location: Option<BusinessLocation>,
	/// Business name.
	pub name: String,
	/// Phone number.
	pub phone: String,
	/// Rating from 1 to 5.
	pub rating: f64,
}

/// Geographic region the search covered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessRegion {
	/// Center of the region.
	pub center: Coordinates,
	/// Extent of the region around its center.
	pub span: Coordinates,
}

/// Successful search result.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Businesses {
	/// Matching businesses.
	pub businesses: Vec<Business>,
	/// Region covered by the search.
	pub region: Option<BusinessRegion>,
	/// Total number of matches, which may exceed `businesses.len()`.
	pub total: u64,
}

/// Error payload returned under the top-level `error` key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
	/// Short error text.
	pub text: String,
	/// Machine-readable error identifier.
	pub id: String,
	/// Longer description, if any.
	pub description: String,
}
impl Display for ApiError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{} ({})", self.text, self.id)?;

		if !self.description.is_empty() {
			write!(f, ": {}", self.description)?;
		}

		Ok(())
	}
}
