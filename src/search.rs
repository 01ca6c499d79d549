//! Typed search options and the validators that turn them into query elements.
//!
//! Every [`SearchOption`] belongs to one [`OptionCategory`]. Applying an option checks the
//! container's conflict flag for that category, validates the payload, appends the formatted
//! element(s), and only then sets the flag, so a rejected option leaves the container untouched.

// std
use std::ops::RangeInclusive;
// self
use crate::{
	_prelude::*,
	error::ValidationError,
	query::{OptionCategory, QueryContainer},
};

const KEY_TERM: &str = "term";
const KEY_LIMIT: &str = "limit";
const KEY_OFFSET: &str = "offset";
const KEY_SORT: &str = "sort";
const KEY_CATEGORY: &str = "category_filter";
const KEY_RADIUS: &str = "radius_filter";
const KEY_DEALS: &str = "deals_filter";
const KEY_LOCATION: &str = "location";
const KEY_COORDINATES: &str = "ll";
const KEY_COORDINATES_HINT: &str = "cll";
const KEY_BOUNDS: &str = "bounds";

const LATITUDE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE: RangeInclusive<f64> = -180.0..=180.0;
const LIMIT: RangeInclusive<i64> = 0..=20;
const RADIUS_METERS: RangeInclusive<i64> = 0..=40_000;

/// Ordering applied to search results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
	/// Best matched (`0`).
	#[default]
	BestMatched,
	/// Distance (`1`).
	Distance,
	/// Highest rated (`2`).
	HighestRated,
}
impl SortMode {
	/// Wire ordinal of the sort mode.
	pub const fn ordinal(self) -> u8 {
		match self {
			Self::BestMatched => 0,
			Self::Distance => 1,
			Self::HighestRated => 2,
		}
	}
}
impl TryFrom<u8> for SortMode {
	type Error = ValidationError;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(Self::BestMatched),
			1 => Ok(Self::Distance),
			2 => Ok(Self::HighestRated),
			other => Err(ValidationError::invalid(
				OptionCategory::Sort,
				format!("unknown sort mode {other}"),
			)),
		}
	}
}

/// Business categories accepted by `category_filter`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BusinessCategory {
	/// Active life.
	Active,
	/// Arts and entertainment.
	ArtsEntertainment,
	/// Automotive.
	Automotive,
	/// Beauty and spas.
	BeautySpas,
	/// Golf.
	Golf,
	/// Nightlife.
	Nightlife,
	/// Bars.
	Bars,
	/// Restaurants.
	Restaurants,
}
impl BusinessCategory {
	/// Every category, in ordinal order.
	pub const ALL: [Self; 8] = [
		Self::Active,
		Self::ArtsEntertainment,
		Self::Automotive,
		Self::BeautySpas,
		Self::Golf,
		Self::Nightlife,
		Self::Bars,
		Self::Restaurants,
	];

	/// Short name used on the wire.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Active => "active",
			Self::ArtsEntertainment => "arts",
			Self::Automotive => "auto",
			Self::BeautySpas => "beautysvc",
			Self::Golf => "golf",
			Self::Nightlife => "nightlife",
			Self::Bars => "bars",
			Self::Restaurants => "restaurants",
		}
	}
}
impl Display for BusinessCategory {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl TryFrom<u8> for BusinessCategory {
	type Error = ValidationError;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		Self::ALL.get(usize::from(value)).copied().ok_or_else(|| {
			ValidationError::invalid(
				OptionCategory::CategoryFilter,
				format!("unknown category code {value}"),
			)
		})
	}
}
impl FromStr for BusinessCategory {
	type Err = ValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter().find(|category| category.as_str() == s).ok_or_else(|| {
			ValidationError::invalid(
				OptionCategory::CategoryFilter,
				format!("unknown category {s:?}"),
			)
		})
	}
}

/// A single search option; each variant carries its own validation and formatting rule.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOption {
	/// Location by name (`location`).
	Location(String),
	/// Location by coordinates (`ll`).
	Coordinates {
		/// Latitude in degrees.
		latitude: f64,
		/// Longitude in degrees.
		longitude: f64,
	},
	/// Location by name, disambiguated with a coordinate hint (`location` + `cll`).
	LocationWithHint {
		/// Location name.
		location: String,
		/// Latitude hint in degrees.
		latitude: f64,
		/// Longitude hint in degrees.
		longitude: f64,
	},
	/// Bounding box given by its south-west and north-east corners (`bounds`).
	Bounds {
		/// South-west latitude.
		sw_latitude: f64,
		/// South-west longitude.
		sw_longitude: f64,
		/// North-east latitude.
		ne_latitude: f64,
		/// North-east longitude.
		ne_longitude: f64,
	},
	/// Search terms (`term`).
	Terms(Vec<String>),
	/// Maximum number of results, 0 through 20 (`limit`).
	Limit(i64),
	/// Result offset (`offset`).
	Offset(i64),
	/// Result ordering (`sort`).
	Sort(SortMode),
	/// Category filter (`category_filter`).
	Categories(Vec<BusinessCategory>),
	/// Search radius in meters, 0 through 40000 (`radius_filter`).
	Radius(i64),
	/// Restrict results to businesses with deals (`deals_filter`).
	Deals(bool),
}
impl SearchOption {
	/// Location by name.
	pub fn location(name: impl Into<String>) -> Self {
		Self::Location(name.into())
	}

	/// Location by coordinates.
	pub fn coordinates(latitude: f64, longitude: f64) -> Self {
		Self::Coordinates { latitude, longitude }
	}

	/// Location by name with a coordinate hint.
	pub fn location_with_hint(location: impl Into<String>, latitude: f64, longitude: f64) -> Self {
		Self::LocationWithHint { location: location.into(), latitude, longitude }
	}

	/// Bounding box from south-west and north-east corners.
	pub fn bounds(
		sw_latitude: f64,
		sw_longitude: f64,
		ne_latitude: f64,
		ne_longitude: f64,
	) -> Self {
		Self::Bounds { sw_latitude, sw_longitude, ne_latitude, ne_longitude }
	}

	/// Search terms from any iterator of strings.
	pub fn terms<I, S>(terms: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Terms(terms.into_iter().map(Into::into).collect())
	}

	/// Category filter from any iterator of categories.
	pub fn categories<I>(categories: I) -> Self
	where
		I: IntoIterator<Item = BusinessCategory>,
	{
		Self::Categories(categories.into_iter().collect())
	}

	/// Conflict category guarded by this option.
	pub fn category(&self) -> OptionCategory {
		match self {
			Self::Location(_)
			| Self::Coordinates { .. }
			| Self::LocationWithHint { .. }
			| Self::Bounds { .. } => OptionCategory::Location,
			Self::Terms(_) => OptionCategory::Term,
			Self::Limit(_) => OptionCategory::Limit,
			Self::Offset(_) => OptionCategory::Offset,
			Self::Sort(_) => OptionCategory::Sort,
			Self::Categories(_) => OptionCategory::CategoryFilter,
			Self::Radius(_) => OptionCategory::Radius,
			Self::Deals(_) => OptionCategory::Deals,
		}
	}

	/// Validates the option and appends it to `query`.
	///
	/// Fails with [`ValidationError::DuplicateOption`] when the category was already applied and
	/// with [`ValidationError::InvalidValue`] when the payload is out of range. On failure `query`
	/// is left exactly as it was.
	pub fn apply(&self, query: &mut QueryContainer) -> Result<(), ValidationError> {
		let category = self.category();

		if query.flags().is_set(category) {
			return Err(ValidationError::DuplicateOption { category });
		}

		for (name, value) in self.wire_elements()? {
			query.append(name, value);
		}

		query.flags_mut().set(category);

		Ok(())
	}

	fn wire_elements(&self) -> Result<Vec<(&'static str, String)>, ValidationError> {
		let category = self.category();
		let elements = match self {
			Self::Location(name) => vec![(KEY_LOCATION, format_location(category, name)?)],
			Self::Coordinates { latitude, longitude } =>
				vec![(KEY_COORDINATES, format_coordinates(category, "", *latitude, *longitude)?)],
			Self::LocationWithHint { location, latitude, longitude } => {
				let location = format_location(category, location)?;
				let hint = format_coordinates(category, "hint ", *latitude, *longitude)?;

				vec![(KEY_LOCATION, location), (KEY_COORDINATES_HINT, hint)]
			},
			Self::Bounds { sw_latitude, sw_longitude, ne_latitude, ne_longitude } => {
				let sw = format_coordinates(category, "south-west ", *sw_latitude, *sw_longitude)?;
				let ne = format_coordinates(category, "north-east ", *ne_latitude, *ne_longitude)?;

				vec![(KEY_BOUNDS, format!("{sw}|{ne}"))]
			},
			Self::Terms(terms) => {
				if terms.is_empty() {
					return Err(ValidationError::invalid(category, "no search terms given"));
				}

				let joined =
					terms.iter().map(|term| term.replace(' ', "+")).collect::<Vec<_>>().join(",");

				vec![(KEY_TERM, joined)]
			},
			Self::Limit(limit) => vec![(KEY_LIMIT, format_in_range(category, *limit, LIMIT)?)],
			Self::Offset(offset) => {
				if *offset < 0 {
					return Err(ValidationError::invalid(category, format!("{offset} is negative")));
				}

				vec![(KEY_OFFSET, offset.to_string())]
			},
			Self::Sort(mode) => vec![(KEY_SORT, mode.ordinal().to_string())],
			Self::Categories(categories) => {
				if categories.is_empty() {
					return Err(ValidationError::invalid(category, "no categories given"));
				}

				let joined = categories
					.iter()
					.map(|category| category.as_str())
					.collect::<Vec<_>>()
					.join(",");

				vec![(KEY_CATEGORY, joined)]
			},
			Self::Radius(meters) =>
				vec![(KEY_RADIUS, format_in_range(category, *meters, RADIUS_METERS)?)],
			Self::Deals(deals) => vec![(KEY_DEALS, deals.to_string())],
		};

		Ok(elements)
	}
}

impl QueryContainer {
	/// Builds a container by applying `options` in order, stopping at the first rejection.
	pub fn from_options<'a, I>(options: I) -> Result<Self, ValidationError>
	where
		I: IntoIterator<Item = &'a SearchOption>,
	{
		let mut query = Self::new();

		for option in options {
			option.apply(&mut query)?;
		}

		Ok(query)
	}
}

fn format_location(category: OptionCategory, name: &str) -> Result<String, ValidationError> {
	if name.is_empty() {
		return Err(ValidationError::invalid(category, "location name is empty"));
	}

	Ok(name.replace(' ', "+"))
}

fn format_coordinates(
	category: OptionCategory,
	label: &str,
	latitude: f64,
	longitude: f64,
) -> Result<String, ValidationError> {
	if !LATITUDE.contains(&latitude) || !LONGITUDE.contains(&longitude) {
		return Err(ValidationError::invalid(
			category,
			format!("{label}latitude/longitude out of range: {latitude}, {longitude}"),
		));
	}

	// `Display` for `f64` is the shortest representation that round-trips.
	Ok(format!("{latitude},{longitude}"))
}

fn format_in_range(
	category: OptionCategory,
	value: i64,
	range: RangeInclusive<i64>,
) -> Result<String, ValidationError> {
	if range.contains(&value) {
		Ok(value.to_string())
	} else {
		Err(ValidationError::invalid(
			category,
			format!("{value} is outside {}..={}", range.start(), range.end()),
		))
	}
}
