//! Ordered query containers and the per-category conflict flags used by search options.

// self
use crate::_prelude::*;

/// Search option categories tracked for mutual exclusion.
///
/// The four location-family options share [`OptionCategory::Location`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionCategory {
	/// `term`.
	Term,
	/// `limit`.
	Limit,
	/// `offset`.
	Offset,
	/// `sort`.
	Sort,
	/// `category_filter`.
	CategoryFilter,
	/// `radius_filter`.
	Radius,
	/// `deals_filter`.
	Deals,
	/// Any of `location`, `ll`, `location` + `cll`, or `bounds`.
	Location,
}
impl OptionCategory {
	/// Number of categories.
	pub const COUNT: usize = 8;
	/// Every category, in flag order.
	pub const ALL: [Self; Self::COUNT] = [
		Self::Term,
		Self::Limit,
		Self::Offset,
		Self::Sort,
		Self::CategoryFilter,
		Self::Radius,
		Self::Deals,
		Self::Location,
	];

	/// Returns a stable label suitable for error messages and span fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Term => "term",
			Self::Limit => "limit",
			Self::Offset => "offset",
			Self::Sort => "sort",
			Self::CategoryFilter => "category filter",
			Self::Radius => "radius",
			Self::Deals => "deals",
			Self::Location => "location",
		}
	}

	const fn index(self) -> usize {
		self as usize
	}
}
impl Display for OptionCategory {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// One flag per [`OptionCategory`]; a flag is set at most once per container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConflictFlags([bool; OptionCategory::COUNT]);
impl ConflictFlags {
	/// Returns true once an option of `category` has been applied.
	pub fn is_set(&self, category: OptionCategory) -> bool {
		self.0[category.index()]
	}

	pub(crate) fn set(&mut self, category: OptionCategory) {
		self.0[category.index()] = true;
	}

	/// Iterator over the categories already applied, in flag order.
	pub fn iter(&self) -> impl Iterator<Item = OptionCategory> + '_ {
		OptionCategory::ALL.into_iter().filter(|category| self.is_set(*category))
	}
}

/// A single `name=value` pair whose value is already in wire form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryElement {
	/// Parameter name.
	pub name: String,
	/// Parameter value.
	pub value: String,
}
impl QueryElement {
	/// Creates a new element.
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self { name: name.into(), value: value.into() }
	}
}
impl Display for QueryElement {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}={}", self.name, self.value)
	}
}

/// Ordered list of query elements plus the conflict flags of the options applied to it.
///
/// Insertion order is kept until [`sort`](Self::sort) is called. Clone the container to reuse it
/// across signing attempts; signing appends to the container it is given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryContainer {
	elements: Vec<QueryElement>,
	flags: ConflictFlags,
}
impl QueryContainer {
	/// Creates an empty container.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an element unconditionally.
	pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.elements.push(QueryElement::new(name, value));
	}

	/// Builder-style [`append`](Self::append).
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.append(name, value);

		self
	}

	/// Sorts elements ascending by name, comparing bytes.
	pub fn sort(&mut self) {
		self.elements.sort_unstable_by(|lhs, rhs| lhs.name.as_bytes().cmp(rhs.name.as_bytes()));
	}

	/// Joins elements as `name=value` pairs separated by `&`, in current order.
	pub fn serialize(&self) -> String {
		let mut out = String::new();

		for (i, element) in self.elements.iter().enumerate() {
			if i != 0 {
				out.push('&');
			}

			out.push_str(&element.name);
			out.push('=');
			out.push_str(&element.value);
		}

		out
	}

	/// Elements in current order.
	pub fn elements(&self) -> &[QueryElement] {
		&self.elements
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// Returns true if no elements were appended.
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Value of the first element called `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.elements
			.iter()
			.find(|element| element.name == name)
			.map(|element| element.value.as_str())
	}

	/// Conflict flags set by the search options applied so far.
	pub fn flags(&self) -> &ConflictFlags {
		&self.flags
	}

	pub(crate) fn flags_mut(&mut self) -> &mut ConflictFlags {
		&mut self.flags
	}
}
impl Display for QueryContainer {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.serialize())
	}
}
impl<N, V> FromIterator<(N, V)> for QueryContainer
where
	N: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (N, V)>,
	{
		let mut container = Self::new();

		for (name, value) in iter {
			container.append(name, value);
		}

		container
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn serialize_joins_in_insertion_order() {
		assert_eq!(QueryContainer::new().serialize(), "");

		let single = QueryContainer::new().with("term", "bar");

		assert_eq!(single.serialize(), "term=bar");

		let many =
			QueryContainer::from_iter([("term", "bar"), ("limit", "1"), ("location", "Delft")]);

		assert_eq!(many.serialize(), "term=bar&limit=1&location=Delft");
		assert_eq!(many.to_string(), many.serialize());
	}

	#[test]
	fn sort_orders_names_by_bytes() {
		let mut query = QueryContainer::from_iter([
			("oauth_token", "t"),
			("term", "bar"),
			("Zeta", "z"),
			("limit", "1"),
			("oauth_consumer_key", "k"),
			("ll", "0,0"),
		]);

		query.sort();

		let names = query.elements().iter().map(|e| e.name.as_str()).collect::<Vec<_>>();

		assert_eq!(names, ["Zeta", "limit", "ll", "oauth_consumer_key", "oauth_token", "term"]);
		assert!(names.windows(2).all(|pair| pair[0].as_bytes() <= pair[1].as_bytes()));
	}

	#[test]
	fn clones_do_not_share_elements() {
		let original = QueryContainer::new().with("term", "bar");
		let mut copy = original.clone();

		copy.append("limit", "1");

		assert_eq!(original.len(), 1);
		assert_eq!(copy.len(), 2);
		assert_eq!(copy.get("limit"), Some("1"));
	}

	#[test]
	fn flags_track_each_category_independently() {
		let mut flags = ConflictFlags::default();

		assert_eq!(flags.iter().count(), 0);

		flags.set(OptionCategory::Deals);
		flags.set(OptionCategory::Location);

		assert!(flags.is_set(OptionCategory::Deals));
		assert!(!flags.is_set(OptionCategory::Limit));
		assert_eq!(
			flags.iter().collect::<Vec<_>>(),
			[OptionCategory::Deals, OptionCategory::Location]
		);
	}
}
