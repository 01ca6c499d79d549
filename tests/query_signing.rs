// self
use yelp_search::{
	_preludet::*,
	client::DEFAULT_ENDPOINT,
	encoding::percent_encode,
	error::ValidationError,
	oauth::{SignatureParams, Signer, signature_base},
	query::{OptionCategory, QueryContainer},
	search::SearchOption,
};

fn apply_all(options: &[SearchOption]) -> (QueryContainer, Vec<Result<(), ValidationError>>) {
	let mut query = QueryContainer::new();
	let results = options.iter().map(|option| option.apply(&mut query)).collect();

	(query, results)
}

#[test]
fn repeated_limit_fails_on_second_application() {
	let (query, results) = apply_all(&[SearchOption::Limit(1), SearchOption::Limit(1)]);

	assert!(results[0].is_ok());
	assert_eq!(
		results[1],
		Err(ValidationError::DuplicateOption { category: OptionCategory::Limit })
	);
	assert_eq!(query.serialize(), "limit=1");
}

#[test]
fn shared_location_category_spans_variants() {
	let (query, results) =
		apply_all(&[SearchOption::coordinates(0., 0.), SearchOption::bounds(0., 0., 1., 1.)]);

	assert!(results[0].is_ok());
	assert!(matches!(results[1], Err(ValidationError::DuplicateOption { .. })));
	assert_eq!(query.serialize(), "ll=0,0");
}

#[test]
fn range_limits_are_inclusive() {
	let (_, results) = apply_all(&[SearchOption::Limit(25)]);

	assert!(matches!(results[0], Err(ValidationError::InvalidValue { .. })));

	let (_, results) = apply_all(&[SearchOption::Radius(40_000)]);

	assert!(results[0].is_ok());

	let (_, results) = apply_all(&[SearchOption::Radius(40_001)]);

	assert!(matches!(results[0], Err(ValidationError::InvalidValue { .. })));
}

#[test]
fn signature_is_reproducible_from_its_inputs() {
	let signer = Signer::new(test_credentials()).expect("Signer should build.");
	let params = SignatureParams::new("kllo9940pd9333jh", 1_191_242_096);
	let (base_query, _) = apply_all(&[
		SearchOption::location("San Francisco"),
		SearchOption::terms(["food", "bar"]),
	]);
	let mut first = base_query.clone();
	let mut second = base_query.clone();

	signer.sign_with("GET", DEFAULT_ENDPOINT, &mut first, &params);
	signer.sign_with("GET", DEFAULT_ENDPOINT, &mut second, &params);

	assert_eq!(first.get("oauth_signature"), second.get("oauth_signature"));
	assert_eq!(first.elements().last().map(|e| e.name.as_str()), Some("oauth_signature"));

	let unsigned = first.elements()[..first.len() - 1]
		.iter()
		.map(|e| (e.name.clone(), e.value.clone()))
		.collect::<QueryContainer>();

	let base = signature_base("GET", DEFAULT_ENDPOINT, &unsigned);

	assert!(
		base.starts_with("GET&http%3A%2F%2Fapi.yelp.com%2Fv2%2Fsearch&location%3DSan%2BFrancisco")
	);
	assert!(base.ends_with(&format!("term%3D{}", percent_encode("food,bar"))));
}
