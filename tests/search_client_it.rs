// crates.io
use httpmock::prelude::*;
// self
use yelp_search::{
	_preludet::*,
	client::Client,
	error::{ConfigError, Error, ValidationError},
	http::ReqwestHttpClient,
	query::{OptionCategory, QueryContainer},
	search::{BusinessCategory, SearchOption, SortMode},
};

const RESULTS: &str = r#"{
	"businesses": [
		{"name": "Café de Ruif", "rating": 4.0, "distance": 250.0, "phone": "+31152142206"},
		{"name": "Locus Publicus", "rating": 4.5, "is_closed": false}
	],
	"region": {
		"center": {"latitude": 52.0116, "longitude": 4.3571},
		"span": {"latitude_delta": 0.01, "longitude_delta": 0.02}
	},
	"total": 2
}"#;

#[tokio::test]
async fn search_options_sends_signed_query() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.url("/v2/search"));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v2/search")
				.query_param("limit", "2")
				.query_param("sort", "2")
				.query_param("deals_filter", "false")
				.query_param("oauth_consumer_key", TEST_CONSUMER_KEY)
				.query_param("oauth_token", TEST_TOKEN)
				.query_param("oauth_nonce", "fixednonce")
				.query_param("oauth_signature_method", "HMAC-SHA1")
				.query_param_exists("oauth_timestamp")
				.query_param_exists("oauth_signature")
				.query_param_exists("category_filter");
			then.status(200).header("content-type", "application/json").body(RESULTS);
		})
		.await;
	let found = client
		.search_options(&[
			SearchOption::location("Delft"),
			SearchOption::Limit(2),
			SearchOption::Sort(SortMode::HighestRated),
			SearchOption::categories([BusinessCategory::Bars, BusinessCategory::Nightlife]),
			SearchOption::Deals(false),
		])
		.await
		.expect("Signed search should succeed.");

	mock.assert_calls_async(1).await;

	assert_eq!(found.total, 2);
	assert_eq!(found.businesses.len(), 2);
	assert_eq!(found.businesses[0].name, "Café de Ruif");
	assert_eq!(found.region.map(|region| region.span.longitude), Some(0.02));
}

#[tokio::test]
async fn search_query_leaves_caller_query_untouched() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.url("/v2/search"));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/search").query_param("term", "pizza");
			then.status(200).body(RESULTS);
		})
		.await;
	let query = QueryContainer::new().with("term", "pizza").with("location", "Delft");

	client.search_query(query.clone()).await.expect("First search should succeed.");
	client.search_query(query.clone()).await.expect("Reused query should search again.");

	mock.assert_calls_async(2).await;

	assert_eq!(query.serialize(), "term=pizza&location=Delft");
}

#[tokio::test]
async fn api_error_payload_is_surfaced() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.url("/v2/search"));
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/search");
			then.status(400).body(
				r#"{"error": {
					"text": "Signature was invalid",
					"id": "INVALID_SIGNATURE",
					"description": "Invalid signature. Expected signature base string: GET&..."
				}}"#,
			);
		})
		.await;
	let err = client
		.search_options(&[SearchOption::location("Delft")])
		.await
		.expect_err("Error payload must fail the search.");

	match err {
		Error::Api(api) => {
			assert_eq!(api.id, "INVALID_SIGNATURE");
			assert_eq!(api.text, "Signature was invalid");
		},
		other => panic!("Unexpected error: {other:?}."),
	}
}

#[tokio::test]
async fn invalid_options_never_reach_the_network() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.url("/v2/search"));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/search");
			then.status(200).body(RESULTS);
		})
		.await;
	let duplicate = client
		.search_options(&[SearchOption::Limit(1), SearchOption::Limit(1)])
		.await
		.expect_err("Repeated limit must be rejected.");
	let out_of_range = client
		.search_options(&[SearchOption::Radius(40_001)])
		.await
		.expect_err("Radius above 40000 must be rejected.");

	assert!(matches!(
		duplicate,
		Error::Validation(ValidationError::DuplicateOption { category: OptionCategory::Limit })
	));
	assert!(matches!(
		out_of_range,
		Error::Validation(ValidationError::InvalidValue { category: OptionCategory::Radius, .. })
	));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn transport_failures_map_to_transport_errors() {
	let endpoint = Url::parse("http://127.0.0.1:9/v2/search").expect("Endpoint should parse.");
	let client: Client<ReqwestHttpClient> =
		Client::with_http_client(endpoint, test_signer("n"), ReqwestHttpClient::default());
	let err = client
		.search_options(&[SearchOption::location("Delft")])
		.await
		.expect_err("Closed port must fail.");

	assert!(matches!(err, Error::Transport(_)));
}

#[test]
fn new_rejects_malformed_endpoint() {
	let err = Client::with_endpoint("not a url", test_credentials())
		.expect_err("Malformed endpoint must be rejected.");

	assert!(matches!(err, Error::Config(_)));
}

#[test]
fn new_rejects_endpoint_with_query_or_fragment() {
	const ENDPOINTS: [&str; 2] =
		["http://api.example.com/v2/search?lang=en", "http://api.example.com/v2/search#x"];

	for endpoint in ENDPOINTS {
		let err = Client::with_endpoint(endpoint, test_credentials())
			.expect_err("Endpoint carrying a query must be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::EndpointWithQuery { .. })));
	}
}
